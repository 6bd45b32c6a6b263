//! Turn Handler — answers one user message in a meal idea conversation.
//!
//! Flow: build system prompt → [system] ++ history ++ [user] → one LLM call →
//!       first choice text, trimmed.
//!
//! History belongs to the caller and is only read. A fresh system turn is
//! always prepended, even when history already carries one from an earlier turn.

use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::llm_client::{ChatCompletion, LlmError, MODEL};
use crate::meals::catalog::IngredientCatalog;
use crate::meals::prompts::build_system_prompt;
use crate::models::chat::ChatTurn;

/// Assembles the outgoing message list for one turn.
///
/// Length is always `history.len() + 2`. Prior system turns are kept as-is.
pub fn build_messages(
    system_prompt: String,
    history: &[ChatTurn],
    user_message: &str,
) -> Vec<ChatTurn> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatTurn::system(system_prompt));
    messages.extend_from_slice(history);
    messages.push(ChatTurn::user(user_message));
    messages
}

/// Generates a meal idea reply for `user_message` given the prior `history`.
///
/// Any failure from the inference service is returned unchanged: no retry,
/// no fallback text.
pub async fn generate_meal_idea(
    llm: &dyn ChatCompletion,
    catalog: &IngredientCatalog,
    user_message: &str,
    history: &[ChatTurn],
) -> Result<String, LlmError> {
    let turn_id = Uuid::new_v4();
    let span = info_span!("meal_turn", %turn_id);

    async move {
        let messages = build_messages(build_system_prompt(catalog), history, user_message);
        info!(
            "Requesting meal idea: {} messages ({} from history)",
            messages.len(),
            history.len()
        );

        let response = llm.complete(MODEL, &messages).await.map_err(|e| {
            warn!("Meal idea request failed: {e}");
            e
        })?;

        let reply = response.text()?.trim().to_string();
        info!("Meal idea reply received ({} chars)", reply.len());
        Ok::<_, LlmError>(reply)
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::CompletionResponse;
    use crate::models::chat::Role;

    /// Echoes the content of the last message and records every request.
    #[derive(Default)]
    struct EchoCompletion {
        requests: Mutex<Vec<(String, Vec<ChatTurn>)>>,
    }

    #[async_trait]
    impl ChatCompletion for EchoCompletion {
        async fn complete(
            &self,
            model: &str,
            messages: &[ChatTurn],
        ) -> Result<CompletionResponse, LlmError> {
            self.requests
                .lock()
                .unwrap()
                .push((model.to_string(), messages.to_vec()));
            let last = messages.last().map(|m| m.content.clone()).unwrap_or_default();
            Ok(CompletionResponse::from_text(last))
        }
    }

    struct FailingCompletion;

    #[async_trait]
    impl ChatCompletion for FailingCompletion {
        async fn complete(&self, _: &str, _: &[ChatTurn]) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::Api {
                status: 429,
                message: "Rate limit reached".to_string(),
            })
        }
    }

    struct NoChoicesCompletion;

    #[async_trait]
    impl ChatCompletion for NoChoicesCompletion {
        async fn complete(&self, _: &str, _: &[ChatTurn]) -> Result<CompletionResponse, LlmError> {
            Ok(serde_json::from_str(r#"{"choices": []}"#).unwrap())
        }
    }

    fn catalog() -> IngredientCatalog {
        IngredientCatalog::new().with_category("proteins", &["Eggs", "Beef"])
    }

    #[test]
    fn test_build_messages_length_and_order() {
        let history = vec![
            ChatTurn::user("Something quick"),
            ChatTurn::assistant("Try an omelette."),
        ];
        let messages = build_messages("PROMPT".to_string(), &history, "Another one");

        assert_eq!(messages.len(), 1 + history.len() + 1);
        assert_eq!(messages[0], ChatTurn::system("PROMPT"));
        assert_eq!(&messages[1..3], history.as_slice());
        assert_eq!(messages[3], ChatTurn::user("Another one"));
    }

    #[test]
    fn test_build_messages_empty_history() {
        let messages = build_messages("PROMPT".to_string(), &[], "");
        assert_eq!(messages, vec![ChatTurn::system("PROMPT"), ChatTurn::user("")]);
    }

    #[test]
    fn test_build_messages_keeps_existing_system_turn() {
        let history = vec![ChatTurn::system("PROMPT"), ChatTurn::user("hi")];
        let messages = build_messages("PROMPT".to_string(), &history, "again");

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::System);
        assert_eq!(messages[0], messages[1]);
    }

    #[tokio::test]
    async fn test_echo_returns_user_message() {
        let llm = EchoCompletion::default();
        let reply = generate_meal_idea(&llm, &catalog(), "test", &[]).await.unwrap();
        assert_eq!(reply, "test");
    }

    #[tokio::test]
    async fn test_reply_is_trimmed() {
        let llm = EchoCompletion::default();
        let reply = generate_meal_idea(&llm, &catalog(), "  padded  ", &[])
            .await
            .unwrap();
        assert_eq!(reply, "padded");
    }

    #[tokio::test]
    async fn test_request_carries_model_prompt_history_and_message() {
        let llm = EchoCompletion::default();
        let history = vec![
            ChatTurn::system("stale prompt"),
            ChatTurn::user("Breakfast?"),
            ChatTurn::assistant("Greek Yogurt bowl."),
        ];

        generate_meal_idea(&llm, &catalog(), "Dinner?", &history)
            .await
            .unwrap();

        let requests = llm.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let (model, messages) = &requests[0];
        assert_eq!(model, "gpt-4o");
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0], ChatTurn::system(build_system_prompt(&catalog())));
        assert_eq!(&messages[1..4], history.as_slice());
        assert_eq!(messages[4], ChatTurn::user("Dinner?"));
    }

    #[tokio::test]
    async fn test_history_is_not_mutated() {
        let llm = EchoCompletion::default();
        let history = vec![ChatTurn::user("Breakfast?")];
        let before = history.clone();

        generate_meal_idea(&llm, &catalog(), "Lunch?", &history)
            .await
            .unwrap();

        assert_eq!(history, before);
    }

    #[tokio::test]
    async fn test_service_failure_propagates() {
        let err = generate_meal_idea(&FailingCompletion, &catalog(), "test", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 429, .. }));
    }

    #[tokio::test]
    async fn test_empty_choices_propagates() {
        let err = generate_meal_idea(&NoChoicesCompletion, &catalog(), "test", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyChoices));
    }
}
