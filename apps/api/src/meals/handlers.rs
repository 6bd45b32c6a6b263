//! Axum route handlers for the chat and catalog endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::meals::catalog::Category;
use crate::meals::turn::generate_meal_idea;
use crate::models::chat::ChatTurn;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct IngredientsResponse {
    pub categories: Vec<Category>,
    pub formatted: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/chat
///
/// One conversation turn. The caller sends its full history every time and
/// appends the returned reply itself; nothing is stored server-side.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let reply = generate_meal_idea(
        state.llm.as_ref(),
        &state.catalog,
        &request.message,
        &request.history,
    )
    .await?;

    Ok(Json(ChatResponse { reply }))
}

/// GET /api/v1/ingredients
///
/// The permitted ingredients, structured and as rendered into the prompt.
pub async fn handle_ingredients(State(state): State<AppState>) -> Json<IngredientsResponse> {
    Json(IngredientsResponse {
        categories: state.catalog.categories.clone(),
        formatted: state.catalog.format(),
    })
}
