// Meal ideas: ingredient catalog, system prompt, and the per-turn handler.
// All LLM calls go through llm_client; nothing here talks HTTP to the model directly.

pub mod catalog;
pub mod handlers;
pub mod prompts;
pub mod turn;
