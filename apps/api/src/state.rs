use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompletion;
use crate::meals::catalog::IngredientCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Inference backend. `OpenAiClient` in production, stubs in tests.
    pub llm: Arc<dyn ChatCompletion>,
    pub catalog: Arc<IngredientCatalog>,
    pub config: Config,
}
