use axum::response::Html;

const CHAT_PAGE: &str = include_str!("../../static/index.html");

/// GET /
/// The chat page. It keeps the conversation history in browser memory and
/// posts it with every turn to `/api/v1/chat`.
pub async fn chat_page() -> Html<&'static str> {
    Html(CHAT_PAGE)
}
