use axum::{response::Html, Json};

use crate::catalog::{catalog, ActionDescriptor};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/v1/actions
/// The action buttons, in page order.
pub async fn actions_handler() -> Json<Vec<ActionDescriptor>> {
    Json(catalog())
}
