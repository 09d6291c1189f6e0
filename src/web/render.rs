use crate::error::AppError;
use crate::markdown;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct RenderPayload {
    #[serde(default)]
    markdown: String,
}

#[derive(Debug, Serialize)]
struct RenderResponse {
    fragments: Vec<String>,
    html: String,
}

pub fn router() -> Router {
    Router::new().route("/", post(render))
}

async fn render(
    payload: Result<Json<RenderPayload>, JsonRejection>,
) -> Result<Json<RenderResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let fragments: Vec<String> = markdown::render(&payload.markdown).collect();
    let html = markdown::render_html(&payload.markdown);
    Ok(Json(RenderResponse { fragments, html }))
}
