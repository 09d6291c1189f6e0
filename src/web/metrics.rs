use crate::domain::models::{HealthMetrics, HealthPatch};
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(get_metrics).put(update_metrics))
        .with_state(state)
}

async fn get_metrics(State(state): State<SharedState>) -> Json<HealthMetrics> {
    Json(state.session.read().await.health().clone())
}

async fn update_metrics(
    State(state): State<SharedState>,
    payload: Result<Json<HealthPatch>, JsonRejection>,
) -> Result<Json<HealthMetrics>, AppError> {
    let Json(patch) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let mut session = state.session.write().await;
    Ok(Json(session.update_health(&patch).clone()))
}
