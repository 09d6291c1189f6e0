use crate::domain::models::{NewTask, Task};
use crate::domain::scoring::ScoredTask;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/:id/toggle", post(toggle_task))
        .with_state(state)
}

/// Priority order, highest score first.
async fn list_tasks(State(state): State<SharedState>) -> Json<Vec<ScoredTask>> {
    Json(state.session.read().await.prioritized())
}

async fn create_task(
    State(state): State<SharedState>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let Json(new_task) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let mut session = state.session.write().await;
    let task = session.add_task(new_task)?.clone();
    tracing::info!("Task {} added (impact {}, effort {})", task.id, task.impact, task.effort);
    Ok((StatusCode::CREATED, Json(task)))
}

async fn toggle_task(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, AppError> {
    let mut session = state.session.write().await;
    let task = session
        .toggle_done(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("task {id}")))?;
    Ok(Json(task))
}
