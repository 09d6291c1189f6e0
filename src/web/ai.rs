use crate::domain::models::{HealthMetrics, HealthPatch, SuggestionBundle, Task};
use crate::services::ai::Insight;
use crate::state::SharedState;
use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum InsightResponse {
    #[serde(rename = "openai")]
    OpenAi { content: String },
    Fallback { suggestions: SuggestionBundle },
}

impl From<Insight> for InsightResponse {
    fn from(insight: Insight) -> Self {
        match insight {
            Insight::Model(content) => InsightResponse::OpenAi { content },
            Insight::Fallback { suggestions, .. } => InsightResponse::Fallback { suggestions },
        }
    }
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/ai", post(ai_for_payload))
        .route("/insight", post(ai_for_session))
        .with_state(state)
}

/// Tasks and health from an arbitrary body. Anything unreadable becomes an
/// empty task list and a zeroed health record.
fn parse_payload(body: &[u8]) -> (Vec<Task>, HealthMetrics) {
    let value: Value = serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::warn!("Unreadable /api/ai body, using defaults: {}", e);
        Value::Null
    });

    let tasks: Vec<Task> = value
        .get("tasks")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value::<Task>(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    let health = value
        .get("health")
        .and_then(|h| serde_json::from_value::<HealthMetrics>(h.clone()).ok())
        .unwrap_or_else(|| HealthMetrics::from(HealthPatch::default()));

    (tasks, health)
}

async fn ai_for_payload(State(state): State<SharedState>, body: Bytes) -> Json<InsightResponse> {
    let (tasks, health) = parse_payload(&body);
    tracing::info!(
        "Insight requested for {} tasks (live model: {})",
        tasks.len(),
        state.ai.is_live()
    );
    Json(state.ai.insight(&tasks, &health).await.into())
}

async fn ai_for_session(State(state): State<SharedState>) -> Json<InsightResponse> {
    let (tasks, health) = {
        let session = state.session.read().await;
        (session.tasks().to_vec(), session.health().clone())
    };
    tracing::info!("Insight requested for session with {} tasks", tasks.len());
    Json(state.ai.insight(&tasks, &health).await.into())
}
