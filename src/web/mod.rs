pub mod ai;
pub mod metrics;
pub mod render;
pub mod tasks;

use crate::error;
use crate::state::SharedState;
use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

async fn health() -> &'static str {
    "OK"
}

pub fn routes(state: SharedState) -> Router {
    let api = Router::new()
        .merge(ai::router(state.clone()))
        .nest("/tasks", tasks::router(state.clone()))
        .nest("/metrics", metrics::router(state))
        .nest("/render", render::router());

    Router::new().route("/health", get(health)).nest("/api", api)
}

pub fn app(state: SharedState) -> Router {
    routes(state)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}
