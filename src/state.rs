use crate::domain::session::DashboardSession;
use crate::services::ai::AiService;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub ai: Arc<AiService>,
    pub session: Arc<RwLock<DashboardSession>>,
}

impl AppState {
    pub fn new(ai: AiService) -> Self {
        Self {
            ai: Arc::new(ai),
            session: Arc::new(RwLock::new(DashboardSession::new())),
        }
    }
}

pub type SharedState = Arc<AppState>;
