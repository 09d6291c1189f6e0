use crate::domain::coerce;
use crate::domain::models::{HealthMetrics, HealthPatch, NewTask, Task};
use crate::domain::scoring::{self, ScoredTask};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// The one in-memory task list and health record a dashboard works against.
#[derive(Debug, Clone, Default)]
pub struct DashboardSession {
    tasks: Vec<Task>,
    health: HealthMetrics,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn health(&self) -> &HealthMetrics {
        &self.health
    }

    pub fn add_task(&mut self, new: NewTask) -> Result<&Task, SessionError> {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(SessionError::EmptyTitle);
        }
        self.tasks.push(Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            effort: coerce::rating(&new.effort),
            impact: coerce::rating(&new.impact),
            due: coerce::non_blank(&new.due),
            done: false,
        });
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn toggle_done(&mut self, id: &str) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.done = !task.done;
        Some(&*task)
    }

    pub fn update_health(&mut self, patch: &HealthPatch) -> &HealthMetrics {
        self.health.apply(patch);
        &self.health
    }

    pub fn prioritized(&self) -> Vec<ScoredTask> {
        scoring::scored(&self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_task(title: &str, impact: i64, effort: i64) -> NewTask {
        serde_json::from_value(json!({ "title": title, "impact": impact, "effort": effort }))
            .unwrap()
    }

    #[test]
    fn add_task_clamps_and_assigns_id() {
        let mut session = DashboardSession::new();
        let task = session.add_task(new_task("  Ship it ", 9, 0)).unwrap().clone();

        assert_eq!(task.title, "Ship it");
        assert_eq!(task.impact, 5);
        assert_eq!(task.effort, 1);
        assert!(!task.done);
        assert!(Uuid::parse_str(&task.id).is_ok());
    }

    #[test]
    fn blank_title_rejected() {
        let mut session = DashboardSession::new();
        assert_eq!(
            session.add_task(new_task("   ", 3, 3)).unwrap_err(),
            SessionError::EmptyTitle
        );
        assert!(session.tasks().is_empty());
    }

    #[test]
    fn toggle_flips_done() {
        let mut session = DashboardSession::new();
        let id = session.add_task(new_task("Call bank", 2, 1)).unwrap().id.clone();

        assert!(session.toggle_done(&id).unwrap().done);
        assert!(!session.toggle_done(&id).unwrap().done);
        assert!(session.toggle_done("missing").is_none());
    }

    #[test]
    fn prioritized_view_leaves_storage_order() {
        let mut session = DashboardSession::new();
        session.add_task(new_task("Later", 1, 5)).unwrap();
        session.add_task(new_task("Now", 5, 1)).unwrap();

        let view = session.prioritized();
        assert_eq!(view[0].task.title, "Now");
        assert_eq!(session.tasks()[0].title, "Later");
    }

    #[test]
    fn health_updates_field_by_field() {
        let mut session = DashboardSession::new();
        let patch: HealthPatch =
            serde_json::from_value(json!({ "sleepHours": "6.5", "mood": "high" })).unwrap();
        let health = session.update_health(&patch).clone();

        assert_eq!(health.sleep_hours, 6.5);
        assert_eq!(health.water_cups, 0.0);
        assert_eq!(health.mood.as_str(), "high");
    }
}
