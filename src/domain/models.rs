use crate::domain::coerce;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const SLEEP_HOURS_MAX: f64 = 24.0;
pub const WATER_CUPS_MAX: f64 = 30.0;
pub const STEPS_MAX: f64 = 50_000.0;
pub const BREAKS_PER_HOUR_MAX: f64 = 12.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "RawTask")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub effort: u8,
    pub impact: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    pub done: bool,
}

impl Task {
    pub fn has_due(&self) -> bool {
        self.due.as_deref().is_some_and(|d| !d.trim().is_empty())
    }
}

/// Wire shape of a task before coercion.
#[derive(Debug, Default, Deserialize)]
struct RawTask {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    title: Value,
    #[serde(default)]
    effort: Value,
    #[serde(default)]
    impact: Value,
    #[serde(default)]
    due: Value,
    #[serde(default)]
    done: Value,
}

impl From<RawTask> for Task {
    fn from(raw: RawTask) -> Self {
        Task {
            id: coerce::non_blank(&raw.id).unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: coerce::text(&raw.title).unwrap_or_default(),
            effort: coerce::rating(&raw.effort),
            impact: coerce::rating(&raw.impact),
            due: coerce::non_blank(&raw.due),
            done: raw.done.as_bool().unwrap_or(false),
        }
    }
}

/// Input for creating a task in the session.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub effort: Value,
    #[serde(default)]
    pub impact: Value,
    #[serde(default)]
    pub due: Value,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Low,
    #[default]
    Ok,
    High,
    Unknown,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Low => "low",
            Mood::Ok => "ok",
            Mood::High => "high",
            Mood::Unknown => "unknown",
        }
    }
}

impl From<&Value> for Mood {
    fn from(value: &Value) -> Self {
        match value.as_str().map(|s| s.trim().to_lowercase()).as_deref() {
            Some("low") => Mood::Low,
            Some("ok") => Mood::Ok,
            Some("high") => Mood::High,
            _ => Mood::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Mood::from(&value))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "HealthPatch")]
pub struct HealthMetrics {
    pub sleep_hours: f64,
    pub water_cups: f64,
    pub steps: f64,
    pub breaks_per_hour: f64,
    pub mood: Mood,
}

impl From<HealthPatch> for HealthMetrics {
    fn from(patch: HealthPatch) -> Self {
        let mut metrics = HealthMetrics {
            mood: Mood::Unknown,
            ..HealthMetrics::default()
        };
        metrics.apply(&patch);
        metrics
    }
}

impl HealthMetrics {
    /// Overwrites only the fields present in `patch`.
    pub fn apply(&mut self, patch: &HealthPatch) {
        if let Some(v) = &patch.sleep_hours {
            self.sleep_hours = coerce::clamped(v, 0.0, SLEEP_HOURS_MAX);
        }
        if let Some(v) = &patch.water_cups {
            self.water_cups = coerce::clamped(v, 0.0, WATER_CUPS_MAX);
        }
        if let Some(v) = &patch.steps {
            self.steps = coerce::clamped(v, 0.0, STEPS_MAX);
        }
        if let Some(v) = &patch.breaks_per_hour {
            self.breaks_per_hour = coerce::clamped(v, 0.0, BREAKS_PER_HOUR_MAX);
        }
        if let Some(v) = &patch.mood {
            self.mood = Mood::from(v);
        }
    }
}

/// Partial health update; also the wire shape of a full record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPatch {
    #[serde(default)]
    pub sleep_hours: Option<Value>,
    #[serde(default)]
    pub water_cups: Option<Value>,
    #[serde(default)]
    pub steps: Option<Value>,
    #[serde(default)]
    pub breaks_per_hour: Option<Value>,
    #[serde(default)]
    pub mood: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionBundle {
    pub plan: String,
    pub habits: Vec<String>,
    pub quick_wins: Vec<String>,
    pub top: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_payload_is_coerced() {
        let task: Task = serde_json::from_value(json!({
            "id": "t1",
            "title": "Write report",
            "effort": "7",
            "impact": 0,
            "due": "",
            "done": "yes"
        }))
        .unwrap();

        assert_eq!(task.id, "t1");
        assert_eq!(task.effort, 5);
        assert_eq!(task.impact, 1);
        assert_eq!(task.due, None);
        assert!(!task.done);
    }

    #[test]
    fn task_without_id_gets_one() {
        let a: Task = serde_json::from_value(json!({ "title": "A" })).unwrap();
        let b: Task = serde_json::from_value(json!({ "title": "B" })).unwrap();
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn health_payload_is_clamped_and_defaulted() {
        let health: HealthMetrics = serde_json::from_value(json!({
            "sleepHours": 30,
            "waterCups": "abc",
            "steps": -10,
            "breaksPerHour": "3",
            "mood": "Grumpy"
        }))
        .unwrap();

        assert_eq!(health.sleep_hours, 24.0);
        assert_eq!(health.water_cups, 0.0);
        assert_eq!(health.steps, 0.0);
        assert_eq!(health.breaks_per_hour, 3.0);
        assert_eq!(health.mood, Mood::Unknown);
    }

    #[test]
    fn health_serializes_camel_case() {
        let health = HealthMetrics {
            sleep_hours: 7.5,
            mood: Mood::High,
            ..HealthMetrics::default()
        };
        let value = serde_json::to_value(&health).unwrap();
        assert_eq!(value["sleepHours"], json!(7.5));
        assert_eq!(value["mood"], json!("high"));
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut health = HealthMetrics {
            sleep_hours: 8.0,
            steps: 9000.0,
            ..HealthMetrics::default()
        };
        let patch: HealthPatch = serde_json::from_value(json!({ "steps": 1200 })).unwrap();
        health.apply(&patch);

        assert_eq!(health.sleep_hours, 8.0);
        assert_eq!(health.steps, 1200.0);
        assert_eq!(health.mood, Mood::Ok);
    }
}
