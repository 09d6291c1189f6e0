//! Rule-based suggestions used whenever the language model is unavailable.
//! Thresholds are product constants; keep them as they are.

use crate::domain::models::{HealthMetrics, SuggestionBundle, Task};
use crate::domain::scoring;

pub const SLEEP_TARGET_HOURS: f64 = 7.0;
pub const WATER_TARGET_CUPS: f64 = 8.0;
pub const STEPS_TARGET: f64 = 8000.0;
pub const BREAKS_TARGET_PER_HOUR: f64 = 2.0;

pub const TOP_LIMIT: usize = 5;
pub const QUICK_WIN_COUNT: usize = 5;
pub const QUICK_WIN_MAX_EFFORT: u8 = 2;
pub const QUICK_WIN_FILLER: &str = "Inbox sweep: archive or assign 10 emails.";

const DAY_PLAN: [&str; 8] = [
    "08:30–09:00 Plan the day and pick your top 3",
    "09:00–10:30 Deep work block 1 (highest-impact task)",
    "10:30–10:45 Break: water and a short walk",
    "10:45–12:00 Deep work block 2",
    "12:00–12:45 Lunch away from the screen",
    "12:45–14:00 Meetings, messages and collaboration",
    "14:00–15:30 Deep work block 3 (quick wins first)",
    "15:30–16:00 Wrap up and queue tomorrow's priorities",
];

struct HabitRule {
    target: f64,
    act: &'static str,
    keep: &'static str,
}

// Same order as `metric_values`.
const HABIT_RULES: [HabitRule; 4] = [
    HabitRule {
        target: SLEEP_TARGET_HOURS,
        act: "Aim for 7–9h tonight: start winding down 60 minutes before bed.",
        keep: "Keep your sleep window consistent; you are already at 7h or more.",
    },
    HabitRule {
        target: WATER_TARGET_CUPS,
        act: "Drink a glass of water now and keep a bottle on your desk (goal: 8 cups).",
        keep: "Maintain hydration cadence: a glass every 1–2 hours.",
    },
    HabitRule {
        target: STEPS_TARGET,
        act: "Insert two 10-min walks today to get closer to 8k steps.",
        keep: "Keep moving: a short evening walk protects your step streak.",
    },
    HabitRule {
        target: BREAKS_TARGET_PER_HOUR,
        act: "Use 50/10 focus cycles: 50 minutes of work, then a 10-minute break.",
        keep: "Your break rhythm is solid; keep stepping away from the screen.",
    },
];

fn metric_values(health: &HealthMetrics) -> [f64; 4] {
    [
        health.sleep_hours,
        health.water_cups,
        health.steps,
        health.breaks_per_hour,
    ]
}

pub fn day_plan() -> String {
    DAY_PLAN.join("\n")
}

/// Builds the fallback bundle. Deterministic for the same inputs.
pub fn generate_suggestions(
    tasks: &[Task],
    health: &HealthMetrics,
    note: Option<&str>,
) -> SuggestionBundle {
    let open: Vec<&Task> = tasks.iter().filter(|t| !t.done).collect();

    let top = scoring::prioritize(open.iter().copied())
        .into_iter()
        .take(TOP_LIMIT)
        .map(|t| format!("{} — do soon (impact {}, effort {})", t.title, t.impact, t.effort))
        .collect();

    let mut habits: Vec<String> = HABIT_RULES
        .iter()
        .zip(metric_values(health))
        .map(|(rule, value)| {
            let line = if value < rule.target { rule.act } else { rule.keep };
            line.to_string()
        })
        .collect();
    if let Some(note) = note {
        habits.insert(0, format!("(Note) {note}"));
    }

    let mut quick_wins: Vec<String> = open
        .iter()
        .filter(|t| t.effort <= QUICK_WIN_MAX_EFFORT)
        .take(QUICK_WIN_COUNT)
        .map(|t| format!("Start: {} (<=10m setup)", t.title))
        .collect();
    quick_wins.resize(QUICK_WIN_COUNT, QUICK_WIN_FILLER.to_string());

    SuggestionBundle {
        plan: day_plan(),
        habits,
        quick_wins,
        top,
    }
}
