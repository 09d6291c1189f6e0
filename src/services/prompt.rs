use crate::domain::models::{HealthMetrics, Task};
use std::fmt::Write;

/// Tasks past this index are left out of the prompt.
pub const PROMPT_TASK_LIMIT: usize = 30;

pub const SYSTEM_PROMPT: &str = "You are a pragmatic productivity and wellbeing coach. \
Be concise and concrete. Never give medical diagnoses.";

const INSTRUCTIONS: [&str; 4] = [
    "A time-boxed plan for today (blocks with start and end times)",
    "Top 5 priorities, each with a one-line justification",
    "5 habit tweaks based on the health metrics",
    "5 quick wins that take under 10 minutes",
];

pub fn build_prompt(tasks: &[Task], health: &HealthMetrics) -> String {
    let mut out = String::from("Here are my tasks for today:\n");

    if tasks.is_empty() {
        out.push_str("(no tasks yet)\n");
    }
    for (i, task) in tasks.iter().take(PROMPT_TASK_LIMIT).enumerate() {
        let _ = writeln!(
            out,
            "{}. {} (impact {}, effort {}, due {}, done {})",
            i + 1,
            task.title,
            task.impact,
            task.effort,
            task.due.as_deref().unwrap_or("none"),
            if task.done { "yes" } else { "no" },
        );
    }

    let _ = writeln!(
        out,
        "\nHealth today: sleep {}h, water {} cups, steps {}, breaks per hour {}, mood {}.",
        health.sleep_hours,
        health.water_cups,
        health.steps,
        health.breaks_per_hour,
        health.mood.as_str(),
    );

    out.push_str("\nPlease give me:\n");
    for line in INSTRUCTIONS {
        let _ = writeln!(out, "- {line}");
    }
    out.push_str("Format everything as markdown with headings and bullet lists.");
    out
}
