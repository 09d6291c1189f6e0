use crate::domain::models::Task;
use serde::Serialize;
use std::cmp::Reverse;

pub const IMPACT_WEIGHT: i32 = 2;
pub const DUE_BONUS: i32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    pub score: i32,
}

/// `impact * 2 - effort`, plus one when the task has a due date.
pub fn score(task: &Task) -> i32 {
    let due = if task.has_due() { DUE_BONUS } else { 0 };
    i32::from(task.impact) * IMPACT_WEIGHT - i32::from(task.effort) + due
}

/// Highest score first. Ties keep insertion order (`sort_by_key` is stable).
pub fn prioritize<'a, I>(tasks: I) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut ordered: Vec<&Task> = tasks.into_iter().collect();
    ordered.sort_by_key(|t| Reverse(score(t)));
    ordered
}

pub fn scored(tasks: &[Task]) -> Vec<ScoredTask> {
    prioritize(tasks)
        .into_iter()
        .map(|task| ScoredTask {
            task: task.clone(),
            score: score(task),
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn task(title: &str, impact: u8, effort: u8, due: Option<&str>) -> Task {
    Task {
        id: title.to_lowercase(),
        title: title.to_string(),
        effort,
        impact,
        due: due.map(str::to_string),
        done: false,
    }
}
