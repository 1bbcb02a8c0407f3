//! Urgency scoring for tasks and people.
//!
//! # Responsibility
//! - Score one task from its priority and due-date proximity.
//! - Aggregate task scores into a per-person urgency in [0, 100].
//!
//! # Invariants
//! - Done tasks score exactly 0 and still dilute the per-person mean.
//! - Scores are pure functions of task data and the supplied `now`.
//! - Date proximity is measured in calendar days, ignoring time of day.

use crate::model::task::{Priority, Task, TaskStatus};
use chrono::{DateTime, Utc};

const BONUS_OVERDUE: u32 = 30;
const BONUS_OVERDUE_PER_DAY_CAP: u32 = 20;
const BONUS_DUE_TODAY: u32 = 25;
const BONUS_DUE_SOON: u32 = 15;
const BONUS_DUE_THIS_WEEK: u32 = 5;
const PERSON_URGENCY_CAP: u32 = 100;

fn priority_base(priority: Priority) -> u32 {
    match priority {
        Priority::High => 50,
        Priority::Medium => 30,
        Priority::Low => 10,
    }
}

/// Scores one task at the supplied instant.
///
/// Additive on top of the priority base (high=50, medium=30, low=10):
/// overdue adds `30 + min(20, days overdue)`, due today adds 25, due within
/// three days adds 15, due within seven adds 5, anything later adds nothing.
/// A done task scores exactly 0 regardless of priority or date.
pub fn task_urgency(task: &Task, now: DateTime<Utc>) -> u32 {
    if task.status == TaskStatus::Done {
        return 0;
    }
    let base = priority_base(task.priority);
    let Some(due) = task.due_date else {
        return base;
    };
    let days_diff = (due.date_naive() - now.date_naive()).num_days();
    if days_diff < 0 {
        let days_overdue = u32::try_from(days_diff.unsigned_abs()).unwrap_or(u32::MAX);
        base + BONUS_OVERDUE + days_overdue.min(BONUS_OVERDUE_PER_DAY_CAP)
    } else if days_diff == 0 {
        base + BONUS_DUE_TODAY
    } else if days_diff <= 3 {
        base + BONUS_DUE_SOON
    } else if days_diff <= 7 {
        base + BONUS_DUE_THIS_WEEK
    } else {
        base
    }
}

/// Mean task urgency for one person, rounded to nearest and clamped to
/// [0, 100].
///
/// Averages over **all** of the person's tasks; done tasks contribute 0 and
/// dilute the mean. A person with no tasks scores 0.
pub fn person_urgency(person_id: &str, tasks: &[Task], now: DateTime<Utc>) -> u32 {
    let scores: Vec<u32> = tasks
        .iter()
        .filter(|task| task.person_id == person_id)
        .map(|task| task_urgency(task, now))
        .collect();
    if scores.is_empty() {
        return 0;
    }
    let mean = f64::from(scores.iter().sum::<u32>()) / scores.len() as f64;
    (mean.round() as u32).min(PERSON_URGENCY_CAP)
}

/// Display level for the planet urgency dot, 0..=9.
pub fn urgency_dot(urgency: u32) -> u32 {
    ((f64::from(urgency) / 20.0).round() as u32).min(9)
}
