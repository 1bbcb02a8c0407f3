//! Task filtering, sorting, grouping, and statistics.
//!
//! # Responsibility
//! - Derive every filtered/sorted/grouped task view from store data.
//! - Keep all date predicates at calendar-day granularity.
//!
//! # Invariants
//! - Queries are pure; they never mutate the store.
//! - Sorting is stable: ties preserve input order.
//! - Done tasks never appear in a filtered view.

use crate::model::person::Person;
use crate::model::task::Task;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Per-person task filter driven by the detail view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonFilter {
    #[default]
    All,
    Today,
    ThisWeek,
    Overdue,
}

/// Global filter driven by the all-tasks view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalFilter {
    #[default]
    All,
    Today,
    Week,
    Overdue,
}

/// Per-person task counters for the detail header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    /// Every task of the person, regardless of status.
    pub total: usize,
    pub due_today: usize,
    pub due_this_week: usize,
    pub overdue: usize,
    pub completed: usize,
}

/// Active/overdue counters across the people visible under one scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryOverview {
    pub active_tasks: usize,
    pub overdue_tasks: usize,
}

/// One label bucket of the grouped all-tasks view.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskGroup<'a> {
    pub label: String,
    pub tasks: Vec<&'a Task>,
}

/// Due strictly before today, calendar-day comparison, and not done.
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    if task.is_done() {
        return false;
    }
    task.due_date
        .is_some_and(|due| due.date_naive() < now.date_naive())
}

/// Due on the current calendar day, ignoring time of day.
pub fn is_due_today(task: &Task, now: DateTime<Utc>) -> bool {
    task.due_date
        .is_some_and(|due| due.date_naive() == now.date_naive())
}

/// Due within the Monday-start week containing today.
///
/// Includes days of the current week that already passed.
pub fn is_due_this_week(task: &Task, now: DateTime<Utc>) -> bool {
    let Some(due) = task.due_date else {
        return false;
    };
    let today = now.date_naive();
    let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let week_end = week_start + Duration::days(6);
    let day = due.date_naive();
    day >= week_start && day <= week_end
}

/// Applies the per-person filter over one person's tasks and sorts the
/// result.
pub fn filter_person_tasks<'a>(
    tasks: &[&'a Task],
    filter: PersonFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Task> {
    let mut filtered: Vec<&Task> = match filter {
        PersonFilter::Today => tasks
            .iter()
            .filter(|task| !task.is_done() && is_due_today(task, now))
            .copied()
            .collect(),
        PersonFilter::Overdue => tasks
            .iter()
            .filter(|task| is_overdue(task, now))
            .copied()
            .collect(),
        // TODO: ThisWeek still matches All; it needs a due-this-week cut
        // once product confirms the intended narrowing.
        PersonFilter::All | PersonFilter::ThisWeek => tasks
            .iter()
            .filter(|task| !task.is_done())
            .copied()
            .collect(),
    };
    sort_tasks(&mut filtered, now);
    filtered
}

/// Applies the global filter across every non-done task and sorts the
/// result.
pub fn filter_all_tasks(
    tasks: &[Task],
    filter: GlobalFilter,
    now: DateTime<Utc>,
) -> Vec<&Task> {
    let mut filtered: Vec<&Task> = tasks
        .iter()
        .filter(|task| !task.is_done())
        .filter(|task| match filter {
            GlobalFilter::All => true,
            GlobalFilter::Today => is_due_today(task, now),
            GlobalFilter::Week => is_due_this_week(task, now),
            GlobalFilter::Overdue => is_overdue(task, now),
        })
        .collect();
    sort_tasks(&mut filtered, now);
    filtered
}

/// Stable sort: overdue first in ascending due-date order, then other dated
/// tasks in ascending due-date order, then undated tasks last keeping their
/// original relative order.
pub fn sort_tasks(tasks: &mut [&Task], now: DateTime<Utc>) {
    tasks.sort_by_key(|task| (!is_overdue(task, now), task.due_date.is_none(), task.due_date));
}

/// Groups an already-sorted task list into labeled buckets.
///
/// Labels are `"Overdue"`, `"Today"`, the weekday+date of other dated tasks
/// (`Friday, Aug 8`), and `"No Due Date"`, in first-appearance order. Each
/// bucket keeps the internal order of the input list.
pub fn group_tasks<'a>(sorted: &[&'a Task], now: DateTime<Utc>) -> Vec<TaskGroup<'a>> {
    let mut groups: Vec<TaskGroup<'a>> = Vec::new();
    for &task in sorted {
        let label = group_label(task, now);
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.tasks.push(task),
            None => groups.push(TaskGroup {
                label,
                tasks: vec![task],
            }),
        }
    }
    groups
}

fn group_label(task: &Task, now: DateTime<Utc>) -> String {
    match task.due_date {
        None => "No Due Date".to_string(),
        Some(due) => {
            if is_overdue(task, now) {
                "Overdue".to_string()
            } else if is_due_today(task, now) {
                "Today".to_string()
            } else {
                due.format("%A, %b %-d").to_string()
            }
        }
    }
}

/// Computes per-person counters from that person's full task list.
pub fn task_stats(tasks: &[&Task], now: DateTime<Utc>) -> TaskStats {
    TaskStats {
        total: tasks.len(),
        due_today: tasks
            .iter()
            .filter(|task| !task.is_done() && is_due_today(task, now))
            .count(),
        due_this_week: tasks
            .iter()
            .filter(|task| !task.is_done() && is_due_this_week(task, now))
            .count(),
        overdue: tasks.iter().filter(|task| is_overdue(task, now)).count(),
        completed: tasks.iter().filter(|task| task.is_done()).count(),
    }
}

/// Active and overdue counts for the tasks of the visible people.
pub fn category_overview(
    people: &[&Person],
    tasks: &[Task],
    now: DateTime<Utc>,
) -> CategoryOverview {
    let visible = |person_id: &str| people.iter().any(|person| person.id == person_id);
    CategoryOverview {
        active_tasks: tasks
            .iter()
            .filter(|task| visible(&task.person_id) && !task.is_done())
            .count(),
        overdue_tasks: tasks
            .iter()
            .filter(|task| visible(&task.person_id) && is_overdue(task, now))
            .count(),
    }
}

/// Non-done tasks due on the given calendar day.
pub fn tasks_due_on(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| {
            !task.is_done() && task.due_date.is_some_and(|due| due.date_naive() == date)
        })
        .collect()
}
