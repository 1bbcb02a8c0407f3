use chrono::{DateTime, Duration, TimeZone, Utc};
use orbit_core::{person_urgency, task_urgency, urgency_dot, Priority, Task, TaskStatus};

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 6, 12, 0, 0).unwrap()
}

fn task_due(id: &str, priority: Priority, due_in_days: Option<i64>) -> Task {
    let now = noon();
    let mut task = Task::with_id(id, "1", format!("task {id}"), priority, now);
    task.due_date = due_in_days.map(|days| now + Duration::days(days));
    task
}

#[test]
fn done_tasks_score_exactly_zero() {
    let mut task = task_due("a", Priority::High, Some(-2));
    task.status = TaskStatus::Done;
    assert_eq!(task_urgency(&task, noon()), 0);
}

#[test]
fn priority_base_applies_without_due_date() {
    assert_eq!(task_urgency(&task_due("a", Priority::High, None), noon()), 50);
    assert_eq!(task_urgency(&task_due("b", Priority::Medium, None), noon()), 30);
    assert_eq!(task_urgency(&task_due("c", Priority::Low, None), noon()), 10);
}

#[test]
fn overdue_bonus_grows_per_day_and_caps_at_twenty() {
    assert_eq!(task_urgency(&task_due("a", Priority::High, Some(-2)), noon()), 82);
    assert_eq!(task_urgency(&task_due("b", Priority::Low, Some(-1)), noon()), 41);
    assert_eq!(task_urgency(&task_due("c", Priority::Low, Some(-30)), noon()), 60);
    assert_eq!(task_urgency(&task_due("d", Priority::High, Some(-20)), noon()), 100);
}

#[test]
fn proximity_bonuses_step_down_with_distance() {
    assert_eq!(task_urgency(&task_due("a", Priority::Medium, Some(0)), noon()), 55);
    assert_eq!(task_urgency(&task_due("b", Priority::Medium, Some(3)), noon()), 45);
    assert_eq!(task_urgency(&task_due("c", Priority::Medium, Some(4)), noon()), 35);
    assert_eq!(task_urgency(&task_due("d", Priority::Medium, Some(7)), noon()), 35);
    assert_eq!(task_urgency(&task_due("e", Priority::Medium, Some(8)), noon()), 30);
}

#[test]
fn due_date_comparison_ignores_time_of_day() {
    let early = Utc.with_ymd_and_hms(2024, 3, 6, 0, 30, 0).unwrap();
    let mut task = task_due("a", Priority::Low, None);
    task.due_date = Some(Utc.with_ymd_and_hms(2024, 3, 6, 23, 59, 0).unwrap());

    // Later clock time on the same calendar day is "due today", not overdue.
    assert_eq!(task_urgency(&task, early), 35);
}

#[test]
fn person_urgency_averages_and_rounds_to_nearest() {
    let tasks = vec![
        task_due("a", Priority::High, Some(-2)),
        task_due("b", Priority::Medium, Some(0)),
    ];
    // (82 + 55) / 2 = 68.5, rounds to 69.
    assert_eq!(person_urgency("1", &tasks, noon()), 69);
}

#[test]
fn person_urgency_is_order_invariant() {
    let mut tasks = vec![
        task_due("a", Priority::High, Some(-1)),
        task_due("b", Priority::Low, Some(5)),
        task_due("c", Priority::Medium, None),
    ];
    let forward = person_urgency("1", &tasks, noon());
    tasks.reverse();
    assert_eq!(person_urgency("1", &tasks, noon()), forward);
}

#[test]
fn done_tasks_dilute_the_mean() {
    let mut done = task_due("a", Priority::High, Some(-20));
    done.status = TaskStatus::Done;
    let tasks = vec![task_due("b", Priority::High, Some(-20)), done];
    // (100 + 0) / 2 = 50.
    assert_eq!(person_urgency("1", &tasks, noon()), 50);
}

#[test]
fn person_with_no_tasks_scores_zero() {
    let other = vec![task_due("a", Priority::High, Some(-2))];
    assert_eq!(person_urgency("nobody", &other, noon()), 0);
}

#[test]
fn person_urgency_never_exceeds_one_hundred() {
    let tasks = vec![
        task_due("a", Priority::High, Some(-20)),
        task_due("b", Priority::High, Some(-25)),
    ];
    assert_eq!(person_urgency("1", &tasks, noon()), 100);
}

#[test]
fn urgency_dot_scales_and_caps() {
    assert_eq!(urgency_dot(0), 0);
    assert_eq!(urgency_dot(50), 3);
    assert_eq!(urgency_dot(100), 5);
    assert_eq!(urgency_dot(400), 9);
}
