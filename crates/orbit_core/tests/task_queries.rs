use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use orbit_core::{
    category_overview, filter_all_tasks, filter_person_tasks, group_tasks, is_due_this_week,
    tasks_due_on, task_stats, GlobalFilter, OrbitCategory, Person, PersonFilter, Priority,
    Relationship, Task, TaskStatus,
};

// Wednesday; the surrounding Monday-start week runs Mar 4 through Mar 10.
fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 6, 12, 0, 0).unwrap()
}

fn task_due(id: &str, due_in_days: Option<i64>) -> Task {
    let now = noon();
    let mut task = Task::with_id(id, "1", format!("task {id}"), Priority::Medium, now);
    task.due_date = due_in_days.map(|days| now + Duration::days(days));
    task
}

fn done(mut task: Task) -> Task {
    task.status = TaskStatus::Done;
    task
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.id.clone()).collect()
}

#[test]
fn sort_puts_overdue_first_then_ascending_then_undated_last() {
    let tasks = vec![
        task_due("a", None),
        task_due("b", Some(-1)),
        task_due("c", Some(2)),
        task_due("d", Some(-3)),
    ];
    let refs: Vec<&Task> = tasks.iter().collect();

    let sorted = filter_person_tasks(&refs, PersonFilter::All, noon());
    assert_eq!(ids(&sorted), vec!["d", "b", "c", "a"]);
}

#[test]
fn undated_tasks_keep_their_relative_order() {
    let tasks = vec![
        task_due("x", None),
        task_due("y", Some(1)),
        task_due("z", None),
    ];
    let refs: Vec<&Task> = tasks.iter().collect();

    let sorted = filter_person_tasks(&refs, PersonFilter::All, noon());
    assert_eq!(ids(&sorted), vec!["y", "x", "z"]);
}

#[test]
fn person_filter_all_excludes_done() {
    let tasks = vec![task_due("a", Some(1)), done(task_due("b", Some(1)))];
    let refs: Vec<&Task> = tasks.iter().collect();

    let filtered = filter_person_tasks(&refs, PersonFilter::All, noon());
    assert_eq!(ids(&filtered), vec!["a"]);
}

#[test]
fn person_filter_today_keeps_only_current_day() {
    let tasks = vec![
        task_due("a", Some(0)),
        task_due("b", Some(1)),
        task_due("c", Some(-1)),
        done(task_due("d", Some(0))),
    ];
    let refs: Vec<&Task> = tasks.iter().collect();

    let filtered = filter_person_tasks(&refs, PersonFilter::Today, noon());
    assert_eq!(ids(&filtered), vec!["a"]);
}

#[test]
fn person_filter_this_week_currently_matches_all() {
    let tasks = vec![
        task_due("a", Some(0)),
        task_due("b", Some(30)),
        task_due("c", None),
        done(task_due("d", Some(0))),
    ];
    let refs: Vec<&Task> = tasks.iter().collect();

    let this_week = filter_person_tasks(&refs, PersonFilter::ThisWeek, noon());
    let all = filter_person_tasks(&refs, PersonFilter::All, noon());
    assert_eq!(ids(&this_week), ids(&all));
}

#[test]
fn person_filter_overdue_uses_calendar_day_cut() {
    let tasks = vec![
        task_due("a", Some(-1)),
        task_due("b", Some(0)),
        done(task_due("c", Some(-5))),
    ];
    let refs: Vec<&Task> = tasks.iter().collect();

    let filtered = filter_person_tasks(&refs, PersonFilter::Overdue, noon());
    assert_eq!(ids(&filtered), vec!["a"]);
}

#[test]
fn global_week_filter_uses_monday_start_week() {
    let tasks = vec![
        task_due("monday", Some(-2)),
        task_due("sunday", Some(4)),
        task_due("next_monday", Some(5)),
        task_due("undated", None),
    ];

    let filtered = filter_all_tasks(&tasks, GlobalFilter::Week, noon());
    assert_eq!(ids(&filtered), vec!["monday", "sunday"]);

    assert!(is_due_this_week(&tasks[0], noon()));
    assert!(!is_due_this_week(&tasks[2], noon()));
}

#[test]
fn global_filters_cover_today_and_overdue() {
    let tasks = vec![
        task_due("a", Some(0)),
        task_due("b", Some(-1)),
        done(task_due("c", Some(0))),
        task_due("d", Some(3)),
    ];

    let today = filter_all_tasks(&tasks, GlobalFilter::Today, noon());
    assert_eq!(ids(&today), vec!["a"]);

    let overdue = filter_all_tasks(&tasks, GlobalFilter::Overdue, noon());
    assert_eq!(ids(&overdue), vec!["b"]);

    let all = filter_all_tasks(&tasks, GlobalFilter::All, noon());
    assert_eq!(ids(&all), vec!["b", "a", "d"]);
}

#[test]
fn groups_follow_first_appearance_order_with_formatted_dates() {
    let tasks = vec![
        task_due("d", Some(-3)),
        task_due("b", Some(-1)),
        task_due("t", Some(0)),
        task_due("c", Some(2)),
        task_due("e", Some(2)),
        task_due("a", None),
    ];

    let sorted = filter_all_tasks(&tasks, GlobalFilter::All, noon());
    let groups = group_tasks(&sorted, noon());

    let labels: Vec<&str> = groups.iter().map(|group| group.label.as_str()).collect();
    assert_eq!(labels, vec!["Overdue", "Today", "Friday, Mar 8", "No Due Date"]);

    assert_eq!(ids(&groups[0].tasks), vec!["d", "b"]);
    assert_eq!(ids(&groups[1].tasks), vec!["t"]);
    assert_eq!(ids(&groups[2].tasks), vec!["c", "e"]);
    assert_eq!(ids(&groups[3].tasks), vec!["a"]);
}

#[test]
fn stats_count_non_done_by_predicate_and_done_separately() {
    let tasks = vec![
        done(task_due("done", Some(-1))),
        task_due("late", Some(-2)),
        task_due("today", Some(0)),
        task_due("friday", Some(2)),
        task_due("far", Some(10)),
        task_due("undated", None),
    ];
    let refs: Vec<&Task> = tasks.iter().collect();

    let stats = task_stats(&refs, noon());
    assert_eq!(stats.total, 6);
    assert_eq!(stats.due_today, 1);
    assert_eq!(stats.due_this_week, 3);
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.completed, 1);
}

#[test]
fn tasks_due_on_matches_exact_calendar_day() {
    let tasks = vec![
        task_due("a", Some(2)),
        task_due("b", Some(2)),
        task_due("c", Some(3)),
        done(task_due("d", Some(2))),
    ];

    let date = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
    let due = tasks_due_on(&tasks, date);
    assert_eq!(ids(&due), vec!["a", "b"]);
}

#[test]
fn category_overview_counts_only_visible_people() {
    let work = Person::with_id(
        "w",
        "Worker",
        "bg-indigo-500",
        Relationship::Coworker,
        OrbitCategory::Work,
        1,
    );
    let friend = Person::with_id(
        "f",
        "Friend",
        "bg-cyan-500",
        Relationship::Friend,
        OrbitCategory::Friends,
        1,
    );
    let mut tasks = vec![task_due("a", Some(-1)), task_due("b", Some(1))];
    tasks[0].person_id = "w".to_string();
    tasks[1].person_id = "f".to_string();

    let visible = vec![&work];
    let overview = category_overview(&visible, &tasks, noon());
    assert_eq!(overview.active_tasks, 1);
    assert_eq!(overview.overdue_tasks, 1);

    let everyone = vec![&work, &friend];
    let overview = category_overview(&everyone, &tasks, noon());
    assert_eq!(overview.active_tasks, 2);
    assert_eq!(overview.overdue_tasks, 1);
}
