use chrono::{TimeZone, Utc};
use orbit_core::{
    OrbitBand, OrbitCategory, PersonFilter, Priority, Relationship, Task, TaskStatus,
};
use serde_json::json;

#[test]
fn enum_wire_values_are_snake_case() {
    assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), json!("in_progress"));
    assert_eq!(serde_json::to_value(Priority::High).unwrap(), json!("high"));
    assert_eq!(serde_json::to_value(Relationship::Coworker).unwrap(), json!("coworker"));
    assert_eq!(serde_json::to_value(OrbitCategory::Friends).unwrap(), json!("friends"));
    assert_eq!(serde_json::to_value(PersonFilter::ThisWeek).unwrap(), json!("this_week"));
    assert_eq!(serde_json::to_value(OrbitBand::Inner).unwrap(), json!("inner"));
}

#[test]
fn task_round_trips_through_json() {
    let created = Utc.with_ymd_and_hms(2024, 3, 6, 12, 0, 0).unwrap();
    let mut task = Task::with_id("42", "7", "Basketball game", Priority::Low, created);
    task.description = Some("bring water".to_string());
    task.due_date = Some(Utc.with_ymd_and_hms(2024, 3, 8, 18, 0, 0).unwrap());
    task.tags = vec!["friends".to_string(), "sports".to_string(), "sports".to_string()];

    let encoded = serde_json::to_string(&task).unwrap();
    let decoded: Task = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn task_without_tags_field_decodes_to_empty_list() {
    let decoded: Task = serde_json::from_value(json!({
        "id": "1",
        "person_id": "1",
        "title": "Call mom",
        "description": null,
        "due_date": null,
        "priority": "medium",
        "status": "pending",
        "created_at": "2024-03-06T12:00:00Z"
    }))
    .unwrap();

    assert!(decoded.tags.is_empty());
    assert_eq!(decoded.status, TaskStatus::Pending);
}
