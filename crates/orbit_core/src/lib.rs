//! Core domain logic for Orbit, a personal relationship/task tracker.
//! This crate is the single source of truth for business invariants.
//!
//! People and their tasks live in an in-memory [`store::EntityStore`];
//! urgency scoring, orbit-band placement, and every filtered task view are
//! pure functions over that state. The presentation layer drives the store
//! through its command surface and re-derives views on change notification.

pub mod logging;
pub mod model;
pub mod orbit;
pub mod query;
pub mod seed;
pub mod selection;
pub mod store;
pub mod urgency;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{
    OrbitCategory, Person, PersonId, PersonPatch, Relationship, SelectedCategory,
};
pub use model::task::{Priority, Task, TaskId, TaskPatch, TaskStatus};
pub use orbit::{band_angle, band_for, place_people, OrbitBand, OrbitConfig, Placement};
pub use query::{
    category_overview, filter_all_tasks, filter_person_tasks, group_tasks, is_due_this_week,
    is_due_today, is_overdue, sort_tasks, task_stats, tasks_due_on, CategoryOverview,
    GlobalFilter, PersonFilter, TaskGroup, TaskStats,
};
pub use seed::seed_demo;
pub use selection::SelectionState;
pub use store::{
    EntityKind, EntityStore, StoreError, StoreEvent, StoreResult, SubscriptionId,
};
pub use urgency::{person_urgency, task_urgency, urgency_dot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
