//! Fixed demo dataset loaded at process start.
//!
//! # Responsibility
//! - Seed an empty store with the demo people and tasks.
//! - Express due dates as day offsets from the supplied `now`, so the mix of
//!   overdue/today/upcoming work is stable regardless of start time.
//!
//! # Invariants
//! - Ids are fixed so presentation layers can deep-link during demos.
//! - Every task references a seeded person.

use crate::model::person::{OrbitCategory, Person, Relationship};
use crate::model::task::{Priority, Task, TaskStatus};
use crate::store::{EntityStore, StoreResult};
use chrono::{DateTime, Duration, Utc};

/// Loads the demo dataset (8 people, 25 tasks) into the store.
pub fn seed_demo(store: &mut EntityStore, now: DateTime<Utc>) -> StoreResult<()> {
    for person in demo_people() {
        store.add_person(person)?;
    }
    for task in demo_tasks(now) {
        store.add_task(task)?;
    }
    Ok(())
}

fn demo_people() -> Vec<Person> {
    use OrbitCategory as C;
    use Relationship as R;
    vec![
        Person::with_id("1", "Mom", "bg-rose-500", R::Family, C::Family, 3),
        Person::with_id("2", "Dad", "bg-orange-500", R::Family, C::Family, 2),
        Person::with_id("3", "Alex (Manager)", "bg-indigo-500", R::Coworker, C::Work, 4),
        Person::with_id("4", "CS Prof", "bg-emerald-500", R::Other, C::School, 3),
        Person::with_id("5", "Jade", "bg-cyan-500", R::Friend, C::Friends, 2),
        Person::with_id("6", "Sarah Chen", "bg-violet-500", R::Coworker, C::Work, 3),
        Person::with_id("7", "Marcus", "bg-sky-500", R::Friend, C::Friends, 4),
        Person::with_id("8", "Sister", "bg-pink-500", R::Family, C::Family, 4),
    ]
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    person_id: &str,
    title: &str,
    description: Option<&str>,
    due_in_days: Option<i64>,
    priority: Priority,
    status: TaskStatus,
    tags: &[&str],
    now: DateTime<Utc>,
) -> Task {
    let mut task = Task::with_id(id, person_id, title, priority, now);
    task.description = description.map(str::to_string);
    task.due_date = due_in_days.map(|days| now + Duration::days(days));
    task.status = status;
    task.tags = tags.iter().map(|tag| (*tag).to_string()).collect();
    task
}

fn demo_tasks(now: DateTime<Utc>) -> Vec<Task> {
    use Priority::{High, Low, Medium};
    use TaskStatus::{InProgress, Pending};
    vec![
        // Mom
        task(
            "1",
            "1",
            "Call mom back about Thanksgiving",
            Some("Discuss menu and who is bringing what"),
            Some(-2),
            High,
            Pending,
            &["family", "urgent"],
            now,
        ),
        task("2", "1", "Send mom photos from vacation", None, Some(0), Medium, Pending, &["family"], now),
        task("3", "1", "Help mom set up new phone", None, Some(1), Medium, Pending, &["family", "tech"], now),
        // Dad
        task(
            "4",
            "2",
            "Fix dad's computer",
            Some("Reinstall antivirus and clean up startup programs"),
            Some(3),
            Low,
            Pending,
            &["family", "tech"],
            now,
        ),
        task("5", "2", "Watch game with dad", None, Some(2), Low, Pending, &["family", "fun"], now),
        // Alex (Manager)
        task(
            "6",
            "3",
            "Submit Q4 performance review",
            Some("Complete self-assessment and goals for next quarter"),
            Some(-1),
            High,
            InProgress,
            &["work", "urgent"],
            now,
        ),
        task("7", "3", "Prepare sprint planning presentation", None, Some(0), High, Pending, &["work", "meeting"], now),
        task("8", "3", "Review team budget proposal", None, Some(0), High, Pending, &["work", "budget"], now),
        task("9", "3", "Schedule 1-on-1 meetings", None, Some(1), Medium, Pending, &["work", "meetings"], now),
        task("10", "3", "Update project roadmap", None, Some(2), Medium, Pending, &["work", "planning"], now),
        // CS Prof
        task(
            "11",
            "4",
            "Submit final project proposal",
            Some("Write 5-page proposal for capstone project"),
            Some(-3),
            High,
            InProgress,
            &["school", "urgent"],
            now,
        ),
        task("12", "4", "Finish algorithms homework", None, Some(0), High, Pending, &["school", "homework"], now),
        task("13", "4", "Study for midterm exam", None, Some(1), High, Pending, &["school", "exam"], now),
        task("14", "4", "Attend office hours", None, Some(2), Medium, Pending, &["school"], now),
        // Jade
        task("15", "5", "Plan birthday surprise for Jade", None, Some(7), Medium, Pending, &["friends", "party"], now),
        task("16", "5", "Reply to Jade about weekend plans", None, Some(0), Low, Pending, &["friends", "social"], now),
        // Sarah Chen
        task(
            "17",
            "6",
            "Code review Sarah's PR",
            Some("Review authentication refactor pull request"),
            Some(0),
            High,
            Pending,
            &["work", "code-review"],
            now,
        ),
        task("18", "6", "Pair programming session", None, Some(1), Medium, Pending, &["work", "development"], now),
        task("19", "6", "API documentation updates", None, Some(3), Low, Pending, &["work", "docs"], now),
        // Marcus
        task("20", "7", "Basketball game with Marcus", None, Some(2), Low, Pending, &["friends", "sports"], now),
        task("21", "7", "Help Marcus move apartment", None, Some(4), Medium, Pending, &["friends", "favor"], now),
        task("22", "7", "Game night at Marcus place", None, Some(5), Low, Pending, &["friends", "fun"], now),
        // Sister
        task(
            "23",
            "8",
            "Help sister with college essay",
            Some("Review and provide feedback on personal statement"),
            Some(0),
            High,
            Pending,
            &["family", "school"],
            now,
        ),
        task("24", "8", "Sister's recital this weekend", None, Some(3), High, Pending, &["family", "event"], now),
        task("25", "8", "Take sister shopping for prom dress", None, Some(7), Medium, Pending, &["family", "shopping"], now),
    ]
}
