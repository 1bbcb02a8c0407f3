//! In-memory entity store and command surface.
//!
//! # Responsibility
//! - Own the person/task collections, the selection state, and the
//!   subscriber list.
//! - Route every mutation through explicit, all-or-nothing commands.
//! - Notify subscribers synchronously after each applied command.
//!
//! # Invariants
//! - Person and task ids are unique for the process lifetime.
//! - No task references a missing person; person removal cascades to tasks.
//! - A failed command leaves every collection untouched.

use crate::model::person::{Person, PersonId, PersonPatch, SelectedCategory};
use crate::model::task::{Task, TaskId, TaskPatch, TaskStatus};
use crate::query::PersonFilter;
use crate::selection::SelectionState;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Entity kind discriminator for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Task,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Person => write!(f, "person"),
            Self::Task => write!(f, "task"),
        }
    }
}

/// Command error for store mutations.
///
/// Every variant is local and recoverable; the failed command has not
/// mutated any collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Mutation targeted an id that does not exist.
    NotFound { kind: EntityKind, id: String },
    /// Add used an id that already exists.
    DuplicateId { kind: EntityKind, id: String },
    /// Task add referenced a person that does not exist.
    DanglingReference { task_id: TaskId, person_id: PersonId },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::DuplicateId { kind, id } => write!(f, "{kind} id already exists: {id}"),
            Self::DanglingReference { task_id, person_id } => write!(
                f,
                "task {task_id} references missing person {person_id}"
            ),
        }
    }
}

impl Error for StoreError {}

/// Mutation notification delivered to subscribers.
///
/// One event per successful command; failed commands emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    PersonAdded(PersonId),
    PersonUpdated(PersonId),
    /// Person removal including the ids of cascade-removed tasks. A matching
    /// selection has already been cleared when this fires.
    PersonRemoved {
        person_id: PersonId,
        removed_tasks: Vec<TaskId>,
    },
    TaskAdded(TaskId),
    TaskUpdated(TaskId),
    TaskRemoved(TaskId),
    TaskStatusToggled {
        task_id: TaskId,
        status: TaskStatus,
    },
    SelectionChanged(Option<PersonId>),
    FilterChanged(PersonFilter),
}

/// Subscription handle returned by [`EntityStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&StoreEvent)>;

/// In-memory store owning people, tasks, and selection.
///
/// Single-threaded and fully synchronous: every command runs to completion
/// and its effect is visible before the caller proceeds. Subscribers are
/// invoked inside the command and must not re-enter the command surface.
#[derive(Default)]
pub struct EntityStore {
    people: Vec<Person>,
    tasks: Vec<Task>,
    selection: SelectionState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl EntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All people in insertion order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one person by id.
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    /// Looks up one task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Every task belonging to `person_id`, in insertion order.
    pub fn tasks_for_person(&self, person_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.person_id == person_id)
            .collect()
    }

    /// People visible under the given category scope, in insertion order.
    pub fn visible_people(&self, scope: SelectedCategory) -> Vec<&Person> {
        self.people
            .iter()
            .filter(|person| scope.matches(person.category))
            .collect()
    }

    /// Current selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Adds a person. Fails on id collision.
    pub fn add_person(&mut self, person: Person) -> StoreResult<()> {
        if self.person(&person.id).is_some() {
            return Err(StoreError::DuplicateId {
                kind: EntityKind::Person,
                id: person.id,
            });
        }
        debug!("event=person_added module=store id={}", person.id);
        let id = person.id.clone();
        self.people.push(person);
        self.notify(&StoreEvent::PersonAdded(id));
        Ok(())
    }

    /// Merges patch fields into an existing person.
    pub fn update_person(&mut self, id: &str, patch: PersonPatch) -> StoreResult<()> {
        let person = self
            .people
            .iter_mut()
            .find(|person| person.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: EntityKind::Person,
                id: id.to_string(),
            })?;
        patch.apply(person);
        debug!("event=person_updated module=store id={id}");
        self.notify(&StoreEvent::PersonUpdated(id.to_string()));
        Ok(())
    }

    /// Removes a person, cascades to their tasks, and clears a matching
    /// selection. All three effects land atomically before notification.
    pub fn remove_person(&mut self, id: &str) -> StoreResult<()> {
        let index = self
            .people
            .iter()
            .position(|person| person.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: EntityKind::Person,
                id: id.to_string(),
            })?;
        let person = self.people.remove(index);
        let removed_tasks: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|task| task.person_id == id)
            .map(|task| task.id.clone())
            .collect();
        self.tasks.retain(|task| task.person_id != id);
        let selection_cleared = self.selection.clear_if_selected(id);
        info!(
            "event=person_removed module=store id={} cascade_tasks={} selection_cleared={}",
            id,
            removed_tasks.len(),
            selection_cleared
        );
        self.notify(&StoreEvent::PersonRemoved {
            person_id: person.id,
            removed_tasks,
        });
        Ok(())
    }

    /// Adds a task. Fails on id collision or a dangling person reference.
    pub fn add_task(&mut self, task: Task) -> StoreResult<()> {
        if self.task(&task.id).is_some() {
            return Err(StoreError::DuplicateId {
                kind: EntityKind::Task,
                id: task.id,
            });
        }
        if self.person(&task.person_id).is_none() {
            return Err(StoreError::DanglingReference {
                task_id: task.id,
                person_id: task.person_id,
            });
        }
        debug!(
            "event=task_added module=store id={} person_id={}",
            task.id, task.person_id
        );
        let id = task.id.clone();
        self.tasks.push(task);
        self.notify(&StoreEvent::TaskAdded(id));
        Ok(())
    }

    /// Merges patch fields into an existing task.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> StoreResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: EntityKind::Task,
                id: id.to_string(),
            })?;
        patch.apply(task);
        debug!("event=task_updated module=store id={id}");
        self.notify(&StoreEvent::TaskUpdated(id.to_string()));
        Ok(())
    }

    /// Removes a task by id.
    pub fn remove_task(&mut self, id: &str) -> StoreResult<()> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: EntityKind::Task,
                id: id.to_string(),
            })?;
        self.tasks.remove(index);
        debug!("event=task_removed module=store id={id}");
        self.notify(&StoreEvent::TaskRemoved(id.to_string()));
        Ok(())
    }

    /// Two-state status toggle: `done` goes back to `pending`; `pending`
    /// and `in_progress` both collapse straight to `done`.
    pub fn toggle_task_status(&mut self, id: &str) -> StoreResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: EntityKind::Task,
                id: id.to_string(),
            })?;
        let next = if task.status == TaskStatus::Done {
            TaskStatus::Pending
        } else {
            TaskStatus::Done
        };
        task.status = next;
        debug!("event=task_toggled module=store id={id} status={next:?}");
        self.notify(&StoreEvent::TaskStatusToggled {
            task_id: id.to_string(),
            status: next,
        });
        Ok(())
    }

    /// Sets or clears the focused person.
    pub fn select_person(&mut self, id: Option<PersonId>) {
        self.selection.select_person(id.clone());
        self.notify(&StoreEvent::SelectionChanged(id));
    }

    /// Replaces the active per-person filter; selection is untouched.
    pub fn set_filter(&mut self, filter: PersonFilter) {
        self.selection.set_filter(filter);
        self.notify(&StoreEvent::FilterChanged(filter));
    }

    /// Registers a subscriber notified synchronously after every applied
    /// command. The callback must not re-enter the command surface.
    pub fn subscribe(&mut self, callback: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Drops a subscriber; reports whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, event: &StoreEvent) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }
}
