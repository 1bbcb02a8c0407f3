//! Focused-person and active-filter state.
//!
//! # Responsibility
//! - Hold the currently focused person and the active per-person filter.
//!
//! # Invariants
//! - Selection never points at a removed person; the store clears it as part
//!   of cascade removal.
//! - Changing the filter has no effect on the selection.

use crate::model::person::PersonId;
use crate::query::PersonFilter;

/// View-selection state owned by the store.
///
/// A non-empty selection is the presentation layer's cue to switch into the
/// per-person view; the core only records it. Mutation goes through the
/// store command surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_person: Option<PersonId>,
    active_filter: PersonFilter,
}

impl SelectionState {
    /// Currently focused person, if any.
    pub fn selected_person(&self) -> Option<&str> {
        self.selected_person.as_deref()
    }

    /// Active per-person filter.
    pub fn active_filter(&self) -> PersonFilter {
        self.active_filter
    }

    pub(crate) fn select_person(&mut self, id: Option<PersonId>) {
        self.selected_person = id;
    }

    pub(crate) fn set_filter(&mut self, filter: PersonFilter) {
        self.active_filter = filter;
    }

    /// Clears the selection when it points at `id`; reports whether it did.
    pub(crate) fn clear_if_selected(&mut self, id: &str) -> bool {
        if self.selected_person.as_deref() == Some(id) {
            self.selected_person = None;
            return true;
        }
        false
    }
}
