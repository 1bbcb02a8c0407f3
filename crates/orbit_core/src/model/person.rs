//! Person domain model.
//!
//! # Responsibility
//! - Define the person record the orbit view projects as a planet.
//! - Provide patch semantics for partial person updates.
//!
//! # Invariants
//! - `id` is stable and never reused for another person.
//! - `relationship` and `category` are independent classifications.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a person.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = String;

/// Closed relationship classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Friend,
    Family,
    Coworker,
    Other,
}

/// Orbit grouping category, independent of [`Relationship`].
///
/// Used only for grouping and filtering in the orbit view; it never feeds
/// urgency or placement math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitCategory {
    Family,
    Work,
    School,
    Friends,
    Other,
}

/// Category scope for the orbit view: one category or everyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedCategory {
    All,
    Category(OrbitCategory),
}

impl SelectedCategory {
    /// Whether a person in `category` is visible under this scope.
    pub fn matches(self, category: OrbitCategory) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => selected == category,
        }
    }
}

/// A tracked person rendered as an orbiting planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable id used for task linkage and selection.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Opaque styling token consumed by the presentation layer.
    pub avatar_color: String,
    /// Closed relationship classification.
    pub relationship: Relationship,
    /// Grouping category for the orbit view.
    pub category: OrbitCategory,
    /// Reserved weighting input; not read by core algorithms yet.
    pub importance: i32,
}

impl Person {
    /// Creates a person with a generated stable id.
    pub fn new(
        name: impl Into<String>,
        avatar_color: impl Into<String>,
        relationship: Relationship,
        category: OrbitCategory,
        importance: i32,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            name,
            avatar_color,
            relationship,
            category,
            importance,
        )
    }

    /// Creates a person with a caller-provided stable id.
    ///
    /// Used by seed/import paths where identity already exists externally.
    pub fn with_id(
        id: impl Into<PersonId>,
        name: impl Into<String>,
        avatar_color: impl Into<String>,
        relationship: Relationship,
        category: OrbitCategory,
        importance: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_color: avatar_color.into(),
            relationship,
            category,
            importance,
        }
    }

    /// Up to two uppercase initials for the planet avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Sparse field patch for `update_person`.
///
/// `None` fields are left untouched; `Some` fields replace the current value
/// at top level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPatch {
    pub name: Option<String>,
    pub avatar_color: Option<String>,
    pub relationship: Option<Relationship>,
    pub category: Option<OrbitCategory>,
    pub importance: Option<i32>,
}

impl PersonPatch {
    /// Applies this patch field by field.
    pub fn apply(self, person: &mut Person) {
        if let Some(name) = self.name {
            person.name = name;
        }
        if let Some(avatar_color) = self.avatar_color {
            person.avatar_color = avatar_color;
        }
        if let Some(relationship) = self.relationship {
            person.relationship = relationship;
        }
        if let Some(category) = self.category {
            person.category = category;
        }
        if let Some(importance) = self.importance {
            person.importance = importance;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OrbitCategory, Person, Relationship};

    fn sample(name: &str) -> Person {
        Person::new(
            name,
            "bg-slate-500",
            Relationship::Friend,
            OrbitCategory::Friends,
            1,
        )
    }

    #[test]
    fn new_generates_unique_ids() {
        assert_ne!(sample("A").id, sample("A").id);
    }

    #[test]
    fn initials_take_at_most_two_words() {
        assert_eq!(sample("Sarah Chen").initials(), "SC");
        assert_eq!(sample("Mom").initials(), "M");
        assert_eq!(sample("Alex The Manager").initials(), "AT");
    }
}
