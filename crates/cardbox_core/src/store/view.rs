//! View ordering and filtering rules.
//!
//! # Responsibility
//! - Define the sort orders a view snapshot can be arranged by.
//! - Define the active filter applied before sorting.
//!
//! # Invariants
//! - Filtering and sorting are orthogonal; neither resets the other.
//! - The default order sorts by appointment date and is passed explicitly
//!   into the store constructor, never referenced through shared state.

use crate::model::person::Person;
use crate::search::keyword::ApptKeywordPredicate;
use std::cmp::Ordering;

/// Ordering rule for the displayed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Lexicographic on the string-typed appointment date, names breaking
    /// ties. This is the store's default order.
    #[default]
    AppointmentDate,
    /// Case-insensitive on name.
    Name,
}

impl SortOrder {
    pub fn compare(self, a: &Person, b: &Person) -> Ordering {
        match self {
            Self::AppointmentDate => a
                .appointment_date
                .cmp(&b.appointment_date)
                .then_with(|| compare_names(a, b)),
            Self::Name => compare_names(a, b),
        }
    }
}

fn compare_names(a: &Person, b: &Person) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Predicate applied to the person list before sorting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewFilter {
    /// Show every person; the default, restored on add and undo-of-delete.
    #[default]
    All,
    /// Keep only persons whose appointment date matches the keywords.
    ApptKeywords(ApptKeywordPredicate),
}

impl ViewFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::ApptKeywords(predicate) => predicate.matches(person),
        }
    }
}
