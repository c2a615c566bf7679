//! In-memory contact store.
//!
//! # Responsibility
//! - Own the ordered, duplicate-free person list and its mutations.
//! - Record undoable actions and apply their inverses.
//! - Compute the displayed view snapshot (filter, then sort) on demand.
//!
//! # Invariants
//! - No two value-equal persons coexist in the list.
//! - `add_person` and undo-of-delete reset the filter to show-all so the
//!   (re)appearing entry is visible; no other operation touches the filter.
//! - A history entry is popped only after its inverse mutation succeeded.

use crate::model::person::{Person, PersonValidationError};
use crate::store::history::{EditRecord, UndoHistory, UndoableAction};
use crate::store::view::{SortOrder, ViewFilter};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for mutation and undo operations.
///
/// A command layer that guards with [`ContactStore::has_person`] and
/// [`ContactStore::history_len`] never observes these at runtime; they mark
/// broken call sequences rather than expected user-facing conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(PersonValidationError),
    /// A value-equal person already exists.
    DuplicatePerson,
    /// The targeted person is not in the store.
    PersonNotFound,
    /// Undo was requested with no recorded action.
    EmptyHistory,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicatePerson => write!(f, "a value-equal person already exists"),
            Self::PersonNotFound => write!(f, "person not found in the store"),
            Self::EmptyHistory => write!(f, "undo history is empty"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersonValidationError> for StoreError {
    fn from(value: PersonValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Canonical in-memory model: person list, undo history, view settings.
///
/// Created once at startup from the persisted snapshot; lives for the
/// process lifetime; all mutation is synchronous and single-threaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactStore {
    persons: Vec<Person>,
    history: UndoHistory,
    sort_order: SortOrder,
    filter: ViewFilter,
}

impl Default for ContactStore {
    fn default() -> Self {
        Self {
            persons: Vec::new(),
            history: UndoHistory::new(),
            sort_order: SortOrder::default(),
            filter: ViewFilter::default(),
        }
    }
}

impl ContactStore {
    /// Creates a store from an initial snapshot with an explicit default
    /// sort order.
    ///
    /// # Errors
    /// - [`StoreError::Validation`] when a snapshot entry has an invalid
    ///   field shape.
    /// - [`StoreError::DuplicatePerson`] when the snapshot holds two
    ///   value-equal entries.
    pub fn new(initial: Vec<Person>, default_sort: SortOrder) -> StoreResult<Self> {
        let mut store = Self {
            sort_order: default_sort,
            ..Self::default()
        };
        for person in initial {
            person.validate()?;
            if store.has_person(&person) {
                return Err(StoreError::DuplicatePerson);
            }
            store.persons.push(person);
        }
        Ok(store)
    }

    /// True iff a value-equal person already exists.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    /// Read-only view of the canonical list, in insertion order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Appends a person, records the add, and resets the filter to
    /// show-all so the new entry is visible.
    ///
    /// # Errors
    /// - [`StoreError::Validation`] on invalid field shapes.
    /// - [`StoreError::DuplicatePerson`] when a value-equal person exists;
    ///   callers are expected to guard via [`ContactStore::has_person`].
    pub fn add_person(&mut self, person: Person) -> StoreResult<()> {
        person.validate()?;
        if self.has_person(&person) {
            return Err(StoreError::DuplicatePerson);
        }
        self.persons.push(person.clone());
        self.history.record(UndoableAction::Added(person));
        self.filter = ViewFilter::All;
        Ok(())
    }

    /// Removes the targeted person and records the delete.
    ///
    /// # Errors
    /// [`StoreError::PersonNotFound`] when no value-equal entry exists.
    pub fn delete_person(&mut self, target: &Person) -> StoreResult<()> {
        let removed = self.remove_raw(target)?;
        self.history.record(UndoableAction::Deleted(removed));
        Ok(())
    }

    /// Replaces `target` with `edited` in place, preserving list position.
    ///
    /// Does not record history by itself: the command layer records the
    /// before/after pair via [`ContactStore::record_edit`], keeping undo
    /// composition in one place.
    ///
    /// # Errors
    /// - [`StoreError::Validation`] when `edited` has an invalid shape.
    /// - [`StoreError::PersonNotFound`] when `target` is absent.
    /// - [`StoreError::DuplicatePerson`] when `edited` equals another
    ///   existing entry.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> StoreResult<()> {
        edited.validate()?;
        let index = self.index_of(target).ok_or(StoreError::PersonNotFound)?;
        if edited != *target && self.has_person(&edited) {
            return Err(StoreError::DuplicatePerson);
        }
        self.persons[index] = edited;
        Ok(())
    }

    /// Records one completed edit as an undoable action.
    pub fn record_edit(&mut self, record: EditRecord) {
        self.history.record(UndoableAction::Edited(record));
    }

    /// Applies the inverse of the most recent undoable action and returns
    /// the action that was undone.
    ///
    /// The entry is read first, the inverse attempted, and the entry
    /// removed only after the inverse succeeded; a failed undo leaves the
    /// history untouched. Undoing a delete re-adds the person at the end
    /// of the list and resets the filter to show-all.
    ///
    /// # Errors
    /// - [`StoreError::EmptyHistory`] when nothing was recorded; callers
    ///   guard via [`ContactStore::history_len`].
    /// - Inverse-mutation errors (`PersonNotFound`, `DuplicatePerson`)
    ///   when the store no longer matches the recorded action.
    pub fn undo_last(&mut self) -> StoreResult<UndoableAction> {
        let action = self
            .history
            .peek_last()
            .cloned()
            .ok_or(StoreError::EmptyHistory)?;

        match &action {
            UndoableAction::Added(person) => {
                self.remove_raw(person)?;
            }
            UndoableAction::Deleted(person) => {
                self.insert_raw(person.clone())?;
                self.filter = ViewFilter::All;
            }
            UndoableAction::Edited(record) => {
                let index = self
                    .index_of(&record.after)
                    .ok_or(StoreError::PersonNotFound)?;
                self.persons[index] = record.before.clone();
            }
        }

        self.history.remove_last();
        Ok(action)
    }

    /// Replaces the active filter. Sorting is untouched.
    pub fn set_filter(&mut self, filter: ViewFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    /// Replaces the active sort order. The filter is untouched.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Computes the displayed view: filter, then stable sort.
    ///
    /// Recomputed on every call so it always reflects the latest mutation;
    /// never cached, never mutates the canonical list.
    pub fn view(&self) -> Vec<Person> {
        let mut snapshot: Vec<Person> = self
            .persons
            .iter()
            .filter(|person| self.filter.matches(person))
            .cloned()
            .collect();
        snapshot.sort_by(|a, b| self.sort_order.compare(a, b));
        snapshot
    }

    // ----- history delegation ------------------------------------------

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn peek_undoable(&self) -> Option<&UndoableAction> {
        self.history.peek_last()
    }

    pub fn deleted_count(&self) -> usize {
        self.history.deleted_count()
    }

    pub fn added_count(&self) -> usize {
        self.history.added_count()
    }

    pub fn edited_count(&self) -> usize {
        self.history.edited_count()
    }

    /// Records the name of an executed undoable command.
    pub fn record_command(&mut self, name: impl Into<String>) {
        self.history.record_command(name);
    }

    pub fn command_count(&self) -> usize {
        self.history.command_count()
    }

    pub fn last_command(&self) -> Option<&str> {
        self.history.last_command()
    }

    pub fn remove_last_command(&mut self) -> Option<String> {
        self.history.remove_last_command()
    }

    /// Full-history frequency of the delete command name.
    pub fn count_delete_commands(&self) -> usize {
        self.history.count_delete_commands()
    }

    // ----- raw list edits, no history side effects ----------------------

    fn index_of(&self, target: &Person) -> Option<usize> {
        self.persons.iter().position(|person| person == target)
    }

    fn remove_raw(&mut self, target: &Person) -> StoreResult<Person> {
        let index = self.index_of(target).ok_or(StoreError::PersonNotFound)?;
        Ok(self.persons.remove(index))
    }

    fn insert_raw(&mut self, person: Person) -> StoreResult<()> {
        if self.has_person(&person) {
            return Err(StoreError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }
}
