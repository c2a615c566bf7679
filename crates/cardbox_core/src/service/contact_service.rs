//! Contact command service.
//!
//! # Responsibility
//! - Execute user commands against the store with the guard checks the
//!   store contract requires (existence, duplicates, history size).
//! - Record command names alongside mutations so history queries stay
//!   consistent with the undo stack.
//!
//! # Invariants
//! - Usage/format errors mutate nothing.
//! - A command name is recorded iff its mutation succeeded.
//! - Undo removes the command-name entry only after the inverse succeeded.

use crate::model::person::Person;
use crate::search::keyword::{ApptKeywordPredicate, FilterParseError};
use crate::store::contact_store::{ContactStore, StoreError};
use crate::store::history::{EditRecord, UndoableAction, DELETE_COMMAND};
use crate::store::view::{SortOrder, ViewFilter};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

const ADD_COMMAND: &str = "add";
const EDIT_COMMAND: &str = "edit";

pub type ServiceResult<T> = Result<T, ContactServiceError>;

/// Command-layer error surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactServiceError {
    /// Malformed or empty command arguments; carries guidance text.
    Usage(String),
    /// The contact to add already exists.
    DuplicatePerson,
    /// The targeted contact is not in the current list.
    PersonNotFound,
    /// Undo requested with no undoable command recorded.
    NothingToUndo,
    /// Store contract breach that guards did not anticipate.
    Store(StoreError),
}

impl Display for ContactServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage(message) => write!(f, "{message}"),
            Self::DuplicatePerson => write!(f, "this contact already exists"),
            Self::PersonNotFound => write!(f, "no such contact in the list"),
            Self::NothingToUndo => write!(f, "there is nothing to undo"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContactServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ContactServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::DuplicatePerson => Self::DuplicatePerson,
            StoreError::PersonNotFound => Self::PersonNotFound,
            StoreError::EmptyHistory => Self::NothingToUndo,
            other => Self::Store(other),
        }
    }
}

impl From<FilterParseError> for ContactServiceError {
    fn from(value: FilterParseError) -> Self {
        Self::Usage(value.to_string())
    }
}

/// Guarded command facade over [`ContactStore`].
pub struct ContactService {
    store: ContactStore,
}

impl ContactService {
    /// Wraps a store loaded by the external persistence collaborator.
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }

    /// Starts from an empty store with the default sort order.
    pub fn empty() -> Self {
        Self::new(ContactStore::default())
    }

    /// Read access for presentation or save boundaries.
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Adds a contact, guarding against duplicates first.
    pub fn add(&mut self, person: Person) -> ServiceResult<()> {
        if self.store.has_person(&person) {
            return Err(ContactServiceError::DuplicatePerson);
        }
        self.store.add_person(person)?;
        self.store.record_command(ADD_COMMAND);
        info!(
            "event=contact_added module=service status=ok list_size={}",
            self.store.len()
        );
        Ok(())
    }

    /// Deletes a contact, guarding on existence first.
    pub fn delete(&mut self, target: &Person) -> ServiceResult<()> {
        if !self.store.has_person(target) {
            return Err(ContactServiceError::PersonNotFound);
        }
        self.store.delete_person(target)?;
        self.store.record_command(DELETE_COMMAND);
        info!(
            "event=contact_deleted module=service status=ok list_size={} delete_total={}",
            self.store.len(),
            self.store.count_delete_commands()
        );
        Ok(())
    }

    /// Replaces `target` with `edited` in place and records the pair so
    /// the edit can be undone.
    pub fn edit(&mut self, target: &Person, edited: Person) -> ServiceResult<()> {
        if !self.store.has_person(target) {
            return Err(ContactServiceError::PersonNotFound);
        }
        self.store.set_person(target, edited.clone())?;
        self.store.record_edit(EditRecord {
            before: target.clone(),
            after: edited,
        });
        self.store.record_command(EDIT_COMMAND);
        info!("event=contact_edited module=service status=ok");
        Ok(())
    }

    /// Parses calendar filter arguments and installs the keyword filter.
    ///
    /// # Errors
    /// [`ContactServiceError::Usage`] on blank arguments; the view is left
    /// unchanged in that case.
    pub fn filter_by_calendar(&mut self, args: &str) -> ServiceResult<()> {
        let predicate = ApptKeywordPredicate::parse(args)?;
        let keyword_count = predicate.keywords().len();
        self.store.set_filter(ViewFilter::ApptKeywords(predicate));
        info!(
            "event=filter_applied module=service status=ok keywords={keyword_count} shown={}",
            self.store.view().len()
        );
        Ok(())
    }

    /// Clears the active filter back to show-all.
    pub fn show_all(&mut self) {
        self.store.set_filter(ViewFilter::All);
    }

    /// Replaces the view sort order.
    pub fn sort_by(&mut self, order: SortOrder) {
        self.store.set_sort_order(order);
        info!("event=sort_changed module=service status=ok");
    }

    /// Undoes the most recent undoable command.
    ///
    /// Checks the history size before touching the stack, applies the
    /// inverse, then drops the matching command-name entry. Every service
    /// command records exactly one name per action, so the entry must
    /// exist; callers that push actions through the raw store API break
    /// that pairing and are not supported here.
    pub fn undo(&mut self) -> ServiceResult<UndoableAction> {
        if self.store.history_len() == 0 {
            return Err(ContactServiceError::NothingToUndo);
        }
        let undone = self.store.undo_last()?;
        let paired_name = self.store.remove_last_command();
        debug_assert!(
            paired_name.is_some(),
            "undo history and command names must stay paired one-to-one"
        );
        info!(
            "event=undo_applied module=service status=ok kind={} remaining={}",
            undone.kind(),
            self.store.history_len()
        );
        Ok(undone)
    }

    /// Total number of delete commands recorded so far (full history).
    pub fn delete_count(&self) -> usize {
        self.store.count_delete_commands()
    }

    /// Current view snapshot for the presentation layer.
    pub fn view(&self) -> Vec<Person> {
        self.store.view()
    }
}
