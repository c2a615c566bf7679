//! Core domain logic for cardbox.
//! This crate is the single source of truth for contact-list invariants.

pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{Person, PersonValidationError};
pub use search::keyword::{ApptKeywordPredicate, FilterParseError};
pub use service::contact_service::{ContactService, ContactServiceError, ServiceResult};
pub use store::contact_store::{ContactStore, StoreError, StoreResult};
pub use store::history::{EditRecord, UndoHistory, UndoableAction, DELETE_COMMAND};
pub use store::view::{SortOrder, ViewFilter};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
