//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical person record used by store, search and view.
//! - Enforce field shape rules before any store mutation.
//!
//! # Invariants
//! - A person is identified by value equality over all observable fields;
//!   there is no surrogate ID.
//! - A constructed `Person` is never mutated in place; edits build a new
//!   value.

pub mod person;
