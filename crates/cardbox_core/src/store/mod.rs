//! In-memory contact store and undo bookkeeping.
//!
//! # Responsibility
//! - Own the canonical ordered person list and its mutation entry points.
//! - Track undoable actions and command names for history queries.
//! - Derive the displayed view (filter, then sort) on demand.
//!
//! # Invariants
//! - The person list never holds two value-equal entries.
//! - Every mutation is one logical step; there is no partial state to
//!   recover from.
//! - History entries are removed only after their inverse succeeded.

pub mod contact_store;
pub mod history;
pub mod view;
