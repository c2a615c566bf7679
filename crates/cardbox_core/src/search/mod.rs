//! Keyword search over appointment dates.
//!
//! # Responsibility
//! - Expose the reusable appointment-date keyword predicate.
//! - Keep the keyword parsing boundary inside core so blank input is
//!   rejected before a predicate exists.

pub mod keyword;
