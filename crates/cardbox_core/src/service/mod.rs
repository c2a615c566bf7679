//! Command-layer services.
//!
//! # Responsibility
//! - Orchestrate store mutations into guarded, user-facing commands.
//! - Keep presentation layers decoupled from store contract details.

pub mod contact_service;
