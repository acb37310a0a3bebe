//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the canonical `Note` record and its closed enumerations.
//! - Define the smart-suggestion read model.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - `is_completed` is the terminal state for scheduling purposes.

pub mod note;
pub mod suggestion;
