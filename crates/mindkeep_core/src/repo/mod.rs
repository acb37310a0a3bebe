//! Repository layer over the in-memory note collection.
//!
//! # Responsibility
//! - Own the authoritative collection for the running session.
//! - Write every mutation through to the durable store.
//!
//! # Invariants
//! - Exactly one note per id at any time.
//! - Exactly one store save per mutation; a failed save is logged and the
//!   in-memory state remains authoritative.

pub mod note_repo;

pub use note_repo::{NoteRepository, RepoError, RepoResult};
