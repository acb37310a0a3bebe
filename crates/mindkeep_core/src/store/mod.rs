//! Durable note storage.
//!
//! # Responsibility
//! - Define the single-slot persistence contract for the note collection.
//! - Provide the SQLite-backed implementation.
//!
//! # Invariants
//! - `load` is fail-soft: corrupt or missing durable data yields an empty
//!   collection, never an error.
//! - `save` overwrites the entire stored collection, no partial writes.

pub mod note_store;

pub use note_store::{NoteStore, SqliteNoteStore, StoreError, StoreResult, DEFAULT_SLOT};
