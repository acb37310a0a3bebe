//! In-memory note repository with store write-through.
//!
//! # Responsibility
//! - Hold the canonical mutable note collection for the session.
//! - Validate writes and persist the full collection after each mutation.
//!
//! # Invariants
//! - `insert` rejects duplicate ids; `replace` targets an existing id.
//! - Each mutation changes exactly the targeted note and leaves every other
//!   note untouched.
//! - Store save failures never abort a mutation; the session state stays
//!   authoritative and the failure is logged.

use crate::model::note::{Note, NoteId, NoteValidationError};
use crate::store::NoteStore;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic errors for repository mutations.
///
/// Storage transport failures are intentionally absent: the store is
/// best-effort and its failures are swallowed after logging.
#[derive(Debug)]
pub enum RepoError {
    Validation(NoteValidationError),
    DuplicateId(NoteId),
    NotFound(NoteId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "note id already present: {id}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Authoritative in-memory note collection with write-through persistence.
pub struct NoteRepository<S: NoteStore> {
    notes: Vec<Note>,
    store: S,
}

impl<S: NoteStore> NoteRepository<S> {
    /// Loads the session collection from the store.
    ///
    /// Invoked once at startup; the store's fail-soft contract means a
    /// corrupt slot starts the session empty rather than failing.
    pub fn load(store: S) -> Self {
        let notes = store.load();
        info!(
            "event=repo_load module=repo status=ok note_count={}",
            notes.len()
        );
        Self { notes, store }
    }

    /// Current snapshot in display order (newest first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up one note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Inserts a new note at the front of the collection.
    pub fn insert(&mut self, note: Note) -> RepoResult<NoteId> {
        note.validate()?;
        if self.get(note.id).is_some() {
            return Err(RepoError::DuplicateId(note.id));
        }

        let id = note.id;
        self.notes.insert(0, note);
        self.persist();
        Ok(id)
    }

    /// Replaces an existing note in place, keeping its position.
    pub fn replace(&mut self, note: Note) -> RepoResult<()> {
        note.validate()?;
        let slot = self
            .notes
            .iter_mut()
            .find(|existing| existing.id == note.id)
            .ok_or(RepoError::NotFound(note.id))?;

        *slot = note;
        self.persist();
        Ok(())
    }

    /// Flips the pin flag and returns the new state.
    pub fn toggle_pin(&mut self, id: NoteId) -> RepoResult<bool> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(RepoError::NotFound(id))?;

        note.is_pinned = !note.is_pinned;
        let pinned = note.is_pinned;
        self.persist();
        Ok(pinned)
    }

    /// Marks a note completed, excluding it from all future scheduling.
    pub fn mark_completed(&mut self, id: NoteId) -> RepoResult<()> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(RepoError::NotFound(id))?;

        note.is_completed = true;
        self.persist();
        Ok(())
    }

    // One call per mutation. Failure leaves the in-memory collection as the
    // authority for the rest of the session.
    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.notes) {
            error!(
                "event=store_save module=repo status=error note_count={} error={err}",
                self.notes.len()
            );
        }
    }
}
