//! Single-slot note store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the whole note collection under one named slot.
//! - Keep serialization details inside the storage boundary.
//!
//! # Invariants
//! - Loads never propagate corruption; a malformed payload is logged and
//!   treated as an empty collection.
//! - Saves serialize every field of every note, including optional
//!   timestamp absence, so load-after-save is field-for-field identical.

use crate::db::DbError;
use crate::model::note::Note;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage slot holding the live collection.
///
/// Matches the original app's versioned storage key so a slot rename is an
/// explicit data migration, not an accident.
pub const DEFAULT_SLOT: &str = "mindkeep_notes_v3";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by store write paths. Reads are fail-soft and never error.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize note collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Durable persistence contract for the note collection.
pub trait NoteStore {
    /// Loads the stored collection.
    ///
    /// Fail-soft: a missing slot, unreadable row, or malformed payload
    /// yields an empty collection with a warning log.
    fn load(&self) -> Vec<Note>;

    /// Replaces the stored collection wholesale.
    fn save(&mut self, notes: &[Note]) -> StoreResult<()>;
}

/// SQLite-backed single-slot store.
pub struct SqliteNoteStore {
    conn: Connection,
    slot: String,
}

impl SqliteNoteStore {
    /// Wraps a migrated connection using the default slot name.
    pub fn new(conn: Connection) -> Self {
        Self::with_slot(conn, DEFAULT_SLOT)
    }

    /// Wraps a migrated connection using a caller-chosen slot name.
    pub fn with_slot(conn: Connection, slot: impl Into<String>) -> Self {
        Self {
            conn,
            slot: slot.into(),
        }
    }

    /// Returns the slot name this store reads and writes.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    fn read_payload(&self) -> StoreResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM note_slots WHERE slot = ?1;",
                [self.slot.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }
}

impl NoteStore for SqliteNoteStore {
    fn load(&self) -> Vec<Note> {
        let payload = match self.read_payload() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(
                    "event=store_load module=store status=error slot={} error={err}",
                    self.slot
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Note>>(&payload) {
            Ok(notes) => notes,
            Err(err) => {
                warn!(
                    "event=store_load module=store status=corrupt slot={} error={err}",
                    self.slot
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, notes: &[Note]) -> StoreResult<()> {
        let payload = serde_json::to_string(notes)?;
        self.conn.execute(
            "INSERT INTO note_slots (slot, payload, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(slot) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![self.slot.as_str(), payload],
        )?;
        Ok(())
    }
}
