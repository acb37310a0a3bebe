//! Smart-suggestion read model.
//!
//! The suggestion backend is an external collaborator; this record is the
//! typed shape of what it returns. It never influences scheduling.

use crate::model::note::{Category, NoteColor};

/// Enrichment proposal for a draft, produced from note content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartSuggestion {
    /// Proposed title.
    pub title: String,
    /// Best-fit category. Never `Private`; privacy is a user decision.
    pub category: Category,
    /// One-sentence summary. Advisory only, not stored on the note.
    pub summary: String,
    /// Proposed sticky color.
    pub color: NoteColor,
}
