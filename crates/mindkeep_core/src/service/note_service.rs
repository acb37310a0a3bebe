//! Editor use-case service.
//!
//! # Responsibility
//! - Turn transient editor drafts into persisted notes.
//! - Apply the save-time normalization rules (title defaulting, private
//!   category forcing).
//!
//! # Invariants
//! - A draft with blank title and blank content is never persisted.
//! - `is_private` forces `Category::Private` at save time, overriding any
//!   category carried by the draft.
//! - Saving refreshes `updated_at`; editing keeps the note's id.

use crate::model::note::{Category, Note, NoteColor, NoteId};
use crate::model::suggestion::SmartSuggestion;
use crate::repo::{NoteRepository, RepoError};
use crate::store::NoteStore;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const DEFAULT_TITLE: &str = "Untitled";

/// Transient working copy held by the editor.
///
/// `id` present means editing an existing note; absent means creating one.
/// The repository owns the canonical record; a draft is merged back only
/// through [`NoteService::save_draft`].
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub color: NoteColor,
    pub reminder_at: Option<i64>,
    pub due_at: Option<i64>,
    pub is_completed: bool,
    pub is_private: bool,
    pub is_pinned: bool,
}

impl NoteDraft {
    /// Blank draft for a new note.
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank draft started from the vault view: private from the outset.
    pub fn for_vault() -> Self {
        Self {
            category: Category::Private,
            is_private: true,
            ..Self::default()
        }
    }

    /// Working copy of an existing note.
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: Some(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
            category: note.category,
            color: note.color,
            reminder_at: note.reminder_at,
            due_at: note.due_at,
            is_completed: note.is_completed,
            is_private: note.is_private,
            is_pinned: note.is_pinned,
        }
    }

    /// Merges a smart suggestion into the draft.
    ///
    /// Only title, category and color are taken; the summary is advisory
    /// and privacy is untouched.
    pub fn apply_suggestion(&mut self, suggestion: &SmartSuggestion) {
        self.title = suggestion.title.clone();
        self.category = suggestion.category;
        self.color = suggestion.color;
    }
}

/// Editor-flow errors.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Draft has neither title nor content.
    EmptyDraft,
    /// Persistence-layer rejection.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDraft => write!(f, "draft has neither title nor content"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyDraft => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case facade owning the repository.
pub struct NoteService<S: NoteStore> {
    repo: NoteRepository<S>,
}

impl<S: NoteStore> NoteService<S> {
    pub fn new(repo: NoteRepository<S>) -> Self {
        Self { repo }
    }

    /// Read access for projections and the scheduler tick.
    pub fn repository(&self) -> &NoteRepository<S> {
        &self.repo
    }

    /// Mutable access for dismissal and direct toggles.
    pub fn repository_mut(&mut self) -> &mut NoteRepository<S> {
        &mut self.repo
    }

    /// Persists a draft, creating or replacing as its id dictates.
    ///
    /// Normalization: blank title becomes `"Untitled"`, the private flag
    /// forces the private category, and `updated_at` is set to `now_ms`.
    pub fn save_draft(
        &mut self,
        draft: NoteDraft,
        now_ms: i64,
    ) -> Result<NoteId, NoteServiceError> {
        if draft.title.trim().is_empty() && draft.content.trim().is_empty() {
            return Err(NoteServiceError::EmptyDraft);
        }

        let title = if draft.title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            draft.title
        };
        let category = if draft.is_private {
            Category::Private
        } else {
            draft.category
        };

        let editing = draft.id;
        let note = Note {
            id: editing.unwrap_or_else(Uuid::new_v4),
            title,
            content: draft.content,
            category,
            color: draft.color,
            reminder_at: draft.reminder_at,
            due_at: draft.due_at,
            is_completed: draft.is_completed,
            is_private: draft.is_private,
            is_pinned: draft.is_pinned,
            updated_at: now_ms,
        };
        let id = note.id;

        match editing {
            Some(_) => self.repo.replace(note)?,
            None => {
                self.repo.insert(note)?;
            }
        }
        Ok(id)
    }

    /// Pin toggle passthrough.
    pub fn toggle_pin(&mut self, id: NoteId) -> Result<bool, NoteServiceError> {
        Ok(self.repo.toggle_pin(id)?)
    }

    /// Completion passthrough.
    pub fn mark_completed(&mut self, id: NoteId) -> Result<(), NoteServiceError> {
        Ok(self.repo.mark_completed(id)?)
    }
}
