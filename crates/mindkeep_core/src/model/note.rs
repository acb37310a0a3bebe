//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared by storage, scheduling and views.
//! - Enforce the persistence-eligibility rules on write paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - A note with both `title` and `content` blank is not persistable.
//! - `is_private == true` requires `category == Category::Private`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Closed category enumeration for notes.
///
/// `Private` is not user-assignable independently of the privacy flag; save
/// paths force it whenever `is_private` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Work,
    Personal,
    Idea,
    Urgent,
    #[default]
    General,
    Private,
}

/// Sticky-note background color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteColor {
    #[default]
    Yellow,
    Pink,
    Blue,
    Green,
    Orange,
    Purple,
}

/// Canonical note record.
///
/// Scheduling reads `reminder_at`/`due_at`/`is_completed`; everything else is
/// display metadata that must still round-trip through the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID assigned at creation.
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub color: NoteColor,
    /// Soft reminder instant in Unix epoch milliseconds. Absent = no reminder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_at: Option<i64>,
    /// Hard alarm instant in Unix epoch milliseconds. Absent = no alarm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<i64>,
    /// Terminal for scheduling: completed notes never fire again.
    pub is_completed: bool,
    /// Gates visibility behind the vault and forces `Category::Private`.
    pub is_private: bool,
    /// Affects display ordering only, never scheduling.
    pub is_pinned: bool,
    /// Creation/last-save instant in Unix epoch milliseconds. Recency only.
    pub updated_at: i64,
}

impl Note {
    /// Creates a note with a generated stable ID and default metadata.
    pub fn new(title: impl Into<String>, content: impl Into<String>, saved_at_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            category: Category::General,
            color: NoteColor::default(),
            reminder_at: None,
            due_at: None,
            is_completed: false,
            is_private: false,
            is_pinned: false,
            updated_at: saved_at_ms,
        }
    }

    /// Checks persistence eligibility rules.
    ///
    /// # Errors
    /// - [`NoteValidationError::EmptyNote`] when both text fields are blank.
    /// - [`NoteValidationError::PrivateCategoryMismatch`] when the privacy
    ///   flag and the category disagree.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.title.trim().is_empty() && self.content.trim().is_empty() {
            return Err(NoteValidationError::EmptyNote(self.id));
        }
        if self.is_private && self.category != Category::Private {
            return Err(NoteValidationError::PrivateCategoryMismatch(self.id));
        }
        Ok(())
    }

    /// Returns whether the scheduler should evaluate this note at all.
    pub fn is_schedulable(&self) -> bool {
        !self.is_completed
    }
}

/// Validation failures raised on repository write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Both `title` and `content` are blank.
    EmptyNote(NoteId),
    /// `is_private` is set but the category is not `Private`.
    PrivateCategoryMismatch(NoteId),
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNote(id) => {
                write!(f, "note {id} has neither title nor content")
            }
            Self::PrivateCategoryMismatch(id) => {
                write!(f, "private note {id} must use the private category")
            }
        }
    }
}

impl Error for NoteValidationError {}
