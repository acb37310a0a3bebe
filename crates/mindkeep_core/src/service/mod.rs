//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep embedding layers decoupled from storage details.

pub mod note_service;

pub use note_service::{NoteDraft, NoteService, NoteServiceError};
