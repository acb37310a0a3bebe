//! Core domain logic for MindKeep.
//! This crate is the single source of truth for scheduling and persistence
//! invariants; presentation layers stay behind the trait seams in
//! [`effects`] and [`suggest`].

pub mod db;
pub mod effects;
pub mod logging;
pub mod model;
pub mod repo;
pub mod sched;
pub mod service;
pub mod store;
pub mod suggest;
pub mod vault;
pub mod view;

pub use effects::{
    EffectError, EffectSink, HapticCue, NotificationAction, NotificationRequest, NullEffects,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Category, Note, NoteColor, NoteId, NoteValidationError};
pub use model::suggestion::SmartSuggestion;
pub use repo::{NoteRepository, RepoError, RepoResult};
pub use sched::{
    now_epoch_ms, AlarmGate, DedupTracker, FireKind, Scheduler, TickReport, TICK_INTERVAL,
};
pub use service::{NoteDraft, NoteService, NoteServiceError};
pub use store::{NoteStore, SqliteNoteStore, StoreError, StoreResult, DEFAULT_SLOT};
pub use suggest::{fallback_suggestion, suggest_or_fallback, SuggestionError, SuggestionProvider};
pub use vault::{PinOutcome, VaultGate, VaultPin, VaultPinError, PIN_LENGTH};
pub use view::{partition_pinned, project, ViewQuery, ViewTab};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
