//! Side-effect ports for the scheduling engine.
//!
//! # Responsibility
//! - Define the capability seam between the engine and the host platform
//!   (notifications, audible alarm, haptics).
//! - Keep every effect best-effort: a refused effect degrades, never fails
//!   the engine.
//!
//! # Invariants
//! - The engine only talks to these traits; it never touches platform
//!   primitives directly.

use crate::model::note::NoteId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Haptic intensity vocabulary.
///
/// The mapping to concrete vibration patterns is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticCue {
    Light,
    Medium,
    Heavy,
    Success,
    Error,
}

/// Outbound notification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Source label shown as the notification title.
    pub title: String,
    /// Note title carried as the notification body.
    pub body: String,
}

/// Inbound message produced when the user acts on a delivered notification.
///
/// Delivered out-of-band by the notification channel; handling it is the
/// embedder's responsibility and equivalent to opening the note in-app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationAction {
    pub note_id: NoteId,
    pub action: String,
}

/// Failure modes of best-effort effect delivery.
#[derive(Debug)]
pub enum EffectError {
    /// The host refused permission for this effect.
    PermissionDenied,
    /// The capability is missing or failed to start.
    Unavailable(String),
}

impl Display for EffectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "effect permission denied by host"),
            Self::Unavailable(details) => write!(f, "effect unavailable: {details}"),
        }
    }
}

impl Error for EffectError {}

/// Host capabilities the scheduler invokes but does not implement.
pub trait EffectSink {
    /// Requests a notification. Best-effort, permission-gated, no delivery
    /// guarantee.
    fn notify(&mut self, request: &NotificationRequest) -> Result<(), EffectError>;

    /// Requests a haptic cue. Hosts without haptics simply ignore it.
    fn haptic(&mut self, cue: HapticCue);

    /// Requests audible alarm playback. Fire-and-forget.
    fn play_alarm(&mut self) -> Result<(), EffectError>;
}

/// Sink that drops every effect. Useful for headless sessions and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEffects;

impl EffectSink for NullEffects {
    fn notify(&mut self, _request: &NotificationRequest) -> Result<(), EffectError> {
        Ok(())
    }

    fn haptic(&mut self, _cue: HapticCue) {}

    fn play_alarm(&mut self) -> Result<(), EffectError> {
        Ok(())
    }
}
