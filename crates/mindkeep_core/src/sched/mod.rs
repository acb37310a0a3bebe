//! Reminder/alarm scheduling engine.
//!
//! # Responsibility
//! - Evaluate the note collection against wall-clock time on a fixed cadence.
//! - Fire each reminder/alarm event at most once per note per session.
//! - Hold the single currently-ringing alarm for the presentation layer.
//!
//! # Invariants
//! - Completed notes are never evaluated.
//! - Dedup membership is monotonic for the process lifetime and is not
//!   persisted; a restart re-arms still-due incomplete notes exactly once.

pub mod alarm_gate;
pub mod dedup;
pub mod scheduler;

pub use alarm_gate::AlarmGate;
pub use dedup::{DedupTracker, FireKind};
pub use scheduler::{now_epoch_ms, Scheduler, TickReport, TICK_INTERVAL};
