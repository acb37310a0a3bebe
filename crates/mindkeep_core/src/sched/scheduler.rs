//! Fixed-cadence scheduler loop.
//!
//! # Responsibility
//! - Compare every active note's reminder/due instants against the current
//!   time on each tick.
//! - Drive side effects through the effect sink, exactly once per note per
//!   session and channel.
//! - Own the alarm gate and its dismissal flow.
//!
//! # Invariants
//! - Crossings are detected by `now >= instant`, so an instant already in
//!   the past at the first evaluation still fires exactly once.
//! - Editing a note's instants after a fire does not re-arm it; dedup is
//!   keyed purely by note id.
//! - Effect refusals (notification, playback) are logged and swallowed;
//!   they never break the tick or keep the gate from being set.

use crate::effects::{EffectSink, HapticCue, NotificationRequest};
use crate::model::note::NoteId;
use crate::repo::NoteRepository;
use crate::sched::alarm_gate::AlarmGate;
use crate::sched::dedup::{DedupTracker, FireKind};
use crate::store::NoteStore;
use log::{debug, info, warn};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Evaluation cadence of the loop driver.
pub const TICK_INTERVAL: Duration = Duration::from_secs(5);

/// Notification source label.
const NOTIFICATION_TITLE: &str = "MindKeep";

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Loop drivers feed this into [`Scheduler::tick`]; tests pass fixed values.
pub fn now_epoch_ms() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        // Pre-epoch clocks only occur on badly misconfigured hosts; treating
        // them as epoch keeps every timestamp comparison well-defined.
        Err(_) => 0,
    }
}

/// Ids that newly fired during one tick.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub reminders: Vec<NoteId>,
    pub alarms: Vec<NoteId>,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty() && self.alarms.is_empty()
    }
}

/// Tick-driven reminder/alarm engine.
///
/// Owns the session-scoped dedup sets and the alarm gate. All methods run on
/// the single cooperative timeline; the caller serializes ticks, edits and
/// dismissals.
#[derive(Debug, Default)]
pub struct Scheduler {
    dedup: DedupTracker,
    gate: AlarmGate,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one evaluation pass over the collection.
    ///
    /// Reminder and alarm checks for one note are independent; both may fire
    /// in the same tick when both instants are newly crossed. Evaluation
    /// order across notes follows the repository snapshot.
    pub fn tick<S, E>(
        &mut self,
        repo: &NoteRepository<S>,
        effects: &mut E,
        now_ms: i64,
    ) -> TickReport
    where
        S: NoteStore,
        E: EffectSink,
    {
        let mut report = TickReport::default();

        for note in repo.notes() {
            if !note.is_schedulable() {
                continue;
            }

            if let Some(reminder_at) = note.reminder_at {
                if now_ms >= reminder_at && self.dedup.try_fire(FireKind::Reminder, note.id) {
                    let request = NotificationRequest {
                        title: NOTIFICATION_TITLE.to_string(),
                        body: note.title.clone(),
                    };
                    if let Err(err) = effects.notify(&request) {
                        debug!(
                            "event=notify module=sched status=refused note_id={} error={err}",
                            note.id
                        );
                    }
                    effects.haptic(HapticCue::Medium);
                    info!(
                        "event=reminder_fired module=sched status=ok note_id={} reminder_at={reminder_at}",
                        note.id
                    );
                    report.reminders.push(note.id);
                }
            }

            if let Some(due_at) = note.due_at {
                if now_ms >= due_at && self.dedup.try_fire(FireKind::Alarm, note.id) {
                    if !self.gate.present(note) {
                        // The fire is already recorded, so this alarm will
                        // never be shown this session.
                        warn!(
                            "event=alarm_suppressed module=sched status=dropped note_id={}",
                            note.id
                        );
                    }
                    effects.haptic(HapticCue::Error);
                    if let Err(err) = effects.play_alarm() {
                        debug!(
                            "event=alarm_playback module=sched status=refused note_id={} error={err}",
                            note.id
                        );
                    }
                    info!(
                        "event=alarm_fired module=sched status=ok note_id={} due_at={due_at}",
                        note.id
                    );
                    report.alarms.push(note.id);
                }
            }
        }

        report
    }

    /// The note currently held by the alarm gate, if any.
    pub fn active_alarm(&self) -> Option<&crate::model::note::Note> {
        self.gate.current()
    }

    /// Dismisses the currently ringing alarm.
    ///
    /// Marks the underlying note completed through the repository, then
    /// clears the gate. A dismiss with an empty gate is a no-op returning
    /// `Ok(None)`. The gate is cleared only after the repository accepts the
    /// completion, so a failed dismissal can be retried.
    pub fn dismiss<S, E>(
        &mut self,
        repo: &mut NoteRepository<S>,
        effects: &mut E,
    ) -> crate::repo::RepoResult<Option<NoteId>>
    where
        S: NoteStore,
        E: EffectSink,
    {
        let Some(id) = self.gate.current().map(|note| note.id) else {
            return Ok(None);
        };

        repo.mark_completed(id)?;
        self.gate.clear();
        effects.haptic(HapticCue::Success);
        info!("event=alarm_dismissed module=sched status=ok note_id={id}");
        Ok(Some(id))
    }
}
