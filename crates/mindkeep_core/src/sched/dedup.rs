//! Session-scoped duplicate-fire protection.
//!
//! # Responsibility
//! - Remember which note ids already fired a reminder or an alarm in this
//!   process.
//!
//! # Invariants
//! - Membership is monotonic: once an id is recorded it stays recorded until
//!   the process exits. The sets are deliberately not persisted.

use crate::model::note::NoteId;
use std::collections::HashSet;

/// The two independent event channels tracked per note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireKind {
    Reminder,
    Alarm,
}

/// Membership sets preventing re-delivery of an already-handled event.
#[derive(Debug, Default)]
pub struct DedupTracker {
    reminded: HashSet<NoteId>,
    alarmed: HashSet<NoteId>,
}

impl DedupTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the event and reports whether this was its first occurrence.
    ///
    /// Returns `true` exactly once per `(kind, id)` pair per process
    /// lifetime; the caller must only perform the side effect on `true`.
    pub fn try_fire(&mut self, kind: FireKind, id: NoteId) -> bool {
        self.set_mut(kind).insert(id)
    }

    /// Reports whether the event already fired this session.
    pub fn has_fired(&self, kind: FireKind, id: NoteId) -> bool {
        match kind {
            FireKind::Reminder => self.reminded.contains(&id),
            FireKind::Alarm => self.alarmed.contains(&id),
        }
    }

    fn set_mut(&mut self, kind: FireKind) -> &mut HashSet<NoteId> {
        match kind {
            FireKind::Reminder => &mut self.reminded,
            FireKind::Alarm => &mut self.alarmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DedupTracker, FireKind};
    use uuid::Uuid;

    #[test]
    fn first_fire_succeeds_then_blocks() {
        let mut tracker = DedupTracker::new();
        let id = Uuid::new_v4();

        assert!(tracker.try_fire(FireKind::Reminder, id));
        assert!(!tracker.try_fire(FireKind::Reminder, id));
        assert!(tracker.has_fired(FireKind::Reminder, id));
    }

    #[test]
    fn channels_are_independent() {
        let mut tracker = DedupTracker::new();
        let id = Uuid::new_v4();

        assert!(tracker.try_fire(FireKind::Reminder, id));
        assert!(tracker.try_fire(FireKind::Alarm, id));
        assert!(!tracker.try_fire(FireKind::Alarm, id));
    }
}
