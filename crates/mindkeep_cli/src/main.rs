//! Console entry point.
//!
//! # Responsibility
//! - Wire the file-backed store, repository and scheduler together.
//! - Drive the tick loop for the lifetime of the process.
//!
//! Usage: `mindkeep [db-path]`. The database path defaults to
//! `mindkeep.sqlite3` in the working directory; `MINDKEEP_LOG_DIR` overrides
//! where rolling logs are written.

use mindkeep_core::db::open_db;
use mindkeep_core::{
    default_log_level, init_logging, now_epoch_ms, EffectError, EffectSink, HapticCue,
    NoteRepository, NotificationRequest, Scheduler, SqliteNoteStore, TICK_INTERVAL,
};
use std::error::Error;

/// Effect sink that renders engine requests on the console.
struct ConsoleEffects;

impl EffectSink for ConsoleEffects {
    fn notify(&mut self, request: &NotificationRequest) -> Result<(), EffectError> {
        println!("[{}] reminder: {}", request.title, request.body);
        Ok(())
    }

    fn haptic(&mut self, _cue: HapticCue) {}

    fn play_alarm(&mut self) -> Result<(), EffectError> {
        // Terminal bell stands in for the alarm sound.
        print!("\x07");
        Ok(())
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("mindkeep: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let log_dir = std::env::var("MINDKEEP_LOG_DIR")
        .map(Into::into)
        .unwrap_or_else(|_| std::env::temp_dir().join("mindkeep-logs"));
    init_logging(default_log_level(), &log_dir.to_string_lossy())?;

    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mindkeep.sqlite3".to_string());
    let conn = open_db(&db_path)?;
    let mut repo = NoteRepository::load(SqliteNoteStore::new(conn));
    println!(
        "mindkeep {} | {} note(s) loaded from {db_path}",
        mindkeep_core::core_version(),
        repo.notes().len()
    );

    let mut scheduler = Scheduler::new();
    let mut effects = ConsoleEffects;
    loop {
        let report = scheduler.tick(&repo, &mut effects, now_epoch_ms());
        if let Some(alarm) = scheduler.active_alarm() {
            // Headless stand-in for the full-screen alert: show it once,
            // then dismiss so the note completes and the gate frees up.
            println!("ALERT: {} - {}", alarm.title, alarm.content);
            scheduler.dismiss(&mut repo, &mut effects)?;
        }
        if !report.is_empty() {
            log::info!(
                "event=tick module=cli status=ok reminders={} alarms={}",
                report.reminders.len(),
                report.alarms.len()
            );
        }
        std::thread::sleep(TICK_INTERVAL);
    }
}
