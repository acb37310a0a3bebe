use mindkeep_core::db::{open_db, open_db_in_memory};
use mindkeep_core::{Category, Note, NoteColor, NoteStore, SqliteNoteStore};

fn sample_notes() -> Vec<Note> {
    let mut with_times = Note::new("dentist", "friday appointment", 1_700_000_000_000);
    with_times.reminder_at = Some(1_700_000_060_000);
    with_times.due_at = Some(1_700_000_120_000);
    with_times.category = Category::Urgent;
    with_times.color = NoteColor::Pink;
    with_times.is_pinned = true;

    let mut private_note = Note::new("diary", "keep out", 1_700_000_001_000);
    private_note.is_private = true;
    private_note.category = Category::Private;

    let plain = Note::new("idea", "rust note core", 1_700_000_002_000);

    vec![with_times, private_note, plain]
}

#[test]
fn save_then_load_is_field_for_field_identical() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteNoteStore::new(conn);

    let notes = sample_notes();
    store.save(&notes).unwrap();

    let loaded = store.load();
    assert_eq!(loaded, notes);

    // Absent optional timestamps stay absent.
    assert!(loaded[2].reminder_at.is_none());
    assert!(loaded[2].due_at.is_none());
}

#[test]
fn missing_slot_loads_as_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteNoteStore::new(conn);
    assert!(store.load().is_empty());
}

#[test]
fn resave_overwrites_the_whole_slot() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteNoteStore::new(conn);

    store.save(&sample_notes()).unwrap();
    let shorter = vec![Note::new("only one", "", 7)];
    store.save(&shorter).unwrap();

    assert_eq!(store.load(), shorter);
}

#[test]
fn malformed_payload_loads_as_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO note_slots (slot, payload, updated_at) VALUES (?1, ?2, 0);",
        ["mindkeep_notes_v3", "{not json at all"],
    )
    .unwrap();

    let store = SqliteNoteStore::new(conn);
    assert!(store.load().is_empty());
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("notes.sqlite3");

    let notes = sample_notes();
    {
        let conn = open_db(&db_path).unwrap();
        let mut store = SqliteNoteStore::new(conn);
        store.save(&notes).unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let store = SqliteNoteStore::new(conn);
    assert_eq!(store.load(), notes);
}

#[test]
fn slots_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("notes.sqlite3");

    {
        let conn = open_db(&db_path).unwrap();
        let mut store = SqliteNoteStore::with_slot(conn, "slot_a");
        store.save(&sample_notes()).unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let other = SqliteNoteStore::with_slot(conn, "slot_b");
    assert!(other.load().is_empty());
}
