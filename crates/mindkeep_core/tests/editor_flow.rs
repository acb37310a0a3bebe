use mindkeep_core::db::open_db_in_memory;
use mindkeep_core::{
    Category, NoteColor, NoteDraft, NoteRepository, NoteService, NoteServiceError, SmartSuggestion,
    SqliteNoteStore,
};

const NOW: i64 = 1_700_000_000_000;

fn service() -> NoteService<SqliteNoteStore> {
    let conn = open_db_in_memory().unwrap();
    NoteService::new(NoteRepository::load(SqliteNoteStore::new(conn)))
}

#[test]
fn blank_draft_is_rejected() {
    let mut service = service();
    let mut draft = NoteDraft::new();
    draft.title = "   ".to_string();

    let err = service.save_draft(draft, NOW).unwrap_err();
    assert!(matches!(err, NoteServiceError::EmptyDraft));
    assert!(service.repository().notes().is_empty());
}

#[test]
fn blank_title_defaults_to_untitled() {
    let mut service = service();
    let mut draft = NoteDraft::new();
    draft.content = "body only".to_string();

    let id = service.save_draft(draft, NOW).unwrap();
    let note = service.repository().get(id).unwrap();
    assert_eq!(note.title, "Untitled");
    assert_eq!(note.content, "body only");
    assert_eq!(note.updated_at, NOW);
}

#[test]
fn private_flag_forces_private_category() {
    let mut service = service();
    let mut draft = NoteDraft::new();
    draft.title = "secret".to_string();
    draft.category = Category::Work;
    draft.is_private = true;

    let id = service.save_draft(draft, NOW).unwrap();
    let note = service.repository().get(id).unwrap();
    assert_eq!(note.category, Category::Private);
    assert!(note.is_private);
}

#[test]
fn vault_draft_starts_private() {
    let draft = NoteDraft::for_vault();
    assert!(draft.is_private);
    assert_eq!(draft.category, Category::Private);
}

#[test]
fn create_prepends_and_edit_keeps_identity() {
    let mut service = service();

    let mut first = NoteDraft::new();
    first.title = "first".to_string();
    let first_id = service.save_draft(first, NOW).unwrap();

    let mut second = NoteDraft::new();
    second.title = "second".to_string();
    let second_id = service.save_draft(second, NOW + 1).unwrap();

    let ids: Vec<_> = service.repository().notes().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![second_id, first_id]);

    // Editing goes through a draft of the existing note.
    let mut edit = NoteDraft::from_note(service.repository().get(first_id).unwrap());
    edit.content = "revised".to_string();
    edit.due_at = Some(NOW + 60_000);
    let edited_id = service.save_draft(edit, NOW + 2).unwrap();

    assert_eq!(edited_id, first_id);
    let note = service.repository().get(first_id).unwrap();
    assert_eq!(note.content, "revised");
    assert_eq!(note.due_at, Some(NOW + 60_000));
    assert_eq!(note.updated_at, NOW + 2);
    assert_eq!(service.repository().notes().len(), 2);
}

#[test]
fn apply_suggestion_merges_enrichment_fields_only() {
    let mut draft = NoteDraft::new();
    draft.content = "plan the offsite agenda".to_string();
    draft.is_private = false;

    let suggestion = SmartSuggestion {
        title: "Offsite agenda".to_string(),
        category: Category::Work,
        summary: "Planning for the offsite.".to_string(),
        color: NoteColor::Blue,
    };
    draft.apply_suggestion(&suggestion);

    assert_eq!(draft.title, "Offsite agenda");
    assert_eq!(draft.category, Category::Work);
    assert_eq!(draft.color, NoteColor::Blue);
    assert_eq!(draft.content, "plan the offsite agenda");
    assert!(!draft.is_private);
}

#[test]
fn toggles_pass_through_to_the_repository() {
    let mut service = service();
    let mut draft = NoteDraft::new();
    draft.title = "toggle me".to_string();
    let id = service.save_draft(draft, NOW).unwrap();

    assert!(service.toggle_pin(id).unwrap());
    service.mark_completed(id).unwrap();
    let note = service.repository().get(id).unwrap();
    assert!(note.is_pinned);
    assert!(note.is_completed);
}
