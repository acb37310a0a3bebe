//! Read-side projections over the note collection.
//!
//! # Responsibility
//! - Filter the repository snapshot per tab and free-text search.
//! - Split a projection into pinned/unpinned display sections.
//!
//! # Invariants
//! - Projections never mutate stored state.
//! - The vault tab yields nothing while the gate is locked.

use crate::model::note::Note;

/// The three list views of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTab {
    /// Non-private notes.
    Home,
    /// Notes with a due instant that are not yet completed.
    Calendar,
    /// Private notes, visible only through an unlocked vault gate.
    Vault,
}

/// One view request: tab, search text and current vault state.
#[derive(Debug, Clone)]
pub struct ViewQuery {
    pub tab: ViewTab,
    /// Case-insensitive substring matched against title and content.
    /// Blank matches everything.
    pub search: String,
    pub vault_unlocked: bool,
}

impl ViewQuery {
    pub fn new(tab: ViewTab) -> Self {
        Self {
            tab,
            search: String::new(),
            vault_unlocked: false,
        }
    }
}

/// Projects the snapshot for one view.
///
/// Pure read: returns references in snapshot order.
pub fn project<'a>(notes: &'a [Note], query: &ViewQuery) -> Vec<&'a Note> {
    if query.tab == ViewTab::Vault && !query.vault_unlocked {
        return Vec::new();
    }

    notes
        .iter()
        .filter(|note| matches_tab(note, query.tab))
        .filter(|note| matches_search(note, &query.search))
        .collect()
}

/// Splits a projection into (pinned, unpinned), preserving order.
///
/// Pins affect display ordering only, never scheduling.
pub fn partition_pinned<'a>(notes: &[&'a Note]) -> (Vec<&'a Note>, Vec<&'a Note>) {
    notes.iter().copied().partition(|note| note.is_pinned)
}

fn matches_tab(note: &Note, tab: ViewTab) -> bool {
    match tab {
        ViewTab::Home => !note.is_private,
        ViewTab::Calendar => note.due_at.is_some() && !note.is_completed,
        ViewTab::Vault => note.is_private,
    }
}

fn matches_search(note: &Note, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    note.title.to_lowercase().contains(&needle) || note.content.to_lowercase().contains(&needle)
}
