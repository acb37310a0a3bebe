//! Smart-suggestion seam and deterministic fallback.
//!
//! # Responsibility
//! - Define the opaque provider contract for content-based enrichment.
//! - Substitute a deterministic fallback on any provider failure.
//!
//! # Invariants
//! - Enrichment never influences scheduling and never surfaces an error to
//!   the caller.
//! - A suggestion never proposes the private category; privacy stays a user
//!   decision.

use crate::model::note::{Category, NoteColor};
use crate::model::suggestion::SmartSuggestion;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const FALLBACK_TITLE_CHARS: usize = 20;
const FALLBACK_SUMMARY: &str = "No summary available.";

/// Provider-side failure. The caller substitutes the fallback.
#[derive(Debug)]
pub enum SuggestionError {
    /// The backend could not be reached or refused the call.
    Unavailable(String),
    /// The backend answered with something that does not parse.
    InvalidResponse(String),
}

impl Display for SuggestionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(details) => write!(f, "suggestion backend unavailable: {details}"),
            Self::InvalidResponse(details) => {
                write!(f, "suggestion backend returned invalid data: {details}")
            }
        }
    }
}

impl Error for SuggestionError {}

/// Opaque enrichment backend mapping note content to a suggestion.
pub trait SuggestionProvider {
    fn suggest(&self, content: &str) -> Result<SmartSuggestion, SuggestionError>;
}

/// Deterministic substitute used whenever the provider fails.
///
/// Title is the whitespace-normalized content truncated to 20 characters
/// (with a `...` marker when longer), category `General`, color Yellow.
pub fn fallback_suggestion(content: &str) -> SmartSuggestion {
    let normalized = WHITESPACE_RE.replace_all(content, " ");
    let trimmed = normalized.trim();

    let mut title: String = trimmed.chars().take(FALLBACK_TITLE_CHARS).collect();
    if trimmed.chars().count() > FALLBACK_TITLE_CHARS {
        title.push_str("...");
    }

    SmartSuggestion {
        title,
        category: Category::General,
        summary: FALLBACK_SUMMARY.to_string(),
        color: NoteColor::Yellow,
    }
}

/// Calls the provider and degrades to the fallback on any failure.
///
/// Successful suggestions are sanitized: a `Private` category proposal is
/// downgraded to `General`.
pub fn suggest_or_fallback<P: SuggestionProvider>(provider: &P, content: &str) -> SmartSuggestion {
    match provider.suggest(content) {
        Ok(suggestion) => sanitize(suggestion),
        Err(err) => {
            warn!("event=suggest module=suggest status=fallback error={err}");
            fallback_suggestion(content)
        }
    }
}

fn sanitize(mut suggestion: SmartSuggestion) -> SmartSuggestion {
    if suggestion.category == Category::Private {
        suggestion.category = Category::General;
    }
    suggestion
}

#[cfg(test)]
mod tests {
    use super::{fallback_suggestion, suggest_or_fallback, SuggestionError, SuggestionProvider};
    use crate::model::note::{Category, NoteColor};
    use crate::model::suggestion::SmartSuggestion;

    struct Failing;

    impl SuggestionProvider for Failing {
        fn suggest(&self, _content: &str) -> Result<SmartSuggestion, SuggestionError> {
            Err(SuggestionError::Unavailable("offline".to_string()))
        }
    }

    struct Fixed(SmartSuggestion);

    impl SuggestionProvider for Fixed {
        fn suggest(&self, _content: &str) -> Result<SmartSuggestion, SuggestionError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn fallback_truncates_long_content() {
        let suggestion = fallback_suggestion("a very long note body that keeps going");
        assert_eq!(suggestion.title, "a very long note bod...");
        assert_eq!(suggestion.category, Category::General);
        assert_eq!(suggestion.summary, "No summary available.");
        assert_eq!(suggestion.color, NoteColor::Yellow);
    }

    #[test]
    fn fallback_keeps_short_content_untruncated() {
        let suggestion = fallback_suggestion("short note");
        assert_eq!(suggestion.title, "short note");
    }

    #[test]
    fn fallback_normalizes_whitespace_before_truncation() {
        let suggestion = fallback_suggestion("  spread \n across\t lines  ");
        assert_eq!(suggestion.title, "spread across lines");
    }

    #[test]
    fn provider_failure_degrades_to_fallback() {
        let suggestion = suggest_or_fallback(&Failing, "remember the milk");
        assert_eq!(suggestion.title, "remember the milk");
        assert_eq!(suggestion.category, Category::General);
    }

    #[test]
    fn private_category_proposal_is_downgraded() {
        let provider = Fixed(SmartSuggestion {
            title: "t".to_string(),
            category: Category::Private,
            summary: "s".to_string(),
            color: NoteColor::Blue,
        });
        let suggestion = suggest_or_fallback(&provider, "body");
        assert_eq!(suggestion.category, Category::General);
        assert_eq!(suggestion.color, NoteColor::Blue);
    }
}
