//! Stop-word sets for the ranking vocabulary
//!
//! Lists come from the `stop-words` crate (Stopwords ISO). Lookups are
//! case-insensitive.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

use crate::error::{Result, SummaryError};

/// A filter for removing stopwords from the ranking vocabulary
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: HashSet<String>,
}

impl StopwordFilter {
    /// Load the stopword list for a language given by English name or ISO 639-1 code.
    ///
    /// Unknown languages fail with `ResourceLoad`.
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = resolve_language(language).ok_or_else(|| {
            SummaryError::resource_load(
                format!("stop words for '{language}'"),
                "unsupported language",
            )
        })?;
        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Ok(Self { stopwords })
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

fn resolve_language(language: &str) -> Option<LANGUAGE> {
    let lang = match language.trim().to_lowercase().as_str() {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        _ => return None,
    };
    Some(lang)
}
