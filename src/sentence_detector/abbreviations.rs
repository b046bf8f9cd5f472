// Abbreviations whose trailing period must not be read as a sentence boundary

use std::collections::HashSet;

/// Title abbreviations that precede proper nouns, as in "Dr. Smith" or "Mr. Johnson"
pub const TITLE_ABBREVIATIONS: &[&str] = &[
    "Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "Sr.", "Jr.", "St.", "Rev.", "Gen.", "Capt.",
];

/// Abbreviations that practically never close a sentence
pub const NON_TERMINAL_ABBREVIATIONS: &[&str] = &[
    "e.g.", "i.e.", "vs.", "cf.", "approx.", "No.", "Fig.", "Eq.", "Vol.", "pp.",
];

/// Abbreviation lookup shared by the normalizer and the rule-based pipeline
#[derive(Debug, Clone)]
pub struct AbbreviationChecker {
    title_abbreviations: HashSet<&'static str>,
    non_terminal: HashSet<&'static str>,
}

impl AbbreviationChecker {
    pub fn new() -> Self {
        Self {
            title_abbreviations: TITLE_ABBREVIATIONS.iter().copied().collect(),
            non_terminal: NON_TERMINAL_ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Check if a word is a title abbreviation
    pub fn is_title_abbreviation(&self, word: &str) -> bool {
        self.title_abbreviations.contains(word)
    }

    /// Check if a word is any abbreviation that should keep the sentence open
    pub fn is_non_terminal(&self, word: &str) -> bool {
        self.is_title_abbreviation(word) || self.non_terminal.contains(word)
    }

    /// Check if text ends with an abbreviation that must not split the sentence.
    /// Surrounding quotes and an opening parenthesis on the last word are ignored.
    pub fn ends_with_abbreviation(&self, text: &str) -> bool {
        match text.split_whitespace().next_back() {
            Some(last_word) => self.is_non_terminal(clean_word(last_word)),
            None => false,
        }
    }
}

impl Default for AbbreviationChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn clean_word(word: &str) -> &str {
    let word = word.trim_start_matches(['(', '[']);
    word.trim_matches(|c: char| {
        matches!(c, '"' | '\'' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}')
    })
}
