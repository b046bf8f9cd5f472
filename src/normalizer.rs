//! Text normalization ahead of sentence segmentation.
//!
//! Normalization runs in four passes: NFKC width folding, typographic
//! canonicalization, paragraph-aware whitespace collapsing, and (optionally)
//! a line break after each sentence-final mark so the segmenter sees one
//! sentence per line.

use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, SummaryError};
use crate::sentence_detector::{is_list_marker, AbbreviationChecker};

/// Switches for the optional normalization passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerOptions {
    /// Keep blank-line paragraph breaks as `\n\n`; otherwise paragraphs join with a space
    pub preserve_paragraphs: bool,
    /// Replace the space after sentence-final punctuation with a line break
    pub break_sentences: bool,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            preserve_paragraphs: true,
            break_sentences: true,
        }
    }
}

/// Normalize a raw document. Empty or whitespace-only input is rejected.
pub fn normalize(text: &str, options: &NormalizerOptions) -> Result<String> {
    if text.trim().is_empty() {
        return Err(SummaryError::invalid_input("Input text cannot be empty"));
    }

    let canonical = canonicalize_unicode(text);
    let abbreviations = AbbreviationChecker::new();

    let paragraphs: Vec<String> = split_paragraphs(&canonical)
        .into_iter()
        .map(|para| collapse_whitespace(&para))
        .filter(|para| !para.is_empty())
        .map(|para| {
            if options.break_sentences {
                insert_sentence_breaks(&para, &abbreviations)
            } else {
                para
            }
        })
        .collect();

    if paragraphs.is_empty() {
        return Err(SummaryError::invalid_input("Input text cannot be empty"));
    }

    let separator = if options.preserve_paragraphs { "\n\n" } else { " " };
    Ok(paragraphs.join(separator))
}

/// NFKC normalization followed by folding of typographic quotes, dashes and
/// invisible characters to plain ASCII forms
pub fn canonicalize_unicode(text: &str) -> String {
    text.nfkc()
        .filter_map(|ch| match ch {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => Some('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' => Some('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => Some('-'),
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}' => None,
            c if c.is_whitespace() && c != '\n' => Some(' '),
            c => Some(c),
        })
        .collect()
}

/// Collapse every whitespace run (line breaks included) into one space and trim
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_space = false;

    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }

    result
}

/// Group lines into paragraphs separated by blank lines
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

fn is_terminal(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn is_closing(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']')
}

/// Break after `.`, `!` or `?` (and any closing quotes or brackets right after
/// it) when a space and a non-lowercase word follow. No break after a known
/// abbreviation or a bare list number.
fn insert_sentence_breaks(paragraph: &str, abbreviations: &AbbreviationChecker) -> String {
    let chars: Vec<char> = paragraph.chars().collect();
    let mut out = String::with_capacity(paragraph.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        out.push(ch);
        i += 1;
        if !is_terminal(ch) {
            continue;
        }

        while i < chars.len() && (is_terminal(chars[i]) || is_closing(chars[i])) {
            out.push(chars[i]);
            i += 1;
        }

        let followed_by_word = chars.get(i) == Some(&' ')
            && chars.get(i + 1).is_some_and(|next| !next.is_lowercase());
        if followed_by_word
            && !abbreviations.ends_with_abbreviation(&out)
            && !ends_with_list_number(&out)
        {
            out.push('\n');
            i += 1;
        }
    }

    out
}

/// Last word is a bare list number such as `3.`
fn ends_with_list_number(text: &str) -> bool {
    text.split_whitespace().next_back().is_some_and(is_list_marker)
}
