//! Sentence segmentation on top of a [`LinguisticPipeline`].
//!
//! Section markers and numbered-list markers are forced onto their own lines
//! before delegation, then the returned fragments are merged back into
//! logical sentences: a sentence closes on terminal punctuation, and a new one
//! starts at every section marker or numbered item.

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SummaryError};
use crate::sentence_detector::{is_list_marker, AnalyzedSpan, LinguisticPipeline, Token};

/// Section headings recognized in the input by default
pub const DEFAULT_SECTION_MARKERS: &[&str] = &["Key Features", "Common Applications", "In conclusion"];

/// Per-sentence analysis details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceMetadata {
    /// Tokens excluding whitespace
    pub token_count: usize,
    /// Tokens excluding whitespace and punctuation
    pub word_count: usize,
    pub has_named_entities: bool,
    pub root_verb: Option<String>,
    pub is_section_header: bool,
}

/// A logical sentence in document order
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub index: usize,
    /// Source text of the merged fragments
    pub text: String,
    pub tokens: Vec<Token>,
    pub metadata: SentenceMetadata,
}

impl Sentence {
    pub fn content_tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|t| t.is_content())
            .map(|t| t.text.as_str())
    }
}

/// Splits normalized text into logical sentences. Owns the pipeline handle.
pub struct Segmenter<P> {
    pipeline: P,
    section_markers: Vec<String>,
}

impl<P: LinguisticPipeline> Segmenter<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            section_markers: DEFAULT_SECTION_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn with_section_markers(mut self, markers: Vec<String>) -> Self {
        self.section_markers = markers;
        self
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn section_markers(&self) -> &[String] {
        &self.section_markers
    }

    /// Move section markers and numbered-list markers onto their own lines
    pub fn insert_structural_hints(&self, text: &str) -> String {
        let mut hinted = text.to_string();
        for marker in self.section_markers.iter().filter(|m| !m.is_empty()) {
            hinted = break_before(&hinted, marker);
        }
        break_before_list_numbers(&hinted)
    }

    /// Segment normalized text into sentences with stable indices `0..n`
    pub fn segment(&self, normalized: &str) -> Result<Vec<Sentence>> {
        let hinted = self.insert_structural_hints(normalized);
        let spans = self.pipeline.segment(&hinted)?;
        debug!(
            pipeline = self.pipeline.name(),
            fragments = spans.len(),
            "Pipeline returned fragments"
        );

        let mut sentences = Vec::new();
        let mut pending = PendingSentence::default();

        for span in spans {
            let text = span.text.trim();
            if text.is_empty() {
                continue;
            }
            let is_section = contains_marker(text, &self.section_markers);
            let starts_new = is_section || starts_with_list_number(text);
            let closes = ends_with_terminal(text);

            if starts_new && pending.has_content() {
                sentences.push(pending.finish(sentences.len()));
            }
            pending.push(span, is_section);
            if closes && pending.has_content() {
                sentences.push(pending.finish(sentences.len()));
            }
        }
        if pending.has_content() {
            sentences.push(pending.finish(sentences.len()));
        }

        if sentences.is_empty() {
            return Err(SummaryError::NoSentences);
        }
        debug!("Merged fragments into {} sentences", sentences.len());
        Ok(sentences)
    }
}

#[derive(Default)]
struct PendingSentence {
    texts: Vec<String>,
    tokens: Vec<Token>,
    has_named_entities: bool,
    root_verb: Option<String>,
    is_section_header: bool,
}

impl PendingSentence {
    fn has_content(&self) -> bool {
        self.tokens.iter().any(Token::is_content)
    }

    fn push(&mut self, span: AnalyzedSpan, is_section: bool) {
        if !self.tokens.is_empty() {
            self.tokens.push(Token::whitespace(" "));
        }
        self.texts.push(span.text.trim().to_string());
        self.tokens.extend(span.tokens);
        self.has_named_entities |= span.has_named_entities;
        if self.root_verb.is_none() {
            self.root_verb = span.root_verb;
        }
        self.is_section_header |= is_section;
    }

    fn finish(&mut self, index: usize) -> Sentence {
        let done = std::mem::take(self);
        let metadata = SentenceMetadata {
            token_count: done.tokens.iter().filter(|t| !t.is_whitespace).count(),
            word_count: done.tokens.iter().filter(|t| t.is_content()).count(),
            has_named_entities: done.has_named_entities,
            root_verb: done.root_verb,
            is_section_header: done.is_section_header,
        };
        Sentence {
            index,
            text: done.texts.join(" "),
            tokens: done.tokens,
            metadata,
        }
    }
}

pub(crate) fn contains_marker(text: &str, markers: &[String]) -> bool {
    markers.iter().any(|m| !m.is_empty() && text.contains(m.as_str()))
}

/// Ends with `.`, `!` or `?`, possibly followed by closing quotes or brackets
pub(crate) fn ends_with_terminal(text: &str) -> bool {
    text.trim_end()
        .trim_end_matches(['"', '\'', ')', ']', '\u{201D}', '\u{2019}'])
        .ends_with(['.', '!', '?'])
}

fn starts_with_list_number(text: &str) -> bool {
    text.split_whitespace().next().is_some_and(is_list_marker)
}

/// Put a line break before every occurrence of `marker` not already at a line start
fn break_before(text: &str, marker: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for (pos, _) in text.match_indices(marker) {
        let before = &text[last..pos];
        if pos == 0 || text[..pos].ends_with('\n') {
            out.push_str(before);
        } else {
            out.push_str(before.trim_end_matches(' '));
            out.push('\n');
        }
        out.push_str(marker);
        last = pos + marker.len();
    }
    out.push_str(&text[last..]);
    out
}

/// Replace the space before a bare list number (` 3. `) with a line break
fn break_before_list_numbers(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for (pos, _) in text.match_indices(' ') {
        let is_marker = matches!(bytes.get(pos + 1), Some(b'1'..=b'9'))
            && bytes.get(pos + 2) == Some(&b'.')
            && matches!(bytes.get(pos + 3), None | Some(b' ') | Some(b'\n'));
        if is_marker {
            out.push_str(&text[last..pos]);
            out.push('\n');
            last = pos + 1;
        }
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence_detector::RuleBasedPipeline;

    /// Splits on line breaks only, standing in for a real model
    struct LinePipeline;

    impl LinguisticPipeline for LinePipeline {
        fn name(&self) -> &str {
            "lines"
        }

        fn segment(&self, text: &str) -> Result<Vec<AnalyzedSpan>> {
            Ok(text
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(AnalyzedSpan::from_text)
                .collect())
        }
    }

    #[test]
    fn test_structural_hints() {
        let segmenter = Segmenter::new(LinePipeline);
        let hinted = segmenter
            .insert_structural_hints("Intro text. Key Features include speed: 1. Fast 2. Small. Version 2.5 ships.");
        assert_eq!(
            hinted,
            "Intro text.\nKey Features include speed:\n1. Fast\n2. Small. Version 2.5 ships."
        );
    }

    #[test]
    fn test_hint_not_duplicated_at_line_start() {
        let segmenter = Segmenter::new(LinePipeline);
        assert_eq!(
            segmenter.insert_structural_hints("In conclusion it works."),
            "In conclusion it works."
        );
        assert_eq!(
            segmenter.insert_structural_hints("Done.\nIn conclusion it works."),
            "Done.\nIn conclusion it works."
        );
    }

    #[test]
    fn test_fragments_merge_until_terminal_punctuation() {
        let segmenter = Segmenter::new(LinePipeline);
        let sentences = segmenter
            .segment("The engine starts\nand keeps running.\nIt is quiet.")
            .unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "The engine starts and keeps running.");
        assert_eq!(
            sentences[0].content_tokens().collect::<Vec<_>>(),
            vec!["The", "engine", "starts", "and", "keeps", "running"]
        );
        assert_eq!(sentences[1].index, 1);
    }

    #[test]
    fn test_markers_start_new_sentences() {
        let segmenter = Segmenter::new(LinePipeline);
        let sentences = segmenter
            .segment("Overview of the tool\nKey Features\n1. Fast startup\n2. Small binaries.")
            .unwrap();
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Overview of the tool", "Key Features", "1. Fast startup", "2. Small binaries."]
        );
        assert!(sentences[1].metadata.is_section_header);
        assert!(!sentences[0].metadata.is_section_header);
    }

    #[test]
    fn test_punctuation_only_fragments_never_stand_alone() {
        let segmenter = Segmenter::new(LinePipeline);
        let sentences = segmenter.segment("...\nReal content here.").unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "... Real content here.");
    }

    #[test]
    fn test_no_sentences_is_an_error() {
        let segmenter = Segmenter::new(LinePipeline);
        let err = segmenter.segment("!!! ???").unwrap_err();
        assert!(matches!(err, SummaryError::NoSentences));
    }

    #[test]
    fn test_metadata_counts() {
        let segmenter = Segmenter::new(LinePipeline);
        let sentences = segmenter.segment("Hello, big world!").unwrap();
        let meta = &sentences[0].metadata;
        assert_eq!(meta.word_count, 3);
        assert_eq!(meta.token_count, 5);
    }

    #[test]
    fn test_with_rule_based_pipeline() {
        let pipeline = RuleBasedPipeline::with_default_rules().unwrap();
        let segmenter = Segmenter::new(&pipeline);
        let sentences = segmenter
            .segment("Rust is fast. In conclusion Rust is a good choice.")
            .unwrap();
        assert_eq!(sentences.len(), 2);
        assert!(sentences[1].metadata.is_section_header);
        assert!(sentences[1].metadata.has_named_entities);
    }

    #[test]
    fn test_multi_digit_numbers_are_not_list_markers() {
        let segmenter = Segmenter::new(LinePipeline);
        assert_eq!(
            segmenter.insert_structural_hints("Revenue grew in 2023.\nCosts fell. We shipped 42. Done."),
            "Revenue grew in 2023.\nCosts fell. We shipped 42. Done."
        );
        let sentences = segmenter
            .segment("Revenue grew in 2023.\nCosts fell.\nThe team shipped 42.\n10. Everyone was happy.")
            .unwrap();
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Revenue grew in 2023.",
                "Costs fell.",
                "The team shipped 42.",
                "10. Everyone was happy.",
            ]
        );
    }

    #[test]
    fn test_sentences_ending_in_numbers_survive_full_pipeline() {
        let pipeline = RuleBasedPipeline::with_default_rules().unwrap();
        let segmenter = Segmenter::new(&pipeline);
        let normalized = crate::normalizer::normalize(
            "Revenue grew strongly in 2023. Costs fell sharply. The team shipped 42. Everyone was happy.",
            &crate::normalizer::NormalizerOptions::default(),
        )
        .unwrap();
        let sentences = segmenter.segment(&normalized).unwrap();
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Revenue grew strongly in 2023.",
                "Costs fell sharply.",
                "The team shipped 42.",
                "Everyone was happy.",
            ]
        );
    }

    #[test]
    fn test_custom_markers() {
        let segmenter =
            Segmenter::new(LinePipeline).with_section_markers(vec!["Summary".to_string()]);
        let sentences = segmenter.segment("Body text here. Summary of it all.").unwrap();
        assert_eq!(sentences.len(), 2);
        assert!(sentences[1].metadata.is_section_header);
    }
}
