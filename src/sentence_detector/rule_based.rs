// Rule-based linguistic pipeline: every line break is a hard boundary, and
// inside a line a boundary is terminal punctuation + whitespace + a likely
// sentence opener. Uses a regex-automata meta regex compiled once at load.

use regex_automata::meta::Regex;
use tracing::{debug, info};

use super::{is_list_marker, tokenizer, AbbreviationChecker, AnalyzedSpan, LinguisticPipeline};
use crate::error::{Result, SummaryError};

/// Configuration for sentence boundary detection rules
#[derive(Debug, Clone)]
pub struct BoundaryRules {
    /// End punctuation characters that can terminate a sentence
    pub end_punctuation: Vec<char>,
    /// Closing characters allowed between the end punctuation and the whitespace
    pub closing_punctuation: Vec<char>,
    /// Characters considered opening quotes
    pub opening_quotes: Vec<char>,
    /// Characters considered opening parentheticals
    pub opening_parentheticals: Vec<char>,
}

impl Default for BoundaryRules {
    fn default() -> Self {
        Self {
            end_punctuation: vec!['.', '?', '!'],
            closing_punctuation: vec!['"', '\'', '\u{201D}', '\u{2019}', ')', ']'],
            opening_quotes: vec!['"', '\'', '\u{201C}', '\u{2018}'],
            opening_parentheticals: vec!['(', '[', '{'],
        }
    }
}

impl BoundaryRules {
    /// Pattern: one or more end marks, any closing marks, then whitespace
    fn pattern(&self) -> Result<String> {
        if self.end_punctuation.is_empty() {
            return Err(SummaryError::resource_load(
                "sentence boundary rules",
                "no end punctuation configured",
            ));
        }
        let mut pattern = format!("{}+", char_class(&self.end_punctuation));
        if !self.closing_punctuation.is_empty() {
            pattern.push_str(&char_class(&self.closing_punctuation));
            pattern.push('*');
        }
        pattern.push_str(r"\s+");
        Ok(pattern)
    }

    fn opens_sentence(&self, ch: char) -> bool {
        ch.is_uppercase()
            || ch.is_ascii_digit()
            || self.opening_quotes.contains(&ch)
            || self.opening_parentheticals.contains(&ch)
    }
}

fn char_class(chars: &[char]) -> String {
    let mut class = String::from("[");
    for &c in chars {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
                | '#' | '&' | '-' | '~'
        ) {
            class.push('\\');
        }
        class.push(c);
    }
    class.push(']');
    class
}

/// Heuristic linguistic pipeline with no external model
pub struct RuleBasedPipeline {
    rules: BoundaryRules,
    boundary: Regex,
    abbreviations: AbbreviationChecker,
}

impl RuleBasedPipeline {
    /// Compile the boundary automaton. Fails with `ResourceLoad` when the rules
    /// do not produce a valid pattern.
    pub fn load(rules: BoundaryRules) -> Result<Self> {
        info!("Compiling sentence boundary rules");
        let pattern = rules.pattern()?;
        let boundary = Regex::new(&pattern)
            .map_err(|e| SummaryError::resource_load("sentence boundary automaton", e))?;
        debug!(%pattern, "Compiled sentence boundary pattern");

        Ok(Self {
            rules,
            boundary,
            abbreviations: AbbreviationChecker::new(),
        })
    }

    pub fn with_default_rules() -> Result<Self> {
        Self::load(BoundaryRules::default())
    }

    /// Split one line into sentence slices
    fn split_line<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut pieces = Vec::new();
        let mut start = 0;

        for m in self.boundary.find_iter(line) {
            if m.end() >= line.len() {
                break;
            }
            let Some(next) = line[m.end()..].chars().next() else {
                break;
            };
            if !self.rules.opens_sentence(next) {
                continue;
            }
            let sentence_end = m.start() + line[m.start()..m.end()].trim_end().len();
            let candidate = &line[start..sentence_end];
            if self.abbreviations.ends_with_abbreviation(candidate)
                || is_list_marker(candidate.trim())
            {
                continue;
            }
            let candidate = candidate.trim();
            if !candidate.is_empty() {
                pieces.push(candidate);
            }
            start = m.end();
        }

        let rest = line[start..].trim();
        if !rest.is_empty() {
            pieces.push(rest);
        }
        pieces
    }

    fn analyze(&self, text: &str) -> AnalyzedSpan {
        let tokens = tokenizer::tokenize(text);
        let has_named_entities = tokens
            .iter()
            .filter(|t| t.is_content())
            .skip(1)
            .any(|t| looks_like_proper_noun(&t.text));

        AnalyzedSpan {
            text: text.to_string(),
            tokens,
            has_named_entities,
            root_verb: None,
        }
    }
}

/// Capitalized word in non-initial position, other than the pronoun "I"
fn looks_like_proper_noun(word: &str) -> bool {
    word != "I" && word.chars().next().is_some_and(char::is_uppercase)
}

impl LinguisticPipeline for RuleBasedPipeline {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn segment(&self, text: &str) -> Result<Vec<AnalyzedSpan>> {
        let spans: Vec<AnalyzedSpan> = text
            .lines()
            .flat_map(|line| self.split_line(line))
            .map(|piece| self.analyze(piece))
            .collect();

        debug!("Segmented {} spans from {} bytes", spans.len(), text.len());
        Ok(spans)
    }
}
