//! Input validation, summary file naming, atomic writes and run statistics

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Result, SummaryError};
use crate::segmenter::SentenceMetadata;
use crate::summarizer::Summary;

/// `<path without extension>_summary.txt`, next to the input
pub fn generate_output_path(input_path: &Path) -> PathBuf {
    let mut output = input_path.to_path_buf();
    let file_stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    output.set_file_name(format!("{file_stem}_summary.txt"));
    output
}

/// The input must exist and carry a `.txt` extension (any case)
pub fn validate_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SummaryError::invalid_input(format!(
            "File '{}' not found.",
            path.display()
        )));
    }
    let is_txt = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
    if !is_txt {
        return Err(SummaryError::invalid_input(
            "Please provide a valid text (.txt) file.",
        ));
    }
    Ok(())
}

/// Read the whole document as UTF-8
pub fn read_document(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| SummaryError::io(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "Read input document");
    Ok(text)
}

/// Write `contents` to `path` all-or-nothing: a temporary file in the same
/// directory is filled, flushed and renamed over the target.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| SummaryError::io(dir, e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| SummaryError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| SummaryError::io(path, e.error))?;
    info!(path = %path.display(), bytes = contents.len(), "Wrote summary");
    Ok(())
}

/// One selected sentence in the stats file
#[derive(Debug, Clone, Serialize)]
pub struct SelectedSentence {
    pub index: usize,
    pub score: f64,
    pub text: String,
}

/// Machine-readable record of one CLI run
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub input: PathBuf,
    pub output: PathBuf,
    pub total_sentences: usize,
    pub target_sentences: usize,
    pub iterations: usize,
    pub converged: bool,
    pub elapsed_ms: u64,
    pub selected: Vec<SelectedSentence>,
    pub sentences: Vec<SentenceMetadata>,
}

impl RunStats {
    pub fn from_summary(input: &Path, output: &Path, summary: &Summary, elapsed_ms: u64) -> Self {
        let selected = summary
            .selected()
            .map(|s| SelectedSentence {
                index: s.index,
                score: summary.scores.score(s.index),
                text: s.text.clone(),
            })
            .collect();
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            total_sentences: summary.total_sentences(),
            target_sentences: summary.target_sentences,
            iterations: summary.scores.iterations(),
            converged: summary.scores.converged(),
            elapsed_ms,
            selected,
            sentences: summary.sentences.iter().map(|s| s.metadata.clone()).collect(),
        }
    }

    /// Pretty-printed JSON, written atomically
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SummaryError::io(path, e.into()))?;
        write_atomic(path, &json)
    }
}
