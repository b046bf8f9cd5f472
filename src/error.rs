use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the summarization pipeline
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Caller-supplied input or parameters are unusable
    #[error("{0}")]
    InvalidInput(String),

    /// A linguistic resource could not be constructed; fatal at startup
    #[error("failed to load {resource}: {reason}")]
    ResourceLoad { resource: String, reason: String },

    /// Segmentation of non-empty text produced nothing
    #[error("segmentation produced no sentences")]
    NoSentences,

    /// Corpus requested before any sentences were segmented
    #[error("no segmented sentences available; segment the text before building a corpus")]
    CorpusNotReady,

    /// Numeric failure while ranking
    #[error("ranking failed: {0}")]
    Ranking(String),

    /// Any non-validation failure while summarizing, with the cause preserved
    #[error("Summarization failed: {source}")]
    Summarization {
        #[source]
        source: Box<SummaryError>,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SummaryError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn resource_load(resource: impl Into<String>, reason: impl ToString) -> Self {
        Self::ResourceLoad {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a failure raised mid-pipeline. Validation errors pass through
    /// unchanged so the CLI can still classify them.
    pub fn into_summarization(self) -> Self {
        match self {
            Self::InvalidInput(_) | Self::Summarization { .. } => self,
            other => Self::Summarization {
                source: Box::new(other),
            },
        }
    }

    /// True for errors the CLI reports as validation failures
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

pub type Result<T, E = SummaryError> = std::result::Result<T, E>;
