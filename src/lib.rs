pub mod config;
pub mod corpus;
pub mod error;
pub mod format;
pub mod normalizer;
pub mod output;
pub mod rank;
pub mod segmenter;
pub mod selector;
pub mod sentence_detector;
pub mod stopwords;
pub mod summarizer;

// Re-export main types for convenient access
pub use config::SummaryConfig;
pub use error::{Result, SummaryError};
pub use rank::{LexRank, LexRankConfig, ScoreVector};
pub use segmenter::{Segmenter, Sentence, SentenceMetadata};
pub use sentence_detector::{AnalyzedSpan, LinguisticPipeline, RuleBasedPipeline, Token};
pub use summarizer::{Summarizer, Summary};

// Re-export file helpers used by the CLI and integration tests
pub use output::{generate_output_path, read_document, validate_input_path, write_atomic, RunStats};
