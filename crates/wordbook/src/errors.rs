//! # Error Types

use std::path::PathBuf;

/// Result alias for wordbook operations.
pub type WbResult<T> = Result<T, WordbookError>;

/// Errors surfaced by vocabulary construction, encoding, and snapshot IO.
///
/// All variants are terminal: nothing here is retried, and there is no
/// recovery path short of rebuilding or reloading the vocabulary.
#[derive(Debug, thiserror::Error)]
pub enum WordbookError {
    /// The snapshot path does not exist.
    #[error("vocabulary snapshot not found: {}", path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The snapshot could not be parsed, or its mappings disagree.
    #[error("corrupt vocabulary snapshot: {reason}")]
    Corrupt {
        /// What the parser or verifier rejected.
        reason: String,
    },

    /// Decode was handed an id outside the vocabulary.
    ///
    /// Deliberately asymmetric with encoding, which drops unknown words
    /// silently.
    #[error("unknown token id: {id}")]
    UnknownId {
        /// The offending id, rendered for reporting.
        id: String,
    },

    /// The vocabulary has more entries than the token type can index.
    #[error("vocabulary size {size} exceeds the token type capacity")]
    VocabCapacity {
        /// The unique word count.
        size: usize,
    },

    /// Entry-point misconfiguration.
    #[error("configuration error: {reason}")]
    Config {
        /// What was misconfigured.
        reason: String,
    },

    /// Filesystem failure during corpus ingestion or persistence.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
