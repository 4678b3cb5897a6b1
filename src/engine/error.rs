//! Query-time errors.

use thiserror::Error;

/// Errors returned by rhyme queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RhymeError {
    /// The queried word has no entry in the pronunciation dictionary.
    ///
    /// Holds the uppercased word. Not retryable: the lexicon never changes.
    #[error("Word \"{0}\" is not in the loaded pronunciation dictionary")]
    UnknownPronunciation(String),
}

/// A specialized `Result` type for rhyme queries.
pub type Result<T> = std::result::Result<T, RhymeError>;
