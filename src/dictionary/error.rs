//! Error types for loading and building a lexicon.

use thiserror::Error;

/// Errors that can occur while parsing dictionaries or building a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A dictionary word uses a phone missing from the phone-type table.
    ///
    /// Every phone must have exactly one type, otherwise vowel and
    /// consonant classification of that word would be undefined.
    #[error("Word {word} uses phone {phone} which has no phone type")]
    UntypedPhone {
        /// The offending word
        word: String,
        /// The phone without a type
        phone: String,
    },

    /// The phone-type table names a category that does not exist.
    #[error("Line {line}: unknown phone type '{name}'")]
    UnknownPhoneType {
        /// 1-based line number
        line: usize,
        /// The unrecognised type name
        name: String,
    },

    /// A line that cannot be split into its expected fields.
    #[error("Line {line}: malformed entry '{content}'")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// The raw line
        content: String,
    },

    /// Underlying read failure.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for lexicon construction.
pub type Result<T> = std::result::Result<T, LexiconError>;
