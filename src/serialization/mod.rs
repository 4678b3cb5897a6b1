//! Lexicon persistence.
//!
//! Building a [`Lexicon`] means parsing the full pronunciation dictionary,
//! which dominates start-up time. A snapshot stores the parsed phone-type
//! table and `(word, phones)` entries in a compact format; loading one
//! skips text parsing and rebuilds the trie directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use librhyme::prelude::*;
//! use std::fs::File;
//!
//! let file = File::create("cmudict.bin")?;
//! BincodeSerializer::serialize(&lexicon, file)?;
//!
//! let file = File::open("cmudict.bin")?;
//! let loaded = BincodeSerializer::deserialize(file)?;
//! ```

use crate::dictionary::{Lexicon, LexiconError};
use crate::phonetic::{Phone, PhoneTypeTable};
use std::io::{Read, Write};

mod bincode_impl;
mod json_impl;

#[cfg(feature = "compression")]
mod compression_impl;

pub use self::bincode_impl::BincodeSerializer;
pub use self::json_impl::JsonSerializer;

#[cfg(feature = "compression")]
pub use self::compression_impl::GzipSerializer;

/// Trait for persisting and restoring a lexicon.
pub trait LexiconSerializer {
    /// Serialize a lexicon to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<W: Write>(lexicon: &Lexicon, writer: W) -> Result<(), SerializationError>;

    /// Deserialize a lexicon from a reader, rebuilding its trie.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails, or if the stored
    /// entries use a phone the stored table does not type.
    fn deserialize<R: Read>(reader: R) -> Result<Lexicon, SerializationError>;
}

/// The persisted form of a lexicon.
///
/// The trie and taxonomy are derived data and are rebuilt on load.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LexiconSnapshot {
    /// Phone → type table
    pub phone_types: PhoneTypeTable,
    /// Every `(WORD, phones)` pair, sorted by word
    pub entries: Vec<(String, Vec<Phone>)>,
}

impl LexiconSnapshot {
    /// Capture a lexicon.
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let mut entries = lexicon.trie().entries();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        Self {
            phone_types: lexicon.taxonomy().table().clone(),
            entries,
        }
    }

    /// Rebuild the lexicon.
    pub fn into_lexicon(self) -> Result<Lexicon, LexiconError> {
        Lexicon::build(self.entries, self.phone_types)
    }
}

/// Errors that can occur during serialization/deserialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during bincode serialization
    #[error("Bincode error")]
    Bincode(#[from] bincode::Error),
    /// Error during JSON serialization
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    /// The snapshot decoded but does not describe a valid lexicon
    #[error("Invalid lexicon snapshot")]
    Lexicon(#[from] LexiconError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetic::phones;
    use crate::test_support::sample_lexicon;

    fn assert_same_lexicon(a: &Lexicon, b: &Lexicon) {
        assert_eq!(a.pronunciations().len(), b.pronunciations().len());
        assert_eq!(a.trie().node_count(), b.trie().node_count());
        for (word, phones) in a.pronunciations().iter() {
            assert_eq!(b.phones(word), Some(phones));
        }
    }

    #[test]
    fn test_bincode_roundtrip() {
        let lexicon = sample_lexicon();
        let mut buffer = Vec::new();

        BincodeSerializer::serialize(&lexicon, &mut buffer).unwrap();
        let loaded = BincodeSerializer::deserialize(&buffer[..]).unwrap();

        assert_same_lexicon(&lexicon, &loaded);
    }

    #[test]
    fn test_json_roundtrip() {
        let lexicon = sample_lexicon();
        let mut buffer = Vec::new();

        JsonSerializer::serialize(&lexicon, &mut buffer).unwrap();
        let loaded = JsonSerializer::deserialize(&buffer[..]).unwrap();

        assert_same_lexicon(&lexicon, &loaded);
        assert!(loaded.taxonomy().is_vowel(&Phone::new("AO1")));
    }

    #[test]
    fn test_snapshot_entries_sorted() {
        let snapshot = LexiconSnapshot::from_lexicon(&sample_lexicon());
        assert_eq!(snapshot.entries.len(), 51);
        assert!(snapshot.entries.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(snapshot.entries[0], ("ABOUT".to_string(), phones("AH0 B AW1 T")));
    }

    #[test]
    fn test_untyped_snapshot_rejected() {
        let snapshot = LexiconSnapshot {
            phone_types: PhoneTypeTable::new(),
            entries: vec![("DOG".to_string(), phones("D AO1 G"))],
        };
        let mut buffer = Vec::new();
        serde_json::to_writer(&mut buffer, &snapshot).unwrap();

        let err = JsonSerializer::deserialize(&buffer[..]).unwrap_err();
        assert!(matches!(err, SerializationError::Lexicon(LexiconError::UntypedPhone { .. })));
    }

    #[test]
    fn test_truncated_bincode_fails() {
        let mut buffer = Vec::new();
        BincodeSerializer::serialize(&sample_lexicon(), &mut buffer).unwrap();
        buffer.truncate(buffer.len() / 2);
        assert!(BincodeSerializer::deserialize(&buffer[..]).is_err());
    }

    #[cfg(feature = "compression")]
    #[test]
    fn test_gzip_roundtrip() {
        let lexicon = sample_lexicon();
        let mut plain = Vec::new();
        let mut compressed = Vec::new();

        JsonSerializer::serialize(&lexicon, &mut plain).unwrap();
        GzipSerializer::<JsonSerializer>::serialize(&lexicon, &mut compressed).unwrap();
        assert!(compressed.len() < plain.len());

        let loaded = GzipSerializer::<JsonSerializer>::deserialize(&compressed[..]).unwrap();
        assert_same_lexicon(&lexicon, &loaded);
    }
}
