//! JSON serializer for human-readable format.

use crate::dictionary::Lexicon;
use std::io::{Read, Write};

use super::{LexiconSerializer, LexiconSnapshot, SerializationError};

/// JSON serializer for human-readable format.
///
/// Larger and slower than bincode, but the snapshot can be inspected and
/// edited by hand.
pub struct JsonSerializer;

impl LexiconSerializer for JsonSerializer {
    fn serialize<W: Write>(lexicon: &Lexicon, mut writer: W) -> Result<(), SerializationError> {
        let snapshot = LexiconSnapshot::from_lexicon(lexicon);
        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        Ok(())
    }

    fn deserialize<R: Read>(mut reader: R) -> Result<Lexicon, SerializationError> {
        let snapshot: LexiconSnapshot = serde_json::from_reader(&mut reader)?;
        Ok(snapshot.into_lexicon()?)
    }
}
