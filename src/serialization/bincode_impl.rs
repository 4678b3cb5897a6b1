//! Bincode serializer for compact binary format.

use crate::dictionary::Lexicon;
use std::io::{Read, Write};

use super::{LexiconSerializer, LexiconSnapshot, SerializationError};

/// Bincode serializer for compact binary format.
///
/// The default snapshot format: small and fast to load.
pub struct BincodeSerializer;

impl LexiconSerializer for BincodeSerializer {
    fn serialize<W: Write>(lexicon: &Lexicon, mut writer: W) -> Result<(), SerializationError> {
        let snapshot = LexiconSnapshot::from_lexicon(lexicon);
        bincode::serialize_into(&mut writer, &snapshot)?;
        Ok(())
    }

    fn deserialize<R: Read>(mut reader: R) -> Result<Lexicon, SerializationError> {
        let snapshot: LexiconSnapshot = bincode::deserialize_from(&mut reader)?;
        Ok(snapshot.into_lexicon()?)
    }
}
