//! Gzip compression wrapper for serializers.

use crate::dictionary::Lexicon;
use std::io::{Read, Write};

use super::{LexiconSerializer, SerializationError};

/// Gzip-compressed serializer wrapper.
///
/// Applies gzip compression to any underlying serializer.
///
/// # Example
///
/// ```rust,ignore
/// use librhyme::serialization::{BincodeSerializer, GzipSerializer, LexiconSerializer};
/// use std::fs::File;
///
/// let file = File::create("cmudict.bin.gz")?;
/// GzipSerializer::<BincodeSerializer>::serialize(&lexicon, file)?;
///
/// let file = File::open("cmudict.bin.gz")?;
/// let loaded = GzipSerializer::<BincodeSerializer>::deserialize(file)?;
/// ```
pub struct GzipSerializer<S> {
    _inner: std::marker::PhantomData<S>,
}

impl<S: LexiconSerializer> LexiconSerializer for GzipSerializer<S> {
    fn serialize<W: Write>(lexicon: &Lexicon, writer: W) -> Result<(), SerializationError> {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(writer, Compression::default());
        S::serialize(lexicon, &mut encoder)?;
        encoder.finish().map_err(SerializationError::Io)?;
        Ok(())
    }

    fn deserialize<R: Read>(reader: R) -> Result<Lexicon, SerializationError> {
        use flate2::read::GzDecoder;

        let decoder = GzDecoder::new(reader);
        S::deserialize(decoder)
    }
}
