//! Integration tests for lexicon snapshots

#[cfg(feature = "serialization")]
mod serialization_tests {
    use librhyme::dictionary::loader;
    use librhyme::prelude::*;
    use std::fs::File;
    use std::io::{BufReader, BufWriter, Write};
    use tempfile::TempDir;

    const SAMPLE_DICT: &str = include_str!("data/cmudict-sample.dict");

    fn lexicon() -> Lexicon {
        Lexicon::from_readers(SAMPLE_DICT.as_bytes(), loader::CMUDICT_PHONES.as_bytes()).unwrap()
    }

    fn assert_same_rhymes(a: &RhymeEngine, b: &RhymeEngine) {
        for word in ["dog", "do", "dude", "basket", "water"] {
            for rule in RhymeRule::ALL {
                assert_eq!(
                    a.rhymes(rule, word, None).unwrap(),
                    b.rhymes(rule, word, None).unwrap(),
                    "{} {}",
                    rule,
                    word
                );
            }
        }
    }

    #[test]
    fn test_bincode_file_roundtrip_preserves_rhymes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cmudict.bin");
        let original = lexicon();

        let mut writer = BufWriter::new(File::create(&path).unwrap());
        BincodeSerializer::serialize(&original, &mut writer).unwrap();
        writer.flush().unwrap();
        drop(writer);

        let loaded = BincodeSerializer::deserialize(BufReader::new(File::open(&path).unwrap()))
            .unwrap();
        assert_same_rhymes(&RhymeEngine::new(original), &RhymeEngine::new(loaded));
    }

    #[test]
    fn test_json_snapshot_is_readable() {
        let mut buffer = Vec::new();
        JsonSerializer::serialize(&lexicon(), &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["entries"].as_array().unwrap().len(), 51);
        assert_eq!(value["entries"][0][0], "ABOUT");
    }

    #[test]
    fn test_snapshot_keeps_first_pronunciation_only() {
        let mut buffer = Vec::new();
        BincodeSerializer::serialize(&lexicon(), &mut buffer).unwrap();
        let loaded = BincodeSerializer::deserialize(&buffer[..]).unwrap();

        assert_eq!(loaded.phones("READ"), Some(phones("R IY1 D").as_slice()));
    }

    #[cfg(feature = "compression")]
    #[test]
    fn test_gzip_bincode_preserves_rhymes() {
        let original = lexicon();
        let mut buffer = Vec::new();
        GzipSerializer::<BincodeSerializer>::serialize(&original, &mut buffer).unwrap();
        assert_eq!(&buffer[..2], &[0x1f, 0x8b]);

        let loaded = GzipSerializer::<BincodeSerializer>::deserialize(&buffer[..]).unwrap();
        assert_same_rhymes(&RhymeEngine::new(original), &RhymeEngine::new(loaded));
    }
}
