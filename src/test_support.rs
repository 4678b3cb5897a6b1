//! Shared fixtures for unit tests.

use crate::dictionary::{loader, Lexicon};
use crate::phonetic::PhoneTypeTable;

pub(crate) const SAMPLE_DICT: &str = include_str!("../tests/data/cmudict-sample.dict");
pub(crate) const SAMPLE_PHONES: &str = loader::CMUDICT_PHONES;

/// The full CMUdict phone inventory.
pub(crate) fn cmu_phone_types() -> PhoneTypeTable {
    loader::parse_phone_types(SAMPLE_PHONES.as_bytes()).expect("fixture phone table parses")
}

/// A lexicon over the sample dictionary.
pub(crate) fn sample_lexicon() -> Lexicon {
    Lexicon::from_readers(SAMPLE_DICT.as_bytes(), SAMPLE_PHONES.as_bytes())
        .expect("fixture lexicon builds")
}
