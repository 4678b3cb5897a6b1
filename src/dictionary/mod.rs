//! Pronunciation dictionaries and the phonetic trie built over them.
//!
//! A [`Lexicon`] bundles the three structures every rhyme query reads:
//! the word → phones map, the [`PhoneTaxonomy`] and the [`PhoneticTrie`].
//! It is built once at startup and never mutated, so it can be shared
//! across threads behind an `Arc` without synchronization.

pub mod error;
pub mod iterator;
pub mod loader;
pub mod trie;

pub use error::LexiconError;
pub use iterator::SubtreeWords;
pub use trie::{PhoneticTrie, TrieNode};

use crate::phonetic::{Phone, PhoneTaxonomy, PhoneTypeTable};
use rustc_hash::FxHashMap;
use std::io::BufRead;
use tracing::{debug, trace};

/// Uppercase word → canonical pronunciation.
///
/// Single-pronunciation: the first entry seen for a word wins.
#[derive(Debug, Clone, Default)]
pub struct PronunciationDictionary {
    words: FxHashMap<String, Vec<Phone>>,
}

impl PronunciationDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pronunciation of `word`, matched case-insensitively.
    pub fn get(&self, word: &str) -> Option<&[Phone]> {
        match self.words.get(word) {
            Some(phones) => Some(phones.as_slice()),
            None => self.words.get(&word.to_uppercase()).map(Vec::as_slice),
        }
    }

    /// Whether `word` has a pronunciation.
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(word, phones)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Phone])> + '_ {
        self.words.iter().map(|(w, p)| (w.as_str(), p.as_slice()))
    }

    fn insert(&mut self, word: String, phones: Vec<Phone>) -> bool {
        match self.words.entry(word) {
            std::collections::hash_map::Entry::Occupied(existing) => {
                trace!(word = existing.key().as_str(), "keeping first pronunciation");
                false
            }
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(phones);
                true
            }
        }
    }
}

/// The immutable data every rhyme query reads.
///
/// # Construction
///
/// ```rust
/// use librhyme::dictionary::Lexicon;
/// use librhyme::phonetic::phones;
///
/// let types = "AO\tvowel\nD\tstop\nG\tstop\nL\tliquid\n";
/// let lexicon = Lexicon::build(
///     vec![("dog", phones("D AO1 G")), ("log", phones("L AO1 G"))],
///     librhyme::dictionary::loader::parse_phone_types(types.as_bytes()).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(lexicon.pronunciations().len(), 2);
/// assert!(lexicon.trie().contains(&phones("AO1 G")));
/// ```
#[derive(Debug, Clone)]
pub struct Lexicon {
    pronunciations: PronunciationDictionary,
    taxonomy: PhoneTaxonomy,
    trie: PhoneticTrie,
}

impl Lexicon {
    /// Build the lexicon from `(word, phones)` entries and a phone-type table.
    ///
    /// Words are uppercased and the first pronunciation of a word wins.
    /// Entries without phones are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::UntypedPhone`] when a word uses a phone the
    /// table does not classify.
    pub fn build<I, W>(entries: I, phone_types: PhoneTypeTable) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (W, Vec<Phone>)>,
        W: AsRef<str>,
    {
        let mut pronunciations = PronunciationDictionary::new();

        for (word, phones) in entries {
            if phones.is_empty() {
                continue;
            }
            let word = word.as_ref().to_uppercase();
            if let Some(untyped) = phones.iter().find(|p| phone_types.get(p).is_none()) {
                return Err(LexiconError::UntypedPhone {
                    word,
                    phone: untyped.to_string(),
                });
            }
            pronunciations.insert(word, phones);
        }

        let trie = PhoneticTrie::from_entries(pronunciations.iter());
        let taxonomy = PhoneTaxonomy::new(phone_types);

        debug!(
            words = pronunciations.len(),
            trie_nodes = trie.node_count(),
            vowels = taxonomy.vowels().len(),
            consonants = taxonomy.consonants().len(),
            "built lexicon"
        );

        Ok(Self {
            pronunciations,
            taxonomy,
            trie,
        })
    }

    /// Parse a CMUdict-style dictionary and a phone-type table, then build.
    pub fn from_readers<D, T>(dictionary: D, phone_types: T) -> Result<Self, LexiconError>
    where
        D: BufRead,
        T: BufRead,
    {
        let phone_types = loader::parse_phone_types(phone_types)?;
        let entries = loader::parse_pronunciations(dictionary)?;
        Self::build(entries, phone_types)
    }

    /// The word → phones map.
    pub fn pronunciations(&self) -> &PronunciationDictionary {
        &self.pronunciations
    }

    /// Phone classification.
    pub fn taxonomy(&self) -> &PhoneTaxonomy {
        &self.taxonomy
    }

    /// Suffix index over every pronunciation.
    pub fn trie(&self) -> &PhoneticTrie {
        &self.trie
    }

    /// Pronunciation of `word`, matched case-insensitively.
    pub fn phones(&self, word: &str) -> Option<&[Phone]> {
        self.pronunciations.get(word)
    }
}
