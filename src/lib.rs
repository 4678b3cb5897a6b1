//! # librhyme
//!
//! Phonetic rhyme matching over pronunciation dictionaries.
//!
//! Words are looked up in a CMUdict-style dictionary, cut into syllables,
//! and their rhyme tail (the last stressed syllable onward, onset removed)
//! is varied according to a [`RhymeRule`](engine::RhymeRule). Every variant
//! is checked against a trie built over *reversed* pronunciations, so a
//! suffix query is a plain prefix walk and hopeless branches are dropped
//! before they grow.
//!
//! ## Example
//!
//! ```rust,ignore
//! use librhyme::prelude::*;
//!
//! let lexicon = Lexicon::from_readers(dict_file, phone_file)?;
//! let engine = RhymeEngine::new(lexicon);
//!
//! for word in engine.family_rhymes("dog", None)? {
//!     println!("{}", word);
//! }
//! ```
//!
//! ## Rules
//!
//! | Rule | Example |
//! |---|---|
//! | perfect | DOG → LOG |
//! | family | DOG → DAUB |
//! | partner | DOG → TALK |
//! | additive | DO → DUDE |
//! | subtractive | DUDE → DO |
//! | consonant | COG → BAG |
//! | assonance | DOG → JAUNT |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dictionary;
pub mod engine;
pub mod permutation;
pub mod phonetic;
pub mod syllable;

#[cfg(feature = "serialization")]
pub mod serialization;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
mod test_support;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::dictionary::{Lexicon, LexiconError, PhoneticTrie, PronunciationDictionary};
    pub use crate::engine::{EngineConfig, RhymeEngine, RhymeError, RhymeRule};
    pub use crate::permutation::{Candidate, PermutationEngine, Permutations, Variation};
    pub use crate::phonetic::{phones, Phone, PhoneTaxonomy, PhoneType, PhoneTypeTable};
    pub use crate::syllable::{Syllable, SyllableExtractor};

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{
        BincodeSerializer, JsonSerializer, LexiconSerializer, LexiconSnapshot,
        SerializationError,
    };

    #[cfg(feature = "compression")]
    pub use crate::serialization::GzipSerializer;
}
