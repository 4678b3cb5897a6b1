//! The rhyme query façade.
//!
//! [`RhymeEngine`] resolves a word's rhyme tail, drives the candidate
//! generator for the requested [`RhymeRule`] and unions the dictionary
//! words each candidate reaches in the trie.
//!
//! # Usage
//!
//! ```rust
//! use librhyme::dictionary::{loader, Lexicon};
//! use librhyme::engine::RhymeEngine;
//! use librhyme::phonetic::phones;
//!
//! let types = loader::parse_phone_types(
//!     "AO\tvowel\nD\tstop\nG\tstop\nL\tliquid\nF\tfricative\n".as_bytes(),
//! )
//! .unwrap();
//! let lexicon = Lexicon::build(
//!     vec![
//!         ("DOG", phones("D AO1 G")),
//!         ("LOG", phones("L AO1 G")),
//!         ("FOG", phones("F AO1 G")),
//!     ],
//!     types,
//! )
//! .unwrap();
//!
//! let engine = RhymeEngine::new(lexicon);
//! let rhymes = engine.perfect_rhymes("dog", None).unwrap();
//! assert!(rhymes.contains("LOG"));
//! assert!(!rhymes.contains("DOG"));
//! ```

pub mod config;
pub mod error;
pub mod rule;

pub use config::EngineConfig;
pub use error::{Result, RhymeError};
pub use rule::RhymeRule;

use crate::dictionary::Lexicon;
use crate::permutation::{PermutationEngine, Permutations};
use crate::phonetic::Phone;
use crate::syllable::{flatten, Syllable, SyllableExtractor};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// A cheap, clonable handle for rhyme queries over a shared [`Lexicon`].
///
/// The lexicon is immutable, so clones can be moved to other threads and
/// queried concurrently without locking.
#[derive(Debug, Clone)]
pub struct RhymeEngine {
    lexicon: Arc<Lexicon>,
    config: EngineConfig,
}

impl RhymeEngine {
    /// Create an engine with the default configuration.
    pub fn new(lexicon: impl Into<Arc<Lexicon>>) -> Self {
        Self::with_config(lexicon, EngineConfig::default())
    }

    /// Create an engine with explicit limits.
    pub fn with_config(lexicon: impl Into<Arc<Lexicon>>, config: EngineConfig) -> Self {
        Self {
            lexicon: lexicon.into(),
            config,
        }
    }

    /// The lexicon queries run against.
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// The active limits.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn extractor(&self) -> SyllableExtractor<'_> {
        SyllableExtractor::new(self.lexicon.taxonomy())
            .with_unstressed_tail_span(self.config.unstressed_tail_span)
    }

    fn permutations(&self) -> PermutationEngine<'_> {
        PermutationEngine::new(self.lexicon.trie(), self.lexicon.taxonomy())
            .with_max_additive_length(self.config.max_additive_length)
    }

    /// Words with the same tail, excluding `word` itself.
    pub fn perfect_rhymes(&self, word: &str, num_syllables: Option<usize>) -> Result<HashSet<String>> {
        self.rhymes(RhymeRule::Perfect, word, num_syllables)
    }

    /// Words whose tail differs by consonants of the same type and voicing.
    pub fn family_rhymes(&self, word: &str, num_syllables: Option<usize>) -> Result<HashSet<String>> {
        self.rhymes(RhymeRule::Family, word, num_syllables)
    }

    /// Words whose tail differs by consonants of the same type.
    pub fn partner_rhymes(&self, word: &str, num_syllables: Option<usize>) -> Result<HashSet<String>> {
        self.rhymes(RhymeRule::Partner, word, num_syllables)
    }

    /// Words whose tail adds consonants after the query's tail.
    pub fn additive_rhymes(&self, word: &str, num_syllables: Option<usize>) -> Result<HashSet<String>> {
        self.rhymes(RhymeRule::Additive, word, num_syllables)
    }

    /// Words whose tail drops trailing consonants of the query's tail.
    pub fn subtractive_rhymes(
        &self,
        word: &str,
        num_syllables: Option<usize>,
    ) -> Result<HashSet<String>> {
        self.rhymes(RhymeRule::Subtractive, word, num_syllables)
    }

    /// Words with the same consonants around a different first vowel.
    pub fn consonant_rhymes(&self, word: &str, num_syllables: Option<usize>) -> Result<HashSet<String>> {
        self.rhymes(RhymeRule::Consonant, word, num_syllables)
    }

    /// Words sharing the tail's vowels, any consonants after them.
    pub fn assonance_rhymes(&self, word: &str, num_syllables: Option<usize>) -> Result<HashSet<String>> {
        self.rhymes(RhymeRule::Assonance, word, num_syllables)
    }

    /// Rhymes of `word` under `rule`.
    ///
    /// `num_syllables` of `None` uses the last stressed syllable and what
    /// follows it; `Some(n)` uses the last `n` syllables.
    ///
    /// # Errors
    ///
    /// [`RhymeError::UnknownPronunciation`] when `word` is not in the
    /// lexicon. An empty set is a normal result.
    pub fn rhymes(
        &self,
        rule: RhymeRule,
        word: &str,
        num_syllables: Option<usize>,
    ) -> Result<HashSet<String>> {
        let tail = self
            .extractor()
            .tail_syllables(&self.lexicon, word, num_syllables)?;
        let flat = flatten(&tail);

        if rule == RhymeRule::Perfect {
            let mut results = self.search(&flat).unwrap_or_default();
            results.remove(&word.to_uppercase());
            debug!(%rule, word, tail = ?flat, results = results.len(), "rhyme query");
            return Ok(results);
        }

        let ends_in_consonant = flat
            .last()
            .is_some_and(|phone| self.lexicon.taxonomy().is_consonant(phone));
        if rule.requires_final_consonant() && !ends_in_consonant {
            debug!(%rule, word, tail = ?flat, "tail ends in a vowel, no candidates");
            return Ok(HashSet::new());
        }

        let candidates = self.candidates(rule, tail);
        let budget = self.config.candidate_budget.unwrap_or(usize::MAX);
        let (results, examined, truncated) = self.union_candidates(candidates, budget);

        if truncated {
            debug!(%rule, word, budget, "candidate budget exhausted");
        }
        debug!(
            %rule,
            word,
            tail = ?flat,
            candidates = examined,
            results = results.len(),
            "rhyme query"
        );
        Ok(results)
    }

    /// Union the words reached by at most `budget` candidates.
    ///
    /// Returns the words, the number of candidates examined and whether any
    /// candidate was left unexamined.
    fn union_candidates(&self, candidates: Permutations<'_>, budget: usize) -> (HashSet<String>, usize, bool) {
        let mut candidates = candidates.peekable();
        let mut results = HashSet::new();
        let mut examined = 0usize;
        while examined < budget {
            let Some(candidate) = candidates.next() else {
                break;
            };
            examined += 1;
            results.extend(self.lexicon.trie().words_ending_with(candidate.node));
        }
        let truncated = candidates.peek().is_some();
        (results, examined, truncated)
    }

    /// Dispatch a rule to its generator.
    fn candidates(&self, rule: RhymeRule, tail: Vec<Syllable>) -> Permutations<'_> {
        let engine = self.permutations();
        match rule {
            RhymeRule::Perfect => engine.identity(tail),
            RhymeRule::Family => engine.family(tail),
            RhymeRule::Partner => engine.partner(tail),
            RhymeRule::Additive => engine.additive(tail),
            RhymeRule::Subtractive => engine.subtractive(tail),
            RhymeRule::Consonant => engine.consonant(tail),
            RhymeRule::Assonance => engine.assonance(tail),
        }
    }

    /// Every word whose pronunciation ends with `phones`.
    ///
    /// Returns `None` when no word does.
    pub fn search(&self, phones: &[Phone]) -> Option<HashSet<String>> {
        let trie = self.lexicon.trie();
        trie.search(phones).map(|node| trie.words_ending_with(node))
    }

    /// Pronunciation of `word`.
    pub fn phones(&self, word: &str) -> Result<&[Phone]> {
        self.lexicon
            .phones(word)
            .ok_or_else(|| RhymeError::UnknownPronunciation(word.to_uppercase()))
    }

    /// All syllables of `word`.
    pub fn syllables(&self, word: &str) -> Result<Vec<Syllable>> {
        let phones = self.phones(word)?;
        Ok(self.extractor().extract_syllables(phones))
    }

    /// The rhyme tail a query for `word` would use.
    pub fn tail_syllables(&self, word: &str, num_syllables: Option<usize>) -> Result<Vec<Syllable>> {
        self.extractor()
            .tail_syllables(&self.lexicon, word, num_syllables)
    }

    /// Number of syllables in `word`.
    pub fn count_syllables(&self, word: &str) -> Result<usize> {
        self.extractor().count_syllables(&self.lexicon, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetic::phones;
    use crate::test_support::sample_lexicon;

    fn engine() -> RhymeEngine {
        RhymeEngine::new(sample_lexicon())
    }

    fn words(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_perfect_excludes_query() {
        let rhymes = engine().perfect_rhymes("dog", None).unwrap();
        assert_eq!(rhymes, words(&["LOG", "FOG", "HOG"]));
    }

    #[test]
    fn test_perfect_with_syllable_count() {
        let engine = engine();
        let two = engine.perfect_rhymes("basket", Some(2)).unwrap();
        assert_eq!(two, words(&["CASKET", "GASKET"]));

        let one = engine.perfect_rhymes("basket", Some(1)).unwrap();
        assert_eq!(one, words(&["CASKET", "GASKET"]));
    }

    #[test]
    fn test_guarded_rules_on_vowel_final_tail() {
        let engine = engine();
        for rule in [RhymeRule::Family, RhymeRule::Partner, RhymeRule::Consonant] {
            assert!(engine.rhymes(rule, "WATER", None).unwrap().is_empty());
            assert!(engine.rhymes(rule, "DO", None).unwrap().is_empty());
        }
    }

    #[test]
    fn test_unknown_word_from_every_rule() {
        let engine = engine();
        for rule in RhymeRule::ALL {
            assert_eq!(
                engine.rhymes(rule, "zzznotaword", None),
                Err(RhymeError::UnknownPronunciation("ZZZNOTAWORD".to_string()))
            );
        }
    }

    #[test]
    fn test_candidate_budget_caps_results() {
        let unbounded = engine().additive_rhymes("do", None).unwrap();
        let capped = RhymeEngine::with_config(
            sample_lexicon(),
            EngineConfig::default().with_candidate_budget(Some(1)),
        )
        .additive_rhymes("do", None)
        .unwrap();
        assert!(!capped.is_empty());
        assert!(capped.len() < unbounded.len());
        assert!(capped.is_subset(&unbounded));

        let none = RhymeEngine::with_config(
            sample_lexicon(),
            EngineConfig::default().with_candidate_budget(Some(0)),
        )
        .additive_rhymes("do", None)
        .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_budget_reports_truncation_only_when_cut() {
        let engine = engine();
        let tail = engine.tail_syllables("do", None).unwrap();
        let total = engine.candidates(RhymeRule::Additive, tail.clone()).count();
        assert!(total > 1);

        let (_, examined, truncated) =
            engine.union_candidates(engine.candidates(RhymeRule::Additive, tail.clone()), total);
        assert_eq!(examined, total);
        assert!(!truncated);

        let (_, examined, truncated) =
            engine.union_candidates(engine.candidates(RhymeRule::Additive, tail), total - 1);
        assert_eq!(examined, total - 1);
        assert!(truncated);
    }

    #[test]
    fn test_search() {
        let engine = engine();
        let found = engine.search(&phones("UW1")).unwrap();
        assert_eq!(found, words(&["DO", "TWO", "SHOE", "ZOO"]));
        assert!(engine.search(&phones("OY1")).is_none());
    }

    #[test]
    fn test_word_introspection() {
        let engine = engine();
        assert_eq!(engine.phones("Dog").unwrap(), phones("D AO1 G").as_slice());
        assert_eq!(engine.count_syllables("water").unwrap(), 2);
        assert_eq!(engine.syllables("about").unwrap().len(), 2);
        assert_eq!(
            flatten(&engine.tail_syllables("about", None).unwrap()),
            phones("AW1 T")
        );
    }

    #[test]
    fn test_clone_shares_lexicon() {
        let engine = engine();
        let clone = engine.clone();
        assert!(Arc::ptr_eq(engine.lexicon(), clone.lexicon()));
    }
}
