//! Syllable segmentation and rhyme-tail extraction.
//!
//! A word's phones are cut into syllables at vowels: onset consonants stay
//! with the first vowel, and consonants after a vowel stay with it until the
//! next vowel opens a new syllable. `D AO1 G` is one syllable;
//! `W AO1 T ER0` is `[W AO1 T] [ER0]`.
//!
//! The rhyme *tail* of a word is its last stressed syllable onward (or a
//! requested number of trailing syllables) with the onset consonants of the
//! first tail syllable removed.

use crate::dictionary::Lexicon;
use crate::engine::{Result, RhymeError};
use crate::phonetic::{Phone, PhoneTaxonomy};
use smallvec::SmallVec;

/// One syllable: at most one vowel plus its surrounding consonants.
pub type Syllable = SmallVec<[Phone; 4]>;

/// Syllables kept when the final syllable is unstressed.
pub const DEFAULT_UNSTRESSED_TAIL_SPAN: usize = 2;

/// Splits phone sequences into syllables and picks rhyme tails.
#[derive(Debug, Clone, Copy)]
pub struct SyllableExtractor<'a> {
    taxonomy: &'a PhoneTaxonomy,
    unstressed_tail_span: usize,
}

impl<'a> SyllableExtractor<'a> {
    /// Create an extractor with the default tail heuristic.
    pub fn new(taxonomy: &'a PhoneTaxonomy) -> Self {
        Self {
            taxonomy,
            unstressed_tail_span: DEFAULT_UNSTRESSED_TAIL_SPAN,
        }
    }

    /// Number of trailing syllables kept when the last one is unstressed.
    ///
    /// Values below 1 are treated as 1.
    pub fn with_unstressed_tail_span(mut self, span: usize) -> Self {
        self.unstressed_tail_span = span.max(1);
        self
    }

    /// Split `phones` into syllables.
    ///
    /// Concatenating the result gives back `phones`. A sequence with at
    /// most one vowel yields exactly one syllable; an empty one yields none.
    pub fn extract_syllables(&self, phones: &[Phone]) -> Vec<Syllable> {
        let mut syllables = Vec::new();
        let mut syllable = Syllable::new();
        let mut seen_vowel = false;

        for phone in phones {
            if self.taxonomy.is_vowel(phone) {
                if seen_vowel && !syllable.is_empty() {
                    syllables.push(std::mem::take(&mut syllable));
                }
                seen_vowel = true;
            }
            syllable.push(phone.clone());
        }
        if !syllable.is_empty() {
            syllables.push(syllable);
        }

        syllables
    }

    /// Whether the syllable's vowel carries a primary or secondary stress
    /// marker.
    ///
    /// The vowel is the first phone when that is a vowel, otherwise the
    /// first vowel after the onset. A syllable without a vowel is unstressed.
    pub fn is_stressed(&self, syllable: &[Phone]) -> bool {
        debug_assert!(!syllable.is_empty(), "is_stressed() called on empty syllable");
        syllable
            .iter()
            .find(|phone| self.taxonomy.is_vowel(phone))
            .and_then(Phone::stress)
            .is_some_and(|stress| stress.is_stressed())
    }

    /// The last stressed syllable and whatever follows it.
    ///
    /// - a single syllable is returned as is;
    /// - a stressed final syllable is returned alone;
    /// - otherwise the last `unstressed_tail_span` syllables are returned.
    pub fn last_stressed_tail(&self, mut syllables: Vec<Syllable>) -> Vec<Syllable> {
        if syllables.len() <= 1 {
            return syllables;
        }
        let keep = match syllables.last() {
            Some(last) if self.is_stressed(last) => 1,
            _ => self.unstressed_tail_span.min(syllables.len()),
        };
        syllables.split_off(syllables.len() - keep)
    }

    /// Rhyme tail of a pronunciation.
    ///
    /// `count` of `None` uses [`last_stressed_tail`](Self::last_stressed_tail);
    /// `Some(n)` keeps the last `n` syllables (at least one, at most all).
    /// Leading consonants of the first returned syllable are then removed.
    pub fn rhyme_tail(&self, phones: &[Phone], count: Option<usize>) -> Vec<Syllable> {
        let mut syllables = self.extract_syllables(phones);
        let mut tail = match count {
            None => self.last_stressed_tail(syllables),
            Some(n) => {
                let keep = n.clamp(1, syllables.len().max(1)).min(syllables.len());
                syllables.split_off(syllables.len() - keep)
            }
        };
        if let Some(first) = tail.first_mut() {
            self.strip_leading_consonants(first);
        }
        tail
    }

    /// Remove the consonants before the syllable's vowel.
    ///
    /// A syllable without a vowel is left untouched.
    pub fn strip_leading_consonants(&self, syllable: &mut Syllable) {
        if let Some(vowel_at) = syllable.iter().position(|p| self.taxonomy.is_vowel(p)) {
            syllable.drain(..vowel_at);
        }
    }

    /// Rhyme tail of a dictionary word.
    ///
    /// # Errors
    ///
    /// [`RhymeError::UnknownPronunciation`] when the word is not in the
    /// lexicon.
    pub fn tail_syllables(
        &self,
        lexicon: &Lexicon,
        word: &str,
        count: Option<usize>,
    ) -> Result<Vec<Syllable>> {
        let phones = lookup(lexicon, word)?;
        Ok(self.rhyme_tail(phones, count))
    }

    /// Number of syllables in a dictionary word.
    pub fn count_syllables(&self, lexicon: &Lexicon, word: &str) -> Result<usize> {
        let phones = lookup(lexicon, word)?;
        Ok(self.extract_syllables(phones).len())
    }
}

fn lookup<'l>(lexicon: &'l Lexicon, word: &str) -> Result<&'l [Phone]> {
    lexicon
        .phones(word)
        .ok_or_else(|| RhymeError::UnknownPronunciation(word.to_uppercase()))
}

/// Concatenate syllables back into one phone sequence.
pub fn flatten(syllables: &[Syllable]) -> Vec<Phone> {
    syllables.iter().flatten().cloned().collect()
}
