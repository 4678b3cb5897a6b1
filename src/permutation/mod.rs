//! Lazy candidate generation for the rhyme rules.
//!
//! A [`Permutations`] iterator varies each syllable of a rhyme tail and
//! yields every combination that is a suffix of some dictionary word.
//! Candidates are assembled from the last syllable backwards, descending
//! the reversed-phone trie as they grow, so a branch is abandoned as soon
//! as its partial suffix leaves the trie. Nothing is ever generated only to
//! be rejected at the end.
//!
//! # Example
//!
//! ```rust,ignore
//! let engine = PermutationEngine::new(lexicon.trie(), lexicon.taxonomy());
//! for candidate in engine.family(tail) {
//!     println!("{:?}", candidate.phones);
//! }
//! ```

pub mod variation;

pub use variation::Variation;

use crate::dictionary::{PhoneticTrie, TrieNode};
use crate::phonetic::{Phone, PhoneTaxonomy};
use crate::syllable::Syllable;
use tracing::trace;
use variation::expand;

/// Longest syllable the additive and assonance rules may produce.
pub const DEFAULT_MAX_ADDITIVE_LENGTH: usize = 4;

/// A generated phone sequence known to end at least one dictionary word.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// Phones in natural order
    pub phones: Vec<Phone>,
    /// Trie node reached by the reversed phones; its subtree holds the
    /// matching words
    pub node: &'a TrieNode,
}

/// Partially built candidate: syllables `0..remaining` are still to be
/// varied, everything to their right is already in the trie.
struct Partial<'a> {
    remaining: usize,
    reversed: Vec<Phone>,
    node: &'a TrieNode,
}

/// Lazy iterator over the candidates of one rhyme query.
///
/// Finite and single pass: each call to a [`PermutationEngine`] method
/// creates a fresh iterator. Empty candidates are never yielded.
pub struct Permutations<'a> {
    taxonomy: &'a PhoneTaxonomy,
    steps: Vec<(Syllable, Variation)>,
    pending: Vec<Partial<'a>>,
}

impl<'a> Permutations<'a> {
    /// Vary each syllable with its paired variation, starting at `root`.
    pub fn new(
        root: &'a TrieNode,
        taxonomy: &'a PhoneTaxonomy,
        steps: Vec<(Syllable, Variation)>,
    ) -> Self {
        let pending = if steps.is_empty() {
            Vec::new()
        } else {
            vec![Partial {
                remaining: steps.len(),
                reversed: Vec::new(),
                node: root,
            }]
        };
        Self {
            taxonomy,
            steps,
            pending,
        }
    }

    /// An iterator that yields nothing.
    pub fn empty(root: &'a TrieNode, taxonomy: &'a PhoneTaxonomy) -> Self {
        Self::new(root, taxonomy, Vec::new())
    }

    fn advance(&mut self) -> Option<Candidate<'a>> {
        while let Some(partial) = self.pending.pop() {
            if partial.remaining == 0 {
                if partial.reversed.is_empty() {
                    continue;
                }
                let mut phones = partial.reversed;
                phones.reverse();
                return Some(Candidate {
                    phones,
                    node: partial.node,
                });
            }
            self.queue_variants(partial);
        }
        None
    }

    /// Expand the next syllable to the left and queue each surviving variant.
    fn queue_variants(&mut self, partial: Partial<'a>) {
        let index = partial.remaining - 1;
        let (syllable, variation) = &self.steps[index];
        let segments = expand(*variation, self.taxonomy, syllable, partial.node);

        if segments.is_empty() {
            trace!(
                syllable = index,
                variation = variation.name(),
                "no variant continues a dictionary suffix, pruning"
            );
            return;
        }

        for segment in segments {
            let mut reversed = Vec::with_capacity(partial.reversed.len() + segment.reversed.len());
            reversed.extend(partial.reversed.iter().cloned());
            reversed.extend(segment.reversed);
            self.pending.push(Partial {
                remaining: index,
                reversed,
                node: segment.node,
            });
        }
    }
}

impl<'a> Iterator for Permutations<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

/// Builds the candidate generator for each rhyme rule.
///
/// Holds only borrows, so it is created per query.
#[derive(Debug, Clone, Copy)]
pub struct PermutationEngine<'a> {
    trie: &'a PhoneticTrie,
    taxonomy: &'a PhoneTaxonomy,
    max_additive_length: usize,
}

impl<'a> PermutationEngine<'a> {
    /// Create an engine over a trie and the taxonomy of its alphabet.
    pub fn new(trie: &'a PhoneticTrie, taxonomy: &'a PhoneTaxonomy) -> Self {
        Self {
            trie,
            taxonomy,
            max_additive_length: DEFAULT_MAX_ADDITIVE_LENGTH,
        }
    }

    /// Longest syllable the additive and assonance rules may build.
    pub fn with_max_additive_length(mut self, max_length: usize) -> Self {
        self.max_additive_length = max_length;
        self
    }

    fn plan(&self, tail: Vec<Syllable>, vary: impl Fn(usize, usize) -> Variation) -> Permutations<'a> {
        let count = tail.len();
        let steps = tail
            .into_iter()
            .enumerate()
            .map(|(index, syllable)| (syllable, vary(index, count)))
            .collect();
        Permutations::new(self.trie.root(), self.taxonomy, steps)
    }

    fn extend(&self, keep_base: bool) -> Variation {
        Variation::Extend {
            max_length: self.max_additive_length,
            keep_base,
        }
    }

    /// The tail itself, if it is a dictionary suffix.
    pub fn identity(&self, tail: Vec<Syllable>) -> Permutations<'a> {
        self.plan(tail, |_, _| Variation::Identity)
    }

    /// Every consonant replaced within its family.
    pub fn family(&self, tail: Vec<Syllable>) -> Permutations<'a> {
        self.plan(tail, |_, _| Variation::Family)
    }

    /// Every consonant replaced among its partners.
    pub fn partner(&self, tail: Vec<Syllable>) -> Permutations<'a> {
        self.plan(tail, |_, _| Variation::Partner)
    }

    /// Consonants appended to the last syllable.
    pub fn additive(&self, tail: Vec<Syllable>) -> Permutations<'a> {
        let extend = self.extend(false);
        self.plan(tail, move |index, count| {
            if index + 1 == count {
                extend
            } else {
                Variation::Identity
            }
        })
    }

    /// Trailing consonants removed from the last syllable.
    pub fn subtractive(&self, tail: Vec<Syllable>) -> Permutations<'a> {
        self.plan(tail, |index, count| {
            if index + 1 == count {
                Variation::Trim
            } else {
                Variation::Identity
            }
        })
    }

    /// The vowel of the first syllable replaced by every other vowel.
    pub fn consonant(&self, tail: Vec<Syllable>) -> Permutations<'a> {
        self.plan(tail, |index, _| {
            if index == 0 {
                Variation::VowelSwap
            } else {
                Variation::Identity
            }
        })
    }

    /// Syllables reduced to their vowels; the last one may then take
    /// appended consonants.
    ///
    /// A tail without vowels has nothing to assonate with and yields no
    /// candidates.
    pub fn assonance(&self, tail: Vec<Syllable>) -> Permutations<'a> {
        let vowels_only: Vec<Syllable> = tail
            .into_iter()
            .map(|syllable| {
                syllable
                    .into_iter()
                    .filter(|phone| self.taxonomy.is_vowel(phone))
                    .collect::<Syllable>()
            })
            .collect();
        if vowels_only.iter().any(|syllable| syllable.is_empty()) {
            trace!("tail has no vowel to assonate with");
            return Permutations::empty(self.trie.root(), self.taxonomy);
        }
        let extend = self.extend(true);
        self.plan(vowels_only, move |index, count| {
            if index + 1 == count {
                extend
            } else {
                Variation::Identity
            }
        })
    }
}
