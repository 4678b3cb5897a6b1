//! Per-syllable variations.
//!
//! Each function expands one syllable from a trie node that already spells
//! the (reversed) part of the candidate to its right. Only variants that
//! exist as a path below that node are returned, so every returned segment
//! is a validated suffix of at least one dictionary word.

use crate::dictionary::TrieNode;
use crate::phonetic::{Phone, PhoneTaxonomy};
use tracing::trace;

/// How one syllable of a rhyme tail may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variation {
    /// Kept as is.
    Identity,
    /// Each consonant replaced by a member of its family (same type and
    /// voicing). Vowels pass through.
    Family,
    /// Each consonant replaced by one of its partners (same type).
    Partner,
    /// Consonants appended after the syllable, each different from the
    /// phone before it, while the syllable stays within `max_length`
    /// phones. With `keep_base` the unextended syllable is a variant too.
    Extend {
        /// Longest syllable the extension may produce
        max_length: usize,
        /// Whether zero appended consonants is allowed
        keep_base: bool,
    },
    /// One or more trailing consonants removed, stopping at a vowel.
    Trim,
    /// The vowel replaced by a vowel of a different sound.
    VowelSwap,
}

impl Variation {
    /// Short name for log output.
    pub fn name(&self) -> &'static str {
        match self {
            Variation::Identity => "identity",
            Variation::Family => "family",
            Variation::Partner => "partner",
            Variation::Extend { .. } => "extend",
            Variation::Trim => "trim",
            Variation::VowelSwap => "vowel-swap",
        }
    }
}

/// A validated syllable variant.
///
/// `reversed` holds the variant's phones last to first, the order in which
/// they were consumed from the trie; `node` is where consumption ended.
#[derive(Debug, Clone)]
pub(crate) struct Segment<'a> {
    pub(crate) reversed: Vec<Phone>,
    pub(crate) node: &'a TrieNode,
}

/// Expand `syllable` under `variation` starting at `node`.
pub(crate) fn expand<'a>(
    variation: Variation,
    taxonomy: &PhoneTaxonomy,
    syllable: &[Phone],
    node: &'a TrieNode,
) -> Vec<Segment<'a>> {
    match variation {
        Variation::Identity => identity(syllable, node).into_iter().collect(),
        Variation::Family => substitute(taxonomy, syllable, node, false),
        Variation::Partner => substitute(taxonomy, syllable, node, true),
        Variation::Extend {
            max_length,
            keep_base,
        } => extend(taxonomy, syllable, node, max_length, keep_base),
        Variation::Trim => trim(taxonomy, syllable, node),
        Variation::VowelSwap => swap_vowel(taxonomy, syllable, node),
    }
}

fn identity<'a>(syllable: &[Phone], node: &'a TrieNode) -> Option<Segment<'a>> {
    node.descend(syllable.iter().rev()).map(|end| Segment {
        reversed: syllable.iter().rev().cloned().collect(),
        node: end,
    })
}

/// Family or partner substitution, pruned phone by phone.
fn substitute<'a>(
    taxonomy: &PhoneTaxonomy,
    syllable: &[Phone],
    node: &'a TrieNode,
    partners: bool,
) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    // (phones still to place, reversed phones placed so far, node)
    let mut pending = vec![(syllable.len(), Vec::with_capacity(syllable.len()), node)];

    while let Some((remaining, reversed, at)) = pending.pop() {
        if remaining == 0 {
            segments.push(Segment { reversed, node: at });
            continue;
        }
        let phone = &syllable[remaining - 1];

        if taxonomy.is_vowel(phone) {
            if let Some(child) = at.child(phone) {
                let mut next = reversed;
                next.push(phone.clone());
                pending.push((remaining - 1, next, child));
            }
            continue;
        }

        let companions = if partners {
            taxonomy.partners(phone)
        } else {
            taxonomy.family(phone)
        };
        for companion in companions {
            if let Some(child) = at.child(companion) {
                let mut next = reversed.clone();
                next.push(companion.clone());
                pending.push((remaining - 1, next, child));
            }
        }
    }

    segments
}

/// Consonants appended after the syllable.
///
/// Appended consonants are chosen last first by walking the consonant
/// children of `node`, so every extension already exists in the trie before
/// the syllable itself is descended.
fn extend<'a>(
    taxonomy: &PhoneTaxonomy,
    syllable: &[Phone],
    node: &'a TrieNode,
    max_length: usize,
    keep_base: bool,
) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    // appended consonants in trie order: the last one pushed sits right
    // after the syllable
    let mut pending: Vec<(Vec<Phone>, &'a TrieNode)> = vec![(Vec::new(), node)];

    while let Some((appended, at)) = pending.pop() {
        let boundary_ok = match (appended.last(), syllable.last()) {
            (Some(first_appended), Some(last)) => first_appended != last,
            _ => true,
        };
        if (keep_base || !appended.is_empty()) && boundary_ok {
            if let Some(end) = at.descend(syllable.iter().rev()) {
                let mut reversed = appended.clone();
                reversed.extend(syllable.iter().rev().cloned());
                segments.push(Segment { reversed, node: end });
            }
        }

        if syllable.len() + appended.len() >= max_length {
            continue;
        }
        for (phone, child) in at.children() {
            if !taxonomy.is_consonant(phone) || appended.last() == Some(phone) {
                continue;
            }
            let mut next = appended.clone();
            next.push(phone.clone());
            pending.push((next, child));
        }
    }

    segments
}

/// Trailing consonants removed one at a time.
fn trim<'a>(taxonomy: &PhoneTaxonomy, syllable: &[Phone], node: &'a TrieNode) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut end = syllable.len();

    while end > 0 && taxonomy.is_consonant(&syllable[end - 1]) {
        end -= 1;
        let kept = &syllable[..end];
        match node.descend(kept.iter().rev()) {
            Some(at) => segments.push(Segment {
                reversed: kept.iter().rev().cloned().collect(),
                node: at,
            }),
            None => trace!(removed = syllable.len() - end, "trimmed syllable is no suffix"),
        }
    }

    segments
}

/// The syllable's vowel swapped for every vowel child found after its coda.
fn swap_vowel<'a>(
    taxonomy: &PhoneTaxonomy,
    syllable: &[Phone],
    node: &'a TrieNode,
) -> Vec<Segment<'a>> {
    let Some(at) = syllable.iter().position(|p| taxonomy.is_vowel(p)) else {
        return Vec::new();
    };
    let (onset, rest) = syllable.split_at(at);
    let (vowel, coda) = (&rest[0], &rest[1..]);

    let Some(after_coda) = node.descend(coda.iter().rev()) else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    for (phone, child) in after_coda.children() {
        if !taxonomy.is_vowel(phone) || phone.base() == vowel.base() {
            continue;
        }
        if let Some(end) = child.descend(onset.iter().rev()) {
            let mut reversed: Vec<Phone> = coda.iter().rev().cloned().collect();
            reversed.push(phone.clone());
            reversed.extend(onset.iter().rev().cloned());
            segments.push(Segment { reversed, node: end });
        }
    }

    segments
}
