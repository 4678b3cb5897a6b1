//! Tunable limits for rhyme queries.

use crate::permutation::DEFAULT_MAX_ADDITIVE_LENGTH;
use crate::syllable::DEFAULT_UNSTRESSED_TAIL_SPAN;

/// Heuristic limits applied to every query of a [`RhymeEngine`](super::RhymeEngine).
///
/// None of these change what a rule means; they bound how far the
/// generators search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    /// Longest syllable the additive and assonance rules may build.
    pub max_additive_length: usize,

    /// Trailing syllables used as the tail when the last syllable is
    /// unstressed.
    pub unstressed_tail_span: usize,

    /// Maximum candidates examined per query (`None` = unbounded).
    pub candidate_budget: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_additive_length: DEFAULT_MAX_ADDITIVE_LENGTH,
            unstressed_tail_span: DEFAULT_UNSTRESSED_TAIL_SPAN,
            candidate_budget: None,
        }
    }
}

impl EngineConfig {
    /// Set the additive cutoff.
    pub fn with_max_additive_length(mut self, max_length: usize) -> Self {
        self.max_additive_length = max_length;
        self
    }

    /// Set the unstressed tail span.
    pub fn with_unstressed_tail_span(mut self, span: usize) -> Self {
        self.unstressed_tail_span = span;
        self
    }

    /// Cap the number of candidates examined per query.
    pub fn with_candidate_budget(mut self, budget: Option<usize>) -> Self {
        self.candidate_budget = budget;
        self
    }
}
