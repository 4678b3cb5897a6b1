//! Rhyme rule variants.

/// The kind of rhyme a query looks for.
///
/// Each rule picks a candidate generator in
/// [`PermutationEngine`](crate::permutation::PermutationEngine); the
/// dispatch lives in [`RhymeEngine::rhymes`](super::RhymeEngine::rhymes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RhymeRule {
    /// Same tail, e.g. DOG → LOG.
    #[default]
    Perfect,

    /// Consonants swapped for ones of the same type and voicing,
    /// e.g. DOG → DAUB.
    Family,

    /// Consonants swapped for ones of the same type, any voicing,
    /// e.g. DOG → TALK.
    Partner,

    /// Consonants appended to the tail, e.g. DO → DUDE.
    Additive,

    /// Trailing consonants removed, e.g. DUDE → DO.
    Subtractive,

    /// Same consonants around a different vowel, e.g. COG → BAG.
    Consonant,

    /// Same vowels, any consonants, e.g. DOG → JAUNT.
    Assonance,
}

impl RhymeRule {
    /// Every rule, in the order they are usually presented.
    pub const ALL: [RhymeRule; 7] = [
        RhymeRule::Perfect,
        RhymeRule::Family,
        RhymeRule::Partner,
        RhymeRule::Additive,
        RhymeRule::Subtractive,
        RhymeRule::Consonant,
        RhymeRule::Assonance,
    ];

    /// Get a human-readable name for this rule
    pub fn name(&self) -> &'static str {
        match self {
            RhymeRule::Perfect => "perfect",
            RhymeRule::Family => "family",
            RhymeRule::Partner => "partner",
            RhymeRule::Additive => "additive",
            RhymeRule::Subtractive => "subtractive",
            RhymeRule::Consonant => "consonant",
            RhymeRule::Assonance => "assonance",
        }
    }

    /// Whether the rule only applies to tails ending in a consonant.
    pub fn requires_final_consonant(&self) -> bool {
        matches!(
            self,
            RhymeRule::Family | RhymeRule::Partner | RhymeRule::Consonant
        )
    }
}

impl std::fmt::Display for RhymeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for RhymeRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "perfect" => Ok(RhymeRule::Perfect),
            "family" => Ok(RhymeRule::Family),
            "partner" => Ok(RhymeRule::Partner),
            "additive" | "add" => Ok(RhymeRule::Additive),
            "subtractive" | "sub" => Ok(RhymeRule::Subtractive),
            "consonant" => Ok(RhymeRule::Consonant),
            "assonance" => Ok(RhymeRule::Assonance),
            _ => Err(format!(
                "Unknown rhyme rule: {}. Valid options: perfect, family, partner, additive, subtractive, consonant, assonance",
                s
            )),
        }
    }
}
