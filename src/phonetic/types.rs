//! Type definitions for phones and phone categories.
//!
//! Phones follow the ARPABET conventions used by CMUdict: an uppercase
//! symbol such as `AO`, `G` or `NG`, where vowels carry a trailing stress
//! digit (`AO1`). Two phones are equal only when their symbols match
//! exactly, stress digit included.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// ============================================================================
// Phone
// ============================================================================

/// An atomic pronunciation symbol, optionally suffixed with a stress digit.
///
/// Phones are immutable and cheap to clone (the symbol is shared behind an
/// `Arc`), which matters because candidate generation clones them into
/// every partial sequence it explores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Phone(Arc<str>);

impl Phone {
    /// Create a phone from its symbol.
    pub fn new(symbol: &str) -> Self {
        Phone(Arc::from(symbol))
    }

    /// The full symbol, stress digit included.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The symbol without its stress digit (`AO1` → `AO`).
    #[inline]
    pub fn base(&self) -> &str {
        self.0.trim_end_matches(|c: char| c.is_ascii_digit())
    }

    /// The stress marker carried by this phone, if any.
    pub fn stress(&self) -> Option<Stress> {
        self.0.chars().last().and_then(Stress::from_marker)
    }

    /// A copy of this phone without its stress digit.
    pub fn unstressed(&self) -> Phone {
        if self.stress().is_some() {
            Phone::new(self.base())
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Phone {
    fn from(symbol: &str) -> Self {
        Phone::new(symbol)
    }
}

impl From<String> for Phone {
    fn from(symbol: String) -> Self {
        Phone(Arc::from(symbol))
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parse a whitespace-separated pronunciation such as `"D AO1 G"`.
pub fn phones(pronunciation: &str) -> Vec<Phone> {
    pronunciation.split_whitespace().map(Phone::new).collect()
}

// ============================================================================
// Stress
// ============================================================================

/// Lexical stress marker attached to a vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stress {
    /// `0`
    Unstressed,
    /// `1`
    Primary,
    /// `2`
    Secondary,
}

/// Markers that make a syllable count as stressed.
pub const STRESSED_MARKERS: [Stress; 2] = [Stress::Primary, Stress::Secondary];

impl Stress {
    /// Decode a stress digit.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }

    /// The digit written after the vowel symbol.
    pub fn marker(&self) -> char {
        match self {
            Stress::Unstressed => '0',
            Stress::Primary => '1',
            Stress::Secondary => '2',
        }
    }

    /// Whether this marker belongs to [`STRESSED_MARKERS`].
    #[inline]
    pub fn is_stressed(&self) -> bool {
        STRESSED_MARKERS.contains(self)
    }
}

// ============================================================================
// PhoneType
// ============================================================================

/// Articulatory category of a phone.
///
/// Every phone in a dictionary has exactly one type. Consonants sharing a
/// type are "partners"; partners that also share voicing are a "family".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PhoneType {
    /// Vowels, always voiced
    Vowel,
    /// Plosives (`P B T D K G`)
    Stop,
    /// `CH JH`
    Affricate,
    /// `F V TH DH S Z SH ZH`
    Fricative,
    /// `HH`
    Aspirate,
    /// `L R`
    Liquid,
    /// `M N NG`
    Nasal,
    /// `W Y`
    Semivowel,
}

impl PhoneType {
    /// All categories, vowels first.
    pub const ALL: [PhoneType; 8] = [
        PhoneType::Vowel,
        PhoneType::Stop,
        PhoneType::Affricate,
        PhoneType::Fricative,
        PhoneType::Aspirate,
        PhoneType::Liquid,
        PhoneType::Nasal,
        PhoneType::Semivowel,
    ];

    /// Lowercase name as written in phone-type tables.
    pub fn name(&self) -> &'static str {
        match self {
            PhoneType::Vowel => "vowel",
            PhoneType::Stop => "stop",
            PhoneType::Affricate => "affricate",
            PhoneType::Fricative => "fricative",
            PhoneType::Aspirate => "aspirate",
            PhoneType::Liquid => "liquid",
            PhoneType::Nasal => "nasal",
            PhoneType::Semivowel => "semivowel",
        }
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PhoneType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhoneType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown phone type: {}. Valid options: vowel, stop, affricate, fricative, aspirate, liquid, nasal, semivowel",
                    s
                )
            })
    }
}
