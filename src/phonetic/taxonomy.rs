//! Phone classification: vowels, voicing, consonant families and partners.
//!
//! The taxonomy is built once from a [`PhoneTypeTable`] and answers pure
//! queries afterwards. Lookups go through the phone's base symbol, so a
//! table listing `AO` classifies `AO0`, `AO1` and `AO2` alike.

use super::types::{Phone, PhoneType};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Consonants produced with vocal-fold vibration. Every vowel is voiced too.
pub const VOICED_CONSONANTS: [&str; 15] = [
    "B", "D", "DH", "G", "JH", "L", "M", "N", "NG", "R", "V", "W", "Y", "Z", "ZH",
];

static NO_PHONES: BTreeSet<Phone> = BTreeSet::new();

/// Mapping from phone symbol to its [`PhoneType`].
///
/// Keys are stored without stress digits.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PhoneTypeTable {
    types: FxHashMap<Phone, PhoneType>,
}

impl PhoneTypeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a type to a phone, returning the previous type if any.
    pub fn insert(&mut self, phone: Phone, phone_type: PhoneType) -> Option<PhoneType> {
        self.types.insert(phone.unstressed(), phone_type)
    }

    /// Type of a phone, ignoring its stress digit.
    pub fn get(&self, phone: &Phone) -> Option<PhoneType> {
        self.types
            .get(phone)
            .or_else(|| self.types.get(&Phone::new(phone.base())))
            .copied()
    }

    /// Number of typed phones.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over `(phone, type)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Phone, PhoneType)> + '_ {
        self.types.iter().map(|(phone, t)| (phone, *t))
    }

    /// Inverse view: every phone of each type.
    pub fn by_type(&self) -> FxHashMap<PhoneType, BTreeSet<Phone>> {
        let mut inverse: FxHashMap<PhoneType, BTreeSet<Phone>> = FxHashMap::default();
        for (phone, phone_type) in self.iter() {
            inverse.entry(phone_type).or_default().insert(phone.clone());
        }
        inverse
    }
}

impl<P: Into<Phone>> FromIterator<(P, PhoneType)> for PhoneTypeTable {
    fn from_iter<I: IntoIterator<Item = (P, PhoneType)>>(iter: I) -> Self {
        let mut table = PhoneTypeTable::new();
        for (phone, phone_type) in iter {
            table.insert(phone.into(), phone_type);
        }
        table
    }
}

/// Classification queries over a fixed phone alphabet.
///
/// Consonant families group consonants by `(type, voiced)`; partners group
/// them by type alone. Both sets contain the queried consonant itself.
#[derive(Debug, Clone)]
pub struct PhoneTaxonomy {
    table: PhoneTypeTable,
    vowels: BTreeSet<Phone>,
    consonants: BTreeSet<Phone>,
    families: FxHashMap<(PhoneType, bool), BTreeSet<Phone>>,
    partners: FxHashMap<PhoneType, BTreeSet<Phone>>,
}

impl PhoneTaxonomy {
    /// Partition the table by `(type, voiced)` in a single pass.
    pub fn new(table: PhoneTypeTable) -> Self {
        let mut vowels = BTreeSet::new();
        let mut consonants = BTreeSet::new();
        let mut families: FxHashMap<(PhoneType, bool), BTreeSet<Phone>> = FxHashMap::default();
        let mut partners: FxHashMap<PhoneType, BTreeSet<Phone>> = FxHashMap::default();

        for (phone, phone_type) in table.iter() {
            if phone_type == PhoneType::Vowel {
                vowels.insert(phone.clone());
                continue;
            }
            consonants.insert(phone.clone());
            let voiced = VOICED_CONSONANTS.contains(&phone.base());
            families
                .entry((phone_type, voiced))
                .or_default()
                .insert(phone.clone());
            partners.entry(phone_type).or_default().insert(phone.clone());
        }

        Self {
            table,
            vowels,
            consonants,
            families,
            partners,
        }
    }

    /// The table this taxonomy was built from.
    pub fn table(&self) -> &PhoneTypeTable {
        &self.table
    }

    /// Type of a phone, if the table knows it.
    #[inline]
    pub fn phone_type(&self, phone: &Phone) -> Option<PhoneType> {
        self.table.get(phone)
    }

    /// Whether the phone is a vowel. Untyped phones are not.
    #[inline]
    pub fn is_vowel(&self, phone: &Phone) -> bool {
        self.phone_type(phone) == Some(PhoneType::Vowel)
    }

    /// Whether the phone is a consonant (`!is_vowel`).
    #[inline]
    pub fn is_consonant(&self, phone: &Phone) -> bool {
        !self.is_vowel(phone)
    }

    /// Vowels are always voiced; consonants only when listed in
    /// [`VOICED_CONSONANTS`].
    pub fn is_voiced(&self, phone: &Phone) -> bool {
        self.is_vowel(phone) || VOICED_CONSONANTS.contains(&phone.base())
    }

    /// Consonants sharing this consonant's type and voicing.
    ///
    /// The argument must be a consonant. Passing a vowel is a caller bug; it
    /// trips a debug assertion and yields an empty set in release builds.
    pub fn family(&self, consonant: &Phone) -> &BTreeSet<Phone> {
        debug_assert!(
            self.is_consonant(consonant),
            "family() called on vowel {}",
            consonant
        );
        self.phone_type(consonant)
            .and_then(|t| self.families.get(&(t, self.is_voiced(consonant))))
            .unwrap_or(&NO_PHONES)
    }

    /// Consonants sharing this consonant's type, any voicing.
    ///
    /// Same precondition as [`family`](Self::family).
    pub fn partners(&self, consonant: &Phone) -> &BTreeSet<Phone> {
        debug_assert!(
            self.is_consonant(consonant),
            "partners() called on vowel {}",
            consonant
        );
        self.phone_type(consonant)
            .and_then(|t| self.partners.get(&t))
            .unwrap_or(&NO_PHONES)
    }

    /// Vowel symbols of the alphabet, without stress digits.
    pub fn vowels(&self) -> &BTreeSet<Phone> {
        &self.vowels
    }

    /// Consonant symbols of the alphabet.
    pub fn consonants(&self) -> &BTreeSet<Phone> {
        &self.consonants
    }
}

impl From<PhoneTypeTable> for PhoneTaxonomy {
    fn from(table: PhoneTypeTable) -> Self {
        PhoneTaxonomy::new(table)
    }
}
