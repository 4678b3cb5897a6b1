//! Phonetic model: phones, stress markers and the phone taxonomy.
//!
//! # Usage
//!
//! ```rust
//! use librhyme::phonetic::{Phone, PhoneTaxonomy, PhoneType, PhoneTypeTable};
//!
//! let table: PhoneTypeTable = [
//!     ("AO", PhoneType::Vowel),
//!     ("G", PhoneType::Stop),
//!     ("K", PhoneType::Stop),
//!     ("D", PhoneType::Stop),
//! ]
//! .into_iter()
//! .collect();
//! let taxonomy = PhoneTaxonomy::new(table);
//!
//! assert!(taxonomy.is_vowel(&Phone::new("AO1")));
//! assert!(taxonomy.family(&Phone::new("G")).contains(&Phone::new("D")));
//! assert!(!taxonomy.family(&Phone::new("G")).contains(&Phone::new("K")));
//! assert!(taxonomy.partners(&Phone::new("G")).contains(&Phone::new("K")));
//! ```

pub mod taxonomy;
pub mod types;

pub use taxonomy::{PhoneTaxonomy, PhoneTypeTable, VOICED_CONSONANTS};
pub use types::{phones, Phone, PhoneType, Stress, STRESSED_MARKERS};
