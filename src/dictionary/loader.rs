//! Text parsers for CMUdict-style pronunciation dictionaries and phone-type
//! tables.
//!
//! Pronunciation lines look like `WORD  PH PH PH`. Lines starting with
//! `;;;` are comments, and a trailing `# ...` comment is ignored. Alternate
//! pronunciations (`WORD(1)`) are skipped so every word keeps exactly one
//! canonical pronunciation.
//!
//! Phone-type lines look like `AA<tab>vowel`.

use super::error::{LexiconError, Result};
use crate::phonetic::{Phone, PhoneTypeTable};
use std::io::BufRead;
use tracing::{trace, warn};

/// The 39-phone ARPABET inventory used by CMUdict, one `PHONE<tab>type`
/// line per phone.
pub const CMUDICT_PHONES: &str = include_str!("../../data/cmudict.phones");

/// Phone-type table for [`CMUDICT_PHONES`].
pub fn cmudict_phone_types() -> Result<PhoneTypeTable> {
    parse_phone_types(CMUDICT_PHONES.as_bytes())
}

/// Parse a pronunciation dictionary into `(WORD, phones)` pairs.
///
/// Words are uppercased. Lines with a word but no phones are logged and
/// skipped; I/O failures are returned.
pub fn parse_pronunciations<R: BufRead>(reader: R) -> Result<Vec<(String, Vec<Phone>)>> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let content = strip_comment(&line);
        if content.is_empty() {
            continue;
        }

        let mut fields = content.split_whitespace();
        let word = match fields.next() {
            Some(word) => word,
            None => continue,
        };
        if is_alternate(word) {
            trace!(line = index + 1, word, "skipping alternate pronunciation");
            continue;
        }

        let phones: Vec<Phone> = fields.map(Phone::new).collect();
        if phones.is_empty() {
            warn!(line = index + 1, word, "skipping entry without phones");
            continue;
        }
        entries.push((word.to_uppercase(), phones));
    }

    Ok(entries)
}

/// Parse a phone-type table.
///
/// Unknown type names and lines without exactly two fields are errors,
/// since a mistyped phone would silently change every rhyme rule.
pub fn parse_phone_types<R: BufRead>(reader: R) -> Result<PhoneTypeTable> {
    let mut table = PhoneTypeTable::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let content = strip_comment(&line);
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content.split_whitespace().collect();
        let [phone, name] = fields.as_slice() else {
            return Err(LexiconError::MalformedLine {
                line: index + 1,
                content: line.clone(),
            });
        };
        let phone_type = name.parse().map_err(|_| LexiconError::UnknownPhoneType {
            line: index + 1,
            name: name.to_string(),
        })?;
        table.insert(Phone::new(&phone.to_uppercase()), phone_type);
    }

    Ok(table)
}

fn strip_comment(line: &str) -> &str {
    let line = line.trim();
    if line.starts_with(";;;") {
        return "";
    }
    match line.find('#') {
        Some(pos) => line[..pos].trim_end(),
        None => line,
    }
}

/// `WORD(1)`, `WORD(2)`, ...
fn is_alternate(word: &str) -> bool {
    word.strip_suffix(')')
        .and_then(|rest| rest.rsplit_once('('))
        .is_some_and(|(stem, n)| {
            !stem.is_empty() && !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit())
        })
}
