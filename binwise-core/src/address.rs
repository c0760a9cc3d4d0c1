//! Parsing of free-text street addresses into comparable parts.

use serde::{Deserialize, Serialize};

/// Street-type words dropped during normalization, full and abbreviated forms.
const STREET_SUFFIXES: [&str; 23] = [
    "street",
    "st",
    "avenue",
    "ave",
    "road",
    "rd",
    "drive",
    "dr",
    "lane",
    "ln",
    "circle",
    "cir",
    "court",
    "ct",
    "place",
    "pl",
    "boulevard",
    "blvd",
    "parkway",
    "pkwy",
    "terrace",
    "ter",
    "way",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// House number and normalized street name of an address.
pub struct NormalizedAddress {
    /// Leading house number, absent when the address does not start with digits.
    pub number: Option<u32>,
    /// Lower-cased street name without street-type words.
    pub street: String,
}

/// Split a raw address such as `"123 Main St."` into number and normalized street.
///
/// Never fails: an address without a leading number yields `number: None`, and an
/// address that is only a number yields an empty street.
#[must_use]
pub fn normalize_address(raw: &str) -> NormalizedAddress {
    let trimmed = raw.trim();
    let digits = trimmed
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (number_part, street_part) = trimmed.split_at(digits);

    NormalizedAddress {
        // Overlong digit runs cannot be a house number.
        number: number_part.parse().ok(),
        street: normalize_street(street_part),
    }
}

/// Normalize a street name so that `"Main Street"`, `"main st."` and `"MAIN"` compare equal.
#[must_use]
pub fn normalize_street(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut kept = String::with_capacity(lowered.len());
    let mut remaining = lowered.as_str();

    while !remaining.is_empty() {
        let word_len = remaining
            .find(|ch: char| !is_word_char(ch))
            .unwrap_or(remaining.len());

        if word_len == 0 {
            let separator_len = remaining.find(is_word_char).unwrap_or(remaining.len());
            let (separator, tail) = remaining.split_at(separator_len);
            kept.push_str(separator);
            remaining = tail;
            continue;
        }

        let (word, tail) = remaining.split_at(word_len);
        if STREET_SUFFIXES.contains(&word) {
            remaining = tail.strip_prefix('.').unwrap_or(tail);
        } else {
            kept.push_str(word);
            remaining = tail;
        }
    }

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
