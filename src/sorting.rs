//! Order tickets within a column.
//!
//! Both orderings are stable and non-destructive: the input slice is left as
//! is and tickets that compare equal keep their input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Ticket;

/// Dimension used to order tickets inside a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortingKey {
    #[default]
    Priority,
    Title,
}

impl SortingKey {
    pub const ALL: [SortingKey; 2] = [SortingKey::Priority, SortingKey::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortingKey::Priority => "priority",
            SortingKey::Title => "title",
        }
    }
}

impl fmt::Display for SortingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortingKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "priority" => Ok(SortingKey::Priority),
            "title" => Ok(SortingKey::Title),
            other => Err(Error::InvalidArgument(format!(
                "unknown sorting '{other}' (expected priority|title)"
            ))),
        }
    }
}

/// Return a reordered copy of `tickets`.
///
/// `Priority` puts the highest priority first; `Title` is ascending under
/// [`compare_titles`].
pub fn sort_tickets<'a>(tickets: &[&'a Ticket], key: SortingKey) -> Vec<&'a Ticket> {
    match key {
        SortingKey::Priority => {
            let mut sorted = tickets.to_vec();
            sorted.sort_by(|left, right| right.priority.cmp(&left.priority));
            sorted
        }
        SortingKey::Title => {
            let mut keyed: Vec<(CollationKey, &'a Ticket)> = tickets
                .iter()
                .map(|ticket| (CollationKey::new(&ticket.title), *ticket))
                .collect();
            keyed.sort_by(|left, right| left.0.cmp(&right.0));
            keyed.into_iter().map(|(_, ticket)| ticket).collect()
        }
    }
}

/// Compare two titles the way people alphabetize them.
///
/// Letters compare ignoring case and accents first ("apple" < "Banana" <
/// "cherry", "Æble" < "Zebra", "Strasse" next to "Straße"). Punctuation and
/// spaces sort before digits, digits before letters. Remaining ties are
/// broken by accents, then by case ("a" < "á", "a" < "A").
pub fn compare_titles(left: &str, right: &str) -> Ordering {
    CollationKey::new(left).cmp(&CollationKey::new(right))
}

/// Primary weight class of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Symbol,
    Digit,
    Letter,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_alphabetic() {
            CharClass::Letter
        } else if ch.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Symbol
        }
    }
}

/// Field order is comparison order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    base: Vec<(CharClass, char)>,
    accents: Vec<char>,
    case: Vec<bool>,
}

impl CollationKey {
    fn new(text: &str) -> Self {
        let accents: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
        let mut base = Vec::with_capacity(accents.len());
        for ch in &accents {
            push_base(*ch, &mut base);
        }
        let case = text.chars().map(char::is_uppercase).collect();
        Self {
            base,
            accents,
            case,
        }
    }
}

/// Append the primary weights of a lower-case character.
fn push_base(ch: char, out: &mut Vec<(CharClass, char)>) {
    let expansion = match ch {
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'þ' => "th",
        'ĳ' => "ij",
        _ => {
            let base = strip_accent(ch);
            out.push((CharClass::of(base), base));
            return;
        }
    };
    out.extend(expansion.chars().map(|letter| (CharClass::Letter, letter)));
}

/// Base letter for lower-case Latin letters with diacritics.
fn strip_accent(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' | 'ǎ' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' | 'ð' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' | 'ǐ' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' | 'ǒ' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' | 'ș' => 's',
        'ţ' | 'ť' | 'ŧ' | 'ț' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' | 'ǔ' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
