//! Case-agnostic identifiers.
//!
//! An [`Identifier`] is the sequence of words found in a raw label, stored in
//! lowercase. It can be rendered in any [`CaseStyle`], provided every word is
//! a plain ASCII alphanumeric token.

use convert_case::{Boundary, Case, Converter};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::CaseConversionError;

/// Casing styles an identifier can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// `power_state`
    Snake,
    /// `PowerState`
    Pascal,
    /// `powerState`
    Camel,
    /// `POWER_STATE`
    ScreamingSnake,
}

impl CaseStyle {
    fn case(self) -> Case {
        match self {
            CaseStyle::Snake => Case::Snake,
            CaseStyle::Pascal => Case::Pascal,
            CaseStyle::Camel => Case::Camel,
            CaseStyle::ScreamingSnake => Case::ScreamingSnake,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::Snake => "snake_case",
            CaseStyle::Pascal => "PascalCase",
            CaseStyle::Camel => "camelCase",
            CaseStyle::ScreamingSnake => "SCREAMING_SNAKE_CASE",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name made of case-agnostic words
///
/// Two identifiers are equal when their words are equal, whatever casing
/// they were parsed from: `PowerState`, `power_state` and `power-state` are
/// the same identifier.
#[derive(Debug, Clone)]
pub struct Identifier {
    words: Vec<String>,
    raw: String,
}

impl Identifier {
    /// Extract the words of a raw label
    ///
    /// `_`, `-` and whitespace separate words, as does a lowercase-to-uppercase
    /// transition. In a run of capitals followed by a lowercase letter the last
    /// capital starts a new word (`HTTPServer` is `http`, `server`). Digits stay
    /// attached to the word before them, so `v1_0_0` is `v1`, `0`, `0`.
    pub fn parse(raw: &str) -> Self {
        Self {
            words: split_words(raw),
            raw: raw.to_string(),
        }
    }

    /// Build an identifier from words that are already split
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        let raw = words.join("_");
        Self { words, raw }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The label this identifier was parsed from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Render the identifier in `style`
    ///
    /// Fails when there is nothing to render, when a word holds a character
    /// other than an ASCII letter or digit, or when the first word starts
    /// with a digit.
    pub fn to_case(&self, style: CaseStyle) -> Result<String, CaseConversionError> {
        let convertible = match self.words.first() {
            Some(first) => {
                !first.starts_with(|c: char| c.is_ascii_digit())
                    && self
                        .words
                        .iter()
                        .all(|w| w.chars().all(|c| c.is_ascii_alphanumeric()))
            }
            None => false,
        };

        if !convertible {
            return Err(CaseConversionError::new(style.name(), self.raw.clone()));
        }

        let converter = Converter::new()
            .set_boundaries(&[Boundary::Underscore])
            .to_case(style.case());
        Ok(converter.convert(self.words.join("_")))
    }

    pub fn to_snake_case(&self) -> Result<String, CaseConversionError> {
        self.to_case(CaseStyle::Snake)
    }

    pub fn to_pascal_case(&self) -> Result<String, CaseConversionError> {
        self.to_case(CaseStyle::Pascal)
    }
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

fn split_words(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c) {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        // A non-empty word means the previous char exists and was not a separator
        if !current.is_empty() && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars
                .get(i + 1)
                .map_or(false, |n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);

            if boundary {
                words.push(current.to_lowercase());
                current.clear();
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words.hash(state);
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.words.cmp(&other.words)
    }
}

/// Words joined with `_`, without validating them
impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join("_"))
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

const STRICT_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "macro", "override",
    "priv", "try", "typeof", "unsized", "virtual", "yield",
];

// These cannot be raw identifiers. `Self` only reaches here as a raw
// PascalCase string; rendered module names are lowercase.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "super", "Self"];

/// Make a rendered name usable as a Rust identifier
///
/// Takes any rendered string, not only snake_case module names.
pub fn escape_reserved_keyword(name: &str) -> String {
    if PATH_KEYWORDS.contains(&name) {
        format!("{}_", name)
    } else if STRICT_KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}
