//! Word templates: the letter-repetition signature of a word.
//!
//! The first distinct letter of a word becomes `a`, the second `b`, and so on,
//! in order of first appearance:
//!
//! ```
//! use cryptogram::template::canonicalize;
//!
//! assert_eq!(canonicalize("apple").as_str(), "abbcd");
//! assert_eq!(canonicalize("encyclopedia").as_str(), "abcdcefgahij");
//! assert_eq!(canonicalize("apple"), canonicalize("addle"));
//! ```
//!
//! A substitution cipher preserves templates, so a ciphertext word can only
//! decrypt to dictionary words that share its template.

use std::collections::HashMap;
use std::fmt;

use crate::alphabet::{letter_at, letter_index, ALPHABET_SIZE};
use crate::dictionary::Dictionary;

/// Canonical letter-repetition pattern of a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Template(String);

impl Template {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the templated word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the template of `word` (case-insensitive).
///
/// Callers pass alphabetic words only; any other character is skipped so it
/// can't disturb the symbols of the letters around it.
#[must_use]
pub fn canonicalize(word: &str) -> Template {
    let mut symbols: [Option<char>; ALPHABET_SIZE] = [None; ALPHABET_SIZE];
    let mut next_symbol = 0;
    let mut template = String::with_capacity(word.len());

    for idx in word.chars().filter_map(letter_index) {
        let symbol = *symbols[idx].get_or_insert_with(|| {
            let symbol = letter_at(next_symbol);
            next_symbol += 1;
            symbol
        });
        template.push(symbol);
    }

    debug_assert!(next_symbol <= ALPHABET_SIZE, "a word has at most 26 distinct letters");
    Template(template)
}

/// Every dictionary word grouped by template.
///
/// Built once from a [`Dictionary`]; read-only afterward, so it can be shared
/// freely across solving attempts.
#[derive(Debug, Clone, Default)]
pub struct TemplateIndex {
    buckets: HashMap<Template, Vec<String>>,
}

impl TemplateIndex {
    /// Group every dictionary word by its template. Words within a bucket keep
    /// the dictionary's alphabetical order.
    #[must_use]
    pub fn build(dictionary: &Dictionary) -> TemplateIndex {
        let mut buckets: HashMap<Template, Vec<String>> = HashMap::new();
        for word in dictionary.iter() {
            buckets.entry(canonicalize(word)).or_default().push(word.to_string());
        }

        log::debug!("Indexed {} words under {} templates", dictionary.len(), buckets.len());
        TemplateIndex { buckets }
    }

    /// Dictionary words sharing `template`; empty when none do.
    #[must_use]
    pub fn lookup(&self, template: &Template) -> &[String] {
        self.buckets.get(template).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
