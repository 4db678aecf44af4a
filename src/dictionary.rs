//! `dictionary` — load and normalize the word list the solver matches against
//!
//! The dictionary can be built from an in-memory string (WASM-friendly, no file
//! I/O) or, on native builds, read from a path.
//!
//! The parsing logic:
//! - The input is split on whitespace, so one-word-per-line files and
//!   space-separated lists both work.
//! - Every word is normalized to lowercase.
//! - Words containing anything other than ASCII letters (digits, apostrophes,
//!   hyphens, accented letters) are skipped; templates are only defined over a-z.
//! - Duplicates collapse; iteration is alphabetical.

use std::collections::BTreeSet;

use crate::errors::DictionaryError;

/// The set of known words, lowercase and alphabetic only.
///
/// Built once at startup and only read afterward; a solver borrows it for
/// template indexing and for counting recognized words when grading answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    /// Parse a raw word list from an in-memory string.
    ///
    /// Never fails: unusable tokens are dropped, and an input with no usable
    /// words yields an empty dictionary.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> Dictionary {
        contents.split_whitespace().collect()
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file can't be read, and
    /// [`DictionaryError::Empty`] if it holds no usable words.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Dictionary, DictionaryError> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|source| DictionaryError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;

        let dictionary = Self::parse_from_str(&data);
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty { path: path_ref.to_path_buf() });
        }

        log::info!("Loaded {} words from {}", dictionary.len(), path_ref.display());
        Ok(dictionary)
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(&word.to_ascii_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Add one word; returns `false` if it was unusable or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        self.words.insert(word.to_ascii_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut dictionary = Dictionary::default();
        for word in iter {
            dictionary.insert(word);
        }
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let dictionary = Dictionary::parse_from_str("the\ncat\nsat");
        assert_eq!(dictionary.iter().collect::<Vec<_>>(), vec!["cat", "sat", "the"]);
    }

    #[test]
    fn test_parse_normalizes_to_lowercase_and_dedups() {
        let dictionary = Dictionary::parse_from_str("CAT\nCat\ncat\nDog");
        assert_eq!(dictionary.iter().collect::<Vec<_>>(), vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_skips_non_alphabetic_words() {
        let dictionary = Dictionary::parse_from_str("can't\nco-op\nabc123\nnaïve\nok");
        assert_eq!(dictionary.iter().collect::<Vec<_>>(), vec!["ok"]);
    }

    #[test]
    fn test_parse_handles_blank_lines_and_spaces() {
        let dictionary = Dictionary::parse_from_str("\n\n  the   cat \r\n\n sat\n");
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(Dictionary::parse_from_str("").is_empty());
        assert!(Dictionary::parse_from_str("123 4-5").is_empty());
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let dictionary = Dictionary::parse_from_str("apple");
        assert!(dictionary.contains("apple"));
        assert!(dictionary.contains("Apple"));
        assert!(dictionary.contains("APPLE"));
        assert!(!dictionary.contains("apples"));
    }

    #[test]
    fn test_load_missing_file_is_d001() {
        let err = Dictionary::load_from_path("/nonexistent/dir/words.txt").unwrap_err();
        assert_eq!(err.code(), "D001");
    }

    #[test]
    fn test_load_fixture() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/small_dictionary.txt");
        let dictionary = Dictionary::load_from_path(path).unwrap();
        assert!(dictionary.contains("the"));
        assert!(dictionary.len() > 50);
    }
}
