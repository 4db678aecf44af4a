//! Error types for loading dictionaries, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! - D001: `Io` (Dictionary file could not be read)
//! - D002: `Empty` (Dictionary contains no usable words)
//!
//! The solving core itself never fails: unknown words, contradictory hints and
//! degenerate cryptograms all produce an answer (possibly a very ambiguous one).
//!
//! # Examples
//!
//! ```
//! use cryptogram::Dictionary;
//!
//! match Dictionary::load_from_path("/definitely/not/here.txt") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "D001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while turning a word file into a [`crate::Dictionary`].
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary from '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary '{}' contains no usable words", path.display())]
    Empty { path: PathBuf },
}

impl DictionaryError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "D001",
            DictionaryError::Empty { .. } => "D002",
        }
    }

    /// Returns a short description of this error type
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "Dictionary file could not be read",
            DictionaryError::Empty { .. } => "Dictionary contains no usable words",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            DictionaryError::Io { .. } => Some("Pass a readable word list with --dictionary (e.g. words_alpha.txt from dwyl/english-words)"),
            DictionaryError::Empty { .. } => Some("The word list needs one alphabetic word per line; lines with digits or punctuation are skipped"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

impl From<DictionaryError> for io::Error {
    fn from(de: DictionaryError) -> Self {
        match de {
            DictionaryError::Io { source, .. } => source,
            empty @ DictionaryError::Empty { .. } => io::Error::new(io::ErrorKind::InvalidData, empty.to_string()),
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<DictionaryError> {
        vec![
            DictionaryError::Io {
                path: PathBuf::from("missing.txt"),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            },
            DictionaryError::Empty { path: PathBuf::from("blank.txt") },
        ]
    }

    #[test]
    fn test_error_codes_are_unique_and_well_formed() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{code}' should be 4 characters (D0XX)");
            assert!(code.starts_with("D0"), "Error code '{code}' should start with 'D0'");
            assert!(codes.insert(code), "Duplicate error code found: {code}");
        }
    }

    #[test]
    fn test_display_detailed_includes_code_path_and_help() {
        for err in all_variants() {
            let detailed = err.display_detailed();
            assert!(detailed.contains(err.code()), "Detailed display should include error code");
            assert!(detailed.contains(".txt"), "Detailed display should name the file");
            if let Some(help) = err.help() {
                assert!(detailed.contains(help), "Detailed display should include help text");
            }
        }
    }

    #[test]
    fn test_io_error_keeps_source_kind() {
        let err = DictionaryError::Io {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("no such file"));
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_format_without_help() {
        assert_eq!(format_error_with_code_and_help("boom", "D009", None), "boom (D009)");
    }
}
