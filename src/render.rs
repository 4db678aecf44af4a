//! Turn a candidate mapping back into readable text.
//!
//! Non-letters are copied through. A resolved letter is written in the case of
//! the ciphertext letter it replaces. An unresolved letter is written as its
//! candidates in brackets (`[ah]`), or as a count when more than
//! [`MAX_LISTED_CANDIDATES`] remain (`[26]`).
//!
//! [`crate::score::grade`] reads this format back, so the two change together.

use crate::alphabet::CipherChar;
use crate::mapping::CandidateMapping;

/// Above this many candidates a letter is rendered as a count.
pub const MAX_LISTED_CANDIDATES: usize = 5;

/// Render `cryptogram` through `mapping`.
#[must_use]
pub fn render(cryptogram: &str, mapping: &CandidateMapping) -> String {
    let mut rendered = String::with_capacity(cryptogram.len());

    for c in cryptogram.chars() {
        if !c.is_cipher_letter() {
            rendered.push(c);
            continue;
        }

        let candidates = mapping.candidates_for(c);
        if let Some(plain) = candidates.only() {
            rendered.push(plain.with_case_of(c));
            continue;
        }

        rendered.push('[');
        if candidates.len() > MAX_LISTED_CANDIDATES {
            rendered.push_str(&candidates.len().to_string());
        } else {
            rendered.extend(candidates.iter().map(|plain| plain.with_case_of(c)));
        }
        rendered.push(']');
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::LetterSet;

    #[test]
    fn test_resolved_letters_keep_case() {
        let mapping = CandidateMapping::hint('b', 't').with_candidate('q', 'h').with_candidate('r', 'e');
        assert_eq!(render("Bqr", &mapping), "The");
        assert_eq!(render("BQR rqb", &mapping), "THE eht");
    }

    #[test]
    fn test_unresolved_letters_are_bracketed() {
        let mapping = CandidateMapping::new()
            .with_candidate('b', 't')
            .with_candidate('b', 'c')
            .with_candidate('q', 'a')
            .with_candidate('q', 'h')
            .with_candidate('r', 'e')
            .with_candidate('r', 't');
        assert_eq!(render("Bqr", &mapping), "[CT][ah][et]");
    }

    #[test]
    fn test_many_candidates_render_as_count() {
        let mut mapping = CandidateMapping::new();
        mapping.set('x', "abcdef".chars().collect());
        mapping.set('y', "abcde".chars().collect());
        assert_eq!(render("xy", &mapping), "[6][abcde]");
        assert_eq!(render("qzx", &CandidateMapping::new()), "[26][26][26]");
    }

    #[test]
    fn test_full_set_renders_like_absent() {
        let mut mapping = CandidateMapping::new();
        mapping.set('q', LetterSet::FULL);
        assert_eq!(render("q", &mapping), render("q", &CandidateMapping::new()));
    }

    #[test]
    fn test_non_letters_pass_through() {
        let mapping = CandidateMapping::hint('a', 'i');
        assert_eq!(render("A, a! - 42 'a'", &mapping), "I, i! - 42 'i'");
        assert_eq!(render("", &mapping), "");
        assert_eq!(render("... 123 ---", &CandidateMapping::new()), "... 123 ---");
    }
}
