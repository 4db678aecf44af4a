//! Integration tests for the cryptogram solver.
//!
//! These run the public pipeline end to end: load a word list, build a solver,
//! encrypt text with a known key and check what the solver can recover.

use std::path::PathBuf;

use cryptogram::encrypt::{encrypt_with_key, SubstitutionKey};
use cryptogram::errors::DictionaryError;
use cryptogram::hints;
use cryptogram::score::grade;
use cryptogram::{CandidateMapping, CryptogramSolver, Dictionary, Score};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/small_dictionary.txt")
}

/// Solver over the fixture word list
fn fixture_solver() -> CryptogramSolver {
    let dictionary = Dictionary::load_from_path(fixture_path()).expect("fixture dictionary should load");
    CryptogramSolver::new(dictionary)
}

/// Key that replaces each letter with the one `by` places later, wrapping.
fn shift_key(by: u8) -> SubstitutionKey {
    let mut key = ['a'; 26];
    for (idx, slot) in key.iter_mut().enumerate() {
        *slot = char::from(b'a' + (idx as u8 + by) % 26);
    }
    key
}

/// Ciphertext letter that `plain` encrypts to under `key`.
fn cipher_of(key: &SubstitutionKey, plain: char) -> char {
    key[usize::from(plain.to_ascii_lowercase() as u8 - b'a')]
}

#[cfg(test)]
mod dictionary_loading {
    use super::*;

    #[test]
    fn test_fixture_loads_normalized_words() {
        let dictionary = Dictionary::load_from_path(fixture_path()).unwrap();
        assert!(dictionary.len() > 100);
        assert!(dictionary.contains("the"));
        assert!(dictionary.contains("The"), "lookups should ignore case");
        assert!(!dictionary.contains("zebra"));
    }

    #[test]
    fn test_missing_file_is_d001() {
        let err = Dictionary::load_from_path("tests/fixtures/no_such_dictionary.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert_eq!(err.code(), "D001");
        assert!(err.display_detailed().contains("D001"));
    }

    #[test]
    fn test_file_without_usable_words_is_d002() {
        let path = std::env::temp_dir().join(format!("cryptogram-empty-{}.txt", std::process::id()));
        std::fs::write(&path, "123\ncan't\n\n  co-op\n").unwrap();

        let err = Dictionary::load_from_path(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(err, DictionaryError::Empty { .. }));
        assert_eq!(err.code(), "D002");
    }
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_word_without_template_match_stays_unconstrained() {
        // no word in the fixture has the template "abba"
        let solver = fixture_solver();
        let mapping = solver.solve("qzzq", &CandidateMapping::new());
        assert!(mapping.is_empty());

        let attempt = solver.attempt("qzzq", &CandidateMapping::new(), 0);
        assert_eq!(attempt.answer, "[26][26][26][26]");
        assert_eq!(attempt.score, Score::new(104, 0));
    }

    #[test]
    fn test_two_word_dictionary_leaves_three_choices_open() {
        let solver = CryptogramSolver::new(Dictionary::parse_from_str("the\ncat"));
        let mapping = solver.solve("Bqr", &CandidateMapping::new());

        assert_eq!(mapping.candidates_for('b').to_string(), "ct");
        assert_eq!(mapping.candidates_for('q').to_string(), "ah");
        assert_eq!(mapping.candidates_for('r').to_string(), "et");
        assert_eq!(solver.attempt("Bqr", &CandidateMapping::new(), 0).answer, "[CT][ah][et]");
    }

    #[test]
    fn test_hints_pick_a_full_reading() {
        let solver = CryptogramSolver::new(Dictionary::parse_from_str("the\ncat"));
        let best = solver.find_best("Bqr");
        assert_eq!(best.answer, "The");
        assert_eq!(best.score, Score::new(0, 1));
    }

    #[test]
    fn test_degenerate_input() {
        let solver = fixture_solver();
        assert_eq!(solver.find_best_solution(""), "");
        assert_eq!(solver.find_best_solution("   "), "   ");
        assert_eq!(solver.find_best_solution("1, 2, 3!"), "1, 2, 3!");
    }

    #[test]
    fn test_bracketed_digits_in_the_text_pass_through() {
        let solver = CryptogramSolver::new(Dictionary::parse_from_str("the cat"));
        let digits = "[123456789012345678901234567890]";
        let best = solver.find_best(&format!("Bqr {digits}"));

        assert!(best.answer.ends_with(&format!(" {digits}")), "got {:?}", best.answer);
        assert_eq!(best.score.ambiguity, usize::MAX);
    }
}

#[cfg(test)]
mod encrypt_then_solve {
    use super::*;

    const PLAINTEXT: &str = "The cat sat on the mat, and the dog can see them.";

    #[test]
    fn test_encryption_keeps_layout() {
        let cryptogram = encrypt_with_key(PLAINTEXT, &shift_key(3));
        assert_eq!(cryptogram, "Wkh fdw vdw rq wkh pdw, dqg wkh grj fdq vhh wkhp.");
    }

    #[test]
    fn test_true_letters_survive_propagation() {
        // every plaintext word is in the dictionary, so narrowing never drops
        // the true reading of a ciphertext letter
        let key = shift_key(3);
        let cryptogram = encrypt_with_key(PLAINTEXT, &key);
        let solver = fixture_solver();

        let seeds = [CandidateMapping::new(), CandidateMapping::hint(cipher_of(&key, 't'), 't')];
        for seed in &seeds {
            let mapping = solver.solve(&cryptogram, seed);
            for plain in PLAINTEXT.chars().filter(char::is_ascii_alphabetic) {
                let cipher = cipher_of(&key, plain);
                assert!(
                    mapping.candidates_for(cipher).contains(plain.to_ascii_lowercase()),
                    "{cipher} lost its true reading {plain} (seed {seed}, mapping {mapping})"
                );
            }
        }
    }

    #[test]
    fn test_best_is_at_least_as_good_as_every_seed() {
        let cryptogram = encrypt_with_key(PLAINTEXT, &shift_key(11));
        let solver = fixture_solver();
        let seeds = hints::generate(&cryptogram);
        let best = solver.find_best_solution_with_hints(&cryptogram, &seeds);

        for (seed_index, seed) in seeds.iter().enumerate() {
            let attempt = solver.attempt(&cryptogram, seed, seed_index);
            assert!(
                !attempt.score.is_better(&best.score),
                "seed {seed_index} ({}) beats the reported best ({})",
                attempt.score,
                best.score
            );
        }
        assert_eq!(best.score, grade(&best.answer, solver.dictionary()));
    }

    #[test]
    fn test_search_recovers_most_of_the_plaintext() {
        let cryptogram = encrypt_with_key(PLAINTEXT, &shift_key(3));
        let best = fixture_solver().find_best(&cryptogram);

        assert!(best.answer.starts_with("The cat sat"), "got {:?}", best.answer);
        assert!(best.score.recognized_words >= 9, "only {} for {:?}", best.score, best.answer);
    }

    #[test]
    fn test_search_is_deterministic() {
        let cryptogram = encrypt_with_key(PLAINTEXT, &shift_key(7));
        let solver = fixture_solver();
        let first = solver.find_best(&cryptogram);
        for _ in 0..3 {
            assert_eq!(solver.find_best(&cryptogram), first);
        }
    }
}

#[cfg(test)]
mod scoring {
    use super::*;

    #[test]
    fn test_more_words_beats_less_ambiguity() {
        assert!(Score::new(40, 3).is_better(&Score::new(5, 2)));
        assert!(!Score::new(5, 2).is_better(&Score::new(40, 3)));
    }

    #[test]
    fn test_equal_words_prefer_less_ambiguity() {
        assert!(Score::new(4, 2).is_better(&Score::new(9, 2)));
        assert!(!Score::new(4, 2).is_better(&Score::new(4, 2)), "ties are not better");
    }

    #[test]
    fn test_grade_rendered_answers() {
        let dictionary = Dictionary::parse_from_str("the cat sat");
        assert_eq!(grade("The cat sat.", &dictionary), Score::new(0, 3));
        assert_eq!(grade("[CT][ah][et] cat", &dictionary), Score::new(6, 1));
        assert_eq!(grade("[26]he", &dictionary), Score::new(26, 0));
    }
}
