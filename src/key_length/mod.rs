//! Key length estimation, the Kasiski examination step.
//!
//! For every candidate length the ciphertext is dealt out into that many
//! columns. With the right length each column was enciphered with a single
//! shift, so it keeps the index of coincidence of English (about 0.067).
//! With the wrong length the columns mix alphabets and drift towards the
//! random value of 1/26.

use crate::config::Config;
use crate::statistics::{index_of_coincidence, split_columns};
use log::{debug, trace};

/// Shortest key length tried by default
pub const DEFAULT_MIN_KEY_LENGTH: usize = 2;
/// Longest key length tried by default
pub const DEFAULT_MAX_KEY_LENGTH: usize = 10;
/// Average column IoC a length has to beat to be plausible
pub const DEFAULT_IC_THRESHOLD: f64 = 0.06;

/// Scores candidate key lengths
#[derive(Debug, Clone, PartialEq)]
pub struct KasiskiExaminer {
    /// Inclusive lower bound on key length
    pub min_key_length: usize,
    /// Inclusive upper bound on key length
    pub max_key_length: usize,
    /// Average IoC must be strictly greater than this
    pub threshold: f64,
}

impl Default for KasiskiExaminer {
    fn default() -> Self {
        KasiskiExaminer {
            min_key_length: DEFAULT_MIN_KEY_LENGTH,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            threshold: DEFAULT_IC_THRESHOLD,
        }
    }
}

impl From<&Config> for KasiskiExaminer {
    fn from(config: &Config) -> Self {
        KasiskiExaminer {
            min_key_length: config.min_key_length,
            max_key_length: config.max_key_length,
            threshold: config.ic_threshold,
        }
    }
}

impl KasiskiExaminer {
    /// Returns every plausible key length in ascending order.
    ///
    /// `text` should already be normalised, non-letters are skipped by the
    /// IoC but would still take up a column slot. An empty result just means
    /// no length looked like English.
    ///
    /// Lengths longer than the text leave every column with at most one
    /// letter, so their IoC is 0 and the scan stops at the text length.
    pub fn candidate_lengths(&self, text: &str) -> Vec<usize> {
        let lower = self.min_key_length.max(1);
        let upper = self.max_key_length.min(text.chars().count());
        let candidates: Vec<usize> = (lower..=upper)
            .filter(|key_length| {
                let ioc = average_ioc(text, *key_length);
                trace!("Key length {} has average IoC {:.4}", key_length, ioc);
                ioc > self.threshold
            })
            .collect();
        debug!("Plausible key lengths: {:?}", candidates);
        candidates
    }
}

/// Mean index of coincidence across the `key_length` columns of `text`
pub fn average_ioc(text: &str, key_length: usize) -> f64 {
    if key_length == 0 {
        return 0.0;
    }
    let total: f64 = split_columns(text, key_length)
        .iter()
        .map(|column| index_of_coincidence(column))
        .sum();
    total / key_length as f64
}

/// Kasiski examination with the default bounds and threshold
pub fn kasiski(text: &str) -> Vec<usize> {
    KasiskiExaminer::default().candidate_lengths(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::normalise;
    use crate::cipher::vigenere_encrypt;

    const TALE: &str = "It was the best of times, it was the worst of times, it was the age of wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of incredulity, it was the season of Light, it was the season of Darkness, it was the spring of hope, it was the winter of despair, we had everything before us, we had nothing before us, we were all going direct to Heaven, we were all going direct the other way.";

    #[test]
    fn finds_length_of_lemon() {
        let ciphertext = normalise(&vigenere_encrypt(TALE, "LEMON"));
        assert_eq!(kasiski(&ciphertext), vec![5, 10]);
    }

    #[test]
    fn finds_multiples_of_short_key() {
        let ciphertext = normalise(&vigenere_encrypt(TALE, "KEY"));
        assert_eq!(kasiski(&ciphertext), vec![3, 6, 9]);
    }

    #[test]
    fn empty_text_has_no_candidates() {
        assert!(kasiski("").is_empty());
    }

    #[test]
    fn lengths_are_ascending_and_in_bounds() {
        let inputs = [
            normalise(TALE),
            normalise(&vigenere_encrypt(TALE, "CRYPTO")),
            "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA".to_string(),
        ];
        for input in inputs.iter() {
            let lengths = kasiski(input);
            assert!(lengths.windows(2).all(|w| w[0] < w[1]));
            assert!(lengths.iter().all(|l| (2..=10).contains(l)));
        }
    }

    #[test]
    fn respects_custom_bounds() {
        let ciphertext = normalise(&vigenere_encrypt(TALE, "LEMON"));
        let examiner = KasiskiExaminer {
            min_key_length: 6,
            max_key_length: 12,
            ..Default::default()
        };
        assert_eq!(examiner.candidate_lengths(&ciphertext), vec![10]);
    }

    #[test]
    fn huge_bounds_stop_at_text_length() {
        let ciphertext = normalise(&vigenere_encrypt(TALE, "LEMON"));
        let examiner = KasiskiExaminer {
            max_key_length: usize::MAX,
            ..Default::default()
        };
        let lengths = examiner.candidate_lengths(&ciphertext);
        assert_eq!(&lengths[..2], &[5, 10]);
        assert!(lengths.iter().all(|l| *l <= ciphertext.len()));
    }

    #[test]
    fn average_ioc_of_zero_columns_is_zero() {
        assert_eq!(average_ioc("ABC", 0), 0.0);
    }
}
