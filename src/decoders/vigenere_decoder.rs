//! Vigenère cracker with automated key detection
//! Uses Index of Coincidence (IoC) over interleaved columns for key length detection
//! and chi-squared frequency analysis for key discovery.
//! Always returns a CrackResult, falling back to a fixed key length when no
//! length looks like English.

use super::crack_results::CrackResult;
use super::interface::{Crack, Decoder};
use crate::alphabet::normalise;
use crate::cipher::vigenere_decrypt;
use crate::config::{CandidateStrategy, Config, DecryptTarget};
use crate::key_length::KasiskiExaminer;
use crate::key_recovery::find_key;
use crate::statistics::chi_squared;
use log::{debug, info, trace};
use rayon::prelude::*;

/// The Vigenère decoder struct
pub struct VigenereDecoder;

impl Crack for Decoder<VigenereDecoder> {
    fn new() -> Decoder<VigenereDecoder> {
        Decoder {
            name: "Vigenere",
            description: "A polyalphabetic substitution cipher using a keyword to shift each letter. This implementation estimates the key length with the Kasiski examination and recovers each key letter by frequency analysis.",
            link: "https://en.wikipedia.org/wiki/Vigen%C3%A8re_cipher",
            phantom: std::marker::PhantomData,
        }
    }

    fn crack(&self, text: &str, config: &Config) -> CrackResult {
        trace!("Attempting Vigenère decryption on text: {:?}", text);
        let mut results = CrackResult::new(self, text.to_string());

        // Key detection only looks at the letters
        let clean_text = normalise(text);

        let candidate_lengths = KasiskiExaminer::from(config).candidate_lengths(&clean_text);
        let used_fallback_length = candidate_lengths.is_empty();
        let lengths_to_try = if used_fallback_length {
            debug!(
                "No plausible key length, falling back to {}",
                config.fallback_key_length
            );
            vec![config.fallback_key_length]
        } else {
            candidate_lengths.clone()
        };

        let key = match config.strategy {
            CandidateStrategy::First => find_key(&clean_text, lengths_to_try[0]),
            CandidateStrategy::LowestChiSquared => {
                lowest_chi_squared_key(&clean_text, &lengths_to_try)
            }
        };

        let plaintext = match config.decrypt_target {
            DecryptTarget::Original => vigenere_decrypt(text, &key),
            DecryptTarget::Normalised => vigenere_decrypt(&clean_text, &key),
        };
        info!("Recovered Vigenère key {}", key);

        results.key_length = key.len();
        results.key = key;
        results.unencrypted_text = plaintext;
        results.candidate_lengths = candidate_lengths;
        results.used_fallback_length = used_fallback_length;
        results
    }
}

/// Recovers a key for every length and keeps the one whose plaintext is
/// closest to English. Ties go to the earlier (shorter) length.
fn lowest_chi_squared_key(clean_text: &str, lengths: &[usize]) -> String {
    let scored: Vec<(String, f64)> = lengths
        .par_iter()
        .map(|&key_length| {
            let key = find_key(clean_text, key_length);
            let score = chi_squared(&vigenere_decrypt(clean_text, &key));
            trace!("Key {} scores {:.4}", key, score);
            (key, score)
        })
        .collect();

    let mut best: Option<(String, f64)> = None;
    for (key, score) in scored {
        match &best {
            Some((_, best_score)) if score >= *best_score => {}
            _ => best = Some((key, score)),
        }
    }
    best.map(|(key, _)| key).unwrap_or_default()
}
