//! Recovers the key one letter at a time.
//!
//! Once the key length is known every column of the ciphertext is a plain
//! Caesar cipher. Each of the 26 shifts is tried and the one whose output is
//! closest to English by chi-squared becomes that key letter.

use crate::alphabet::{letter_at, ALPHABET_SIZE};
use crate::cipher::caesar_decrypt;
use crate::statistics::{chi_squared, split_columns};
use log::trace;

/// Finds the most likely key of length `key_length` for normalised `text`.
///
/// If the key is longer than the text some columns are empty; every shift
/// scores the same on them and they come back as `A`.
///
/// ```rust
/// use kasiski::key_recovery::find_key;
/// assert_eq!(find_key("", 3), "AAA");
/// ```
pub fn find_key(text: &str, key_length: usize) -> String {
    let key: String = split_columns(text, key_length)
        .iter()
        .map(|column| letter_at(best_shift(column)))
        .collect();
    trace!("Best key of length {} is {}", key_length, key);
    key
}

/// The shift with the lowest chi-squared for a single column.
/// Ties go to the smallest shift.
pub fn best_shift(column: &str) -> u8 {
    let mut best_shift = 0;
    let mut best_chi_squared = f64::MAX;
    for shift in 0..ALPHABET_SIZE {
        let score = chi_squared(&caesar_decrypt(column, shift));
        if score < best_chi_squared {
            best_chi_squared = score;
            best_shift = shift;
        }
    }
    best_shift
}
