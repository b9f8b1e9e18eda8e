//! Letter statistics used to decide how "English-like" a run of letters is.
//!
//! Index of coincidence doesn't care which substitution was applied, only
//! whether the text came through a single alphabet, so it is used to find
//! the key length. Chi-squared against [`ENGLISH_FREQS`] does care about the
//! shift, so it is used to find each key letter.

use crate::alphabet::{is_alphabetic, ordinal};
use crate::storage::ENGLISH_FREQS;

/// Counts of each letter A to Z, plus the total number of letters seen.
/// Non-letters are ignored.
pub fn letter_counts(text: &str) -> ([usize; 26], usize) {
    let mut counts = [0usize; 26];
    let mut total = 0;
    for c in text.chars().filter(|c| is_alphabetic(*c)) {
        counts[ordinal(c) as usize] += 1;
        total += 1;
    }
    (counts, total)
}

/// Probability that two letters picked at random from `text` are the same.
///
/// Returns 0 when there are fewer than two letters.
///
/// ```rust
/// use kasiski::statistics::index_of_coincidence;
/// assert_eq!(index_of_coincidence("AAAA"), 1.0);
/// assert_eq!(index_of_coincidence("A"), 0.0);
/// ```
pub fn index_of_coincidence(text: &str) -> f64 {
    let (counts, total) = letter_counts(text);
    if total <= 1 {
        return 0.0;
    }
    let matching: usize = counts.iter().map(|f| f * f.saturating_sub(1)).sum();
    matching as f64 / (total * (total - 1)) as f64
}

/// Chi-squared distance between the letter distribution of `text` and
/// English. Lower is closer. Returns 0 for text with no letters.
pub fn chi_squared(text: &str) -> f64 {
    let (counts, total) = letter_counts(text);
    if total == 0 {
        return 0.0;
    }
    counts
        .iter()
        .zip(ENGLISH_FREQS.iter())
        .map(|(count, freq)| {
            let observed = *count as f64 / total as f64;
            let expected = freq / 100.0;
            let diff = observed - expected;
            diff * diff / expected
        })
        .sum()
}

/// Splits `text` into `columns` interleaved subsequences.
/// Column `i` holds the characters at positions i, i + columns, i + 2 * columns ...
///
/// Columns past the end of the text are empty.
pub fn split_columns(text: &str, columns: usize) -> Vec<String> {
    let mut split = vec![String::new(); columns];
    if columns == 0 {
        return split;
    }
    for (i, c) in text.chars().enumerate() {
        split[i % columns].push(c);
    }
    split
}
