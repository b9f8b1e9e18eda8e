//! Static reference data.

/// Expected relative frequency of each letter A to Z in English text,
/// as percentages. Sums to roughly 100.
pub const ENGLISH_FREQS: [f64; 26] = [
    8.167,  // A
    1.492,  // B
    2.782,  // C
    4.253,  // D
    12.702, // E
    2.228,  // F
    2.015,  // G
    6.094,  // H
    6.966,  // I
    0.153,  // J
    0.772,  // K
    4.025,  // L
    2.406,  // M
    6.749,  // N
    7.507,  // O
    1.929,  // P
    0.095,  // Q
    5.987,  // R
    6.327,  // S
    9.056,  // T
    2.758,  // U
    0.978,  // V
    2.360,  // W
    0.150,  // X
    1.974,  // Y
    0.074,  // Z
];

#[cfg(test)]
mod tests {
    use super::ENGLISH_FREQS;

    #[test]
    fn frequencies_sum_to_about_one_hundred() {
        let total: f64 = ENGLISH_FREQS.iter().sum();
        assert!((total - 100.0).abs() < 0.01);
    }

    #[test]
    fn e_is_most_common() {
        let max = ENGLISH_FREQS.iter().cloned().fold(f64::MIN, f64::max);
        assert_eq!(max, ENGLISH_FREQS[4]);
    }
}
