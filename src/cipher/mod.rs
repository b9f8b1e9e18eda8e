//! Caesar and Vigenère shift ciphers.
//!
//! Only letters are shifted. Everything else is copied through, and in the
//! Vigenère case it does not advance the key, so the key stays aligned
//! with the letters of the text.

use crate::alphabet::{is_alphabetic, ordinal, shift, unshift};

/// Shifts every letter in `text` back by `shift` places.
///
/// ```rust
/// use kasiski::cipher::caesar_decrypt;
/// assert_eq!(caesar_decrypt("KHOOR", 3), "HELLO");
/// ```
pub fn caesar_decrypt(text: &str, shift: u8) -> String {
    text.chars().map(|c| unshift(c, shift)).collect()
}

/// Decrypts `text` with a repeating `key`.
///
/// Each letter consumes the next key letter, wrapping around at the end of
/// the key. Non-letters in the key are ignored, and a key with no letters
/// leaves the text unchanged.
///
/// ```rust
/// use kasiski::cipher::vigenere_decrypt;
/// assert_eq!(vigenere_decrypt("LXFOPVEFRNHR", "LEMON"), "ATTACKATDAWN");
/// ```
pub fn vigenere_decrypt(text: &str, key: &str) -> String {
    apply_key(text, key, unshift)
}

/// The mirror of [`vigenere_decrypt`].
pub fn vigenere_encrypt(text: &str, key: &str) -> String {
    apply_key(text, key, shift)
}

fn apply_key(text: &str, key: &str, op: fn(char, u8) -> char) -> String {
    let shifts: Vec<u8> = key
        .chars()
        .filter(|c| is_alphabetic(*c))
        .map(ordinal)
        .collect();
    if shifts.is_empty() {
        return text.to_string();
    }

    let mut key_stream = shifts.iter().cycle();
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if is_alphabetic(c) {
            // cycle() over a non-empty slice never ends
            let k = key_stream.next().copied().unwrap_or(0);
            result.push(op(c, k));
        } else {
            result.push(c);
        }
    }
    result
}
