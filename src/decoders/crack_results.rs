use serde::Serialize;

use super::interface::Decoder;

///! This module contains CrackResult, what every cracker hands back.

/// The recovered key together with the plaintext it produces.
/// Built once per ciphertext and never changed after it is returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrackResult {
    /// Encrypted text is the text _before_ we decrypt it.
    pub encrypted_text: String,
    /// Unencrypted text is what it looks like after.
    pub unencrypted_text: String,
    /// The key that was recovered
    pub key: String,
    /// Length of the recovered key
    pub key_length: usize,
    /// Every key length the Kasiski examination found plausible.
    /// Empty when the fallback length was used.
    pub candidate_lengths: Vec<usize>,
    /// True if no key length was plausible and the fallback was used.
    /// Keys found this way should not be trusted much.
    pub used_fallback_length: bool,
    /// Decoder is the function we used to decode the text
    pub decoder: &'static str,
    /// Description is a short description of the decoder
    pub description: &'static str,
    /// Link is a link to more info about the decoder
    pub link: &'static str,
}

impl CrackResult {
    /// This function returns a new CrackResult with no key and no plaintext yet
    pub fn new<T>(decoder_used: &Decoder<T>, text: String) -> Self {
        CrackResult {
            encrypted_text: text,
            unencrypted_text: String::new(),
            key: String::new(),
            key_length: 0,
            candidate_lengths: Vec::new(),
            used_fallback_length: false,
            decoder: decoder_used.name,
            description: decoder_used.description,
            link: decoder_used.link,
        }
    }

    /// The (key, plaintext) pair
    pub fn key_and_plaintext(&self) -> (&str, &str) {
        (&self.key, &self.unencrypted_text)
    }
}
