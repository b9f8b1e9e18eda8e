//! Kasiski recovers the key and plaintext of a Vigenère cipher from the
//! ciphertext alone.
//!
//! The pipeline is: normalise the text, estimate the key length from the
//! index of coincidence of interleaved columns (the Kasiski examination),
//! recover every key letter by chi-squared fitting against English letter
//! frequencies, then decrypt.
// Warns in case we forget to include documentation
#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

/// Letters to ordinals and back
pub mod alphabet;
/// Caesar and Vigenère shifts
pub mod cipher;
/// The CLI front-end, turns arguments into a config
pub mod cli;
/// The CLI Pretty Printing module contains the functions that print the results
pub mod cli_pretty_printing;
/// The Config module enables a configuration module
/// Like a global API to access config details
pub mod config;
/// Crackers and the results they return
pub mod decoders;
/// Error type for everything outside the cracker
pub mod error;
/// Kasiski examination, finds plausible key lengths
pub mod key_length;
/// Recovers the key once its length is known
pub mod key_recovery;
/// Reading message batches and writing reports
pub mod records;
/// Index of coincidence and chi-squared
pub mod statistics;
/// Reference letter frequencies
pub mod storage;

use crate::config::{get_config, Config};
use crate::decoders::crack_results::CrackResult;
use crate::decoders::interface::{Crack, Decoder};
use crate::decoders::vigenere_decoder::VigenereDecoder;

/// The main function to call which performs the cracking, using the global config.
/// ```rust
/// use kasiski::crack;
/// let ciphertext = "Tx iof elq prdx at gtqqg, ve amg gsi icedx at gtqqg, ve amg gsi mur zj iwfosy, wg hee hup ess bq jacytwtbrdw, uh jlw fvr ptaqu zj nsytir, wg hee hup ibcps sr wanvqrhwmfm, ve amg gsi esndsz cs Wmsvg, tx iof elq grlwab bq Hmfxyieg, ve amg gsi edetrs cs ssbs, ve amg gsi iwaeid cs oiedntv, is ulh qjrccfvvyk nsszvq if, hi toq ysfvvyk nsszvq if, hi isep exz tzmzu qtvqqg es Tsngiz, kr hids nwp scvyk pwepgf hup sfvrc amm.";
/// let result = crack(ciphertext);
/// assert_eq!(result.key, "LEMON");
/// assert!(result.unencrypted_text.starts_with("ITWASTHEBESTOFTIMES"));
/// ```
/// Input with no letters still returns a result, built from the fallback key length.
/// ```rust
/// use kasiski::crack;
/// let result = crack("");
/// assert_eq!(result.key.len(), 5);
/// assert_eq!(result.unencrypted_text, "");
/// ```
pub fn crack(text: &str) -> CrackResult {
    crack_with_config(text, get_config())
}

/// Same as [`crack`] but with an explicit config instead of the global one.
pub fn crack_with_config(text: &str, config: &Config) -> CrackResult {
    Decoder::<VigenereDecoder>::new().crack(text, config)
}
