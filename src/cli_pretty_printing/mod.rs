//! CLI Pretty Printing Module
//!
//! Every line the binary prints to the user goes through here, so the colour
//! scheme stays consistent and API mode can silence all of it in one place.
//!
//! # Color Scheme
//! - Informational: General information and status updates
//! - Warning: Non-critical warnings and cautions
//! - Success: Successful operations and confirmations
//! - Statement: Standard output and neutral messages
//!
//! # Usage
//! ```rust
//! use kasiski::cli_pretty_printing::{success, warning};
//!
//! println!("{}", success("Operation completed successfully"));
//! println!("{}", warning("Please check your input"));
//! ```

use crate::decoders::crack_results::CrackResult;
use crate::records::MessageId;
use ansi_term::Colour::RGB;
use std::path::Path;

/// Colours a string based on its role.
///
/// Unknown roles use the statement colour.
fn color_string(text: &str, role: &str) -> String {
    let (r, g, b) = match role {
        "informational" => (255, 215, 0),
        "warning" => (255, 0, 0),
        "success" => (0, 255, 0),
        _ => (255, 255, 255),
    };
    RGB(r, g, b).bold().paint(text).to_string()
}

/// Colours text using the informational colour.
pub fn informational(text: &str) -> String {
    color_string(text, "informational")
}

/// Colours text using the warning colour.
///
/// Used for non-critical warnings and cautions that don't prevent
/// program execution but require user attention.
pub fn warning(text: &str) -> String {
    color_string(text, "warning")
}

/// Colours text using the success colour.
pub fn success(text: &str) -> String {
    color_string(text, "success")
}

/// Colours text for its role, the statement colour if no role is given.
pub fn statement(text: &str, role: Option<&str>) -> String {
    color_string(text, role.unwrap_or("statement"))
}

/// Which cracker produced the result, and where to read about it.
pub fn decoder_line(result: &CrackResult) -> String {
    format!("Cracked with {} ({})", result.decoder, result.link)
}

/// Prints the key and plaintext of a finished crack.
///
/// Does nothing in API mode.
pub fn program_exiting_successful_decoding(result: &CrackResult) {
    let config = crate::config::get_config();
    if config.api_mode {
        return;
    }
    println!("{}", statement(&decoder_line(result), None));
    if result.used_fallback_length {
        println!(
            "{}",
            warning(&format!(
                "No key length looked like English, guessed a key of length {}. The result may be wrong.",
                result.key_length
            ))
        );
    } else {
        println!(
            "{}",
            informational(&format!(
                "Plausible key lengths: {:?}",
                result.candidate_lengths
            ))
        );
    }
    println!("{}", success(&format!("Key: {}", result.key)));
    println!(
        "{}",
        success(&format!("Decrypted Text: {}", result.unencrypted_text))
    );
}

/// The user gave us nothing to crack.
pub fn input_is_empty() {
    let config = crate::config::get_config();
    if config.api_mode {
        return;
    }
    eprintln!(
        "{}",
        warning("Input is empty. Please provide some ciphertext with --text, --file or --messages.")
    );
}

/// A message from a batch was cracked.
pub fn message_processed(id: &MessageId) {
    let config = crate::config::get_config();
    if config.api_mode {
        return;
    }
    println!(
        "{}",
        statement(&format!("Processed message ID: {} and saved the result.", id), None)
    );
}

/// A message from a batch had no ciphertext.
pub fn message_skipped(id: &MessageId) {
    let config = crate::config::get_config();
    if config.api_mode {
        return;
    }
    println!(
        "{}",
        warning(&format!(
            "Skipping message ID: {}, no 'encrypt_text' found.",
            id
        ))
    );
}

/// The report file was written.
pub fn report_written(path: &Path, count: usize) {
    let config = crate::config::get_config();
    if config.api_mode {
        return;
    }
    println!(
        "{}",
        success(&format!("Wrote {} results to {}", count, path.display()))
    );
}

/// Something went wrong outside the cracker itself.
pub fn program_failed(error: &crate::error::KasiskiError) {
    eprintln!("{}", warning(&format!("{}", error)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coloured_text_keeps_content() {
        assert!(success("done").contains("done"));
        assert!(warning("careful").contains("careful"));
        assert!(statement("plain", None).contains("plain"));
    }

    #[test]
    fn decoder_line_names_the_cracker() {
        let result = crate::crack_with_config("KHOOR", &crate::config::Config::default());
        assert_eq!(
            decoder_line(&result),
            "Cracked with Vigenere (https://en.wikipedia.org/wiki/Vigen%C3%A8re_cipher)"
        );
    }

    #[test]
    fn roles_have_different_colours() {
        assert_ne!(success("x"), warning("x"));
        assert_eq!(statement("x", Some("success")), success("x"));
        assert_eq!(statement("x", Some("nonsense")), statement("x", None));
    }
}
