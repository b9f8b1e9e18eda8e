use kasiski::alphabet::normalise;
use kasiski::cipher::{caesar_decrypt, vigenere_decrypt, vigenere_encrypt};
use kasiski::config::{CandidateStrategy, Config, DecryptTarget};
use kasiski::{crack, crack_with_config};

const TALE: &str = "It was the best of times, it was the worst of times, it was the age of wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of incredulity, it was the season of Light, it was the season of Darkness, it was the spring of hope, it was the winter of despair, we had everything before us, we had nothing before us, we were all going direct to Heaven, we were all going direct the other way.";

#[test]
fn test_it_works() {
    let ciphertext = vigenere_encrypt(TALE, "CRYPTO");
    let result = crack(&ciphertext);
    let plaintext = normalise(TALE);
    assert_eq!(result.key, "CRYPTO");
    assert_eq!(result.unencrypted_text, plaintext);
    assert_eq!(result.key_and_plaintext(), ("CRYPTO", plaintext.as_str()));
}

#[test]
fn test_original_target_keeps_formatting() {
    let ciphertext = vigenere_encrypt(TALE, "CRYPTO");
    let config = Config {
        decrypt_target: DecryptTarget::Original,
        ..Default::default()
    };
    let result = crack_with_config(&ciphertext, &config);
    assert_eq!(result.unencrypted_text, TALE);
}

#[test]
fn test_no_panic_if_empty_string() {
    let result = crack("");
    assert_eq!(result.key.len(), 5);
    assert!(result.key.chars().all(|c| c.is_ascii_uppercase()));
    assert_eq!(result.unencrypted_text, "");
}

#[test]
fn test_known_vectors() {
    assert_eq!(vigenere_decrypt("LXFOPVEFRNHR", "LEMON"), "ATTACKATDAWN");
    assert_eq!(caesar_decrypt("KHOOR", 3), "HELLO");
}

#[test]
fn test_punctuation_is_preserved() {
    let decrypted = vigenere_decrypt("HELLO, WORLD!", "ABC");
    let punctuation: Vec<(usize, char)> = decrypted
        .char_indices()
        .filter(|(_, c)| !c.is_ascii_alphabetic())
        .collect();
    assert_eq!(punctuation, vec![(5, ','), (6, ' '), (12, '!')]);
    assert_eq!(decrypted.chars().filter(|c| c.is_ascii_alphabetic()).count(), 10);
}

#[test]
fn test_short_key_multiples_still_pick_shortest() {
    let ciphertext = vigenere_encrypt(TALE, "KEY");
    let result = crack_with_config(&ciphertext, &Config::default());
    assert_eq!(result.candidate_lengths, vec![3, 6, 9]);
    assert_eq!(result.key, "KEY");
}

#[test]
fn test_all_options_together() {
    let plaintext = &TALE[..250];
    let ciphertext = vigenere_encrypt(plaintext, "SECRET");
    let config = Config {
        strategy: CandidateStrategy::LowestChiSquared,
        decrypt_target: DecryptTarget::Normalised,
        ..Default::default()
    };
    let result = crack_with_config(&ciphertext, &config);
    assert_eq!(result.key, "SECRET");
    assert_eq!(result.unencrypted_text, normalise(plaintext));
}
