//! The 26 letter Latin alphabet all cipher arithmetic happens in.
//!
//! Letters map to ordinals 0 to 25 and back. Anything that isn't an ASCII
//! letter is not part of the alphabet and is passed through untouched by
//! every cipher operation.

/// Number of letters in the alphabet, every shift is modulo this
pub const ALPHABET_SIZE: u8 = 26;

/// Is this character a letter we can shift?
pub fn is_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Position of a letter in the alphabet, ignoring case.
/// Only call this on characters that passed [`is_alphabetic`].
pub fn ordinal(letter: char) -> u8 {
    (letter.to_ascii_uppercase() as u8) - b'A'
}

/// The uppercase letter at `ordinal`, wrapping around the alphabet
pub fn letter_at(ordinal: u8) -> char {
    (b'A' + ordinal % ALPHABET_SIZE) as char
}

/// Shifts a letter back by `shift` places, keeping its case.
/// Non-letters come back unchanged.
pub fn unshift(c: char, shift: u8) -> char {
    if !is_alphabetic(c) {
        return c;
    }
    let shifted = (ordinal(c) + ALPHABET_SIZE - shift % ALPHABET_SIZE) % ALPHABET_SIZE;
    with_case_of(c, letter_at(shifted))
}

/// Shifts a letter forward by `shift` places, keeping its case.
pub fn shift(c: char, shift: u8) -> char {
    if !is_alphabetic(c) {
        return c;
    }
    let shifted = (ordinal(c) + shift % ALPHABET_SIZE) % ALPHABET_SIZE;
    with_case_of(c, letter_at(shifted))
}

fn with_case_of(original: char, letter: char) -> char {
    if original.is_ascii_lowercase() {
        letter.to_ascii_lowercase()
    } else {
        letter
    }
}

/// Uppercases the text and strips every non-letter.
/// This is the form key length and key detection run on.
pub fn normalise(text: &str) -> String {
    text.chars()
        .filter(|c| is_alphabetic(*c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_and_letter_at_are_inverse() {
        for i in 0..ALPHABET_SIZE {
            assert_eq!(ordinal(letter_at(i)), i);
        }
        assert_eq!(ordinal('a'), 0);
        assert_eq!(ordinal('Z'), 25);
    }

    #[test]
    fn letter_at_wraps() {
        assert_eq!(letter_at(26), 'A');
        assert_eq!(letter_at(29), 'D');
    }

    #[test]
    fn unshift_keeps_case() {
        assert_eq!(unshift('K', 3), 'H');
        assert_eq!(unshift('k', 3), 'h');
        assert_eq!(unshift('A', 1), 'Z');
    }

    #[test]
    fn non_letters_pass_through() {
        assert!(!is_alphabetic('!'));
        assert!(!is_alphabetic('é'));
        assert_eq!(unshift(' ', 7), ' ');
        assert_eq!(shift('3', 7), '3');
    }

    #[test]
    fn normalise_strips_and_uppercases() {
        assert_eq!(normalise("Hello, World! 42"), "HELLOWORLD");
        assert_eq!(normalise(""), "");
        assert_eq!(normalise("!!!"), "");
    }
}
