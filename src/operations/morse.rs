// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::errors::OperationError;
use crate::traits::TextOperation;

const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."), ('F', "..-."),
    ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"), ('K', "-.-"), ('L', ".-.."),
    ('M', "--"), ('N', "-."), ('O', "---"), ('P', ".--."), ('Q', "--.-"), ('R', ".-."),
    ('S', "..."), ('T', "-"), ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"),
    ('Y', "-.--"), ('Z', "--.."),
    ('1', ".----"), ('2', "..---"), ('3', "...--"), ('4', "....-"), ('5', "....."),
    ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."), ('0', "-----"),
    (' ', "/"),
];

static TO_MORSE: Lazy<HashMap<char, &'static str>> = Lazy::new(|| MORSE_TABLE.iter().copied().collect());

static FROM_MORSE: Lazy<HashMap<&'static str, char>> =
    Lazy::new(|| MORSE_TABLE.iter().map(|&(c, code)| (code, c)).collect());

/// Encode each character as Morse, separated by single spaces. Word gaps become `/`;
/// characters outside the table pass through as themselves.
pub fn to_morse_code(text: &str) -> String {
    text.chars()
        .map(|c| {
            let upper = c.to_ascii_uppercase();
            TO_MORSE
                .get(&upper)
                .map(|code| code.to_string())
                .unwrap_or_else(|| c.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode space-separated Morse tokens. Unknown tokens pass through unchanged.
pub fn from_morse_code(text: &str) -> String {
    text.split(' ')
        .map(|token| match FROM_MORSE.get(token) {
            Some(c) => c.to_string(),
            None => token.to_string(),
        })
        .collect()
}

pub struct ToMorseOperation;

impl TextOperation for ToMorseOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(to_morse_code(input))
    }

    fn name(&self) -> &'static str {
        "to_morse_code"
    }
}

pub struct FromMorseOperation;

impl TextOperation for FromMorseOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(from_morse_code(input))
    }

    fn name(&self) -> &'static str {
        "from_morse_code"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_letters_digits_and_spaces() {
        assert_eq!(to_morse_code("SOS"), "... --- ...");
        assert_eq!(to_morse_code("hi 5"), ".... .. / .....");
    }

    #[test]
    fn decodes_morse() {
        assert_eq!(from_morse_code("... --- ..."), "SOS");
        assert_eq!(from_morse_code(".... .. / ....."), "HI 5");
    }

    #[test]
    fn unknown_symbols_pass_through() {
        assert_eq!(to_morse_code("A!"), ".- !");
        assert_eq!(from_morse_code("Helo"), "Helo");
        assert_eq!(from_morse_code(".- ?"), "A?");
    }

    #[test]
    fn encoding_and_decoding_are_inverse() {
        for text in ["HELLO WORLD", "SOS 911", "A  B", "", "0123456789", "THE QUICK BROWN FOX"] {
            assert_eq!(from_morse_code(&to_morse_code(text)), text);
        }
    }
}
