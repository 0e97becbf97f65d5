// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Toy ciphers: Caesar, Vigenère and XOR.

use crate::config::consts::ALPHABET_LEN;
use crate::config::{CipherKey, CipherMethod};
use crate::errors::OperationError;
use crate::traits::TextOperation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherDirection {
    Encrypt,
    Decrypt,
}

/// Shift an ASCII letter within its case, wrapping around the alphabet.
fn shift_letter(c: char, shift: i64) -> char {
    let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
    let offset = (c as i64 - base as i64 + shift.rem_euclid(ALPHABET_LEN)).rem_euclid(ALPHABET_LEN);
    char::from(base + offset as u8)
}

/// Shift every ASCII letter by `shift` positions, preserving case.
pub fn caesar_encrypt(text: &str, shift: i64) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphabetic() { shift_letter(c, shift) } else { c })
        .collect()
}

pub fn caesar_decrypt(text: &str, shift: i64) -> String {
    caesar_encrypt(text, ALPHABET_LEN - shift.rem_euclid(ALPHABET_LEN))
}

fn vigenere_shifts(key: &str) -> Result<Vec<i64>, OperationError> {
    if key.is_empty() {
        return Err(OperationError::InvalidKey {
            method: CipherMethod::Vigenere.as_str(),
            reason: "key is empty".to_string(),
        });
    }

    key.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                Ok(c.to_ascii_uppercase() as i64 - 'A' as i64)
            } else {
                Err(OperationError::InvalidKey {
                    method: CipherMethod::Vigenere.as_str(),
                    reason: format!("'{}' is not a letter", c),
                })
            }
        })
        .collect()
}

// The key position follows the character index in the whole text, so spaces and
// punctuation consume key letters too.
fn vigenere_apply(text: &str, shifts: &[i64], sign: i64) -> String {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            if c.is_ascii_alphabetic() {
                shift_letter(c, sign * shifts[i % shifts.len()])
            } else {
                c
            }
        })
        .collect()
}

pub fn vigenere_encrypt(text: &str, key: &str) -> Result<String, OperationError> {
    let shifts = vigenere_shifts(key)?;
    Ok(vigenere_apply(text, &shifts, 1))
}

pub fn vigenere_decrypt(text: &str, key: &str) -> Result<String, OperationError> {
    let shifts = vigenere_shifts(key)?;
    Ok(vigenere_apply(text, &shifts, -1))
}

/// XOR each code point with the repeating key. The operation is its own inverse;
/// an empty key leaves the text unchanged.
pub fn xor_cipher(text: &str, key: &str) -> Result<String, OperationError> {
    let key: Vec<u32> = key.chars().map(u32::from).collect();
    if key.is_empty() {
        return Ok(text.to_string());
    }

    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let code = u32::from(c) ^ key[i % key.len()];
            char::from_u32(code).ok_or_else(|| OperationError::InvalidCodePoint(format!("{:#x}", code)))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
enum Cipher {
    Caesar(i64),
    Vigenere(String),
    Xor(String),
}

/// Encrypt or decrypt step configured with a cipher method and key.
#[derive(Debug, Clone)]
pub struct CipherOperation {
    direction: CipherDirection,
    cipher: Cipher,
}

impl CipherOperation {
    pub fn new(
        direction: CipherDirection,
        method: CipherMethod,
        key: Option<&CipherKey>,
    ) -> Result<Self, OperationError> {
        let key = key.ok_or(OperationError::MissingKey {
            method: method.as_str(),
        })?;

        let cipher = match (method, key) {
            (CipherMethod::Caesar, CipherKey::Shift(shift)) => Cipher::Caesar(*shift),
            (CipherMethod::Vigenere, CipherKey::Text(text)) => Cipher::Vigenere(text.clone()),
            (CipherMethod::Xor, CipherKey::Text(text)) => Cipher::Xor(text.clone()),
            (CipherMethod::Caesar, CipherKey::Text(_)) => {
                return Err(OperationError::InvalidKey {
                    method: method.as_str(),
                    reason: "expected a numeric shift".to_string(),
                })
            }
            (_, CipherKey::Shift(_)) => {
                return Err(OperationError::InvalidKey {
                    method: method.as_str(),
                    reason: "expected a text key".to_string(),
                })
            }
        };

        Ok(Self { direction, cipher })
    }
}

impl TextOperation for CipherOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        match (&self.cipher, self.direction) {
            (Cipher::Caesar(shift), CipherDirection::Encrypt) => Ok(caesar_encrypt(input, *shift)),
            (Cipher::Caesar(shift), CipherDirection::Decrypt) => Ok(caesar_decrypt(input, *shift)),
            (Cipher::Vigenere(key), CipherDirection::Encrypt) => vigenere_encrypt(input, key),
            (Cipher::Vigenere(key), CipherDirection::Decrypt) => vigenere_decrypt(input, key),
            (Cipher::Xor(key), _) => xor_cipher(input, key),
        }
    }

    fn name(&self) -> &'static str {
        match self.direction {
            CipherDirection::Encrypt => "encrypt",
            CipherDirection::Decrypt => "decrypt",
        }
    }
}
