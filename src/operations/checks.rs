// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::OperationError;
use crate::traits::{OperationOutput, TextOperation};

fn anagram_key(text: &str) -> Vec<char> {
    let mut letters: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    letters.sort_unstable();
    letters
}

/// True when both strings use the same letters, ignoring case and anything that is
/// not `a-z`.
pub fn is_anagram(text: &str, comparison: &str) -> bool {
    anagram_key(text) == anagram_key(comparison)
}

/// True when the lowercase `a-z0-9` content of the text reads the same both ways.
pub fn is_palindrome(text: &str) -> bool {
    let normalized: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    normalized.iter().eq(normalized.iter().rev())
}

pub struct AnagramCheckOperation {
    comparison: String,
}

impl AnagramCheckOperation {
    pub fn new(comparison: impl Into<String>) -> Self {
        Self {
            comparison: comparison.into(),
        }
    }
}

impl TextOperation for AnagramCheckOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(is_anagram(input, &self.comparison).to_string())
    }

    fn name(&self) -> &'static str {
        "is_anagram"
    }

    fn declared_output(&self) -> OperationOutput {
        OperationOutput::Check
    }
}

pub struct PalindromeCheckOperation;

impl TextOperation for PalindromeCheckOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(is_palindrome(input).to_string())
    }

    fn name(&self) -> &'static str {
        "is_palindrome"
    }

    fn declared_output(&self) -> OperationOutput {
        OperationOutput::Check
    }
}
