// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::OperationError;
use crate::traits::TextOperation;

/// Space-separated decimal code points. `to_ascii("AB") == "65 66"`.
pub fn to_ascii(text: &str) -> String {
    text.chars()
        .map(|c| u32::from(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inverse of [`to_ascii`]: parse each space-separated token as a code point.
///
/// Empty input gives empty output. Any token that is not a valid code point, including
/// the empty token between two adjacent spaces (`"65  66"`), fails with
/// [`OperationError::InvalidCodePoint`] instead of decoding to U+0000, so the whole
/// pipeline call falls back to its input.
pub fn from_ascii(text: &str) -> Result<String, OperationError> {
    if text.is_empty() {
        return Ok(String::new());
    }

    text.split(' ')
        .map(|token| {
            token
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| OperationError::InvalidCodePoint(token.to_string()))
        })
        .collect()
}

pub struct ToAsciiOperation;

impl TextOperation for ToAsciiOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(to_ascii(input))
    }

    fn name(&self) -> &'static str {
        "to_ascii"
    }
}

pub struct FromAsciiOperation;

impl TextOperation for FromAsciiOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        from_ascii(input)
    }

    fn name(&self) -> &'static str {
        "from_ascii"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_code_points() {
        assert_eq!(to_ascii("AB"), "65 66");
        assert_eq!(to_ascii("a b"), "97 32 98");
        assert_eq!(to_ascii("é"), "233");
        assert_eq!(to_ascii(""), "");
    }

    #[test]
    fn converts_from_code_points() {
        assert_eq!(from_ascii("65 66").unwrap(), "AB");
        assert_eq!(from_ascii("128512").unwrap(), "😀");
        assert_eq!(from_ascii("").unwrap(), "");
    }

    #[test]
    fn round_trips_unicode() {
        let text = "Grüße, 世界!";
        assert_eq!(from_ascii(&to_ascii(text)).unwrap(), text);
    }

    #[test]
    fn rejects_bad_tokens() {
        assert!(matches!(from_ascii("65 x"), Err(OperationError::InvalidCodePoint(_))));
        assert!(matches!(from_ascii("65  66"), Err(OperationError::InvalidCodePoint(_))));
        assert!(matches!(from_ascii("55296"), Err(OperationError::InvalidCodePoint(_))));
    }
}
