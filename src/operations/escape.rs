// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::OperationError;
use crate::traits::TextOperation;

const REGEX_METACHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Prefix every regex metacharacter with a backslash.
pub fn escape_regex(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        if REGEX_METACHARACTERS.contains(&c) {
            output.push('\\');
        }
        output.push(c);
    }
    output
}

/// Drop the backslash in front of any character except a line terminator.
///
/// This is not the exact inverse of [`escape_regex`]: `\n` written as a backslash and
/// the letter `n` also loses its backslash.
pub fn unescape_regex(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if !is_line_terminator(next) {
                    output.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        output.push(c);
    }
    output
}

pub struct EscapeRegexOperation;

impl TextOperation for EscapeRegexOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(escape_regex(input))
    }

    fn name(&self) -> &'static str {
        "escape_regex"
    }
}

pub struct UnescapeRegexOperation;

impl TextOperation for UnescapeRegexOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(unescape_regex(input))
    }

    fn name(&self) -> &'static str {
        "unescape_regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_metacharacters() {
        assert_eq!(escape_regex("a.b*c"), r"a\.b\*c");
        assert_eq!(escape_regex("(1+1)=2?"), r"\(1\+1\)=2\?");
        assert_eq!(escape_regex(r"[^$]{2}|\"), r"\[\^\$\]\{2\}\|\\");
        assert_eq!(escape_regex("plain-text #1"), "plain-text #1");
    }

    #[test]
    fn escaped_text_matches_literally() {
        let pattern = escape_regex("price: $5.00 (approx)");
        let re = regex::Regex::new(&pattern).unwrap();
        assert!(re.is_match("price: $5.00 (approx)"));
        assert!(!re.is_match("price: $5x00 (approx)"));
    }

    #[test]
    fn unescape_reverses_escape() {
        let text = r"a.b*c (d) [e] {f} ^g$ h|i \ j?";
        assert_eq!(unescape_regex(&escape_regex(text)), text);
    }

    #[test]
    fn unescape_drops_backslash_before_any_character() {
        assert_eq!(unescape_regex(r"\n\t\q"), "ntq");
        assert_eq!(unescape_regex(r"\\"), r"\");
    }

    #[test]
    fn unescape_keeps_backslash_before_line_breaks_and_at_end() {
        assert_eq!(unescape_regex("a\\\nb"), "a\\\nb");
        assert_eq!(unescape_regex("trailing\\"), "trailing\\");
    }
}
