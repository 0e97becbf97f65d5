// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::MAX_DECOMPRESSED_RUN;
use crate::errors::OperationError;
use crate::traits::TextOperation;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replace every run of two or more identical word characters with `<char><count>`.
///
/// `compress("aaabbbcc") == "a3b3c2"`. Single characters and non-word characters are
/// copied through.
pub fn compress(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1usize;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }

        if run > 1 && is_word_char(c) {
            output.push(c);
            output.push_str(&run.to_string());
        } else {
            output.extend(std::iter::repeat(c).take(run));
        }
    }

    output
}

/// Expand every `<wordchar><digits>` token into `digits` copies of the character.
///
/// Digits that were part of the original text are indistinguishable from run counts,
/// so `decompress(compress(s))` only round-trips text without digits.
pub fn decompress(text: &str) -> Result<String, OperationError> {
    static RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Za-z0-9_])([0-9]+)").unwrap());

    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    for caps in RUN.captures_iter(text) {
        let (Some(whole), Some(ch), Some(count)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };

        let requested = count.as_str().parse::<u64>().unwrap_or(u64::MAX);
        if requested > MAX_DECOMPRESSED_RUN {
            return Err(OperationError::RunTooLong {
                requested,
                limit: MAX_DECOMPRESSED_RUN,
            });
        }

        output.push_str(&text[last..whole.start()]);
        output.push_str(&ch.as_str().repeat(requested as usize));
        last = whole.end();
    }

    output.push_str(&text[last..]);
    Ok(output)
}

pub struct CompressOperation;

impl TextOperation for CompressOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(compress(input))
    }

    fn name(&self) -> &'static str {
        "compress"
    }
}

pub struct DecompressOperation;

impl TextOperation for DecompressOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        decompress(input)
    }

    fn name(&self) -> &'static str {
        "decompress"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_collapses_runs() {
        assert_eq!(compress("aaabbbcc"), "a3b3c2");
        assert_eq!(compress("abc"), "abc");
        assert_eq!(compress(""), "");
    }

    #[test]
    fn compress_leaves_non_word_runs_alone() {
        assert_eq!(compress("wow!!! ok   yes"), "wow!!! ok   yes");
        assert_eq!(compress("__--"), "_2--");
    }

    #[test]
    fn decompress_expands_runs() {
        assert_eq!(decompress("a3b3c2").unwrap(), "aaabbbcc");
        assert_eq!(decompress("x1 y").unwrap(), "x y");
        assert_eq!(decompress("no runs here").unwrap(), "no runs here");
    }

    #[test]
    fn decompress_reads_literal_digits_as_counts() {
        // "1" is the character and "23" the count.
        assert_eq!(decompress("123").unwrap(), "1".repeat(23));
    }

    #[test]
    fn decompress_rejects_oversized_runs() {
        let result = decompress("a99999999999999999999999");
        assert!(matches!(result, Err(OperationError::RunTooLong { .. })));
    }

    #[test]
    fn compress_then_decompress_round_trips_letters() {
        let text = "Hello  aaa bbbb, see you!";
        assert_eq!(decompress(&compress(text)).unwrap(), text);
    }
}
