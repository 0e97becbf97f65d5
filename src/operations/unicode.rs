// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::ops::RangeInclusive;

use unicode_normalization::UnicodeNormalization;

use crate::errors::OperationError;
use crate::traits::TextOperation;

const COMBINING_DIACRITICS: RangeInclusive<char> = '\u{0300}'..='\u{036f}';

const EMOJI_RANGES: [RangeInclusive<char>; 4] = [
    '\u{1f600}'..='\u{1f64f}', // emoticons
    '\u{1f300}'..='\u{1f5ff}', // symbols and pictographs
    '\u{1f680}'..='\u{1f6ff}', // transport and map
    '\u{1f1e0}'..='\u{1f1ff}', // regional indicators
];

/// Decompose to NFD and drop combining diacritical marks. `remove_diacritics("café") == "cafe"`.
pub fn remove_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !COMBINING_DIACRITICS.contains(c)).collect()
}

pub fn remove_emojis(text: &str) -> String {
    text.chars()
        .filter(|c| !EMOJI_RANGES.iter().any(|range| range.contains(c)))
        .collect()
}

pub struct RemoveDiacriticsOperation;

impl TextOperation for RemoveDiacriticsOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(remove_diacritics(input))
    }

    fn name(&self) -> &'static str {
        "remove_diacritics"
    }
}

pub struct RemoveEmojisOperation;

impl TextOperation for RemoveEmojisOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(remove_emojis(input))
    }

    fn name(&self) -> &'static str {
        "remove_emojis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents() {
        assert_eq!(remove_diacritics("café"), "cafe");
        assert_eq!(remove_diacritics("Crème Brûlée à São Paulo"), "Creme Brulee a Sao Paulo");
    }

    #[test]
    fn strips_precomposed_and_decomposed_forms_alike() {
        assert_eq!(remove_diacritics("e\u{301}"), "e");
        assert_eq!(remove_diacritics("\u{e9}"), "e");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(remove_diacritics("plain ascii 123"), "plain ascii 123");
    }

    #[test]
    fn strips_emojis_in_listed_ranges() {
        assert_eq!(remove_emojis("hi 😀 there 🚀🇺🇸!"), "hi  there !");
    }

    #[test]
    fn keeps_symbols_outside_the_ranges() {
        // U+2764 HEAVY BLACK HEART lives in Dingbats, outside the stripped ranges.
        assert_eq!(remove_emojis("I \u{2764} Rust"), "I \u{2764} Rust");
    }
}
