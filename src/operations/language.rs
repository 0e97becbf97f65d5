// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Language helpers: the translation tag, dictionary spell-check and summarization.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::OperationError;
use crate::operations::sentiment::{NEGATIVE_WORDS, POSITIVE_WORDS, WORD};
use crate::traits::TextOperation;

/// Tag text with its translation target. No translation is performed.
pub fn translate(text: &str, to: &str) -> String {
    format!("[Translated to {}]: {}", to, text)
}

pub struct TranslateOperation {
    to: String,
}

impl TranslateOperation {
    pub fn new(to: impl Into<String>) -> Self {
        Self { to: to.into() }
    }
}

impl TextOperation for TranslateOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(translate(input, &self.to))
    }

    fn name(&self) -> &'static str {
        "translate"
    }
}

const COMMON_WORDS: &str = "
a about above after again against all almost also always am among an and another any are
around as ask at away back be because been before being below best better between big both
but by call came can cannot could day did different do does doing done down during each early
end enough even ever every eye face fact far feel few find first for found from full get give
go going good got great group had hand has have having he her here high him his home house how
however i if important in into is it its just keep kind know large last later lead leave left
less let life like line little live long look made make man many may me mean might more most
move much must my name need never new next night no not nothing now number of off often old on
once one only open or order other our out over own part people place play point problem public
put quick brown fox jumps lazy dog dogs quickly read real right room run said same saw say
school see seem seen set she should show side since small so some something sometimes soon
start state still story study such sure system take tell than thank thanks that the their them
then there these they thing things think this those though thought three through time to today
together too took toward try turn two under until up upon us use used very want was water way
we week well went were what when where which while who whole why will with within without word
words work world would write year yes yet you young your hello goodbye please sorry day days
morning evening weather sun rain love friend friends family food book books text message
question answer example test tests check spell spelling sentence sentences letter letters";

static DICTIONARY: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    COMMON_WORDS
        .split_whitespace()
        .chain(POSITIVE_WORDS.iter().copied())
        .chain(NEGATIVE_WORDS.iter().copied())
        .collect()
});

/// Mark each word missing from the dictionary as `[word]?`.
///
/// Lookups are case-insensitive. `extra_words` extends the built-in English word list;
/// tokens containing digits are never flagged.
pub fn spell_check(text: &str, extra_words: &[String]) -> String {
    let extra: HashSet<String> = extra_words.iter().map(|w| w.to_lowercase()).collect();

    WORD.replace_all(text, |caps: &regex::Captures| {
        let word = &caps[0];
        let lowered = word.to_lowercase();
        let known = word.chars().any(|c| c.is_ascii_digit())
            || DICTIONARY.contains(lowered.as_str())
            || extra.contains(&lowered);
        if known {
            word.to_string()
        } else {
            format!("[{}]?", word)
        }
    })
    .into_owned()
}

pub struct SpellCheckOperation {
    extra_words: Vec<String>,
}

impl SpellCheckOperation {
    pub fn new(extra_words: Vec<String>) -> Self {
        Self { extra_words }
    }
}

impl TextOperation for SpellCheckOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(spell_check(input, &self.extra_words))
    }

    fn name(&self) -> &'static str {
        "spell_check"
    }
}

/// Keep the first `sentences` sentences, each trimmed and joined by a single space.
///
/// A sentence is a run of text ending in one or more of `.`, `!` or `?`. Trailing text
/// without a terminator is not a sentence and is dropped.
///
/// Each sentence loses its surrounding whitespace before joining, so `"A. B."` keeps
/// one space between sentences rather than the two a raw join of the matches gives.
pub fn summarize(text: &str, sentences: usize) -> String {
    static SENTENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

    SENTENCE
        .find_iter(text)
        .take(sentences)
        .map(|m| m.as_str().trim())
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct SummarizeOperation {
    sentences: usize,
}

impl SummarizeOperation {
    pub fn new(sentences: usize) -> Self {
        Self { sentences }
    }
}

impl TextOperation for SummarizeOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(summarize(input, self.sentences))
    }

    fn name(&self) -> &'static str {
        "summarize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_tags_text() {
        assert_eq!(translate("hello", "fr"), "[Translated to fr]: hello");
    }

    #[test]
    fn spell_check_flags_unknown_words() {
        assert_eq!(spell_check("the quick brwn fox", &[]), "the quick [brwn]? fox");
    }

    #[test]
    fn spell_check_is_case_insensitive_and_skips_numbers() {
        assert_eq!(spell_check("Hello World 2024", &[]), "Hello World 2024");
    }

    #[test]
    fn spell_check_uses_extra_words() {
        let extra = vec!["Rustacean".to_string()];
        assert_eq!(spell_check("hello rustacean", &extra), "hello rustacean");
        assert_eq!(spell_check("hello rustacean", &[]), "hello [rustacean]?");
    }

    #[test]
    fn spell_check_is_deterministic() {
        let text = "teh cat sat on teh mat";
        assert_eq!(spell_check(text, &[]), spell_check(text, &[]));
    }

    #[test]
    fn summarize_keeps_leading_sentences() {
        let text = "First sentence. Second one! Third? Fourth.";
        assert_eq!(summarize(text, 2), "First sentence. Second one!");
        assert_eq!(summarize(text, 10), "First sentence. Second one! Third? Fourth.");
    }

    #[test]
    fn summarize_drops_unterminated_text() {
        assert_eq!(summarize("no terminator here", 3), "");
        assert_eq!(summarize("Done. trailing", 3), "Done.");
    }

    #[test]
    fn summarize_joins_with_a_single_space() {
        assert_eq!(summarize("A. B.", 2), "A. B.");
        assert_eq!(summarize("A.\n\n  B.", 2), "A. B.");
    }

    #[test]
    fn summarize_keeps_repeated_terminators() {
        assert_eq!(summarize("Wait... what?! Yes.", 2), "Wait... what?!");
    }
}
