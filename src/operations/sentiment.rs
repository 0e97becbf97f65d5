// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::OperationError;
use crate::traits::TextOperation;

pub const POSITIVE_WORDS: &[&str] = &["good", "great", "excellent", "amazing", "wonderful", "fantastic"];
pub const NEGATIVE_WORDS: &[&str] = &["bad", "terrible", "awful", "horrible", "poor", "disappointing"];

pub(crate) static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score text by counting whole-word hits against fixed positive and negative lists.
pub fn analyze_sentiment(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    let (positive, negative) = WORD
        .find_iter(&lowered)
        .fold((0usize, 0usize), |(pos, neg), word| {
            let word = word.as_str();
            if POSITIVE_WORDS.contains(&word) {
                (pos + 1, neg)
            } else if NEGATIVE_WORDS.contains(&word) {
                (pos, neg + 1)
            } else {
                (pos, neg)
            }
        });

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

pub struct SentimentOperation;

impl TextOperation for SentimentOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        Ok(analyze_sentiment(input).to_string())
    }

    fn name(&self) -> &'static str {
        "sentiment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_word_counts() {
        assert_eq!(analyze_sentiment("What a GREAT and amazing day"), Sentiment::Positive);
        assert_eq!(analyze_sentiment("Terrible service, awful food. Good view."), Sentiment::Negative);
        assert_eq!(analyze_sentiment("The meeting is at noon"), Sentiment::Neutral);
    }

    #[test]
    fn ties_are_neutral() {
        assert_eq!(analyze_sentiment("good but bad"), Sentiment::Neutral);
    }

    #[test]
    fn only_whole_words_count() {
        assert_eq!(analyze_sentiment("goodness badminton"), Sentiment::Neutral);
    }

    #[test]
    fn operation_emits_label_text() {
        assert_eq!(SentimentOperation.apply("excellent").unwrap(), "Positive");
    }
}
