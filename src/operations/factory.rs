// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{CipherOptions, FormatOptions};
use crate::errors::PipelineFailure;
use crate::traits::TextOperation;

use super::*;

/// Names of every operation in pipeline order.
pub const PIPELINE_ORDER: [&str; 21] = [
    "encrypt",
    "decrypt",
    "compress",
    "decompress",
    "sentiment",
    "translate",
    "spell_check",
    "summarize",
    "format_number",
    "format_date",
    "format_currency",
    "remove_diacritics",
    "remove_emojis",
    "escape_regex",
    "unescape_regex",
    "is_anagram",
    "is_palindrome",
    "to_ascii",
    "from_ascii",
    "to_morse_code",
    "from_morse_code",
];

/// Builds the ordered list of operations a set of options enables.
pub struct OperationFactory;

impl OperationFactory {
    /// Create the pipeline plan for `options`.
    ///
    /// The order is fixed: operations appear in [`PIPELINE_ORDER`] regardless of how the
    /// options were written. Inactive operations are skipped. A cipher whose key cannot
    /// be used fails here, before any text is touched.
    pub fn create_plan(options: &FormatOptions) -> Result<Vec<Box<dyn TextOperation>>, PipelineFailure> {
        let mut plan: Vec<Box<dyn TextOperation>> = Vec::new();

        if let Some(op) = Self::cipher(CipherDirection::Encrypt, &options.encrypt)? {
            plan.push(Box::new(op));
        }
        if let Some(op) = Self::cipher(CipherDirection::Decrypt, &options.decrypt)? {
            plan.push(Box::new(op));
        }
        if options.compress {
            plan.push(Box::new(CompressOperation));
        }
        if options.decompress {
            plan.push(Box::new(DecompressOperation));
        }
        if options.sentiment {
            plan.push(Box::new(SentimentOperation));
        }
        if let Some(to) = &options.translate.to {
            plan.push(Box::new(TranslateOperation::new(to.clone())));
        }
        if options.spell_check {
            plan.push(Box::new(SpellCheckOperation::new(options.spell_check_words.clone())));
        }
        if options.summarize.is_active() {
            plan.push(Box::new(SummarizeOperation::new(options.summarize.sentences)));
        }
        if options.format_number.is_active() {
            plan.push(Box::new(FormatNumberOperation::new(options.format_number.clone())));
        }
        if options.format_date.is_active() {
            plan.push(Box::new(FormatDateOperation::new(options.format_date.clone())));
        }
        if options.format_currency.is_active() {
            plan.push(Box::new(FormatCurrencyOperation::new(options.format_currency.clone())));
        }
        if options.remove_diacritics {
            plan.push(Box::new(RemoveDiacriticsOperation));
        }
        if options.remove_emojis {
            plan.push(Box::new(RemoveEmojisOperation));
        }
        if options.escape_regex {
            plan.push(Box::new(EscapeRegexOperation));
        }
        if options.unescape_regex {
            plan.push(Box::new(UnescapeRegexOperation));
        }
        if let Some(comparison) = &options.is_anagram {
            plan.push(Box::new(AnagramCheckOperation::new(comparison.clone())));
        }
        if options.is_palindrome {
            plan.push(Box::new(PalindromeCheckOperation));
        }
        if options.to_ascii {
            plan.push(Box::new(ToAsciiOperation));
        }
        if options.from_ascii {
            plan.push(Box::new(FromAsciiOperation));
        }
        if options.to_morse_code {
            plan.push(Box::new(ToMorseOperation));
        }
        if options.from_morse_code {
            plan.push(Box::new(FromMorseOperation));
        }

        Ok(plan)
    }

    fn cipher(
        direction: CipherDirection,
        options: &CipherOptions,
    ) -> Result<Option<CipherOperation>, PipelineFailure> {
        let Some(method) = options.method else {
            return Ok(None);
        };

        let name = match direction {
            CipherDirection::Encrypt => "encrypt",
            CipherDirection::Decrypt => "decrypt",
        };
        CipherOperation::new(direction, method, options.key.as_ref())
            .map(Some)
            .map_err(|e| PipelineFailure::operation(name, e))
    }

    /// List all operation names in the order they run.
    pub fn list_available_operations() -> Vec<&'static str> {
        PIPELINE_ORDER.to_vec()
    }
}
