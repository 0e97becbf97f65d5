// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::config::consts::{DEFAULT_CURRENCY, DEFAULT_LOCALE, DEFAULT_SUMMARY_SENTENCES};

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// Cipher used by the encrypt and decrypt steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherMethod {
    Caesar,
    Vigenere,
    Xor,
}

impl CipherMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherMethod::Caesar => "caesar",
            CipherMethod::Vigenere => "vigenere",
            CipherMethod::Xor => "xor",
        }
    }
}

/// Cipher key. Caesar takes a shift, Vigenère and XOR take text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CipherKey {
    Shift(i64),
    Text(String),
}

/// Options for the encrypt and decrypt steps. Active when `method` is set.
///
/// # Example
/// ```yaml
/// encrypt:
///   method: vigenere
///   key: LEMON
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CipherOptions {
    pub method: Option<CipherMethod>,
    pub key: Option<CipherKey>,
}

impl CipherOptions {
    pub fn caesar(shift: i64) -> Self {
        Self {
            method: Some(CipherMethod::Caesar),
            key: Some(CipherKey::Shift(shift)),
        }
    }

    pub fn vigenere(key: impl Into<String>) -> Self {
        Self {
            method: Some(CipherMethod::Vigenere),
            key: Some(CipherKey::Text(key.into())),
        }
    }

    pub fn xor(key: impl Into<String>) -> Self {
        Self {
            method: Some(CipherMethod::Xor),
            key: Some(CipherKey::Text(key.into())),
        }
    }
}

/// Options for the translate stub. Active when `to` is set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslateOptions {
    pub to: Option<String>,
}

impl TranslateOptions {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            to: Some(target.into()),
        }
    }
}

/// Options for summarization. Active when `sentences` is positive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SummarizeOptions {
    pub sentences: usize,
}

impl SummarizeOptions {
    pub fn sentences(sentences: usize) -> Self {
        Self { sentences }
    }

    pub fn is_active(&self) -> bool {
        self.sentences > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberStyle {
    Decimal,
    Percent,
    Currency,
}

/// Options for number formatting. Active when `style` is set.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NumberFormatOptions {
    pub locale: String,
    pub style: Option<NumberStyle>,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            style: None,
        }
    }
}

impl NumberFormatOptions {
    pub fn new(locale: impl Into<String>, style: NumberStyle) -> Self {
        Self {
            locale: locale.into(),
            style: Some(style),
        }
    }

    pub fn is_active(&self) -> bool {
        self.style.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    #[default]
    Full,
    Long,
    Medium,
    Short,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DateOptions {
    #[serde(alias = "dateStyle")]
    pub date_style: DateStyle,
}

/// Options for date formatting. Active when `options` is set.
///
/// # Example
/// ```yaml
/// format_date:
///   locale: de-DE
///   options:
///     date_style: long
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DateFormatOptions {
    pub locale: String,
    pub options: Option<DateOptions>,
}

impl Default for DateFormatOptions {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            options: None,
        }
    }
}

impl DateFormatOptions {
    pub fn new(locale: impl Into<String>, date_style: DateStyle) -> Self {
        Self {
            locale: locale.into(),
            options: Some(DateOptions { date_style }),
        }
    }

    pub fn is_active(&self) -> bool {
        self.options.is_some()
    }
}

/// Options for currency formatting. Active when `currency` is set.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CurrencyFormatOptions {
    pub locale: String,
    pub currency: Option<String>,
}

impl Default for CurrencyFormatOptions {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            currency: None,
        }
    }
}

impl CurrencyFormatOptions {
    pub fn new(locale: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            currency: Some(currency.into()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.currency.is_some()
    }
}

/// Fully resolved formatter configuration.
///
/// One field per operation, in pipeline order. The default value keeps the first three
/// sentences and runs the en-US number, full date and USD currency formatters; every
/// other operation is off. [`FormatOptions::inactive`] turns everything off.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatOptions {
    pub encrypt: CipherOptions,
    pub decrypt: CipherOptions,
    pub compress: bool,
    pub decompress: bool,
    pub sentiment: bool,
    pub translate: TranslateOptions,
    pub spell_check: bool,
    pub spell_check_words: Vec<String>,
    pub summarize: SummarizeOptions,
    pub format_number: NumberFormatOptions,
    pub format_date: DateFormatOptions,
    pub format_currency: CurrencyFormatOptions,
    pub remove_diacritics: bool,
    pub remove_emojis: bool,
    pub escape_regex: bool,
    pub unescape_regex: bool,
    pub is_anagram: Option<String>,
    pub is_palindrome: bool,
    pub to_ascii: bool,
    pub from_ascii: bool,
    pub to_morse_code: bool,
    pub from_morse_code: bool,
}

/// A partial configuration. Each `Some` field replaces the whole corresponding
/// field of the base options; nested blocks are not merged field by field.
///
/// # Example
/// ```yaml
/// compress: true
/// format_currency:
///   locale: de-DE
///   currency: EUR
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOverrides {
    pub encrypt: Option<CipherOptions>,
    pub decrypt: Option<CipherOptions>,
    pub compress: Option<bool>,
    pub decompress: Option<bool>,
    pub sentiment: Option<bool>,
    pub translate: Option<TranslateOptions>,
    #[serde(alias = "spellCheck")]
    pub spell_check: Option<bool>,
    #[serde(alias = "spellCheckWords")]
    pub spell_check_words: Option<Vec<String>>,
    pub summarize: Option<SummarizeOptions>,
    #[serde(alias = "formatNumber")]
    pub format_number: Option<NumberFormatOptions>,
    #[serde(alias = "formatDate")]
    pub format_date: Option<DateFormatOptions>,
    #[serde(alias = "formatCurrency")]
    pub format_currency: Option<CurrencyFormatOptions>,
    #[serde(alias = "removeDiacritics")]
    pub remove_diacritics: Option<bool>,
    #[serde(alias = "removeEmojis")]
    pub remove_emojis: Option<bool>,
    #[serde(alias = "escapeRegex")]
    pub escape_regex: Option<bool>,
    #[serde(alias = "unescapeRegex")]
    pub unescape_regex: Option<bool>,
    #[serde(alias = "isAnagram")]
    pub is_anagram: Option<String>,
    #[serde(alias = "isPalindrome")]
    pub is_palindrome: Option<bool>,
    #[serde(alias = "toAscii")]
    pub to_ascii: Option<bool>,
    #[serde(alias = "fromAscii")]
    pub from_ascii: Option<bool>,
    #[serde(alias = "toMorseCode")]
    pub to_morse_code: Option<bool>,
    #[serde(alias = "fromMorseCode")]
    pub from_morse_code: Option<bool>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            summarize: SummarizeOptions::sentences(DEFAULT_SUMMARY_SENTENCES),
            format_number: NumberFormatOptions::new(DEFAULT_LOCALE, NumberStyle::Decimal),
            format_date: DateFormatOptions::new(DEFAULT_LOCALE, DateStyle::Full),
            format_currency: CurrencyFormatOptions::new(DEFAULT_LOCALE, DEFAULT_CURRENCY),
            ..Self::inactive()
        }
    }
}

fn pick<T: Clone>(over: &Option<T>, base: &T) -> T {
    over.as_ref().unwrap_or(base).clone()
}

impl FormatOptions {
    /// Options with every operation switched off.
    pub fn inactive() -> Self {
        Self {
            encrypt: CipherOptions::default(),
            decrypt: CipherOptions::default(),
            compress: false,
            decompress: false,
            sentiment: false,
            translate: TranslateOptions::default(),
            spell_check: false,
            spell_check_words: Vec::new(),
            summarize: SummarizeOptions::default(),
            format_number: NumberFormatOptions::default(),
            format_date: DateFormatOptions::default(),
            format_currency: CurrencyFormatOptions::default(),
            remove_diacritics: false,
            remove_emojis: false,
            escape_regex: false,
            unescape_regex: false,
            is_anagram: None,
            is_palindrome: false,
            to_ascii: false,
            from_ascii: false,
            to_morse_code: false,
            from_morse_code: false,
        }
    }

    /// Shallow-merge `overrides` over these options. Override wins per key.
    pub fn merged(&self, overrides: &FormatOverrides) -> FormatOptions {
        FormatOptions {
            encrypt: pick(&overrides.encrypt, &self.encrypt),
            decrypt: pick(&overrides.decrypt, &self.decrypt),
            compress: pick(&overrides.compress, &self.compress),
            decompress: pick(&overrides.decompress, &self.decompress),
            sentiment: pick(&overrides.sentiment, &self.sentiment),
            translate: pick(&overrides.translate, &self.translate),
            spell_check: pick(&overrides.spell_check, &self.spell_check),
            spell_check_words: pick(&overrides.spell_check_words, &self.spell_check_words),
            summarize: pick(&overrides.summarize, &self.summarize),
            format_number: pick(&overrides.format_number, &self.format_number),
            format_date: pick(&overrides.format_date, &self.format_date),
            format_currency: pick(&overrides.format_currency, &self.format_currency),
            remove_diacritics: pick(&overrides.remove_diacritics, &self.remove_diacritics),
            remove_emojis: pick(&overrides.remove_emojis, &self.remove_emojis),
            escape_regex: pick(&overrides.escape_regex, &self.escape_regex),
            unescape_regex: pick(&overrides.unescape_regex, &self.unescape_regex),
            is_anagram: overrides.is_anagram.clone().or_else(|| self.is_anagram.clone()),
            is_palindrome: pick(&overrides.is_palindrome, &self.is_palindrome),
            to_ascii: pick(&overrides.to_ascii, &self.to_ascii),
            from_ascii: pick(&overrides.from_ascii, &self.from_ascii),
            to_morse_code: pick(&overrides.to_morse_code, &self.to_morse_code),
            from_morse_code: pick(&overrides.from_morse_code, &self.from_morse_code),
        }
    }
}
