// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by individual text operations.
//!
//! Operations are pure functions of their input text, so every failure here is a
//! parameter or data problem: a cipher key that cannot be used, a code point that
//! does not exist, a locale the formatter has no conventions for.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    /// A cipher method was selected without a key.
    #[error("cipher '{method}' requires a key")]
    MissingKey { method: &'static str },

    /// The key cannot be used with the selected cipher.
    #[error("invalid key for cipher '{method}': {reason}")]
    InvalidKey {
        method: &'static str,
        reason: String,
    },

    /// A numeric value does not map to a Unicode scalar value.
    #[error("invalid code point: {0}")]
    InvalidCodePoint(String),

    /// A decompression run would expand past the configured limit.
    #[error("run of {requested} exceeds the limit of {limit} characters")]
    RunTooLong { requested: u64, limit: u64 },

    /// No formatting conventions are known for the locale tag.
    #[error("unsupported locale: '{0}'")]
    UnsupportedLocale(String),

    /// The currency code is not a three-letter ISO 4217 code.
    #[error("invalid currency code: '{0}'")]
    InvalidCurrency(String),

    /// Currency style was requested without naming a currency.
    #[error("currency style requires a currency code")]
    MissingCurrency,
}
