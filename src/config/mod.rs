// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod options;

pub mod consts;

pub use loader::{load_overrides, parse_overrides, OptionsFormat};
pub use options::{
    CipherKey, CipherMethod, CipherOptions, CurrencyFormatOptions, DateFormatOptions, DateOptions,
    DateStyle, FormatOptions, FormatOverrides, NumberFormatOptions, NumberStyle, SummarizeOptions,
    TranslateOptions,
};
