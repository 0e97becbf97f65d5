// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod coercion;
pub mod formatter;

pub use coercion::coerce_to_text;
pub use formatter::StringFormatter;
