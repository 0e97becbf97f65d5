// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Number, Value};

use crate::errors::PipelineFailure;

fn number_to_text(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }

    match number.as_f64() {
        Some(value) => float_to_text(value),
        None => number.to_string(),
    }
}

/// Shortest round-trip text for `value`, switching to exponent form below 1e-7 and
/// from 1e21 upward (`1e+21`, `1.5e-7`).
fn float_to_text(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        return "0".to_string();
    }
    if magnitude >= 1e21 || magnitude < 1e-7 {
        let exponent_form = format!("{:e}", value);
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
            _ => exponent_form,
        };
    }
    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }
    value.to_string()
}

fn element_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number_to_text(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(element_to_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Render an input value as pipeline text.
///
/// Strings pass through, numbers drop a zero fraction, booleans become `true`/`false`,
/// arrays join their elements with `,` (null elements render empty) and objects render
/// as `[object Object]`. A null input is the only value that cannot be coerced.
pub fn coerce_to_text(input: &Value) -> Result<String, PipelineFailure> {
    match input {
        Value::Null => Err(PipelineFailure::NullInput),
        other => Ok(element_to_text(other)),
    }
}
