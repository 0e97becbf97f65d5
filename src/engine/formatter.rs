// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use serde_json::Value;

use crate::config::{FormatOptions, FormatOverrides};
use crate::engine::coercion::coerce_to_text;
use crate::errors::PipelineFailure;
use crate::observability::messages::operation::{OperationApplied, OperationFailed};
use crate::observability::messages::pipeline::{PipelineCompleted, PipelineFailed, PipelineStarted};
use crate::observability::messages::StructuredLog;
use crate::operations::OperationFactory;
use crate::traits::TextOperation;

/// Applies a fixed-order chain of text operations to an input value.
///
/// A formatter holds default options; every call may override them per key. Calls are
/// independent and share no state, so one formatter can serve many threads.
///
/// # Example
/// ```
/// use serde_json::json;
/// use string_formatter::config::{CipherOptions, FormatOptions, FormatOverrides};
/// use string_formatter::StringFormatter;
///
/// let formatter = StringFormatter::with_options(FormatOptions::inactive());
/// let overrides = FormatOverrides {
///     encrypt: Some(CipherOptions::caesar(3)),
///     ..Default::default()
/// };
///
/// assert_eq!(formatter.format(&json!("abc"), &overrides), json!("def"));
/// assert_eq!(formatter.format(&json!(null), &overrides), json!(null));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringFormatter {
    defaults: FormatOptions,
}

impl StringFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter that uses `options` as its defaults verbatim.
    pub fn with_options(options: FormatOptions) -> Self {
        Self { defaults: options }
    }

    /// Create a formatter whose defaults are `defaults` merged over the built-in options.
    pub fn with_defaults(defaults: &FormatOverrides) -> Self {
        Self {
            defaults: FormatOptions::default().merged(defaults),
        }
    }

    pub fn defaults(&self) -> &FormatOptions {
        &self.defaults
    }

    /// Run the pipeline over `input`.
    ///
    /// Returns the final text as a JSON string. When no operation is active, or when
    /// the pipeline fails, the original input value is returned as is; failures are
    /// logged at `error` level and never propagated.
    pub fn format(&self, input: &Value, overrides: &FormatOverrides) -> Value {
        match self.execute(input, overrides) {
            Ok(Some(text)) => Value::String(text),
            Ok(None) => input.clone(),
            Err(failure) => {
                PipelineFailed { error: &failure }.log();
                input.clone()
            }
        }
    }

    /// Run the pipeline over text, returning the input unchanged on failure.
    pub fn format_text(&self, input: &str, overrides: &FormatOverrides) -> String {
        match self.format(&Value::String(input.to_string()), overrides) {
            Value::String(text) => text,
            _ => input.to_string(),
        }
    }

    /// Run the pipeline and surface failures to the caller instead of recovering.
    ///
    /// With no active operation the result is the coerced input text.
    pub fn try_format(&self, input: &Value, overrides: &FormatOverrides) -> Result<String, PipelineFailure> {
        match self.execute(input, overrides)? {
            Some(text) => Ok(text),
            None => coerce_to_text(input),
        }
    }

    /// `Ok(None)` means the plan was empty and nothing ran.
    fn execute(&self, input: &Value, overrides: &FormatOverrides) -> Result<Option<String>, PipelineFailure> {
        if input.is_null() {
            return Err(PipelineFailure::NullInput);
        }

        let options = self.defaults.merged(overrides);
        let plan = OperationFactory::create_plan(&options)?;
        if plan.is_empty() {
            return Ok(None);
        }

        let text = coerce_to_text(input)?;
        run_plan(&plan, text).map(Some)
    }
}

fn run_plan(plan: &[Box<dyn TextOperation>], text: String) -> Result<String, PipelineFailure> {
    let started = PipelineStarted {
        operation_count: plan.len(),
        input_size: text.len(),
    };
    let span = started.span("format");
    let _guard = span.enter();
    started.log();

    let start_time = Instant::now();
    let mut text = text;

    for operation in plan {
        let step_start = Instant::now();
        let output = operation.apply(&text).map_err(|error| {
            OperationFailed {
                operation: operation.name(),
                error: &error,
            }
            .log();
            PipelineFailure::operation(operation.name(), error)
        })?;

        OperationApplied {
            operation: operation.name(),
            output: operation.declared_output(),
            input_size: text.len(),
            output_size: output.len(),
            duration: step_start.elapsed(),
        }
        .log();

        text = output;
    }

    PipelineCompleted {
        operation_count: plan.len(),
        output_size: text.len(),
        duration: start_time.elapsed(),
    }
    .log();

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        CipherOptions, CurrencyFormatOptions, DateFormatOptions, NumberFormatOptions, SummarizeOptions,
    };
    use crate::errors::OperationError;
    use serde_json::json;

    fn plain() -> StringFormatter {
        StringFormatter::with_options(FormatOptions::inactive())
    }

    #[test]
    fn no_active_operation_returns_input_unchanged() {
        let formatter = plain();
        let none = FormatOverrides::default();
        assert_eq!(formatter.format(&json!("hello"), &none), json!("hello"));
        assert_eq!(formatter.format(&json!(42), &none), json!(42));
        assert_eq!(formatter.format(&json!([1, 2]), &none), json!([1, 2]));
    }

    #[test]
    fn active_operation_returns_text() {
        let formatter = plain();
        let overrides = FormatOverrides {
            to_ascii: Some(true),
            ..Default::default()
        };
        assert_eq!(formatter.format(&json!(12), &overrides), json!("49 50"));
    }

    #[test]
    fn null_input_is_returned_not_raised() {
        let formatter = plain();
        assert_eq!(formatter.format(&Value::Null, &FormatOverrides::default()), Value::Null);
        assert_eq!(
            formatter.try_format(&Value::Null, &FormatOverrides::default()),
            Err(PipelineFailure::NullInput)
        );
    }

    #[test]
    fn failure_returns_original_not_partial_text() {
        let formatter = plain();
        let overrides = FormatOverrides {
            // compress runs and succeeds, then from_ascii fails on the letters.
            compress: Some(true),
            from_ascii: Some(true),
            ..Default::default()
        };
        assert_eq!(formatter.format(&json!("aaab"), &overrides), json!("aaab"));

        let failure = formatter.try_format(&json!("aaab"), &overrides).unwrap_err();
        assert_eq!(failure.operation_name(), Some("from_ascii"));
    }

    #[test]
    fn constructor_defaults_apply_and_can_be_overridden() {
        let formatter = StringFormatter::with_options(FormatOptions::inactive().merged(&FormatOverrides {
            encrypt: Some(CipherOptions::caesar(1)),
            ..Default::default()
        }));

        assert_eq!(formatter.format_text("abc", &FormatOverrides::default()), "bcd");

        let disable = FormatOverrides {
            encrypt: Some(CipherOptions::default()),
            ..Default::default()
        };
        assert_eq!(formatter.format_text("abc", &disable), "abc");
    }

    #[test]
    fn try_format_without_operations_coerces() {
        let formatter = plain();
        assert_eq!(
            formatter.try_format(&json!(true), &FormatOverrides::default()).unwrap(),
            "true"
        );
    }

    #[test]
    fn invalid_key_surfaces_as_operation_failure() {
        let formatter = plain();
        let overrides = FormatOverrides {
            encrypt: Some(CipherOptions::vigenere("")),
            ..Default::default()
        };

        let failure = formatter.try_format(&json!("abc"), &overrides).unwrap_err();
        assert!(matches!(
            failure,
            PipelineFailure::Operation {
                operation: "encrypt",
                source: OperationError::InvalidKey { .. }
            }
        ));
        assert_eq!(formatter.format(&json!("abc"), &overrides), json!("abc"));
    }

    #[test]
    fn default_formatter_summarizes_and_formats() {
        let formatter = StringFormatter::new();
        let none = FormatOverrides::default();

        assert_eq!(
            formatter.format(&json!("Hi. There. Third! Fourth?"), &none),
            json!("Hi. There. Third!")
        );
        // "9876.5!" summarizes to "9876. 5!". The number step reads 9876, and the
        // currency step stops at the group separator and reads 9.
        assert_eq!(formatter.format(&json!("9876.5!"), &none), json!("$9.00"));

        let no_currency = FormatOverrides {
            format_currency: Some(CurrencyFormatOptions::default()),
            ..Default::default()
        };
        assert_eq!(formatter.format(&json!("9876.5!"), &no_currency), json!("9,876"));
    }

    #[test]
    fn default_steps_can_be_switched_off_per_call() {
        let formatter = StringFormatter::new();
        let off = FormatOverrides {
            summarize: Some(SummarizeOptions::default()),
            format_number: Some(NumberFormatOptions::default()),
            format_date: Some(DateFormatOptions::default()),
            format_currency: Some(CurrencyFormatOptions::default()),
            ..Default::default()
        };
        assert_eq!(formatter.format(&json!(42), &off), json!(42));
    }

    #[test]
    fn formatter_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StringFormatter>();
    }
}
