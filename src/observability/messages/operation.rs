// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for individual operation steps.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use tracing::Span;

use crate::observability::messages::StructuredLog;
use crate::traits::OperationOutput;

/// Operation applied to the working text.
///
/// # Log Level
/// `debug!` - One per executed step
///
/// # Example
/// ```
/// use std::time::Duration;
/// use string_formatter::observability::messages::operation::OperationApplied;
/// use string_formatter::traits::OperationOutput;
///
/// let msg = OperationApplied {
///     operation: "compress",
///     output: OperationOutput::Text,
///     input_size: 8,
///     output_size: 6,
///     duration: Duration::from_micros(3),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct OperationApplied<'a> {
    pub operation: &'a str,
    pub output: OperationOutput,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for OperationApplied<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Operation '{}' applied ({:?}): input={} bytes, output={} bytes, duration={:?}",
            self.operation, self.output, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for OperationApplied<'_> {
    fn log(&self) {
        tracing::debug!(
            operation = self.operation,
            output = ?self.output,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "operation",
            span_name = name,
            operation = self.operation,
            input_size = self.input_size,
        )
    }
}

/// Operation failed; the rest of the pipeline is skipped.
///
/// # Log Level
/// `warn!` - The pipeline-level failure is logged separately at `error!`
pub struct OperationFailed<'a> {
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for OperationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Operation '{}' failed: {}", self.operation, self.error)
    }
}

impl StructuredLog for OperationFailed<'_> {
    fn log(&self) {
        tracing::warn!(operation = self.operation, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "operation_failed",
            span_name = name,
            operation = self.operation,
            error = %self.error,
        )
    }
}
