// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the formatter pipeline lifecycle.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use tracing::Span;

use crate::observability::messages::StructuredLog;

/// Pipeline run started.
///
/// # Log Level
/// `debug!` - One per `format` call
///
/// # Example
/// ```
/// use string_formatter::observability::messages::pipeline::PipelineStarted;
///
/// let msg = PipelineStarted {
///     operation_count: 2,
///     input_size: 5,
/// };
///
/// assert_eq!(msg.to_string(), "Formatting pipeline started: 2 operations, input_size=5 bytes");
/// ```
pub struct PipelineStarted {
    pub operation_count: usize,
    pub input_size: usize,
}

impl Display for PipelineStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Formatting pipeline started: {} operations, input_size={} bytes",
            self.operation_count, self.input_size
        )
    }
}

impl StructuredLog for PipelineStarted {
    fn log(&self) {
        tracing::debug!(
            operation_count = self.operation_count,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "format_pipeline",
            span_name = name,
            operation_count = self.operation_count,
            input_size = self.input_size,
        )
    }
}

/// Pipeline run completed.
///
/// # Log Level
/// `debug!` - One per successful `format` call
pub struct PipelineCompleted {
    pub operation_count: usize,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for PipelineCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Formatting pipeline completed: {} operations, output_size={} bytes, duration={:?}",
            self.operation_count, self.output_size, self.duration
        )
    }
}

impl StructuredLog for PipelineCompleted {
    fn log(&self) {
        tracing::debug!(
            operation_count = self.operation_count,
            output_size = self.output_size,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "format_pipeline_completed",
            span_name = name,
            operation_count = self.operation_count,
            output_size = self.output_size,
            duration = ?self.duration,
        )
    }
}

/// Pipeline aborted; the caller receives the original input.
///
/// # Log Level
/// `error!` - The only signal a caller has that formatting failed
///
/// # Example
/// ```
/// use string_formatter::errors::PipelineFailure;
/// use string_formatter::observability::messages::pipeline::PipelineFailed;
///
/// let error = PipelineFailure::NullInput;
/// let msg = PipelineFailed { error: &error };
///
/// assert_eq!(msg.to_string(), "Error in StringFormatter: input cannot be null");
/// ```
pub struct PipelineFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for PipelineFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Error in StringFormatter: {}", self.error)
    }
}

impl StructuredLog for PipelineFailed<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("format_pipeline_failed", span_name = name, error = %self.error)
    }
}
