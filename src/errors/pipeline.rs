// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::OperationError;

/// The one failure a pipeline run can end in.
///
/// `StringFormatter::format` catches this at the top of the call, logs it and hands the
/// caller back the untouched input. `StringFormatter::try_format` surfaces it directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineFailure {
    /// The input value was null.
    #[error("input cannot be null")]
    NullInput,

    /// An operation failed while the plan was being built or run.
    #[error("operation '{operation}' failed: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: OperationError,
    },
}

impl PipelineFailure {
    pub fn operation(operation: &'static str, source: OperationError) -> Self {
        PipelineFailure::Operation { operation, source }
    }

    /// Name of the failing operation, or `None` for input failures.
    pub fn operation_name(&self) -> Option<&'static str> {
        match self {
            PipelineFailure::NullInput => None,
            PipelineFailure::Operation { operation, .. } => Some(operation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_failure_names_the_operation() {
        let failure = PipelineFailure::operation("encrypt", OperationError::MissingKey { method: "caesar" });
        assert_eq!(failure.operation_name(), Some("encrypt"));
        assert_eq!(
            failure.to_string(),
            "operation 'encrypt' failed: cipher 'caesar' requires a key"
        );
    }

    #[test]
    fn null_input_has_no_operation() {
        assert_eq!(PipelineFailure::NullInput.operation_name(), None);
        assert_eq!(PipelineFailure::NullInput.to_string(), "input cannot be null");
    }
}
