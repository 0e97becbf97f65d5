// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::OperationError;

/// What an operation produces before it is threaded on to the next step.
///
/// Checks yield a boolean that is rendered as `"true"` or `"false"` immediately, so
/// the pipeline value stays text either way. The distinction is kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationOutput {
    /// Produces transformed text.
    Text,
    /// Produces a boolean verdict rendered as text.
    Check,
}

/// One step of a formatting pipeline.
pub trait TextOperation: Send + Sync {
    fn apply(&self, input: &str) -> Result<String, OperationError>;

    fn name(&self) -> &'static str;

    fn declared_output(&self) -> OperationOutput {
        OperationOutput::Text
    }
}
