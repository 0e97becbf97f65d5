// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // options, defaults, file loading
pub mod engine;     // pipeline executor
pub mod errors;     // error handling
pub mod observability;
pub mod operations; // leaf text operations
pub mod traits;     // unified abstractions

pub use config::{FormatOptions, FormatOverrides};
pub use engine::StringFormatter;
pub use errors::{OperationError, PipelineFailure};
