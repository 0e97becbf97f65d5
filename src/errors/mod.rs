// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod operation;
mod pipeline;

pub use config::ConfigError;
pub use operation::OperationError;
pub use pipeline::PipelineFailure;
