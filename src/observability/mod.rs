// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Log output goes through message types instead of inline format strings. Each
//! message is a small struct that implements `Display` for the human-readable line
//! and `StructuredLog` for the structured fields, which:
//!
//! * keeps wording in one place instead of scattered through the pipeline
//! * gives every event the same field names
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::pipeline` - formatter lifecycle: start, completion, failure
//! * `messages::operation` - individual operation steps
//!
//! # Usage
//!
//! ```rust
//! use string_formatter::observability::messages::pipeline::PipelineStarted;
//! use string_formatter::observability::messages::StructuredLog;
//!
//! let msg = PipelineStarted {
//!     operation_count: 3,
//!     input_size: 11,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
