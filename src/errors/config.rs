// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading formatter options from disk.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read options file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML options: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML options: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not one of yaml, yml, toml or json.
    #[error("unsupported options file format: '{0}'")]
    UnsupportedFormat(PathBuf),
}
