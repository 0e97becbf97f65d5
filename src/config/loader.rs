// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use crate::config::FormatOverrides;
use crate::errors::ConfigError;

/// Supported options file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    Yaml,
    Toml,
    Json,
}

impl OptionsFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Some(OptionsFormat::Yaml),
            "toml" => Some(OptionsFormat::Toml),
            "json" => Some(OptionsFormat::Json),
            _ => None,
        }
    }
}

/// Parse formatter overrides from a string in the given format.
pub fn parse_overrides(content: &str, format: OptionsFormat) -> Result<FormatOverrides, ConfigError> {
    let overrides = match format {
        OptionsFormat::Yaml => {
            // An empty YAML document is an empty override set
            if content.trim().is_empty() {
                FormatOverrides::default()
            } else {
                serde_yaml::from_str(content)?
            }
        }
        OptionsFormat::Toml => toml::from_str(content)?,
        OptionsFormat::Json => serde_json::from_str(content)?,
    };
    Ok(overrides)
}

/// Load formatter overrides from a YAML, TOML or JSON file.
///
/// # Example
/// ```yaml
/// encrypt:
///   method: caesar
///   key: 3
/// to_morse_code: true
/// ```
pub fn load_overrides<P: AsRef<Path>>(path: P) -> Result<FormatOverrides, ConfigError> {
    let path = path.as_ref();
    let format = OptionsFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_overrides(&content, format)
}
