//! Output format selection.
//!
//! This module provides the library-side [`OutputFormat`] and the [`render`]
//! dispatcher. These types don't depend on the CLI framework.
//!
//! # Example
//!
//! ```rust
//! use smoldump::format::{OutputFormat, render};
//! use smoldump::core::models::RenderConfig;
//! use smoldump::{Message, Snowflake};
//!
//! let messages = vec![Message::new(Snowflake(100), "Hello!").with_author(Snowflake(1), "alice")];
//!
//! let format: OutputFormat = "log".parse().unwrap();
//! let out = render(&messages, format, &RenderConfig::new())?;
//! assert!(out.ends_with("alice: Hello!"));
//! assert_eq!(format.default_filename(), "ranges.txt");
//! # Ok::<(), smoldump::SmoldumpError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::core::models::RenderConfig;
use crate::core::output::{to_json, to_log, to_text};
use crate::error::Result;

/// Output format for range dumps.
///
/// - [`Json`](OutputFormat::Json) - structured records, oldest first
/// - [`Text`](OutputFormat::Text) - transcript grouped by author and time, newest first
/// - [`Log`](OutputFormat::Log) - one timestamped line per message, newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Structured JSON array
    #[serde(alias = "structured")]
    Json,

    /// Grouped, human-readable transcript (default)
    #[default]
    #[serde(alias = "transcript")]
    Text,

    /// Flat timestamped log
    Log,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text | OutputFormat::Log => "txt",
        }
    }

    /// File name used when no output path is given.
    pub fn default_filename(&self) -> &'static str {
        match self {
            OutputFormat::Json => "ranges.json",
            OutputFormat::Text | OutputFormat::Log => "ranges.txt",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "structured", "text", "transcript", "txt", "log"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Text, OutputFormat::Log]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Text | OutputFormat::Log => "text/plain",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Log => write!(f, "Log"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" | "structured" => Ok(OutputFormat::Json),
            "text" | "transcript" | "txt" => Ok(OutputFormat::Text),
            "log" => Ok(OutputFormat::Log),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders an ascending message list in the given format.
///
/// Pure: the same messages, format and config always give the same string.
///
/// # Errors
///
/// Returns a configuration error if a date or time pattern in `config` is
/// invalid, or a JSON error if serialization fails.
pub fn render(messages: &[Message], format: OutputFormat, config: &RenderConfig) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(messages),
        OutputFormat::Text => to_text(messages, config),
        OutputFormat::Log => to_log(messages, config),
    }
}

/// Renders messages and writes them to `path`.
///
/// The file is only created once rendering has succeeded.
pub fn write_to_format(
    messages: &[Message],
    path: &Path,
    format: OutputFormat,
    config: &RenderConfig,
) -> Result<()> {
    let rendered = render(messages, format, config)?;
    fs::write(path, rendered)?;
    Ok(())
}
