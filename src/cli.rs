//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`FormatArg`] - Output format choices as the CLI spells them
//!
//! [`Args::to_config`] turns parsed arguments into an
//! [`ExportConfig`](crate::config::ExportConfig), so the binary never touches
//! raw strings after parsing.
//!
//! ```rust
//! use clap::Parser;
//! use smoldump::cli::Args;
//!
//! let args = Args::try_parse_from([
//!     "smoldump", "--token", "t", "--channel", "1", "--start", "100", "--end", "105",
//!     "--format", "structured",
//! ]).unwrap();
//!
//! let config = args.to_config()?;
//! assert_eq!(config.format.default_filename(), "ranges.json");
//! # Ok::<(), smoldump::SmoldumpError>(())
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::client::{AuthScheme, DEFAULT_API_URL};
use crate::config::ExportConfig;
use crate::core::models::{DisplayZone, RenderConfig};
use crate::error::Result;

/// Dump an inclusive range of Discord channel messages to JSON, a grouped
/// transcript, or a plain log.
#[derive(Parser, Debug, Clone)]
#[command(name = "smoldump")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    smoldump --channel 238354899291734017 --start 1100000000000000000 --end 1100000000000099999
    smoldump --bot --channel 238354899291734017 --start 1 --end 2 --format structured
    smoldump --channel 238354899291734017 --start 1 --end 2 --format log -o dumps/")]
pub struct Args {
    /// Account token (user token by default, see --bot/--bearer)
    #[arg(short, long, env = "SMOLDUMP_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Channel id to read from
    #[arg(short, long, value_name = "ID")]
    pub channel: String,

    /// First message id to include
    #[arg(short, long, value_name = "ID")]
    pub start: String,

    /// Last message id to include
    #[arg(short, long, value_name = "ID")]
    pub end: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "transcript")]
    pub format: FormatArg,

    /// Output file or directory (default: ranges.json / ranges.txt in the current directory)
    #[arg(short, long, visible_alias = "dir", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Send the token as a bot token ("Bot <token>")
    #[arg(long, conflicts_with = "bearer")]
    pub bot: bool,

    /// Send the token as an OAuth2 bearer token ("Bearer <token>")
    #[arg(long)]
    pub bearer: bool,

    /// Render dates and times in UTC instead of the local time zone
    #[arg(long)]
    pub utc: bool,

    /// API root to talk to
    #[arg(long, env = "SMOLDUMP_API_URL", default_value = DEFAULT_API_URL, value_name = "URL")]
    pub api_url: String,

    /// Suppress per-page progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Header scheme selected by `--bot` / `--bearer`.
    pub fn auth_scheme(&self) -> AuthScheme {
        if self.bot {
            AuthScheme::Bot
        } else if self.bearer {
            AuthScheme::Bearer
        } else {
            AuthScheme::User
        }
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "smoldump=warn",
            1 => "smoldump=info",
            _ => "smoldump=debug",
        }
    }

    /// Validates the arguments into an [`ExportConfig`].
    pub fn to_config(&self) -> Result<ExportConfig> {
        let zone = if self.utc {
            DisplayZone::Utc
        } else {
            DisplayZone::Local
        };

        let mut config = ExportConfig::for_range(
            &self.token,
            self.auth_scheme(),
            &self.channel,
            &self.start,
            &self.end,
        )?
        .with_format(self.format.into())
        .with_render(RenderConfig::new().with_zone(zone))
        .with_api_url(self.api_url.clone());

        if let Some(output) = &self.output {
            config = config.with_output(output);
        }

        Ok(config)
    }
}

/// Output format choices.
///
/// - [`Structured`](FormatArg::Structured) - JSON array, oldest first
/// - [`Transcript`](FormatArg::Transcript) - grouped by author and time (default)
/// - [`Log`](FormatArg::Log) - one timestamped line per message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatArg {
    /// JSON array of messages
    #[value(alias = "json")]
    #[serde(alias = "json")]
    Structured,

    /// Grouped, human-readable transcript
    #[default]
    #[value(aliases = ["text", "txt"])]
    #[serde(alias = "text")]
    Transcript,

    /// Flat timestamped log
    Log,
}

impl From<FormatArg> for crate::format::OutputFormat {
    fn from(format: FormatArg) -> crate::format::OutputFormat {
        match format {
            FormatArg::Structured => crate::format::OutputFormat::Json,
            FormatArg::Transcript => crate::format::OutputFormat::Text,
            FormatArg::Log => crate::format::OutputFormat::Log,
        }
    }
}
