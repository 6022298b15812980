//! Export configuration.
//!
//! [`ExportConfig`] is the single value the CLI builds once and hands to the
//! stateless fetch and render functions. It carries no behavior beyond
//! validation and output path resolution.
//!
//! # Example
//!
//! ```rust
//! use smoldump::client::AuthScheme;
//! use smoldump::config::ExportConfig;
//! use smoldump::format::OutputFormat;
//! use std::path::Path;
//!
//! let config = ExportConfig::from_parts(
//!     "token",
//!     AuthScheme::Bot,
//!     "238354899291734017",
//!     "1100000000000000000",
//!     "1100000000000099999",
//!     "json",
//! )?;
//!
//! assert_eq!(config.format, OutputFormat::Json);
//! assert_eq!(
//!     config.resolve_output_path(Path::new("/tmp")),
//!     Path::new("/tmp/ranges.json")
//! );
//! # Ok::<(), smoldump::SmoldumpError>(())
//! ```

use std::path::{Path, PathBuf};

use crate::client::{AuthScheme, ChannelClient, Credentials, DEFAULT_API_URL};
use crate::core::models::RenderConfig;
use crate::error::{Result, SmoldumpError};
use crate::fetch::FetchRange;
use crate::format::OutputFormat;

/// Everything one export run needs.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Token and header scheme
    pub credentials: Credentials,

    /// Channel and inclusive id bounds
    pub range: FetchRange,

    /// Output format (default: text)
    pub format: OutputFormat,

    /// Explicit output path; `None` means the format's default file name
    pub output: Option<PathBuf>,

    /// Date/time display and grouping settings
    pub render: RenderConfig,

    /// API root (default: [`DEFAULT_API_URL`])
    pub api_url: String,
}

impl ExportConfig {
    /// Creates a configuration with default format, output and rendering.
    pub fn new(credentials: Credentials, range: FetchRange) -> Self {
        Self {
            credentials,
            range,
            format: OutputFormat::default(),
            output: None,
            render: RenderConfig::default(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Validates the token and raw range ids, keeping the default format.
    ///
    /// Fails with a configuration error on an empty token, a malformed id
    /// or an inverted range.
    pub fn for_range(
        token: &str,
        scheme: AuthScheme,
        channel: &str,
        start: &str,
        end: &str,
    ) -> Result<Self> {
        let credentials = Credentials::new(token, scheme);
        if credentials.is_empty() {
            return Err(SmoldumpError::config("a token is required"));
        }
        let range = FetchRange::parse(channel, start, end)?;

        Ok(Self::new(credentials, range))
    }

    /// Like [`for_range`](Self::for_range), also parsing a format name.
    pub fn from_parts(
        token: &str,
        scheme: AuthScheme,
        channel: &str,
        start: &str,
        end: &str,
        format: &str,
    ) -> Result<Self> {
        let config = Self::for_range(token, scheme, channel, start, end)?;
        let format: OutputFormat = format.parse().map_err(SmoldumpError::config)?;

        Ok(config.with_format(format))
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Builds an HTTP client for this configuration.
    pub fn client(&self) -> Result<ChannelClient> {
        ChannelClient::with_base_url(self.credentials.clone(), &self.api_url)
    }

    /// Resolves where the output is written.
    ///
    /// - no explicit path: `base_dir/<default file name>`
    /// - absolute path: used as is
    /// - relative path: joined onto `base_dir`
    /// - a path naming an existing directory gets the default file name appended
    pub fn resolve_output_path(&self, base_dir: &Path) -> PathBuf {
        let Some(output) = &self.output else {
            return base_dir.join(self.format.default_filename());
        };

        let path = if output.is_absolute() {
            output.clone()
        } else {
            base_dir.join(output)
        };

        if path.is_dir() {
            path.join(self.format.default_filename())
        } else {
            path
        }
    }
}
