//! # smoldump
//!
//! A Rust library for dumping an inclusive range of Discord channel messages
//! into a structured JSON file, a grouped transcript, or a flat log.
//!
//! ## Overview
//!
//! The channel listing endpoint only pages forward ("up to 100 messages newer
//! than X"). smoldump walks it from the start id until a page reaches the end
//! id, keeps exactly the messages with `start <= id <= end`, and renders them:
//! - **Structured** - JSON array of `{id, author, content, timestamp}`, oldest first
//! - **Transcript** - messages grouped by author within 8 minutes, newest first
//! - **Log** - one `[date, time] name: content` line per message, newest first
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smoldump::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ChannelClient::new(Credentials::new("my-token", AuthScheme::Bot))?;
//!     let range = FetchRange::parse("238354899291734017", "1100000000000000000", "1100000000000099999")?;
//!
//!     let messages = client.fetch_range(&range).await?;
//!     write_to_format(&messages, "ranges.txt".as_ref(), OutputFormat::Text, &RenderConfig::new())?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Page Sources
//!
//! [`fetch::fetch_range`] takes any async closure as its page source, so the
//! pagination logic runs just as well against an in-memory history:
//!
//! ```rust
//! use smoldump::fetch::{FetchRange, fetch_range};
//! use smoldump::{Message, Snowflake};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> smoldump::Result<()> {
//! let history: Vec<Message> = (1..=250).map(|id| Message::new(Snowflake(id), "")).collect();
//! let range = FetchRange::new(Snowflake(9), Snowflake(50), Snowflake(180))?;
//!
//! let messages = fetch_range(&range, |after| {
//!     let mut page: Vec<Message> = history.iter().filter(|m| m.id > after).take(100).cloned().collect();
//!     page.reverse();
//!     async move { Ok(page) }
//! })
//! .await?;
//!
//! assert_eq!(messages.len(), 131);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`fetch`] - [`FetchRange`](fetch::FetchRange), [`fetch_range`](fetch::fetch_range)
//! - [`client`] - [`ChannelClient`](client::ChannelClient), [`Credentials`](client::Credentials)
//! - [`core`] - Grouping, render configuration and renderers
//!   - [`core::grouping`] - [`group_newest_first`](core::grouping::group_newest_first)
//!   - [`core::models`] - [`RenderConfig`](core::models::RenderConfig)
//!   - [`core::output`] - [`to_json`](core::output::to_json), [`to_text`](core::output::to_text), [`to_log`](core::output::to_log)
//! - [`format`] - [`OutputFormat`](format::OutputFormat), [`render`](format::render)
//! - [`config`] - [`ExportConfig`](config::ExportConfig)
//! - [`progress`] - Per-page progress callbacks
//! - [`error`] - Unified error types ([`SmoldumpError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod error;
pub mod fetch;
pub mod format;
pub mod message;
pub mod progress;
pub mod snowflake;

// Re-export the main types at the crate root for convenience
pub use error::{Result, SmoldumpError};
pub use message::{Author, Message};
pub use snowflake::Snowflake;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use smoldump::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{Author, Message, Snowflake};

    // Error types
    pub use crate::error::{Result, SmoldumpError};

    // Fetching
    pub use crate::client::{AuthScheme, ChannelClient, Credentials};
    pub use crate::fetch::{FetchRange, fetch_range};
    pub use crate::progress::{FetchProgress, ProgressCallback};

    // Rendering
    pub use crate::core::grouping::{MessageGroup, group_newest_first};
    pub use crate::core::models::{DisplayZone, RenderConfig};
    pub use crate::core::output::{to_json, to_log, to_text};
    pub use crate::format::{OutputFormat, render, write_to_format};

    // Configuration
    pub use crate::config::ExportConfig;
}
