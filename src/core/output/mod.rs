//! Output renderers.
//!
//! Each renderer turns an ascending message list into a finished string:
//! - [`to_json`] - structured records, oldest first
//! - [`to_text`] - grouped transcript, newest group first
//! - [`to_log`] - one line per message, newest first
//!
//! # Choosing a Format
//!
//! | Format | Order | Use Case |
//! |--------|-------|----------|
//! | JSON | oldest first | Archiving, further processing |
//! | Text | newest first, grouped | Reading a conversation |
//! | Log | newest first | grep, diffing two dumps |
//!
//! # Example
//!
//! ```rust
//! use smoldump::core::output::{to_json, to_log, to_text};
//! use smoldump::core::models::RenderConfig;
//! use smoldump::{Message, Snowflake};
//!
//! let messages = vec![
//!     Message::new(Snowflake(1100000000000000000), "Hello!").with_author(Snowflake(1), "alice"),
//!     Message::new(Snowflake(1100000000000000001), "Hi there!").with_author(Snowflake(2), "bob"),
//! ];
//! let config = RenderConfig::new();
//!
//! let json = to_json(&messages)?;
//! let text = to_text(&messages, &config)?;
//! let log = to_log(&messages, &config)?;
//! assert!(log.lines().next().unwrap().ends_with("bob: Hi there!"));
//! # Ok::<(), smoldump::SmoldumpError>(())
//! ```

mod json_writer;
mod log_writer;
mod text_writer;

pub use json_writer::to_json;
pub use log_writer::to_log;
pub use text_writer::to_text;
