//! Core rendering logic for smoldump.
//!
//! This module contains:
//! - [`grouping`] - Author/time grouping of consecutive messages
//! - [`models`] - Render configuration (zone, date/time patterns, group gap)
//! - [`output`] - Renderers (JSON, transcript, log)
//!
//! # Quick Start
//!
//! ```rust
//! use smoldump::core::{RenderConfig, group_newest_first, to_text};
//! use smoldump::{Message, Snowflake};
//!
//! let messages = vec![Message::new(Snowflake(5), "hi").with_author(Snowflake(1), "alice")];
//! let config = RenderConfig::new();
//!
//! assert_eq!(group_newest_first(&messages, config.group_gap).len(), 1);
//! assert!(to_text(&messages, &config)?.starts_with("alice - "));
//! # Ok::<(), smoldump::SmoldumpError>(())
//! ```

pub mod grouping;
pub mod models;
pub mod output;

// Re-export main types for convenience
pub use grouping::{GroupingStats, MessageGroup, group_newest_first};
pub use models::{DisplayZone, RenderConfig};

// Re-export Message from the crate root
pub use crate::Message;

pub use output::{to_json, to_log, to_text};
