//! Channel message model.
//!
//! This module provides [`Message`] and [`Author`], the subset of the REST
//! API's message object that an export needs. Fields the API sends but the
//! exporter doesn't use (embeds, reactions, attachments...) are ignored when
//! deserializing.
//!
//! # Examples
//!
//! ## Builder Pattern
//!
//! ```
//! use smoldump::{Message, Snowflake};
//! use chrono::Utc;
//!
//! let msg = Message::new(Snowflake(101), "Hello, world!")
//!     .with_author(Snowflake(7), "alice")
//!     .with_global_name("Alice")
//!     .with_timestamp(Utc::now());
//!
//! assert_eq!(msg.display_name(), "Alice");
//! ```
//!
//! ## From the API
//!
//! ```
//! use smoldump::Message;
//!
//! let json = r#"{
//!     "id": "1100",
//!     "channel_id": "9",
//!     "author": {"id": "7", "username": "alice", "global_name": null},
//!     "content": "hi",
//!     "timestamp": "2024-01-15T10:30:00.123000+00:00",
//!     "pinned": false
//! }"#;
//! let msg: Message = serde_json::from_str(json)?;
//! assert_eq!(msg.id.get(), 1100);
//! assert_eq!(msg.display_name(), "alice");
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Snowflake;

/// The user who sent a message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Author {
    /// Stable user id. Grouping compares on this, never on names.
    pub id: Snowflake,

    /// Account username.
    #[serde(default)]
    pub username: String,

    /// Profile display name, when the user has set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
}

impl Author {
    /// Creates an author with only an id and username.
    pub fn new(id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            global_name: None,
        }
    }

    /// Name shown in transcripts: the global name if set, else the username.
    pub fn display_name(&self) -> &str {
        match self.global_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

/// A single channel message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message id. Ordering and pagination run on this.
    pub id: Snowflake,

    /// Who sent it.
    pub author: Author,

    /// Text body. Empty for attachment-only or system messages.
    #[serde(default)]
    pub content: String,

    /// When the message was sent.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a message with the given id and content.
    ///
    /// The timestamp defaults to the instant encoded in the id, and the
    /// author to an anonymous user with id 0.
    pub fn new(id: Snowflake, content: impl Into<String>) -> Self {
        Self {
            id,
            author: Author::default(),
            content: content.into(),
            timestamp: id.created_at().unwrap_or_default(),
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Builder method to set the author id and username.
    #[must_use]
    pub fn with_author(mut self, id: Snowflake, username: impl Into<String>) -> Self {
        self.author = Author::new(id, username);
        self
    }

    /// Builder method to set the author's global display name.
    #[must_use]
    pub fn with_global_name(mut self, name: impl Into<String>) -> Self {
        self.author.global_name = Some(name.into());
        self
    }

    /// Builder method to set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = ts;
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the author's display name.
    pub fn display_name(&self) -> &str {
        self.author.display_name()
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` if this message's content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
