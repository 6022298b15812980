//! Structured JSON renderer.

use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::{Message, Snowflake};

/// Reduced author record.
#[derive(Serialize)]
struct JsonAuthor<'a> {
    id: Snowflake,
    username: &'a str,
    display_name: &'a str,
}

/// Reduced message record: only what an archive needs.
#[derive(Serialize)]
struct JsonMessage<'a> {
    id: Snowflake,
    author: JsonAuthor<'a>,
    content: &'a str,
    timestamp: String,
}

impl<'a> JsonMessage<'a> {
    fn from_message(msg: &'a Message) -> Self {
        Self {
            id: msg.id,
            author: JsonAuthor {
                id: msg.author.id,
                username: &msg.author.username,
                display_name: msg.author.display_name(),
            },
            content: &msg.content,
            timestamp: msg.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// Renders messages as a JSON array indented with four spaces.
///
/// Records keep the input order, so an ascending fetch gives oldest first.
/// `display_name` is the name transcript and log output show; `username` is
/// the account name it falls back to.
///
/// # Format
/// ```json
/// [
///     {
///         "id": "1100000000000000000",
///         "author": {
///             "id": "80351110224678912",
///             "username": "alice",
///             "display_name": "Alice"
///         },
///         "content": "Hello",
///         "timestamp": "2024-01-15T10:30:00Z"
///     }
/// ]
/// ```
pub fn to_json(messages: &[Message]) -> Result<String> {
    let records: Vec<JsonMessage<'_>> = messages.iter().map(JsonMessage::from_message).collect();

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}
