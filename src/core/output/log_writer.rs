//! Flat log renderer.

use crate::Message;
use crate::core::models::RenderConfig;
use crate::error::Result;

/// Renders one `[<date>, <time>] <name>: <content>` line per message,
/// newest first.
///
/// # Errors
///
/// Returns a configuration error if a date or time pattern is invalid.
pub fn to_log(messages: &[Message], config: &RenderConfig) -> Result<String> {
    let lines = messages
        .iter()
        .rev()
        .map(|msg| {
            Ok(format!(
                "[{}] {}: {}",
                config.format_datetime(msg.timestamp)?,
                msg.display_name(),
                msg.content
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(lines.join("\n"))
}
