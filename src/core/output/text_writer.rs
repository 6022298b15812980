//! Grouped transcript renderer.

use crate::Message;
use crate::core::grouping::group_newest_first;
use crate::core::models::RenderConfig;
use crate::error::Result;

/// Renders a transcript, newest group first.
///
/// Groups are formed walking from the newest message back to the oldest
/// (see [`group_newest_first`]). Each group is labelled with its first
/// encountered message:
///
/// ```text
/// alice - 1/15/2024 at 10:31:00 AM
/// second line
/// first line
///
/// bob - 1/15/2024 at 10:20:00 AM
/// hi
/// ```
///
/// # Errors
///
/// Returns a configuration error if a date or time pattern is invalid.
pub fn to_text(messages: &[Message], config: &RenderConfig) -> Result<String> {
    let blocks = group_newest_first(messages, config.group_gap)
        .iter()
        .map(|group| {
            let head = group.head();
            Ok(format!(
                "{} - {} at {}\n{}",
                head.display_name(),
                config.format_date(head.timestamp)?,
                config.format_time(head.timestamp)?,
                group.contents().join("\n")
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(blocks.join("\n\n"))
}
