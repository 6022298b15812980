//! Range fetching over the cursor-paginated message listing.
//!
//! The listing endpoint only answers "up to 100 messages strictly newer than
//! cursor X", newest first. [`fetch_range`] walks that endpoint forward from
//! the start of a [`FetchRange`] until a page reaches the end boundary, then
//! returns the collected messages in ascending id order.
//!
//! The page source is any `FnMut(Snowflake) -> Future<Output = Result<Vec<Message>>>`,
//! so the algorithm can be driven by the HTTP client
//! ([`ChannelClient::fetch_range`](crate::client::ChannelClient::fetch_range))
//! or by an in-memory fake:
//!
//! ```rust
//! use smoldump::fetch::{FetchRange, fetch_range};
//! use smoldump::{Message, Snowflake};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> smoldump::Result<()> {
//! let history: Vec<Message> = (100..=105).map(|id| Message::new(Snowflake(id), "")).collect();
//! let range = FetchRange::new(Snowflake(1), Snowflake(100), Snowflake(105))?;
//!
//! let messages = fetch_range(&range, |after| {
//!     let page: Vec<Message> = history.iter().rev().filter(|m| m.id > after).cloned().collect();
//!     async move { Ok(page) }
//! })
//! .await?;
//!
//! assert_eq!(messages.len(), 6);
//! assert_eq!(messages[0].id, Snowflake(100));
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Result, SmoldumpError};
use crate::progress::{FetchProgress, ProgressCallback, no_progress};
use crate::{Message, Snowflake};

/// Number of messages requested per page; the API maximum.
pub const PAGE_SIZE: usize = 100;

/// An inclusive id range within one channel.
///
/// Construction validates that `start <= end` and that `start` has a
/// predecessor to use as the first cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FetchRange {
    channel_id: Snowflake,
    start: Snowflake,
    end: Snowflake,
}

impl FetchRange {
    /// Creates a validated range.
    pub fn new(channel_id: Snowflake, start: Snowflake, end: Snowflake) -> Result<Self> {
        if start > end {
            return Err(SmoldumpError::config(format!(
                "start id {} is newer than end id {}",
                start, end
            )));
        }
        if start.pred().is_none() {
            return Err(SmoldumpError::config("start id must be greater than 0"));
        }
        Ok(Self {
            channel_id,
            start,
            end,
        })
    }

    /// Parses and validates a range from the decimal strings a user types.
    pub fn parse(channel_id: &str, start: &str, end: &str) -> Result<Self> {
        Self::new(
            Snowflake::from_str(channel_id)?,
            Snowflake::from_str(start)?,
            Snowflake::from_str(end)?,
        )
    }

    /// Channel the range belongs to.
    pub fn channel_id(&self) -> Snowflake {
        self.channel_id
    }

    /// First id wanted (inclusive).
    pub fn start(&self) -> Snowflake {
        self.start
    }

    /// Last id wanted (inclusive).
    pub fn end(&self) -> Snowflake {
        self.end
    }

    /// Cursor for the first request: one below `start`, so `start` itself is
    /// returned by the first page.
    pub fn initial_cursor(&self) -> Snowflake {
        self.start.pred().unwrap_or(self.start)
    }

    /// Returns `true` if `id` lies within the range.
    pub fn contains(&self, id: Snowflake) -> bool {
        self.start <= id && id <= self.end
    }
}

/// Index of the first entry in a newest-first page that is at or below `end`.
///
/// Everything before the index is newer than the boundary; everything from
/// it onwards is inside the range. `None` means the whole page lies past the
/// boundary. A match at index 0 is a match.
pub fn boundary_index(page: &[Message], end: Snowflake) -> Option<usize> {
    page.iter().position(|m| end >= m.id)
}

/// Fetches every message in `range`, oldest first.
///
/// `page_fetch(after)` must return up to [`PAGE_SIZE`] messages strictly
/// newer than `after`, newest first. Errors from it are returned as is and
/// any pages already collected are dropped.
///
/// The walk stops at the first page that reaches `end` (an entry at or below
/// `end` past index 0, or a newest id at or above `end`), at a page holding
/// fewer than [`PAGE_SIZE`] entries, at an empty page, or when the cursor
/// fails to move forward.
pub async fn fetch_range<F, Fut>(range: &FetchRange, page_fetch: F) -> Result<Vec<Message>>
where
    F: FnMut(Snowflake) -> Fut,
    Fut: Future<Output = Result<Vec<Message>>>,
{
    fetch_range_with_progress(range, page_fetch, &no_progress()).await
}

/// Like [`fetch_range`], reporting a [`FetchProgress`] after every page.
pub async fn fetch_range_with_progress<F, Fut>(
    range: &FetchRange,
    mut page_fetch: F,
    progress: &ProgressCallback,
) -> Result<Vec<Message>>
where
    F: FnMut(Snowflake) -> Fut,
    Fut: Future<Output = Result<Vec<Message>>>,
{
    let end = range.end();
    let mut after = range.initial_cursor();
    let mut collected: Vec<Message> = Vec::new();
    let mut pages = 0usize;

    loop {
        let page = page_fetch(after).await?;
        pages += 1;
        debug!(page = pages, after = %after, count = page.len(), "fetched page");

        let Some(newest) = page.iter().map(|m| m.id).max() else {
            debug!(after = %after, "empty page, no more messages");
            progress(FetchProgress::new(pages, collected.len(), after).with_end(end));
            break;
        };

        match boundary_index(&page, end) {
            None => {
                debug!(newest = %newest, "page lies entirely past the end boundary");
                progress(FetchProgress::new(pages, collected.len(), newest).with_end(end));
                break;
            }
            // The page either contains the boundary message or passes it.
            Some(k) if k > 0 || newest >= end => {
                collected.extend(page.into_iter().skip(k));
                progress(FetchProgress::new(pages, collected.len(), end).with_end(end));
                break;
            }
            // Index 0 with the newest id short of `end`: newer in-range
            // messages may follow on the next page.
            Some(_) => {
                let short = page.len() < PAGE_SIZE;
                collected.extend(page);
                progress(FetchProgress::new(pages, collected.len(), newest).with_end(end));
                if short {
                    debug!(newest = %newest, "short page, no newer messages");
                    break;
                }
                if newest <= after {
                    warn!(cursor = %after, newest = %newest, "cursor did not advance, stopping");
                    break;
                }
                after = newest;
            }
        }
    }

    let messages = normalize(collected, range);
    info!(
        channel = %range.channel_id(),
        pages,
        messages = messages.len(),
        "range fetched"
    );
    Ok(messages)
}

/// Sorts ascending by id, drops duplicates and anything outside the range.
fn normalize(mut messages: Vec<Message>, range: &FetchRange) -> Vec<Message> {
    messages.retain(|m| range.contains(m.id));
    messages.sort_by_key(|m| m.id);
    messages.dedup_by_key(|m| m.id);
    messages
}
