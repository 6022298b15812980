//! Progress reporting for range fetches.
//!
//! A fetch over a long range can take hundreds of sequential requests. Callers
//! that want to show something while it runs pass a [`ProgressCallback`] to
//! [`fetch_range_with_progress`](crate::fetch::fetch_range_with_progress); it
//! is invoked once after every page.
//!
//! # Example
//!
//! ```rust
//! use smoldump::progress::{FetchProgress, ProgressCallback};
//! use smoldump::Snowflake;
//! use std::sync::Arc;
//!
//! let callback: ProgressCallback = Arc::new(|progress| {
//!     println!("{} pages, {} messages", progress.pages, progress.messages);
//! });
//!
//! callback(FetchProgress::new(1, 100, Snowflake(42)));
//! ```

use std::sync::Arc;

use crate::Snowflake;

/// Snapshot of a fetch in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchProgress {
    /// Number of pages requested so far.
    pub pages: usize,

    /// Number of in-range messages kept so far.
    pub messages: usize,

    /// Cursor the next request would use.
    pub cursor: Snowflake,

    /// Inclusive end of the range being fetched, if known.
    pub end: Option<Snowflake>,
}

impl FetchProgress {
    /// Creates a new progress snapshot.
    pub fn new(pages: usize, messages: usize, cursor: Snowflake) -> Self {
        Self {
            pages,
            messages,
            cursor,
            end: None,
        }
    }

    /// Attaches the range end, enabling [`is_complete`](Self::is_complete).
    #[must_use]
    pub fn with_end(mut self, end: Snowflake) -> Self {
        self.end = Some(end);
        self
    }

    /// Returns whether the cursor has reached the end of the range.
    pub fn is_complete(&self) -> bool {
        self.end.map(|end| self.cursor >= end).unwrap_or(false)
    }
}

/// Callback type for receiving progress updates.
pub type ProgressCallback = Arc<dyn Fn(FetchProgress) + Send + Sync>;

/// Creates a no-op progress callback.
pub fn no_progress() -> ProgressCallback {
    Arc::new(|_| {})
}

/// Creates a progress callback that prints one line per page to stderr.
pub fn stderr_progress() -> ProgressCallback {
    Arc::new(|progress| {
        eprintln!(
            "   page {:>4}: {} messages (cursor {})",
            progress.pages, progress.messages, progress.cursor
        );
    })
}
