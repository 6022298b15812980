//! Grouping of consecutive messages into transcript runs.
//!
//! A run is a maximal sequence of consecutive messages from one author where
//! each message is within the gap threshold of the one before it. Grouping
//! walks an already ordered sequence and never reorders it; the transcript
//! renderer feeds it newest-first.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use smoldump::core::grouping::group_newest_first;
//! use smoldump::{Message, Snowflake};
//!
//! let t0 = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
//! let messages = vec![
//!     Message::new(Snowflake(1), "hi").with_author(Snowflake(10), "alice").with_timestamp(t0),
//!     Message::new(Snowflake(2), "hello").with_author(Snowflake(10), "alice")
//!         .with_timestamp(t0 + TimeDelta::minutes(1)),
//!     Message::new(Snowflake(3), "yo").with_author(Snowflake(20), "bob")
//!         .with_timestamp(t0 + TimeDelta::minutes(2)),
//! ];
//!
//! let groups = group_newest_first(&messages, TimeDelta::minutes(8));
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[1].contents(), vec!["hello", "hi"]);
//! ```

use chrono::TimeDelta;

use crate::{Message, Snowflake};

/// Default gap after which a new group starts, in minutes.
pub const DEFAULT_GROUP_GAP_MINUTES: i64 = 8;

/// Default gap after which a new group starts.
pub fn default_group_gap() -> TimeDelta {
    TimeDelta::minutes(DEFAULT_GROUP_GAP_MINUTES)
}

/// A run of consecutive messages from one author. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageGroup<'a> {
    messages: Vec<&'a Message>,
}

impl<'a> MessageGroup<'a> {
    fn start(first: &'a Message) -> Self {
        Self {
            messages: vec![first],
        }
    }

    /// First message encountered in traversal order. Its author and
    /// timestamp label the group.
    pub fn head(&self) -> &'a Message {
        self.messages[0]
    }

    /// Messages in traversal order.
    pub fn messages(&self) -> &[&'a Message] {
        &self.messages
    }

    /// Id of the author shared by every message in the group.
    pub fn author_id(&self) -> Snowflake {
        self.head().author.id
    }

    /// Message bodies in traversal order.
    pub fn contents(&self) -> Vec<&'a str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn accepts(&self, next: &Message, gap: TimeDelta) -> bool {
        let Some(last) = self.messages.last() else {
            return false;
        };
        last.author.id == next.author.id && (next.timestamp - last.timestamp).abs() <= gap
    }
}

/// Groups messages in the order the iterator yields them.
///
/// A new group starts when the author changes or when the time between a
/// message and the previous one exceeds `gap`. A gap of exactly `gap` stays
/// in the same group.
pub fn group_consecutive<'a, I>(messages: I, gap: TimeDelta) -> Vec<MessageGroup<'a>>
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut groups: Vec<MessageGroup<'a>> = Vec::new();

    for msg in messages {
        match groups.last_mut() {
            Some(group) if group.accepts(msg, gap) => group.messages.push(msg),
            _ => groups.push(MessageGroup::start(msg)),
        }
    }

    groups
}

/// Groups an ascending message list walking from the newest message back to
/// the oldest.
pub fn group_newest_first(messages: &[Message], gap: TimeDelta) -> Vec<MessageGroup<'_>> {
    group_consecutive(messages.iter().rev(), gap)
}

/// Statistics about a grouping pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingStats {
    pub message_count: usize,
    pub group_count: usize,
}

impl GroupingStats {
    pub fn new(message_count: usize, group_count: usize) -> Self {
        Self {
            message_count,
            group_count,
        }
    }

    /// Average number of messages per group.
    pub fn messages_per_group(&self) -> f64 {
        if self.group_count == 0 {
            return 0.0;
        }
        self.message_count as f64 / self.group_count as f64
    }
}
