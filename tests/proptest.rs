//! Property-based tests for smoldump.
//!
//! These tests generate random channel histories, ranges and conversations
//! to find edge cases in pagination and grouping.

use std::collections::BTreeSet;

use chrono::{TimeDelta, TimeZone, Utc};
use proptest::prelude::*;

use smoldump::core::grouping::group_newest_first;
use smoldump::core::models::RenderConfig;
use smoldump::fetch::{FetchRange, PAGE_SIZE, fetch_range};
use smoldump::format::{OutputFormat, render};
use smoldump::{Message, Snowflake};

/// A set of distinct ids, small enough to page over quickly.
fn arb_history() -> impl Strategy<Value = BTreeSet<u64>> {
    prop::collection::btree_set(1u64..5_000, 0..600)
}

/// A valid (start, end) pair.
fn arb_bounds() -> impl Strategy<Value = (u64, u64)> {
    (1u64..5_200, 0u64..5_200).prop_map(|(start, len)| (start, start + len))
}

/// A conversation: (author, minutes since previous message, content).
fn arb_conversation(max_len: usize) -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec(
        (
            prop::sample::select(vec![1u64, 2, 3]),
            0i64..20,
            prop::sample::select(vec![
                "Hello".to_string(),
                "Hi there!".to_string(),
                String::new(),
                "multi\nline".to_string(),
                "Привет мир".to_string(),
                "🎉🔥 emoji".to_string(),
            ]),
        ),
        0..max_len,
    )
    .prop_map(|rows| {
        let mut ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        rows.into_iter()
            .enumerate()
            .map(|(i, (author, minutes, content))| {
                ts += TimeDelta::minutes(minutes);
                Message::new(Snowflake(i as u64 + 1), content)
                    .with_author(Snowflake(author), format!("user{}", author))
                    .with_timestamp(ts)
            })
            .collect()
    })
}

fn fetch_blocking(history: &BTreeSet<u64>, range: &FetchRange) -> Vec<u64> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    let messages = runtime
        .block_on(fetch_range(range, |after| {
            let mut page: Vec<Message> = history
                .range(after.get() + 1..)
                .take(PAGE_SIZE)
                .map(|&id| Message::new(Snowflake(id), ""))
                .collect();
            page.reverse();
            async move { Ok(page) }
        }))
        .unwrap();

    messages.iter().map(|m| m.id.get()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // FETCH PROPERTIES
    // ============================================

    /// The fetch returns exactly the history ids within [start, end], ascending.
    #[test]
    fn fetch_returns_exactly_the_range(history in arb_history(), (start, end) in arb_bounds()) {
        let range = FetchRange::new(Snowflake(1), Snowflake(start), Snowflake(end)).unwrap();
        let fetched = fetch_blocking(&history, &range);

        let expected: Vec<u64> = history.range(start..=end).copied().collect();
        prop_assert_eq!(fetched, expected);
    }

    /// Output is strictly ascending (sorted, no duplicates).
    #[test]
    fn fetch_is_strictly_ascending(history in arb_history(), (start, end) in arb_bounds()) {
        let range = FetchRange::new(Snowflake(1), Snowflake(start), Snowflake(end)).unwrap();
        let fetched = fetch_blocking(&history, &range);

        prop_assert!(fetched.windows(2).all(|w| w[0] < w[1]));
    }

    // ============================================
    // GROUPING PROPERTIES
    // ============================================

    /// Groups partition the messages, newest first, without reordering.
    #[test]
    fn groups_partition_messages(messages in arb_conversation(40)) {
        let groups = group_newest_first(&messages, TimeDelta::minutes(8));

        let flattened: Vec<Snowflake> = groups
            .iter()
            .flat_map(|g| g.messages().iter().map(|m| m.id))
            .collect();
        let expected: Vec<Snowflake> = messages.iter().rev().map(|m| m.id).collect();
        prop_assert_eq!(flattened, expected);
        prop_assert!(groups.iter().all(|g| !g.is_empty()));
    }

    /// Every group has one author and no internal gap over the threshold.
    #[test]
    fn groups_are_single_author_and_tight(messages in arb_conversation(40)) {
        let gap = TimeDelta::minutes(8);
        for group in group_newest_first(&messages, gap) {
            let author = group.author_id();
            prop_assert!(group.messages().iter().all(|m| m.author.id == author));
            for pair in group.messages().windows(2) {
                prop_assert!((pair[0].timestamp - pair[1].timestamp).abs() <= gap);
            }
        }
    }

    /// Neighbouring groups differ in author or are separated by more than the gap.
    #[test]
    fn adjacent_groups_are_split_for_a_reason(messages in arb_conversation(40)) {
        let gap = TimeDelta::minutes(8);
        let groups = group_newest_first(&messages, gap);
        for pair in groups.windows(2) {
            let last = pair[0].messages().last().unwrap();
            let next = pair[1].head();
            prop_assert!(
                last.author.id != next.author.id || (last.timestamp - next.timestamp).abs() > gap
            );
        }
    }

    // ============================================
    // RENDER PROPERTIES
    // ============================================

    /// Rendering is deterministic for every format.
    #[test]
    fn render_is_deterministic(messages in arb_conversation(30)) {
        let config = RenderConfig::default();
        for &format in OutputFormat::all() {
            let first = render(&messages, format, &config).unwrap();
            let second = render(&messages, format, &config).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    /// Structured output has one record per message.
    #[test]
    fn json_has_one_record_per_message(messages in arb_conversation(30)) {
        let json = render(&messages, OutputFormat::Json, &RenderConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(value.as_array().unwrap().len(), messages.len());
    }

    /// Transcript headers equal the number of groups.
    #[test]
    fn transcript_has_one_header_per_group(messages in arb_conversation(30)) {
        let config = RenderConfig::default();
        let groups = group_newest_first(&messages, config.group_gap);
        let text = render(&messages, OutputFormat::Text, &config).unwrap();

        let headers = text
            .lines()
            .filter(|line| line.starts_with("user") && line.contains(" at "))
            .count();
        prop_assert_eq!(headers, groups.len());
    }
}
