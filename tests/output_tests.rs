//! Output tests for smoldump.
//!
//! These tests run the fetch-then-render pipeline against an in-memory
//! history and check the finished JSON, transcript and log text.

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};
use tempfile::tempdir;

use smoldump::core::models::{DisplayZone, RenderConfig};
use smoldump::fetch::{FetchRange, fetch_range};
use smoldump::format::{OutputFormat, render, write_to_format};
use smoldump::{Message, Snowflake};

// ============================================================================
// Helper functions
// ============================================================================

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
}

/// A short conversation with ids 100..=105.
///
/// alice 100 @ 10:00, alice 101 @ 10:01, bob 102 @ 10:02,
/// bob 103 @ 10:05, alice 104 @ 10:20, alice 105 @ 10:22
fn conversation() -> Vec<Message> {
    let rows = [
        (100, 1, "alice", 0, "hi bob"),
        (101, 1, "alice", 1, "are you there?"),
        (102, 2, "bob", 2, "yes"),
        (103, 2, "bob", 5, "what's up"),
        (104, 1, "alice", 20, "sorry, was away"),
        (105, 1, "alice", 22, "lunch?"),
    ];
    rows.iter()
        .map(|&(id, author, name, minutes, content)| {
            Message::new(Snowflake(id), content)
                .with_author(Snowflake(author), name)
                .with_timestamp(t0() + TimeDelta::minutes(minutes))
        })
        .collect()
}

async fn fetch_conversation() -> Vec<Message> {
    let history = conversation();
    let range = FetchRange::new(Snowflake(9), Snowflake(100), Snowflake(105)).unwrap();
    fetch_range(&range, |after| {
        let page: Vec<Message> = history.iter().rev().filter(|m| m.id > after).cloned().collect();
        async move { Ok(page) }
    })
    .await
    .unwrap()
}

// ============================================================================
// End-to-end
// ============================================================================

#[tokio::test]
async fn test_structured_end_to_end() {
    let messages = fetch_conversation().await;
    let json = render(&messages, OutputFormat::Json, &RenderConfig::default()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 6);

    let ids: Vec<&str> = records.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["100", "101", "102", "103", "104", "105"]);

    assert_eq!(records[2]["author"]["id"], "2");
    assert_eq!(records[2]["author"]["username"], "bob");
    assert_eq!(records[2]["author"]["display_name"], "bob");
    assert_eq!(records[2]["content"], "yes");
    assert_eq!(records[2]["timestamp"], "2024-01-15T10:02:00Z");
}

#[tokio::test]
async fn test_log_end_to_end() {
    let messages = fetch_conversation().await;
    let log = render(&messages, OutputFormat::Log, &RenderConfig::default()).unwrap();

    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "[1/15/2024, 10:22:00 AM] alice: lunch?");
    assert_eq!(lines[5], "[1/15/2024, 10:00:00 AM] alice: hi bob");
}

#[tokio::test]
async fn test_transcript_end_to_end() {
    let messages = fetch_conversation().await;
    let text = render(&messages, OutputFormat::Text, &RenderConfig::default()).unwrap();

    let expected = "\
alice - 1/15/2024 at 10:22:00 AM
lunch?
sorry, was away

bob - 1/15/2024 at 10:05:00 AM
what's up
yes

alice - 1/15/2024 at 10:01:00 AM
are you there?
hi bob";
    assert_eq!(text, expected);
}

#[test]
fn test_transcript_gap_boundary() {
    // Exactly 8 minutes stays in the group; 8m01s starts a new one.
    let messages = vec![
        Message::new(Snowflake(1), "one")
            .with_author(Snowflake(1), "alice")
            .with_timestamp(t0()),
        Message::new(Snowflake(2), "two")
            .with_author(Snowflake(1), "alice")
            .with_timestamp(t0() + TimeDelta::minutes(8)),
        Message::new(Snowflake(3), "three")
            .with_author(Snowflake(1), "alice")
            .with_timestamp(t0() + TimeDelta::minutes(16) + TimeDelta::seconds(1)),
    ];

    let text = render(&messages, OutputFormat::Text, &RenderConfig::default()).unwrap();
    assert_eq!(
        text,
        "alice - 1/15/2024 at 10:16:01 AM\nthree\n\nalice - 1/15/2024 at 10:08:00 AM\ntwo\none"
    );
}

#[test]
fn test_same_name_different_author_ids_split() {
    let messages = vec![
        Message::new(Snowflake(1), "from the first alice")
            .with_author(Snowflake(1), "alice")
            .with_timestamp(t0()),
        Message::new(Snowflake(2), "from the second alice")
            .with_author(Snowflake(2), "alice")
            .with_timestamp(t0() + TimeDelta::seconds(10)),
    ];

    let text = render(&messages, OutputFormat::Text, &RenderConfig::default()).unwrap();
    assert_eq!(text.matches("alice - ").count(), 2);
}

#[test]
fn test_single_message_all_formats() {
    let messages = vec![
        Message::new(Snowflake(42), "only one")
            .with_author(Snowflake(7), "carol")
            .with_timestamp(Utc.with_ymd_and_hms(2024, 3, 9, 18, 45, 30).unwrap()),
    ];
    let config = RenderConfig::default();

    assert_eq!(
        render(&messages, OutputFormat::Log, &config).unwrap(),
        "[3/9/2024, 6:45:30 PM] carol: only one"
    );
    assert_eq!(
        render(&messages, OutputFormat::Text, &config).unwrap(),
        "carol - 3/9/2024 at 6:45:30 PM\nonly one"
    );
    let json = render(&messages, OutputFormat::Json, &config).unwrap();
    assert!(json.starts_with("[\n    {\n        \"id\": \"42\","));
}

#[test]
fn test_empty_range_all_formats() {
    let config = RenderConfig::default();
    assert_eq!(render(&[], OutputFormat::Json, &config).unwrap(), "[]");
    assert_eq!(render(&[], OutputFormat::Text, &config).unwrap(), "");
    assert_eq!(render(&[], OutputFormat::Log, &config).unwrap(), "");
}

#[test]
fn test_display_zone_applies_to_text_formats_only() {
    let messages = conversation();
    let tokyo = RenderConfig::new()
        .with_zone(DisplayZone::Fixed(FixedOffset::east_opt(9 * 3600).unwrap()));

    let log = render(&messages, OutputFormat::Log, &tokyo).unwrap();
    assert!(log.starts_with("[1/15/2024, 7:22:00 PM] alice: lunch?"));

    let json = render(&messages, OutputFormat::Json, &tokyo).unwrap();
    assert!(json.contains("2024-01-15T10:22:00Z"));
}

#[test]
fn test_invalid_pattern_is_config_error() {
    let messages = conversation();
    let bad_time = RenderConfig::new().with_time_format("%Q");
    let bad_date = RenderConfig::new().with_date_format("%Q");

    for config in [&bad_time, &bad_date] {
        assert!(render(&messages, OutputFormat::Log, config).unwrap_err().is_config());
        assert!(render(&messages, OutputFormat::Text, config).unwrap_err().is_config());
        // Structured output has no date patterns.
        assert!(render(&messages, OutputFormat::Json, config).is_ok());
    }
}

// ============================================================================
// Writing files
// ============================================================================

#[tokio::test]
async fn test_write_all_formats() {
    let dir = tempdir().unwrap();
    let messages = fetch_conversation().await;
    let config = RenderConfig::default();

    for &format in OutputFormat::all() {
        let path = dir.path().join(format!("out-{}.{}", format, format.extension()));
        write_to_format(&messages, &path, format, &config).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&messages, format, &config).unwrap());
    }
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("ranges.txt");

    let err = write_to_format(&conversation(), &path, OutputFormat::Text, &RenderConfig::default())
        .unwrap_err();
    assert!(err.is_io());
    assert!(!path.exists());
}

#[test]
fn test_invalid_pattern_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ranges.txt");
    let config = RenderConfig::new().with_time_format("%Q");

    let err = write_to_format(&conversation(), &path, OutputFormat::Log, &config).unwrap_err();
    assert!(err.is_config());
    assert!(!path.exists());
}
