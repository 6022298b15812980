//! Rendering configuration.
//!
//! Transcript and log output show dates and times "as the reader would see
//! them". Rather than read the process locale implicitly, the zone and the
//! date/time patterns are part of [`RenderConfig`], so rendering stays a pure
//! function of its inputs.

use std::fmt::Write;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeDelta, Utc};

use crate::core::grouping::default_group_gap;
use crate::error::{Result, SmoldumpError};

/// Default date pattern, e.g. `1/15/2024`.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Default time pattern, e.g. `10:30:00 AM`.
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Time zone used to display timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// Coordinated Universal Time (default)
    #[default]
    Utc,

    /// The machine's local zone, including its DST rules
    Local,

    /// A fixed offset from UTC
    Fixed(FixedOffset),
}

impl DisplayZone {
    /// Converts an instant to wall-clock time in this zone.
    pub fn localize(&self, ts: DateTime<Utc>) -> NaiveDateTime {
        match self {
            DisplayZone::Utc => ts.naive_utc(),
            DisplayZone::Local => ts.with_timezone(&Local).naive_local(),
            DisplayZone::Fixed(offset) => ts.with_timezone(offset).naive_local(),
        }
    }
}

/// Configuration for the text renderers.
///
/// # Example
///
/// ```rust
/// use smoldump::core::models::{DisplayZone, RenderConfig};
/// use chrono::{FixedOffset, TimeZone, Utc};
///
/// let config = RenderConfig::new()
///     .with_zone(DisplayZone::Fixed(FixedOffset::east_opt(2 * 3600).unwrap()));
///
/// let ts = Utc.with_ymd_and_hms(2024, 1, 15, 22, 30, 0).unwrap();
/// assert_eq!(config.format_date(ts)?, "1/16/2024");
/// assert_eq!(config.format_time(ts)?, "12:30:00 AM");
/// # Ok::<(), smoldump::SmoldumpError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Zone timestamps are shown in
    pub zone: DisplayZone,
    /// strftime pattern for dates
    pub date_format: String,
    /// strftime pattern for times
    pub time_format: String,
    /// Largest gap between neighbouring messages of one transcript group
    pub group_gap: TimeDelta,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            zone: DisplayZone::Utc,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            group_gap: default_group_gap(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    #[must_use]
    pub fn with_local_time(self) -> Self {
        self.with_zone(DisplayZone::Local)
    }

    #[must_use]
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = pattern.into();
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, pattern: impl Into<String>) -> Self {
        self.time_format = pattern.into();
        self
    }

    #[must_use]
    pub fn with_group_gap(mut self, gap: TimeDelta) -> Self {
        self.group_gap = gap;
        self
    }

    /// Formats the date part of `ts`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the date pattern is not valid strftime.
    pub fn format_date(&self, ts: DateTime<Utc>) -> Result<String> {
        self.format_with(ts, &self.date_format)
    }

    /// Formats the time part of `ts`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the time pattern is not valid strftime.
    pub fn format_time(&self, ts: DateTime<Utc>) -> Result<String> {
        self.format_with(ts, &self.time_format)
    }

    /// Formats `ts` as `<date>, <time>`.
    pub fn format_datetime(&self, ts: DateTime<Utc>) -> Result<String> {
        Ok(format!("{}, {}", self.format_date(ts)?, self.format_time(ts)?))
    }

    // chrono reports a bad pattern as fmt::Error from Display, which
    // to_string() would turn into a panic.
    fn format_with(&self, ts: DateTime<Utc>, pattern: &str) -> Result<String> {
        let mut out = String::new();
        write!(out, "{}", self.zone.localize(ts).format(pattern))
            .map_err(|_| SmoldumpError::config(format!("Invalid date/time pattern: '{}'", pattern)))?;
        Ok(out)
    }
}
