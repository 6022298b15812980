//! Numeric message and channel identifiers.
//!
//! Discord ids are 64-bit integers transmitted as decimal strings. Their
//! decimal width grows over time, so two ids must never be compared as
//! strings: `"99999999999999999"` is smaller than `"100000000000000000"`.
//! [`Snowflake`] parses the string once and compares as an integer.
//!
//! ```
//! use smoldump::Snowflake;
//!
//! let a: Snowflake = "99999999999999999".parse()?;
//! let b: Snowflake = "100000000000000000".parse()?;
//! assert!(a < b);
//! # Ok::<(), smoldump::SmoldumpError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SmoldumpError;

/// Milliseconds between the Unix epoch and the first second of 2015.
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// A snowflake id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(pub u64);

impl Snowflake {
    /// Wraps a raw integer id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id immediately preceding this one, or `None` for zero.
    ///
    /// Used to turn an inclusive lower bound into an exclusive `after` cursor.
    pub fn pred(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    /// Instant encoded in the upper 42 bits of the id.
    pub fn created_at(self) -> Option<DateTime<Utc>> {
        let ms = (self.0 >> 22).checked_add(DISCORD_EPOCH_MS)?;
        DateTime::from_timestamp_millis(i64::try_from(ms).ok()?)
    }
}

impl From<u64> for Snowflake {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = SmoldumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SmoldumpError::invalid_snowflake(s));
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| SmoldumpError::invalid_snowflake(s))
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnowflakeVisitor;

        impl Visitor<'_> for SnowflakeVisitor {
            type Value = Snowflake;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a snowflake as a decimal string or unsigned integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Snowflake, E> {
                Ok(Snowflake(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Snowflake, E> {
                u64::try_from(v)
                    .map(Snowflake)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Snowflake, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor)
    }
}
