//! Release dates and the "new release" recency check.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Default trailing window for a shoe to count as new.
pub const DEFAULT_NEW_RELEASE_DAYS: u32 = 30;

/// Instant a shoe was released, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReleaseDate(DateTime<Utc>);

impl ReleaseDate {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Midnight UTC of the given calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }

    /// Milliseconds since the Unix epoch.
    pub fn from_millis(millis: i64) -> Result<Self, CatalogError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| CatalogError::InvalidReleaseDate(millis.to_string()))
    }

    /// Parse `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        let s = s.trim();
        if let Ok(at) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(at.with_timezone(&Utc)));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| CatalogError::InvalidReleaseDate(s.to_string()))
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// Source of "now" for recency checks.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant, for reproducible renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Midnight UTC of the given date.
    pub fn on_date(date: NaiveDate) -> Self {
        Self(ReleaseDate::from_date(date).as_datetime())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Classifies release dates as new when they fall inside a trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyPolicy {
    window: Duration,
}

impl RecencyPolicy {
    /// Policy with a window of `days` days.
    pub fn with_days(days: u32) -> Self {
        Self {
            window: Duration::days(i64::from(days)),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Released less than one window before `now`. Future dates count as new.
    pub fn is_new(&self, release: ReleaseDate, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(release.as_datetime()) < self.window
    }
}

impl Default for RecencyPolicy {
    fn default() -> Self {
        Self::with_days(DEFAULT_NEW_RELEASE_DAYS)
    }
}

/// Whether a shoe released at `release` counts as new at the clock's instant.
pub fn is_new_shoe(release: ReleaseDate, policy: &RecencyPolicy, clock: &dyn Clock) -> bool {
    policy.is_new(release, clock.now())
}
