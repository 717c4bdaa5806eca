//! Discount Status
//!
//! Lifecycle status of a discount derived from its active window.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Where a discount sits relative to its active window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountStatus {
    /// The window has started and not yet ended.
    Active,

    /// The window starts in the future.
    Scheduled,

    /// The window has ended.
    Expired,
}

impl DiscountStatus {
    /// Determine the status at `now`.
    ///
    /// A discount that has not started is scheduled even if its end is
    /// already in the past. A missing end never expires.
    pub fn at(starts_at: Timestamp, ends_at: Option<Timestamp>, now: Timestamp) -> Self {
        if starts_at > now {
            return DiscountStatus::Scheduled;
        }

        match ends_at {
            Some(ends_at) if ends_at < now => DiscountStatus::Expired,
            _ => DiscountStatus::Active,
        }
    }

    /// Determine the status against the system clock.
    pub fn current(starts_at: Timestamp, ends_at: Option<Timestamp>) -> Self {
        Self::at(starts_at, ends_at, Timestamp::now())
    }
}

impl fmt::Display for DiscountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiscountStatus::Active => "ACTIVE",
            DiscountStatus::Scheduled => "SCHEDULED",
            DiscountStatus::Expired => "EXPIRED",
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn ts(value: &str) -> Result<Timestamp, jiff::Error> {
        value.parse()
    }

    #[test]
    fn future_start_is_scheduled() -> TestResult {
        let now = ts("2025-03-01T00:00:00Z")?;

        assert_eq!(
            DiscountStatus::at(ts("2025-04-01T00:00:00Z")?, None, now),
            DiscountStatus::Scheduled
        );

        Ok(())
    }

    #[test]
    fn scheduled_takes_precedence_over_expired() -> TestResult {
        let now = ts("2025-03-01T00:00:00Z")?;

        assert_eq!(
            DiscountStatus::at(
                ts("2025-04-01T00:00:00Z")?,
                Some(ts("2025-02-01T00:00:00Z")?),
                now
            ),
            DiscountStatus::Scheduled
        );

        Ok(())
    }

    #[test]
    fn past_end_is_expired() -> TestResult {
        let now = ts("2025-03-01T00:00:00Z")?;

        assert_eq!(
            DiscountStatus::at(
                ts("2025-01-01T00:00:00Z")?,
                Some(ts("2025-02-01T00:00:00Z")?),
                now
            ),
            DiscountStatus::Expired
        );

        Ok(())
    }

    #[test]
    fn open_ended_window_is_active() -> TestResult {
        let now = ts("2025-03-01T00:00:00Z")?;

        assert_eq!(
            DiscountStatus::at(ts("2025-01-01T00:00:00Z")?, None, now),
            DiscountStatus::Active
        );
        assert_eq!(DiscountStatus::at(now, Some(now), now), DiscountStatus::Active);

        Ok(())
    }

    #[test]
    fn displays_wire_name() -> TestResult {
        assert_eq!(DiscountStatus::Expired.to_string(), "EXPIRED");
        assert_eq!(serde_json::to_string(&DiscountStatus::Scheduled)?, r#""SCHEDULED""#);

        Ok(())
    }
}
