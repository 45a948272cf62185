//! Time periods over messages.
//!
//! A `Period` is a closed interval between two instants. This module also
//! computes the period spanned by a list of messages.

use std::fmt::Display;

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::message::Message;

/// Closed time interval `[start, end]`. Both endpoints are included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PeriodBounds"))]
pub struct Period {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PeriodBounds {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

#[cfg(feature = "serde")]
impl TryFrom<PeriodBounds> for Period {
    type Error = Error;

    fn try_from(bounds: PeriodBounds) -> Result<Self> {
        Period::new(bounds.start, bounds.end)
    }
}

impl Period {
    /// Create a period. Fails when `start` is after `end`; the bounds are never swapped.
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Zero-length period at a single instant.
    pub fn instant(at: DateTime<FixedOffset>) -> Self {
        Self { start: at, end: at }
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Whether `time` lies within the period, endpoints included.
    pub fn contains(&self, time: DateTime<FixedOffset>) -> bool {
        time >= self.start && time <= self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}...{}]", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

/// 1970-01-01T00:00:00Z, anchor of the empty-input period.
pub fn epoch() -> DateTime<FixedOffset> {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}

/// Get the time period spanned by messages.
///
/// Returns the shortest period containing the timestamp of every message.
/// An empty list is not an error: it yields the zero-length period at [`epoch`].
pub fn get_period(messages: &[Message]) -> Period {
    let mut timestamps = messages.iter().map(Message::timestamp);
    let Some(first) = timestamps.next() else {
        return Period::instant(epoch());
    };

    let (start, end) = timestamps.fold((first, first), |(oldest, newest), time| {
        (oldest.min(time), newest.max(time))
    });

    Period { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::parse_timestamp;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn test_new_rejects_reversed_bounds() {
        let early = ts("2016-02-17T10:00:00Z");
        let late = ts("2016-02-17T11:00:00Z");

        assert!(Period::new(early, late).is_ok());
        assert!(Period::new(early, early).is_ok());
        match Period::new(late, early) {
            Err(Error::InvalidPeriod { start, end }) => {
                assert_eq!(start, late);
                assert_eq!(end, early);
            }
            other => panic!("expected InvalidPeriod, got {other:?}"),
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        let period = Period::new(ts("2016-02-17T09:00:00Z"), ts("2016-02-17T12:00:00Z")).unwrap();

        assert!(period.contains(ts("2016-02-17T09:00:00Z")));
        assert!(period.contains(ts("2016-02-17T10:30:00Z")));
        assert!(period.contains(ts("2016-02-17T12:00:00Z")));
        assert!(!period.contains(ts("2016-02-17T08:59:59Z")));
        assert!(!period.contains(ts("2016-02-17T12:00:01Z")));
    }

    #[test]
    fn test_equality_across_offsets() {
        let utc = Period::instant(ts("2016-02-17T10:00:00Z"));
        let cet = Period::instant(ts("2016-02-17T11:00:00+01:00"));
        assert_eq!(utc, cet);
    }

    #[test]
    fn test_get_period_spans_all_messages() {
        let messages = vec![
            Message::new(1, "alyssa", "a", ts("2016-02-17T11:00:00Z")),
            Message::new(2, "bbitdiddle", "b", ts("2016-02-17T10:00:00Z")),
            Message::new(3, "jack", "c", ts("2016-02-17T13:00:00Z")),
            Message::new(4, "dick", "d", ts("2016-02-17T12:00:00Z")),
        ];

        let period = get_period(&messages);
        assert_eq!(period.start(), ts("2016-02-17T10:00:00Z"));
        assert_eq!(period.end(), ts("2016-02-17T13:00:00Z"));
        assert_eq!(period.duration(), TimeDelta::hours(3));
    }

    #[test]
    fn test_get_period_single_message() {
        let when = ts("2016-02-17T10:00:00Z");
        let period = get_period(&[Message::new(1, "alyssa", "a", when)]);
        assert_eq!(period, Period::instant(when));
        assert_eq!(period.duration(), TimeDelta::zero());
    }

    #[test]
    fn test_get_period_empty_is_epoch() {
        let period = get_period(&[]);
        assert_eq!(period.start(), epoch());
        assert_eq!(period.end(), epoch());
        assert_eq!(period.to_string(), "[1970-01-01T00:00:00+00:00...1970-01-01T00:00:00+00:00]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_checks_bounds() {
        let ok = r#"{"start":"2016-02-17T10:00:00+00:00","end":"2016-02-17T11:00:00+00:00"}"#;
        let bad = r#"{"start":"2016-02-17T11:00:00+00:00","end":"2016-02-17T10:00:00+00:00"}"#;
        assert!(serde_json::from_str::<Period>(ok).is_ok());
        assert!(serde_json::from_str::<Period>(bad).is_err());
    }
}
