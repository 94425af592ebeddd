//! Inclusive date range used to filter expense history
//!
//! A range covers whole days: from `start 00:00:00` through `end 23:59:59`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Accepted input format for range endpoints
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range; `start` must not be after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single day
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Build a range from optional textual endpoints
    ///
    /// Neither endpoint yields `None`. A lone endpoint is used for both ends.
    pub fn from_bounds(
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Option<Self>, DateRangeError> {
        let from = from.map(parse_date).transpose()?;
        let to = to.map(parse_date).transpose()?;

        match (from, to) {
            (None, None) => Ok(None),
            (Some(day), None) | (None, Some(day)) => Ok(Some(Self::single_day(day))),
            (Some(start), Some(end)) => Self::new(start, end).map(Some),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// First instant covered by the range
    pub fn lower_bound(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Last whole second covered by the range
    pub fn upper_bound(&self) -> NaiveDateTime {
        // 23:59:59 is always a valid time of day
        self.end
            .and_hms_opt(23, 59, 59)
            .unwrap_or_else(|| self.end.and_time(NaiveTime::MIN))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| DateRangeError::InvalidDate(s.trim().to_string()))
}

/// Errors building a date range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    InvalidDate(String),
    Reversed { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "'{}' is not a date (expected YYYY-MM-DD)", s),
            Self::Reversed { start, end } => {
                write!(f, "start date {} is after end date {}", start, end)
            }
        }
    }
}

impl std::error::Error for DateRangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds_cover_whole_days() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 31)).unwrap();
        assert_eq!(range.lower_bound().to_string(), "2024-01-01 00:00:00");
        assert_eq!(range.upper_bound().to_string(), "2024-01-31 23:59:59");
    }

    #[test]
    fn test_single_day_bounds() {
        let range = DateRange::single_day(day(2024, 2, 29));
        assert_eq!(range.lower_bound().to_string(), "2024-02-29 00:00:00");
        assert_eq!(range.upper_bound().to_string(), "2024-02-29 23:59:59");
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = DateRange::new(day(2024, 2, 1), day(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, DateRangeError::Reversed { .. }));
    }

    #[test]
    fn test_from_bounds() {
        assert_eq!(DateRange::from_bounds(None, None).unwrap(), None);

        let single = DateRange::from_bounds(Some("2024-05-06"), None).unwrap().unwrap();
        assert_eq!(single.start(), single.end());

        let full = DateRange::from_bounds(Some("2024-05-01"), Some("2024-05-31"))
            .unwrap()
            .unwrap();
        assert_eq!(full.to_string(), "2024-05-01 to 2024-05-31");

        assert!(matches!(
            DateRange::from_bounds(Some("05/01/2024"), None),
            Err(DateRangeError::InvalidDate(_))
        ));
    }
}
