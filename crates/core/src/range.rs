// SPDX-License-Identifier: MIT

//!
//! The inclusive-exclusive date range covered by a selected month
//!

use crate::MonthToken;
use chrono::{DateTime, NaiveTime, Utc};

/// The UTC instant range `[from, to)` covered by a [`MonthToken`]: `from` is
/// the first instant of the selected month and `to` the first instant of the
/// following month.  `from < to` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl DateRange {
    /// Resolve the range for a selected month.  Pure: the same token always
    /// resolves to the same range
    pub fn for_month(month: &MonthToken) -> Self {
        let from = month.first_day().and_time(NaiveTime::MIN).and_utc();
        let to = month
            .first_day_of_next_month()
            .and_time(NaiveTime::MIN)
            .and_utc();
        DateRange { from, to }
    }

    /// The first instant of the selected month (inclusive lower bound)
    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    /// The first instant of the following month (exclusive upper bound)
    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// The lower bound as an ISO-8601 instant string with millisecond
    /// precision (e.g. `2024-12-01T00:00:00.000Z`), the form date-typed
    /// columns are compared against on the wire
    pub fn iso_from(&self) -> String {
        format_iso(self.from)
    }

    /// The upper bound as an ISO-8601 instant string with millisecond
    /// precision
    pub fn iso_to(&self) -> String {
        format_iso(self.to)
    }
}

fn format_iso(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ordinary_month() {
        let token = MonthToken::from("2024-06").unwrap();
        let range = DateRange::for_month(&token);
        assert!(range.from() < range.to());
        assert_eq!(range.iso_from(), "2024-06-01T00:00:00.000Z");
        assert_eq!(range.iso_to(), "2024-07-01T00:00:00.000Z");
        assert_eq!((range.to() - range.from()).num_days(), 30);
    }

    #[test]
    fn year_rollover() {
        let token = MonthToken::from("2024-12").unwrap();
        let range = DateRange::for_month(&token);
        assert_eq!(range.iso_from(), "2024-12-01T00:00:00.000Z");
        assert_eq!(range.iso_to(), "2025-01-01T00:00:00.000Z");
    }

    #[test]
    fn leap_year_february() {
        let token = MonthToken::from("2024-02").unwrap();
        let range = DateRange::for_month(&token);
        assert_eq!((range.to() - range.from()).num_days(), 29);

        let token = MonthToken::from("2023-02").unwrap();
        let range = DateRange::for_month(&token);
        assert_eq!((range.to() - range.from()).num_days(), 28);
    }

    #[test]
    fn pure_and_idempotent() {
        let token = MonthToken::from("2031-08").unwrap();
        assert_eq!(DateRange::for_month(&token), DateRange::for_month(&token));
    }
}
