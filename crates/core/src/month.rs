// SPDX-License-Identifier: MIT

//!
//! The MonthSlicer month-selection token type
//!

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// The minimum year allowed in a [`MonthToken`] (tokens carry four-digit years)
pub const MIN_YEAR: i64 = 1;

/// The maximum year allowed in a [`MonthToken`]
pub const MAX_YEAR: i64 = 9999;

/// Errors that can arise in relation to a [`MonthToken`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonthTokenError {
    /// The string is not in `YYYY-MM` form
    #[error("`{0}` is not a YYYY-MM month token")]
    Format(String),

    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(i64),

    /// The year number is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),
}

/// The MonthSlicer month-of-year type
#[rustfmt::skip]
#[derive(derive_more::Display, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct MonthOfYear(u8);

/// The MonthSlicer year type
///
/// The minimum year allowed is [`MIN_YEAR`].  The maximum year allowed is
/// [`MAX_YEAR`]
#[rustfmt::skip]
#[derive(derive_more::Display, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl MonthOfYear {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn min() -> Self {
        Year(MIN_YEAR as i32)
    }

    pub fn max() -> Self {
        Year(MAX_YEAR as i32)
    }
}

impl TryFrom<i64> for MonthOfYear {
    type Error = MonthTokenError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=12).contains(&value) {
            Ok(MonthOfYear(value as u8))
        } else {
            Err(MonthTokenError::InvalidMonth(value))
        }
    }
}

impl TryFrom<i64> for Year {
    type Error = MonthTokenError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as i32))
        } else {
            Err(MonthTokenError::InvalidYear(value))
        }
    }
}

/// The month the user has selected, as delivered by a month-picker input:
/// a `YYYY-MM` string identifying a calendar year and month.  The day of the
/// month is not part of the token.
///
/// The raw string is kept alongside the parsed date because duplicate
/// detection compares raw tokens - the strict format means equal tokens and
/// equal strings coincide.
#[derive(derive_more::Display, Clone, Debug, PartialEq, Eq, Hash)]
#[display("{raw}")]
pub struct MonthToken {
    raw: String,
    first: NaiveDate,
}

impl MonthToken {
    /// Create a new [`MonthToken`] if the string is a valid `YYYY-MM` token
    pub fn from<S: ToString>(token: S) -> Result<Self, MonthTokenError> {
        let raw = token.to_string();

        let Some((year_part, month_part)) = raw.split_once('-') else {
            return Err(MonthTokenError::Format(raw));
        };
        if year_part.len() != 4
            || month_part.len() != 2
            || !year_part.bytes().all(|b| b.is_ascii_digit())
            || !month_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(MonthTokenError::Format(raw.clone()));
        }

        // Four and two ASCII digits always parse
        let year = match year_part.parse::<i64>() {
            Ok(year) => Year::try_from(year)?,
            Err(_) => return Err(MonthTokenError::Format(raw.clone())),
        };
        let month = match month_part.parse::<i64>() {
            Ok(month) => MonthOfYear::try_from(month)?,
            Err(_) => return Err(MonthTokenError::Format(raw.clone())),
        };

        match NaiveDate::from_ymd_opt(year.value(), month.value() as u32, 1) {
            Some(first) => Ok(MonthToken { raw, first }),
            None => Err(MonthTokenError::InvalidYear(year.value() as i64)),
        }
    }

    /// The token for the month containing a given calendar date
    pub fn containing(date: NaiveDate) -> Result<Self, MonthTokenError> {
        Self::from(format!("{:04}-{:02}", date.year(), date.month()))
    }

    /// The token a freshly constructed slicer starts on: the month containing
    /// yesterday, so that on the first of a month the control still shows a
    /// fully elapsed month
    pub fn default_selection() -> Result<Self, MonthTokenError> {
        let today = Utc::now().date_naive();
        // pred_opt is only None at chrono's minimum date
        let yesterday = today.pred_opt().unwrap_or(today);
        Self::containing(yesterday)
    }

    /// Get the token's raw `YYYY-MM` string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the token's year
    pub fn year(&self) -> Year {
        Year(self.first.year())
    }

    /// Get the token's month
    pub fn month(&self) -> MonthOfYear {
        MonthOfYear(self.first.month() as u8)
    }

    /// First calendar day of the selected month
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// First calendar day of the month after the selected one (December rolls
    /// over into January of the next year)
    pub fn first_day_of_next_month(&self) -> NaiveDate {
        let (year, month) = match self.first.month() {
            12 => (self.first.year() + 1, 1),
            month => (self.first.year(), month + 1),
        };
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(date) => date,
            // Token years are capped at MAX_YEAR, well inside chrono's range
            None => panic!("Year must be {MIN_YEAR} <= x <= {MAX_YEAR}"),
        }
    }
}

impl Serialize for MonthToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for MonthToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        MonthToken::from(string).map_err(serde::de::Error::custom)
    }
}
