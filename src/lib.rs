//! Conversion between Gregorian (AD) dates and Bikram Sambat (BS) dates for
//! BS years 2000-2089, driven by a fixed table of BS month lengths.

mod consts;
mod convert;
mod error;
mod format;
mod prelude;
mod table;
mod types;

pub use consts::*;
pub use convert::{EPOCH_AD, bs_to_gregorian, gregorian_to_bs, supported_gregorian_range};
pub use error::ConversionError;
pub use format::{DateStyle, dual_date, nepali};
pub use table::{contains_year, days_in_month, days_in_year, month_lengths, supported_years};
pub use types::BsMonth;

use crate::prelude::*;
use chrono::NaiveDate;
use std::str::FromStr;

/// A day in the Bikram Sambat calendar, always inside the calendar table.
///
/// Ordering is year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.get()", day)]
pub struct BsDate {
    year:  u16,
    month: BsMonth,
    day:   u8,
}

impl BsDate {
    /// BS 2000-01-01, the day matching [`EPOCH_AD`]
    pub const EPOCH: Self = Self {
        year:  EPOCH_BS_YEAR,
        month: BsMonth::Baisakh,
        day:   EPOCH_BS_DAY,
    };

    /// First day of the calendar table
    pub const MIN: Self = Self::EPOCH;

    /// Last day of the calendar table
    pub const MAX: Self = Self {
        year:  MAX_BS_YEAR,
        month: BsMonth::Chaitra,
        day:   30,
    };

    /// Creates a BS date, validating it against the calendar table
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` if the year is not in the table,
    /// `ConversionError::InvalidMonth` if the month is not 1-12, and
    /// `ConversionError::InvalidDay` if the day is 0 or past the end of the month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ConversionError> {
        if !table::contains_year(year) {
            return Err(ConversionError::OutOfRange { year });
        }
        let month_typed = BsMonth::new(month)?;
        let max_day = table::days_in_month(year, month).ok_or(ConversionError::OutOfRange { year })?;
        if day < MIN_DAY || day > max_day {
            return Err(ConversionError::InvalidDay { year, month, day });
        }
        Ok(Self {
            year,
            month: month_typed,
            day,
        })
    }

    /// Returns the BS year
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month number (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the month as a [`BsMonth`]
    pub const fn month_typed(&self) -> BsMonth {
        self.month
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Length of this date's month
    pub fn days_in_month(&self) -> u8 {
        // year and month were validated against the table on construction
        table::days_in_month(self.year, self.month.get()).unwrap_or(self.day)
    }

    /// Converts to the Gregorian calendar.
    ///
    /// # Errors
    /// Only fails if the date cannot be represented by `NaiveDate`, which does
    /// not happen for dates inside the calendar table.
    pub fn to_gregorian(&self) -> Result<NaiveDate, ConversionError> {
        bs_to_gregorian(self.year, self.month.get(), self.day)
    }

    /// Returns the date `days` days later (or earlier, if negative).
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` if the result leaves the calendar table.
    pub fn checked_add_days(&self, days: i64) -> Result<Self, ConversionError> {
        convert::walk(*self, days)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i64 {
        // both ends are inside the table
        convert::day_offset(*self, *other).unwrap_or_default()
    }

    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ConversionError> {
        s.parse::<u16>()
            .map_err(|_| ConversionError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ConversionError> {
        s.parse::<u8>()
            .map_err(|_| ConversionError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<NaiveDate> for BsDate {
    type Error = ConversionError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        gregorian_to_bs(date)
    }
}

impl TryFrom<(u16, u8, u8)> for BsDate {
    type Error = ConversionError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl FromStr for BsDate {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ConversionError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in {trimmed}",
                parts.len()
            )));
        };

        Self::new(
            Self::parse_u16(year)?,
            Self::parse_u8(month)?,
            Self::parse_u8(day)?,
        )
    }
}

impl serde::Serialize for BsDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
