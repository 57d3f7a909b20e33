//! AD <-> BS conversion by counting whole days from the epoch.
//!
//! BS 2000-01-01 is AD 1943-04-14. Every conversion is a signed day offset
//! from that pair, absorbed month by month against the calendar table.

use std::ops::RangeInclusive;

use chrono::{NaiveDate, TimeDelta};
use log::{debug, trace};

use crate::consts::{EPOCH_AD_DAY, EPOCH_AD_MONTH, EPOCH_AD_YEAR};
use crate::{BsDate, BsMonth, ConversionError, table};

/// Gregorian date of BS 2000-01-01
pub const EPOCH_AD: NaiveDate =
    match NaiveDate::from_ymd_opt(EPOCH_AD_YEAR, EPOCH_AD_MONTH, EPOCH_AD_DAY) {
        Some(date) => date,
        None => panic!("epoch must be a valid Gregorian date"),
    };

/// Which way a day count moves through the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    const fn of(days: i64) -> Self {
        if days >= 0 { Self::Forward } else { Self::Backward }
    }

    const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Days that carry `day` across the month boundary in this direction.
    fn span(self, day: u8, month_len: u8) -> u64 {
        match self {
            Self::Forward => u64::from(month_len) - u64::from(day) + 1,
            Self::Backward => u64::from(day),
        }
    }

    /// Moves `day` within its month; `by` is less than `span`.
    const fn shift(self, day: u8, by: u8) -> u8 {
        match self {
            Self::Forward => day + by,
            Self::Backward => day - by,
        }
    }

    const fn step(self, year: u16, month: BsMonth) -> (u16, BsMonth) {
        match (self, month) {
            (Self::Forward, BsMonth::Chaitra) => (year + 1, BsMonth::Baisakh),
            (Self::Backward, BsMonth::Baisakh) => (year - 1, BsMonth::Chaitra),
            (Self::Forward, _) => (year, month.next()),
            (Self::Backward, _) => (year, month.previous()),
        }
    }

    /// Day a walk lands on after crossing into a month of `month_len` days.
    const fn entry_day(self, month_len: u8) -> u8 {
        match self {
            Self::Forward => 1,
            Self::Backward => month_len,
        }
    }
}

fn month_length(year: u16, month: BsMonth) -> Result<u8, ConversionError> {
    table::days_in_month(year, month.get()).ok_or(ConversionError::OutOfRange { year })
}

/// Moves `days` days from `start`, forward for positive counts and backward
/// for negative ones. Fails as soon as the walk enters a year missing from
/// the table.
pub(crate) fn walk(start: BsDate, days: i64) -> Result<BsDate, ConversionError> {
    let direction = Direction::of(days);
    let mut remaining = days.unsigned_abs();
    let mut year = start.year();
    let mut month = start.month_typed();
    let mut day = start.day();

    while remaining > 0 {
        let span = direction.span(day, month_length(year, month)?);
        if remaining < span {
            // span never exceeds 33
            #[allow(clippy::cast_possible_truncation)]
            let by = remaining as u8;
            day = direction.shift(day, by);
            break;
        }
        remaining -= span;
        (year, month) = direction.step(year, month);
        day = direction.entry_day(month_length(year, month)?);
    }

    BsDate::new(year, month.get(), day)
}

/// Days in `date`'s year up to and including `date`.
fn day_of_year(date: BsDate) -> Result<i64, ConversionError> {
    let before = table::days_before_month(date.year(), date.month())
        .ok_or(ConversionError::OutOfRange { year: date.year() })?;
    Ok(i64::from(before) + i64::from(date.day()))
}

/// Signed number of days from `from` to `to`.
pub(crate) fn day_offset(from: BsDate, to: BsDate) -> Result<i64, ConversionError> {
    let direction = if to >= from {
        Direction::Forward
    } else {
        Direction::Backward
    };
    let (early, late) = match direction {
        Direction::Forward => (from, to),
        Direction::Backward => (to, from),
    };

    let mut days = 0;
    for year in early.year()..late.year() {
        let total = table::days_in_year(year).ok_or(ConversionError::OutOfRange { year })?;
        days += i64::from(total);
    }
    days += day_of_year(late)? - day_of_year(early)?;

    Ok(direction.sign() * days)
}

/// Converts a Gregorian date to its BS equivalent.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` when the BS date would fall outside
/// the calendar table (before AD 1943-04-14 or after AD 2033-04-13).
pub fn gregorian_to_bs(date: NaiveDate) -> Result<BsDate, ConversionError> {
    let delta = date.signed_duration_since(EPOCH_AD).num_days();
    walk(BsDate::EPOCH, delta)
        .inspect(|bs| trace!("AD {date} -> BS {bs} ({delta:+} days from epoch)"))
        .inspect_err(|err| debug!("AD {date} has no BS equivalent: {err}"))
}

/// Converts a BS year, month and day to the Gregorian date.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` if `year` is outside 2000-2089,
/// `ConversionError::InvalidMonth` if `month` is not 1-12, and
/// `ConversionError::InvalidDay` if `day` is 0 or past the end of the month.
pub fn bs_to_gregorian(year: u16, month: u8, day: u8) -> Result<NaiveDate, ConversionError> {
    let target = BsDate::new(year, month, day)
        .inspect_err(|err| debug!("rejected BS {year}-{month:02}-{day:02}: {err}"))?;
    let offset = day_offset(BsDate::EPOCH, target)?;
    let date = TimeDelta::try_days(offset)
        .and_then(|delta| EPOCH_AD.checked_add_signed(delta))
        .ok_or(ConversionError::OutOfRange { year })?;
    trace!("BS {target} -> AD {date} ({offset:+} days from epoch)");
    Ok(date)
}

/// The Gregorian dates that have a BS equivalent in the calendar table.
pub fn supported_gregorian_range() -> RangeInclusive<NaiveDate> {
    let last = BsDate::MAX.to_gregorian().unwrap_or(EPOCH_AD);
    EPOCH_AD..=last
}
