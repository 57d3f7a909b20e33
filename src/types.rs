use crate::ConversionError;
use crate::consts::{FIRST_MONTH, LAST_MONTH, MONTH_NAMES, MONTHS_IN_YEAR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A BS month, numbered 1 (Baisakh) through 12 (Chaitra).
///
/// Serializes as its month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum BsMonth {
    Baisakh = 1,
    Jestha,
    Ashadh,
    Shrawan,
    Bhadra,
    Ashwin,
    Kartik,
    Mangsir,
    Poush,
    Magh,
    Falgun,
    Chaitra,
}

impl BsMonth {
    /// All months in calendar order
    pub const ALL: [Self; MONTHS_IN_YEAR] = [
        Self::Baisakh,
        Self::Jestha,
        Self::Ashadh,
        Self::Shrawan,
        Self::Bhadra,
        Self::Ashwin,
        Self::Kartik,
        Self::Mangsir,
        Self::Poush,
        Self::Magh,
        Self::Falgun,
        Self::Chaitra,
    ];

    /// Creates a month from its number
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidMonth` if the value is 0 or > 12.
    pub fn new(value: u8) -> Result<Self, ConversionError> {
        if !(FIRST_MONTH..=LAST_MONTH).contains(&value) {
            return Err(ConversionError::InvalidMonth(value));
        }
        Ok(Self::ALL[usize::from(value - 1)])
    }

    /// Returns the month number (1..=12)
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Romanized month name, e.g. `"Ashadh"`
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self as usize - 1]
    }

    /// The following month; Chaitra wraps to Baisakh.
    pub const fn next(self) -> Self {
        Self::ALL[self as usize % MONTHS_IN_YEAR]
    }

    /// The preceding month; Baisakh wraps to Chaitra.
    pub const fn previous(self) -> Self {
        Self::ALL[(self as usize + MONTHS_IN_YEAR - 2) % MONTHS_IN_YEAR]
    }
}

impl TryFrom<u8> for BsMonth {
    type Error = ConversionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BsMonth> for u8 {
    fn from(month: BsMonth) -> Self {
        month.get()
    }
}

impl fmt::Display for BsMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
