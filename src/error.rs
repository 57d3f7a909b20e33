use crate::consts::{MAX_BS_YEAR, MIN_BS_YEAR};

/// Error type for BS date construction, conversion and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The BS year, or a year crossed while counting days, is not in the calendar table.
    #[error("BS year {year} is outside the supported range {}-{}", MIN_BS_YEAR, MAX_BS_YEAR)]
    OutOfRange { year: u16 },

    #[error("Invalid BS month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Day is zero or past the end of its month.
    #[error("Invalid day {day} for BS month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,

    #[error("Unknown date style: {0} (expected short, medium or long)")]
    UnknownStyle(String),
}

impl ConversionError {
    /// Whether this error is the calendar table boundary rather than bad input.
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConversionError::OutOfRange { year: 2090 };
        assert_eq!(
            err.to_string(),
            "BS year 2090 is outside the supported range 2000-2089"
        );

        let err = ConversionError::InvalidDay {
            year: 2081,
            month: 3,
            day: 33,
        };
        assert_eq!(err.to_string(), "Invalid day 33 for BS month 2081-03");

        let err = ConversionError::InvalidMonth(13);
        assert_eq!(err.to_string(), "Invalid BS month: 13 (must be 1-12)");
    }

    #[test]
    fn test_is_out_of_range() {
        assert!(ConversionError::OutOfRange { year: 1999 }.is_out_of_range());
        assert!(!ConversionError::InvalidMonth(0).is_out_of_range());
        assert!(!ConversionError::EmptyInput.is_out_of_range());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<ConversionError>();
    }
}
