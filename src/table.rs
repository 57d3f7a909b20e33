//! Per-year BS month lengths.
//!
//! BS month lengths follow the published almanac and cannot be derived from
//! a rule, so this table is the only source of truth for both conversions.

use std::ops::RangeInclusive;

use crate::consts::{BS_YEAR_COUNT, FIRST_MONTH, LAST_MONTH, MAX_BS_YEAR, MIN_BS_YEAR, MONTHS_IN_YEAR};

/// Days in each month of every supported BS year, indexed by `year - MIN_BS_YEAR`.
static BS_MONTH_DAYS: [[u8; MONTHS_IN_YEAR]; BS_YEAR_COUNT] = [
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2000
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2001
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2002
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2003
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2004
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2005
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2006
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2007
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2008
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2009
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2010
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2011
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2012
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2013
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2014
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2015
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2016
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2017
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2018
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2019
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2020
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2021
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2022
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2023
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2024
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2025
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2026
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2027
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2028
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2029
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2030
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2031
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2032
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2033
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2034
    [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2035
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2036
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2037
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2038
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2039
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2040
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2041
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2042
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2043
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2044
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2045
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2046
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2047
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2048
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2049
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2050
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2051
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2052
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2053
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2054
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2055
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2056
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2057
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2058
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2059
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2060
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2061
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2062
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2063
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2064
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2065
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2066
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2067
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2068
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2069
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2071
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2072
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2073
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2075
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2076
    [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2077
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2079
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2080
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2081
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2082
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2083
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2084
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2085
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2086
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2087
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2088
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2089
];

/// Returns the 12 month lengths of `year`, or `None` outside the table.
pub fn month_lengths(year: u16) -> Option<&'static [u8; MONTHS_IN_YEAR]> {
    let index = year.checked_sub(MIN_BS_YEAR)?;
    BS_MONTH_DAYS.get(usize::from(index))
}

/// Returns the length of `month` (1-indexed) in `year`.
pub fn days_in_month(year: u16, month: u8) -> Option<u8> {
    if !(FIRST_MONTH..=LAST_MONTH).contains(&month) {
        return None;
    }
    month_lengths(year).map(|lengths| lengths[usize::from(month - 1)])
}

/// Returns the total number of days in `year`.
pub fn days_in_year(year: u16) -> Option<u16> {
    month_lengths(year).map(|lengths| lengths.iter().map(|&d| u16::from(d)).sum())
}

/// Days in `year` that fall before the first day of `month`.
pub(crate) fn days_before_month(year: u16, month: u8) -> Option<u16> {
    if !(FIRST_MONTH..=LAST_MONTH).contains(&month) {
        return None;
    }
    month_lengths(year).map(|lengths| {
        lengths[..usize::from(month - 1)]
            .iter()
            .map(|&d| u16::from(d))
            .sum()
    })
}

#[inline]
pub fn contains_year(year: u16) -> bool {
    (MIN_BS_YEAR..=MAX_BS_YEAR).contains(&year)
}

/// The BS years covered by the table.
pub const fn supported_years() -> RangeInclusive<u16> {
    MIN_BS_YEAR..=MAX_BS_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_year_has_twelve_plausible_months() {
        for year in supported_years() {
            let lengths = month_lengths(year).unwrap();
            assert_eq!(lengths.len(), MONTHS_IN_YEAR);
            for (i, &len) in lengths.iter().enumerate() {
                assert!(
                    (29..=32).contains(&len),
                    "BS {year} month {} has {len} days",
                    i + 1
                );
            }
        }
    }

    #[test]
    fn test_year_lengths_are_solar() {
        for year in supported_years() {
            let total = days_in_year(year).unwrap();
            assert!(
                total == 365 || total == 366,
                "BS {year} has {total} days"
            );
        }
    }

    #[test]
    fn test_outside_table() {
        assert_eq!(month_lengths(1999), None);
        assert_eq!(month_lengths(2090), None);
        assert_eq!(month_lengths(0), None);
        assert_eq!(month_lengths(u16::MAX), None);
        assert_eq!(days_in_year(1999), None);
        assert!(!contains_year(1999));
        assert!(!contains_year(2090));
        assert!(contains_year(2000));
        assert!(contains_year(2089));
    }

    #[test]
    fn test_days_in_month_lookups() {
        assert_eq!(days_in_month(2000, 1), Some(30));
        assert_eq!(days_in_month(2000, 2), Some(32));
        assert_eq!(days_in_month(2000, 12), Some(31));
        assert_eq!(days_in_month(2089, 12), Some(30));
        assert_eq!(days_in_month(2000, 0), None);
        assert_eq!(days_in_month(2000, 13), None);
        assert_eq!(days_in_month(2090, 1), None);
    }

    #[test]
    fn test_days_before_month() {
        assert_eq!(days_before_month(2000, 1), Some(0));
        assert_eq!(days_before_month(2000, 2), Some(30));
        assert_eq!(days_before_month(2000, 3), Some(62));
        assert_eq!(
            days_before_month(2000, 12).map(|d| d + 31),
            days_in_year(2000)
        );
        assert_eq!(days_before_month(2000, 13), None);
    }

    #[test]
    fn test_supported_years_bounds() {
        let years = supported_years();
        assert_eq!(*years.start(), 2000);
        assert_eq!(*years.end(), 2089);
        assert_eq!(years.count(), BS_YEAR_COUNT);
    }
}
