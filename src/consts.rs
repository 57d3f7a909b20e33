/// First BS year covered by the calendar table (inclusive)
pub const MIN_BS_YEAR: u16 = 2000;
/// Last BS year covered by the calendar table (inclusive)
pub const MAX_BS_YEAR: u16 = 2089;

/// Number of BS years in the calendar table
pub const BS_YEAR_COUNT: usize = (MAX_BS_YEAR - MIN_BS_YEAR + 1) as usize;

/// Months in every BS year
pub const MONTHS_IN_YEAR: usize = 12;

/// Month number for Baisakh, the first BS month
pub const FIRST_MONTH: u8 = 1;
/// Month number for Chaitra, the last BS month
pub const LAST_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Gregorian year of the epoch (BS 2000-01-01)
pub const EPOCH_AD_YEAR: i32 = 1943;
/// Gregorian month of the epoch
pub const EPOCH_AD_MONTH: u32 = 4;
/// Gregorian day of the epoch
pub const EPOCH_AD_DAY: u32 = 14;

/// BS year of the epoch
pub const EPOCH_BS_YEAR: u16 = MIN_BS_YEAR;
/// BS month of the epoch
pub const EPOCH_BS_MONTH: u8 = FIRST_MONTH;
/// BS day of the epoch
pub const EPOCH_BS_DAY: u8 = MIN_DAY;

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';

/// Suffix appended to BS dates in dual AD/BS renderings
pub const BS_SUFFIX: &str = "BS";

/// Romanized BS month names (index 0 is Baisakh)
pub const MONTH_NAMES: [&str; MONTHS_IN_YEAR] = [
    "Baisakh", "Jestha", "Ashadh", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];
