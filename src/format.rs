use std::str::FromStr;

use chrono::NaiveDate;

use crate::consts::BS_SUFFIX;
use crate::prelude::*;
use crate::{BsDate, ConversionError, gregorian_to_bs};

/// How a BS date is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum DateStyle {
    /// `2081-03-15`
    #[default]
    #[display(fmt = "short")]
    Short,
    /// `15 Ashadh 2081`
    #[display(fmt = "medium")]
    Medium,
    /// `15 Ashadh, 2081`
    #[display(fmt = "long")]
    Long,
}

impl FromStr for DateStyle {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            _ => Err(ConversionError::UnknownStyle(s.to_owned())),
        }
    }
}

impl BsDate {
    /// Renders the date in the given style.
    pub fn format(&self, style: DateStyle) -> String {
        match style {
            DateStyle::Short => self.to_string(),
            DateStyle::Medium => format!("{} {} {}", self.day(), self.month_typed(), self.year()),
            DateStyle::Long => format!("{} {}, {}", self.day(), self.month_typed(), self.year()),
        }
    }
}

/// BS rendering of a Gregorian date, or an empty string if it has none.
pub fn nepali(date: NaiveDate, style: DateStyle) -> String {
    gregorian_to_bs(date)
        .map(|bs| bs.format(style))
        .unwrap_or_default()
}

/// Gregorian date followed by its BS equivalent, e.g. `2024-06-29 (2081-03-15 BS)`.
///
/// Non-short styles use `Jun 29, 2024 (15 Ashadh 2081 BS)`. Dates outside the
/// calendar table render as the Gregorian part alone.
pub fn dual_date(date: NaiveDate, style: DateStyle) -> String {
    let (ad, bs_style) = match style {
        DateStyle::Short => (date.format("%Y-%m-%d").to_string(), DateStyle::Short),
        DateStyle::Medium | DateStyle::Long => {
            (date.format("%b %d, %Y").to_string(), DateStyle::Medium)
        }
    };
    match gregorian_to_bs(date) {
        Ok(bs) => format!("{ad} ({} {BS_SUFFIX})", bs.format(bs_style)),
        Err(_) => ad,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ad(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_format_styles() {
        let date = BsDate::new(2081, 3, 15).unwrap();
        assert_eq!(date.format(DateStyle::Short), "2081-03-15");
        assert_eq!(date.format(DateStyle::Medium), "15 Ashadh 2081");
        assert_eq!(date.format(DateStyle::Long), "15 Ashadh, 2081");
        assert_eq!(date.format(DateStyle::default()), date.to_string());
    }

    #[test]
    fn test_style_parse() {
        assert_eq!("short".parse::<DateStyle>().unwrap(), DateStyle::Short);
        assert_eq!(" Medium ".parse::<DateStyle>().unwrap(), DateStyle::Medium);
        assert_eq!("LONG".parse::<DateStyle>().unwrap(), DateStyle::Long);
        assert!(matches!(
            "iso".parse::<DateStyle>(),
            Err(ConversionError::UnknownStyle(_))
        ));
        for style in [DateStyle::Short, DateStyle::Medium, DateStyle::Long] {
            assert_eq!(style.to_string().parse::<DateStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_nepali() {
        assert_eq!(nepali(ad(2024, 6, 29), DateStyle::Short), "2081-03-15");
        assert_eq!(nepali(ad(2024, 6, 29), DateStyle::Long), "15 Ashadh, 2081");
        assert_eq!(nepali(ad(1900, 1, 1), DateStyle::Short), "");
    }

    #[test]
    fn test_dual_date() {
        assert_eq!(
            dual_date(ad(2024, 6, 29), DateStyle::Short),
            "2024-06-29 (2081-03-15 BS)"
        );
        assert_eq!(
            dual_date(ad(2024, 6, 29), DateStyle::Medium),
            "Jun 29, 2024 (15 Ashadh 2081 BS)"
        );
        assert_eq!(
            dual_date(ad(2024, 6, 29), DateStyle::Long),
            "Jun 29, 2024 (15 Ashadh 2081 BS)"
        );
    }

    #[test]
    fn test_dual_date_out_of_range() {
        assert_eq!(dual_date(ad(1900, 1, 1), DateStyle::Short), "1900-01-01");
        assert_eq!(dual_date(ad(2040, 2, 3), DateStyle::Medium), "Feb 03, 2040");
    }
}
