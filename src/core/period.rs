//! Calendar periods - closed date ranges for days, months and years.

use crate::errors::{Error, Result};
use chrono::{Locale, Months, NaiveDate, NaiveTime, TimeZone, Utc};

/// Closed interval of calendar days, `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the range
    pub start: NaiveDate,
    /// Last day of the range, inclusive
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range from explicit bounds. A range whose end precedes its
    /// start contains no days.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Range covering a single day.
    #[must_use]
    pub const fn day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Range covering a calendar month.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPeriod`] if `month` is not in `1..=12` or the
    /// year is out of range.
    pub fn month(year: i32, month: u32) -> Result<Self> {
        let invalid = || Error::InvalidPeriod {
            period: format!("{year}-{month:02}"),
        };
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(invalid)?;
        Ok(Self::new(start, end))
    }

    /// Range covering a calendar year.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPeriod`] if the year is out of range.
    pub fn year(year: i32) -> Result<Self> {
        let invalid = || Error::InvalidPeriod {
            period: year.to_string(),
        };
        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
        Ok(Self::new(start, end))
    }

    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// Number of days in the range.
    #[must_use]
    pub fn num_days(&self) -> usize {
        usize::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
    }
}

/// Formats a calendar day with a strftime pattern in the given locale.
pub(crate) fn format_date(date: NaiveDate, pattern: &str, locale: Locale) -> String {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
        .format_localized(pattern, locale)
        .to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let march = DateRange::month(2024, 3).unwrap();
        assert_eq!(march.start, date(2024, 3, 1));
        assert_eq!(march.end, date(2024, 3, 31));
        assert_eq!(march.num_days(), 31);
    }

    #[test]
    fn test_month_bounds_leap_february() {
        assert_eq!(DateRange::month(2024, 2).unwrap().num_days(), 29);
        assert_eq!(DateRange::month(2023, 2).unwrap().num_days(), 28);
    }

    #[test]
    fn test_month_bounds_december() {
        let december = DateRange::month(2024, 12).unwrap();
        assert_eq!(december.end, date(2024, 12, 31));
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(
            DateRange::month(2024, 13),
            Err(Error::InvalidPeriod { ref period }) if period == "2024-13"
        ));
        assert!(DateRange::month(2024, 0).is_err());
    }

    #[test]
    fn test_year_bounds() {
        let year = DateRange::year(2024).unwrap();
        assert_eq!(year.start, date(2024, 1, 1));
        assert_eq!(year.end, date(2024, 12, 31));
        assert_eq!(year.num_days(), 366);
        assert_eq!(DateRange::year(2023).unwrap().days().count(), 365);
    }

    #[test]
    fn test_days_are_ascending_and_inclusive() {
        let range = DateRange::new(date(2024, 2, 27), date(2024, 3, 2));
        let days: Vec<_> = range.days().collect();
        assert_eq!(
            days,
            vec![
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1),
                date(2024, 3, 2)
            ]
        );
    }

    #[test]
    fn test_format_date_localized() {
        let day = date(2024, 3, 1);
        assert_eq!(format_date(day, "%A", Locale::es_ES), "viernes");
        assert_eq!(format_date(day, "%B %Y", Locale::en_US), "March 2024");
    }

    #[test]
    fn test_single_day_and_reversed_range() {
        let day = DateRange::day(date(2024, 5, 5));
        assert_eq!(day.days().count(), 1);
        assert!(day.contains(date(2024, 5, 5)));
        assert!(!day.contains(date(2024, 5, 6)));

        let reversed = DateRange::new(date(2024, 5, 5), date(2024, 5, 1));
        assert_eq!(reversed.days().count(), 0);
        assert_eq!(reversed.num_days(), 0);
    }
}
