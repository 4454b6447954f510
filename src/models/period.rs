//! Calendar month representation
//!
//! Months are the unit of the monthly budget and of the debt rollover.
//! All dates are local calendar dates (`NaiveDate`), never UTC instants.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use std::fmt;

/// A single calendar month, e.g. "2025-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a month period
    ///
    /// `None` if `month` is outside 1..=12, or if the month or either of its
    /// neighbours falls outside the representable calendar.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let period = Self { year, month };
        let representable = |p: Self| NaiveDate::from_ymd_opt(p.year, p.month, 1).is_some();

        (representable(period) && representable(period.prev()) && representable(period.next()))
            .then_some(period)
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        self.date_clamped(1)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.date_clamped(self.days_in_month())
    }

    /// Number of days in the month, accounting for leap years
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Every day of the month, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end_date();
        self.start_date().iter_days().take_while(move |d| *d <= end)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Weekday of the first day
    pub fn first_weekday(&self) -> Weekday {
        self.start_date().weekday()
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Day `day` of this month; months past either end of the calendar
    /// (reachable only through `next`/`prev`) collapse onto that end
    fn date_clamped(&self, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, day).unwrap_or(if self.year < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month).ok_or(PeriodParseError::InvalidMonth(month))
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> MonthPeriod {
        MonthPeriod::new(year, month).unwrap()
    }

    #[test]
    fn test_bounds() {
        let jan = month(2025, 1);
        assert_eq!(jan.start_date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(jan.end_date(), NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(month(2024, 2).days_in_month(), 29);
        assert_eq!(month(2025, 2).days_in_month(), 28);
        assert_eq!(month(1900, 2).days_in_month(), 28);
        assert_eq!(month(2000, 2).days_in_month(), 29);
        assert_eq!(month(2025, 4).days_in_month(), 30);
        assert_eq!(month(2025, 12).days_in_month(), 31);
    }

    #[test]
    fn test_calendar_edges() {
        let last = NaiveDate::MAX;
        assert_eq!(MonthPeriod::new(last.year(), last.month()), None);
        assert_eq!(MonthPeriod::new(NaiveDate::MIN.year(), NaiveDate::MIN.month()), None);

        let before_last = MonthPeriod::containing(last).prev();
        assert_eq!(MonthPeriod::new(before_last.year(), before_last.month()), Some(before_last));

        let edge = MonthPeriod::containing(last);
        assert_eq!(edge.days_in_month(), 31);
        assert_eq!(edge.end_date(), last);
        assert_eq!(edge.days().count(), 31);

        let beyond = edge.next();
        assert!(beyond.start_date() <= beyond.end_date());
    }

    #[test]
    fn test_days_iterator() {
        let feb = month(2024, 2);
        let days: Vec<_> = feb.days().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days[0], feb.start_date());
        assert_eq!(*days.last().unwrap(), feb.end_date());
    }

    #[test]
    fn test_navigation_wraps_years() {
        assert_eq!(month(2025, 1).prev(), month(2024, 12));
        assert_eq!(month(2024, 12).next(), month(2025, 1));
        assert_eq!(month(2025, 6).next().prev(), month(2025, 6));
    }

    #[test]
    fn test_contains() {
        let jan = month(2025, 1);
        assert!(jan.contains(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(MonthPeriod::parse("2025-01").unwrap(), month(2025, 1));
        assert_eq!(MonthPeriod::parse(" 2026-2 ").unwrap(), month(2026, 2));
        assert_eq!(
            MonthPeriod::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(MonthPeriod::parse("January").is_err());
        assert_eq!(format!("{}", month(2025, 3)), "2025-03");
    }

    #[test]
    fn test_ordering_follows_calendar() {
        assert!(month(2024, 12) < month(2025, 1));
        assert!(month(2025, 2) > month(2025, 1));
    }
}
