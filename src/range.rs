use crate::{
    DateError, GregorianDate,
    consts::{DECEMBER, JANUARY, MIN_DAY},
    prelude::*,
};

/// An inclusive range of Gregorian dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: GregorianDate,
    end:   GregorianDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: GregorianDate, end: GregorianDate },

    /// Error building a date component.
    #[error(transparent)]
    Date(#[from] DateError),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: GregorianDate, end: GregorianDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// January 1 through December 31 of `year`.
    ///
    /// # Errors
    /// Returns `RangeError::Date` if `year` is not a valid Gregorian year.
    pub fn year(year: u16) -> Result<Self, RangeError> {
        let start = GregorianDate::new(year, JANUARY, MIN_DAY)?;
        let end = GregorianDate::new(year, DECEMBER, 31)?;
        Self::new(start, end)
    }

    /// First through last day of `month` in `year`.
    ///
    /// # Errors
    /// Returns `RangeError::Date` if the year or month is invalid.
    pub fn month(year: u16, month: u8) -> Result<Self, RangeError> {
        let start = GregorianDate::new(year, month, MIN_DAY)?;
        let last = crate::types::days_in_month(year, month);
        let end = GregorianDate::new(year, month, last)?;
        Self::new(start, end)
    }

    /// The window the lunar converter accepts.
    pub const fn supported() -> Self {
        Self {
            start: GregorianDate::FIRST_SUPPORTED,
            end:   GregorianDate::LAST_SUPPORTED,
        }
    }

    /// Returns the start date of the range.
    pub const fn start(&self) -> GregorianDate {
        self.start
    }

    /// Returns the end date of the range.
    pub const fn end(&self) -> GregorianDate {
        self.end
    }

    /// Checks if a date falls within this range (inclusive).
    pub fn contains(&self, date: &GregorianDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Iterates every date of the range in ascending order.
    pub fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end:  self.end,
        }
    }
}

/// Iterator over the dates of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<GregorianDate>,
    end:  GregorianDate,
}

impl Iterator for Days {
    type Item = GregorianDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end { current.succ() } else { None };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> GregorianDate {
        GregorianDate::new(y, m, d).expect("test date must be valid")
    }

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            start:          GregorianDate,
            end:            GregorianDate,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          date(2024, 1, 1),
                end:            date(2024, 12, 31),
                should_succeed: true,
                description:    "valid range (start < end)",
            },
            TestCase {
                start:          date(2024, 12, 31),
                end:            date(2024, 1, 1),
                should_succeed: false,
                description:    "invalid range (start > end)",
            },
            TestCase {
                start:          date(2024, 4, 13),
                end:            date(2024, 4, 13),
                should_succeed: true,
                description:    "single day (start == end)",
            },
        ];

        for case in &cases {
            let range = DateRange::new(case.start, case.end);
            if case.should_succeed {
                assert!(range.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(range.is_err(), "Expected failure for: {}", case.description);
            }
        }
    }

    #[test]
    fn test_year_range() {
        let leap = DateRange::year(2024).expect("failed to build 2024 range");
        assert_eq!(leap.start(), date(2024, 1, 1));
        assert_eq!(leap.end(), date(2024, 12, 31));
        assert_eq!(leap.days().count(), 366);

        let common = DateRange::year(2023).expect("failed to build 2023 range");
        assert_eq!(common.days().count(), 365);
    }

    #[test]
    fn test_month_range() {
        let feb = DateRange::month(2024, 2).expect("failed to build February range");
        assert_eq!(feb.end(), date(2024, 2, 29));
        assert!(DateRange::month(2024, 13).is_err());
    }

    #[test]
    fn test_days_iterates_in_order() {
        let range = DateRange::new(date(2024, 12, 30), date(2025, 1, 2)).expect("failed to build range");
        let days: Vec<_> = range.days().collect();
        assert_eq!(
            days,
            vec![date(2024, 12, 30), date(2024, 12, 31), date(2025, 1, 1), date(2025, 1, 2)]
        );
    }

    #[test]
    fn test_days_stops_at_calendar_end() {
        let range = DateRange::new(date(9999, 12, 30), date(9999, 12, 31)).expect("failed to build range");
        assert_eq!(range.days().count(), 2);
    }

    #[test]
    fn test_contains() {
        let year = DateRange::year(2024).expect("failed to build year range");

        assert!(year.contains(&date(2024, 1, 1)));
        assert!(year.contains(&date(2024, 4, 13)));
        assert!(year.contains(&date(2024, 12, 31)));
        assert!(!year.contains(&date(2023, 12, 31)));
        assert!(!year.contains(&date(2025, 1, 1)));
    }

    #[test]
    fn test_supported_window() {
        let supported = DateRange::supported();
        assert_eq!(supported.start(), date(1900, 1, 1));
        assert_eq!(supported.end(), date(2199, 12, 31));
    }

    #[test]
    fn test_display() {
        let range = DateRange::month(2024, 11).expect("failed to build range");
        assert_eq!(range.to_string(), "2024-11-01/2024-11-30");
        assert_eq!(DateRange::supported().to_string(), "1900-01-01/2199-12-31");
    }
}
