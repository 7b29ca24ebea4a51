use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_FORTNIGHT, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A Gregorian year guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Constructor for constants, validated during const evaluation.
    pub(crate) const fn from_const(value: u16) -> Self {
        assert!(value <= MAX_YEAR, "year out of range");
        match NonZeroU16::new(value) {
            Some(v) => Self(v),
            None => panic!("year must be non-zero"),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Gregorian month in `1..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    pub(crate) const fn from_const(value: u8) -> Self {
        assert!(value <= MAX_MONTH, "month out of range");
        match NonZeroU8::new(value) {
            Some(v) => Self(v),
            None => panic!("month must be non-zero"),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of month, valid for the year and month it was created with.
///
/// Deserializing a bare `Day` can only check the lower bound; full
/// validation happens when the enclosing `GregorianDate` is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if month == 0 || month > MAX_MONTH || value > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    pub(crate) const fn from_const(value: u8, year: u16, month: u8) -> Self {
        assert!(value <= days_in_month(year, month), "day out of range");
        match NonZeroU8::new(value) {
            Some(v) => Self(v),
            None => panic!("day must be non-zero"),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(DateError::InvalidDay {
                month: 0,
                day: value,
                year: 0,
            })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day within a lunar fortnight, `1..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LunarDay(NonZeroU8);

impl LunarDay {
    /// # Errors
    /// Returns `DateError::InvalidLunarDay` outside `1..=15`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidLunarDay(value))?;
        if value > DAYS_IN_FORTNIGHT {
            return Err(DateError::InvalidLunarDay(value));
        }
        Ok(Self(non_zero))
    }

    /// Builds the day from a 0-based index inside its fortnight.
    pub(crate) const fn from_fortnight_index(index: u8) -> Self {
        debug_assert!(index < DAYS_IN_FORTNIGHT);
        match NonZeroU8::new(index % DAYS_IN_FORTNIGHT + 1) {
            Some(v) => Self(v),
            None => Self(NonZeroU8::MIN),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for LunarDay {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LunarDay> for u8 {
    fn from(day: LunarDay) -> Self {
        day.0.get()
    }
}

impl fmt::Display for LunarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(DateError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(DateError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");
        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_bounds() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
    }

    #[test]
    fn test_day_depends_on_month() {
        assert!(Day::new(31, 2024, 1).is_ok());
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());
        assert!(Day::new(31, 2024, 4).is_err());
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(DateError::InvalidDay {
                month: 1,
                day: 32,
                year: 2024
            })
        ));
    }

    #[test]
    fn test_day_rejects_bad_month_context() {
        assert!(Day::new(1, 2024, 0).is_err());
        assert!(Day::new(1, 2024, 13).is_err());
    }

    #[test]
    fn test_lunar_day_bounds() {
        assert!(LunarDay::new(1).is_ok());
        assert!(LunarDay::new(15).is_ok());
        assert!(matches!(LunarDay::new(0), Err(DateError::InvalidLunarDay(0))));
        assert!(matches!(
            LunarDay::new(16),
            Err(DateError::InvalidLunarDay(16))
        ));
    }

    #[test]
    fn test_lunar_day_from_fortnight_index() {
        assert_eq!(LunarDay::from_fortnight_index(0).get(), 1);
        assert_eq!(LunarDay::from_fortnight_index(14).get(), 15);
    }

    #[test]
    fn test_lunar_day_serde() {
        let day = LunarDay::new(8).unwrap();
        assert_eq!(serde_json::to_string(&day).unwrap(), "8");
        assert!(serde_json::from_str::<LunarDay>("16").is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        let cases = [
            (2020, true),
            (2024, true),
            (2023, false),
            (1900, false),
            (2100, false),
            (2000, true),
        ];
        for (year, expected) in cases {
            assert_eq!(is_leap_year(year), expected, "year {year}");
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(days_in_month(2023, month), expected[month as usize]);
        }
        assert_eq!(days_in_month(2024, 2), 29);
    }
}
