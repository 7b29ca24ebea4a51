//! Validated Gregorian dates and Julian-day-number arithmetic.

use crate::consts::{
    DATE_SEPARATOR, DAYS_IN_WEEK, DECEMBER, FIRST_SUPPORTED_YEAR, JANUARY, LAST_SUPPORTED_YEAR,
    MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use std::str::FromStr;

/// A proleptic Gregorian calendar date.
///
/// Every value is valid by construction: the day is checked against the
/// month length of its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct GregorianDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid lunar day: {_0} (must be 1-15)")]
    InvalidLunarDay(u8),
    #[display(fmt = "Julian day {_0} is outside the representable years")]
    OutOfRange(i64),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum Weekday {
    #[display(fmt = "ចន្ទ")]
    Monday,
    #[display(fmt = "អង្គារ")]
    Tuesday,
    #[display(fmt = "ពុធ")]
    Wednesday,
    #[display(fmt = "ព្រហស្បតិ៍")]
    Thursday,
    #[display(fmt = "សុក្រ")]
    Friday,
    #[display(fmt = "សៅរ៍")]
    Saturday,
    #[display(fmt = "អាទិត្យ")]
    Sunday,
}

impl Weekday {
    const ALL: [Self; DAYS_IN_WEEK as usize] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    /// English name, for logs and English-language collaborators.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl GregorianDate {
    /// First day the lunar converter accepts.
    pub const FIRST_SUPPORTED: Self = Self::from_const(FIRST_SUPPORTED_YEAR, JANUARY, MIN_DAY);
    /// Last day the lunar converter accepts.
    pub const LAST_SUPPORTED: Self = Self::from_const(LAST_SUPPORTED_YEAR, DECEMBER, 31);

    pub(crate) const fn from_const(year: u16, month: u8, day: u8) -> Self {
        Self {
            year:  Year::from_const(year),
            month: Month::from_const(month),
            day:   Day::from_const(day, year, month),
        }
    }

    /// Creates a date from its numeric components.
    ///
    /// # Errors
    /// Returns a `DateError` naming the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_nz = Year::new(year)?;
        let month_nz = Month::new(month)?;
        let day_nz = Day::new(day, year, month)?;
        Ok(Self {
            year:  year_nz,
            month: month_nz,
            day:   day_nz,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Julian day number of the date.
    pub fn jdn(&self) -> i64 {
        let y = i64::from(self.year());
        let m = i64::from(self.month());
        let d = i64::from(self.day());
        (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075
    }

    /// Creates a date from a Julian day number.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is not in `1..=MAX_YEAR`.
    pub fn from_jdn(jdn: i64) -> Result<Self, DateError> {
        if jdn < 0 {
            return Err(DateError::OutOfRange(jdn));
        }
        let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

        let year = u16::try_from(year).map_err(|_| DateError::OutOfRange(jdn))?;
        if year == 0 || year > MAX_YEAR {
            return Err(DateError::OutOfRange(jdn));
        }
        let month = u8::try_from(month).map_err(|_| DateError::OutOfRange(jdn))?;
        let day = u8::try_from(day).map_err(|_| DateError::OutOfRange(jdn))?;
        Self::new(year, month, day)
    }

    /// Adds a signed number of days, `None` if the result leaves `1..=MAX_YEAR`.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        self.jdn()
            .checked_add(days)
            .and_then(|jdn| Self::from_jdn(jdn).ok())
    }

    /// The following day.
    pub fn succ(self) -> Option<Self> {
        self.checked_add_days(1)
    }

    /// The preceding day.
    pub fn pred(self) -> Option<Self> {
        self.checked_add_days(-1)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i64 {
        other.jdn() - self.jdn()
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::ALL[self.jdn().rem_euclid(i64::from(DAYS_IN_WEEK)) as usize]
    }

    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s)",
                parts.len()
            )));
        }

        let year = parts[0]
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
