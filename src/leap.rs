//! Leap rules of the Khmer lunisolar year.
//!
//! A year can gain a thirtieth day in Jesth (*chhantrea thimeas*) or a
//! second Asadh month (*adhikameas*). Both are decided from the bodithey
//! and avoman of the year and its successor. A year never carries both:
//! when the raw rules ask for both, the extra day moves to the next year.

use serde::{Deserialize, Serialize};

use crate::{
    epoch::{avoman, bodithey, is_solar_leap},
    error::{CalendarError, ensure_supported_khmer_year},
    prelude::*,
};

/// Lowest bodithey of the late leap-month window.
const LEAP_MONTH_BODITHEY_FROM: i64 = 25;
/// Highest bodithey of the early leap-month window.
const LEAP_MONTH_BODITHEY_TO: i64 = 5;
/// Leap-day avoman limit in a solar leap year.
const LEAP_DAY_AVOMAN_SOLAR_LEAP: i64 = 126;
/// Leap-day avoman limit in a common solar year.
const LEAP_DAY_AVOMAN_COMMON: i64 = 137;

/// Raw leap facts for one Buddhist era year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LeapYearFacts {
    pub has_leap_month: bool,
    pub has_leap_day:   bool,
}

impl LeapYearFacts {
    const fn both(self) -> bool {
        self.has_leap_month && self.has_leap_day
    }
}

/// The resolved shape of a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearKind {
    /// Twelve months, 354 days.
    #[display(fmt = "regular")]
    Regular,
    /// Thirteen months with Asadh doubled, 384 days.
    #[display(fmt = "leap month")]
    LeapMonth,
    /// Twelve months with a 30-day Jesth, 355 days.
    #[display(fmt = "leap day")]
    LeapDay,
}

impl YearKind {
    pub const fn days_in_year(self) -> u16 {
        match self {
            Self::Regular => 354,
            Self::LeapMonth => 384,
            Self::LeapDay => 355,
        }
    }

    pub const fn has_leap_month(self) -> bool {
        matches!(self, Self::LeapMonth)
    }

    pub const fn has_leap_day(self) -> bool {
        matches!(self, Self::LeapDay)
    }
}

/// Leap facts of `be` straight from the bodithey and avoman rules.
///
/// Both flags may be set; [`year_kind`] resolves that case.
pub const fn raw_leap_facts(be: i32) -> LeapYearFacts {
    let b = bodithey(be);
    let next_b = bodithey(be + 1);

    let has_leap_month = if b == LEAP_MONTH_BODITHEY_FROM && next_b == LEAP_MONTH_BODITHEY_TO {
        false
    } else if b == LEAP_MONTH_BODITHEY_FROM - 1 && next_b == LEAP_MONTH_BODITHEY_TO + 1 {
        true
    } else {
        b >= LEAP_MONTH_BODITHEY_FROM || b <= LEAP_MONTH_BODITHEY_TO
    };

    let av = avoman(be);
    let has_leap_day = if is_solar_leap(be) {
        av <= LEAP_DAY_AVOMAN_SOLAR_LEAP
    } else {
        av <= LEAP_DAY_AVOMAN_COMMON && avoman(be + 1) != 0
    };

    LeapYearFacts {
        has_leap_month,
        has_leap_day,
    }
}

/// Leap facts of Buddhist era year `be`.
///
/// # Errors
/// Returns `CalendarError::UnsupportedRange` outside
/// `FIRST_SUPPORTED_KHMER_YEAR..=LAST_SUPPORTED_KHMER_YEAR`.
pub fn leap_facts(be: i32) -> Result<LeapYearFacts, CalendarError> {
    ensure_supported_khmer_year(be).map(raw_leap_facts)
}

/// Resolves the shape of `be` without a range check.
pub(crate) const fn year_kind_unchecked(be: i32) -> YearKind {
    let facts = raw_leap_facts(be);
    if facts.has_leap_month {
        YearKind::LeapMonth
    } else if facts.has_leap_day || raw_leap_facts(be - 1).both() {
        YearKind::LeapDay
    } else {
        YearKind::Regular
    }
}

/// The shape of Buddhist era year `be`.
///
/// # Errors
/// Returns `CalendarError::UnsupportedRange` for years outside the supported window.
pub fn year_kind(be: i32) -> Result<YearKind, CalendarError> {
    ensure_supported_khmer_year(be).map(year_kind_unchecked)
}

/// Number of days in Buddhist era year `be`.
///
/// # Errors
/// Returns `CalendarError::UnsupportedRange` for years outside the supported window.
pub fn days_in_year(be: i32) -> Result<u16, CalendarError> {
    year_kind(be).map(YearKind::days_in_year)
}
