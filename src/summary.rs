use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    DateRange, GregorianDate,
    error::{CalendarError, OutOfRange},
    holiday::HolidayResolver,
    prelude::*,
};

/// Day counts for one Gregorian month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct MonthSummary {
    pub total_days:          u8,
    /// Saturdays and Sundays.
    pub weekend_days:        u8,
    /// Distinct dates carrying at least one public holiday.
    pub public_holiday_days: u8,
    /// Weekdays without a public holiday.
    pub working_days:        u8,
}

/// How a single day is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    #[display(fmt = "holiday")]
    Holiday,
    #[display(fmt = "weekend")]
    Weekend,
    #[display(fmt = "working day")]
    WorkingDay,
}

/// Summarizes `month` of `year`.
///
/// # Errors
/// Returns `CalendarError::UnsupportedRange` outside the supported years and
/// `CalendarError::InvalidDate` for a bad month.
pub fn month_summary(resolver: &HolidayResolver, year: u16, month: u8) -> Result<MonthSummary, CalendarError> {
    let holidays: BTreeSet<GregorianDate> = resolver
        .for_month(year, month)?
        .into_iter()
        .filter(|occurrence| occurrence.is_public)
        .map(|occurrence| occurrence.date)
        .collect();

    let range = DateRange::month(year, month)
        .map_err(|_| CalendarError::UnsupportedRange(OutOfRange::GregorianYear(year)))?;

    let mut summary = MonthSummary {
        public_holiday_days: count(holidays.len()),
        ..MonthSummary::default()
    };
    for date in range.days() {
        summary.total_days += 1;
        if date.is_weekend() {
            summary.weekend_days += 1;
        } else if !holidays.contains(&date) {
            summary.working_days += 1;
        }
    }
    Ok(summary)
}

/// Status of `date`: a public holiday wins over a weekend.
///
/// # Errors
/// Returns `CalendarError::UnsupportedRange` outside the supported dates.
pub fn day_status(resolver: &HolidayResolver, date: GregorianDate) -> Result<DayStatus, CalendarError> {
    if resolver.is_public(date)? {
        Ok(DayStatus::Holiday)
    } else if date.is_weekend() {
        Ok(DayStatus::Weekend)
    } else {
        Ok(DayStatus::WorkingDay)
    }
}

// at most 31 days in a month
fn count(n: usize) -> u8 {
    u8::try_from(n).unwrap_or(u8::MAX)
}
