//! Khmer New Year (*Moha Songkran*): the moment the sun enters Aries in
//! the mean solar reckoning.

use serde::Serialize;
use tracing::debug;

use crate::{
    GregorianDate,
    epoch::{BUDDHIST_ERA_OFFSET, CHULA_SAKARAT_OFFSET, SOLAR_YEAR},
    error::{CalendarError, ensure_supported_year},
    prelude::*,
};

/// Julian day of the Chula Sakarat epoch, in 1/800 day.
const SONGKRAN_EPOCH_UNITS: i64 = 1_563_332_668;
/// Offset of the sun's entry into Aries within the year, in 1/800 day.
const SONGKRAN_OFFSET_UNITS: i64 = 373;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Number of days the New Year festival lasts.
pub const NEW_YEAR_FESTIVAL_DAYS: u8 = 3;

/// Civil date and local time of a Moha Songkran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{date} {hour:02}:{minute:02}")]
pub struct Songkran {
    pub date:   GregorianDate,
    pub hour:   u8,
    pub minute: u8,
}

/// Chula Sakarat year that begins at the New Year of Gregorian `year`.
pub const fn chula_sakarat_of(year: u16) -> i64 {
    year as i64 - (CHULA_SAKARAT_OFFSET - BUDDHIST_ERA_OFFSET - 1) as i64
}

/// Moha Songkran of Gregorian `year`, without a range check.
pub(crate) fn new_year_moment_unchecked(year: u16) -> Result<Songkran, CalendarError> {
    let units = SOLAR_YEAR.numer() * chula_sakarat_of(year) + SONGKRAN_OFFSET_UNITS + SONGKRAN_EPOCH_UNITS;
    let jdn = units.div_euclid(SOLAR_YEAR.denom());
    let minutes = units.rem_euclid(SOLAR_YEAR.denom()) * MINUTES_PER_DAY / SOLAR_YEAR.denom();

    let date = GregorianDate::from_jdn(jdn)?;

    // minutes < 1440
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (hour, minute) = ((minutes / 60) as u8, (minutes % 60) as u8);

    Ok(Songkran { date, hour, minute })
}

/// Date and time of the Khmer New Year in Gregorian `year`.
///
/// # Errors
/// Returns `CalendarError::UnsupportedRange` outside the supported years.
#[tracing::instrument(level = "debug")]
pub fn new_year_moment(year: u16) -> Result<Songkran, CalendarError> {
    ensure_supported_year(year)?;
    let moment = new_year_moment_unchecked(year)?;
    debug!(%moment, "resolved moha songkran");
    Ok(moment)
}

/// First festival day of the Khmer New Year in Gregorian `year`.
///
/// # Errors
/// Returns `CalendarError::UnsupportedRange` outside the supported years.
pub fn new_year_date(year: u16) -> Result<GregorianDate, CalendarError> {
    new_year_moment(year).map(|moment| moment.date)
}
