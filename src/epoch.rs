//! Fixed constants of the Khmer calendar and the arithmetic built on them.
//!
//! Everything here is exact integer or rational arithmetic: the mean
//! synodic month and the mean solar year are kept as fractions so that
//! results are reproducible over centuries and across platforms.
//!
//! The year-start quantities (*aharkun*, *kromthupul*, *avoman* and
//! *bodithey*) are indexed by Buddhist era year.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::GregorianDate;

/// An exact rational number `numer / denom` with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ratio {
    numer: i64,
    denom: i64,
}

impl Ratio {
    /// Builds a ratio; `denom` must be positive. The fraction is kept as given.
    pub(crate) const fn new(numer: i64, denom: i64) -> Self {
        assert!(denom > 0, "denominator must be positive");
        Self { numer, denom }
    }

    pub const fn numer(self) -> i64 {
        self.numer
    }

    pub const fn denom(self) -> i64 {
        self.denom
    }

    /// Largest integer not greater than the ratio.
    pub const fn floor(self) -> i64 {
        self.numer.div_euclid(self.denom)
    }

    /// The ratio multiplied by an integer, `None` on overflow.
    pub const fn scale(self, factor: i64) -> Option<Self> {
        match self.numer.checked_mul(factor) {
            Some(numer) => Some(Self { numer, denom: self.denom }),
            None => None,
        }
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.numer) * i128::from(other.denom);
        let rhs = i128::from(other.numer) * i128::from(self.denom);
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

/// 1 January 1900, the first waxing day of Boss.
pub const EPOCH: GregorianDate = GregorianDate::FIRST_SUPPORTED;
/// Julian day number of [`EPOCH`].
pub const EPOCH_JDN: i64 = 2_415_021;

/// Lunar days (tithi) elapsing per solar day.
pub const TITHI_PER_DAY: Ratio = Ratio::new(703, 692);
/// Lunar days in one synodic month.
pub const TITHI_PER_MONTH: i64 = 30;
/// Mean synodic month in days, `30 / TITHI_PER_DAY`.
pub const MEAN_SYNODIC_MONTH: Ratio = Ratio::new(20_760, 703);
/// Mean solar year in days.
pub const SOLAR_YEAR: Ratio = Ratio::new(292_207, 800);

/// Buddhist era minus Gregorian year, before the Khmer New Year.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;
/// Buddhist era minus Chula Sakarat (Jolak Sakaraj) year.
pub const CHULA_SAKARAT_OFFSET: i32 = 1182;
/// Added to the Buddhist era year before reducing modulo 12 for the animal.
pub const ANIMAL_YEAR_OFFSET: i32 = 4;

const KROMTHUPUL_OFFSET: i64 = 499;
const AHARKUN_OFFSET: i64 = 4;
const AVOMAN_OFFSET: i64 = 25;
const BODITHEY_OFFSET: i64 = 29;
/// A solar leap year leaves at most this much of the 800 kromthupul units.
const SOLAR_LEAP_KROMTHUPUL_LIMIT: i64 = 207;
/// Aligns the mean moon with the epoch, in 1/703 day.
const MEAN_AGE_PHASE: i64 = 351;

/// Days elapsed between [`EPOCH`] and `date`; negative before it.
pub fn days_since_epoch(date: &GregorianDate) -> i64 {
    date.jdn() - EPOCH_JDN
}

/// Age of the mean moon, in days, `days` after the epoch.
///
/// The result lies in `[0, MEAN_SYNODIC_MONTH)`.
pub const fn mean_moon_age(days: i64) -> Ratio {
    let scale = MEAN_SYNODIC_MONTH.denom();
    let month = MEAN_SYNODIC_MONTH.numer();
    Ratio::new((days * scale + MEAN_AGE_PHASE).rem_euclid(month), scale)
}

const fn year_start_units(be: i32) -> i64 {
    SOLAR_YEAR.numer() * be as i64 + KROMTHUPUL_OFFSET
}

/// Days elapsed in the era at the start of year `be` (*aharkun*).
pub const fn aharkun(be: i32) -> i64 {
    year_start_units(be).div_euclid(SOLAR_YEAR.denom()) + AHARKUN_OFFSET
}

/// Part of the solar day remaining at the start of year `be`, in 1/800 day
/// (*kromthupul*).
pub const fn kromthupul(be: i32) -> i64 {
    SOLAR_YEAR.denom() - year_start_units(be).rem_euclid(SOLAR_YEAR.denom())
}

/// Whether year `be` is a solar leap year (366 days in the Khmer reckoning).
pub const fn is_solar_leap(be: i32) -> bool {
    kromthupul(be) <= SOLAR_LEAP_KROMTHUPUL_LIMIT
}

/// Lunar-day excess over the elapsed days, in 1/692 tithi.
const fn excess_units(be: i32) -> i64 {
    let excess_per_day = TITHI_PER_DAY.numer() - TITHI_PER_DAY.denom();
    excess_per_day * aharkun(be) + AVOMAN_OFFSET
}

/// Fractional lunar day at the start of year `be`, in `0..692` (*avoman*).
pub const fn avoman(be: i32) -> i64 {
    excess_units(be).rem_euclid(TITHI_PER_DAY.denom())
}

/// Mean lunar day at the start of year `be`, in `0..30` (*bodithey*).
pub const fn bodithey(be: i32) -> i64 {
    let whole_excess = excess_units(be).div_euclid(TITHI_PER_DAY.denom());
    (aharkun(be) + whole_excess + BODITHEY_OFFSET).rem_euclid(TITHI_PER_MONTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_jdn_consistent() {
        assert_eq!(EPOCH.jdn(), EPOCH_JDN);
        assert_eq!(days_since_epoch(&EPOCH), 0);
        let d = GregorianDate::new(1900, 2, 1).unwrap();
        assert_eq!(days_since_epoch(&d), 31);
    }

    #[test]
    fn test_synodic_month_matches_tithi_rate() {
        // 30 tithi at 703/692 tithi per day
        let derived = Ratio::new(TITHI_PER_MONTH * TITHI_PER_DAY.denom(), TITHI_PER_DAY.numer());
        assert_eq!(derived, Ratio::new(20_760, 703));
        assert_eq!(MEAN_SYNODIC_MONTH.floor(), 29);
        assert!(MEAN_SYNODIC_MONTH > Ratio::new(295_305, 10_000));
        assert!(MEAN_SYNODIC_MONTH < Ratio::new(295_306, 10_000));
    }

    #[test]
    fn test_solar_year() {
        assert_eq!(SOLAR_YEAR.floor(), 365);
        assert_eq!(SOLAR_YEAR.scale(800).unwrap().floor(), 292_207);
        assert_eq!(SOLAR_YEAR.to_string(), "292207/800");
    }

    #[test]
    fn test_scale_overflow() {
        assert_eq!(MEAN_SYNODIC_MONTH.scale(-1).map(Ratio::floor), Some(-30));
        assert_eq!(SOLAR_YEAR.scale(i64::MAX), None);
        assert_eq!(SOLAR_YEAR.scale(i64::MIN), None);
    }

    #[test]
    fn test_mean_moon_age_range() {
        for days in [-40_000, -1, 0, 1, 29, 30, 10_000, 109_572] {
            let age = mean_moon_age(days);
            assert!(age >= Ratio::new(0, 1), "age for {days}");
            assert!(age < MEAN_SYNODIC_MONTH, "age for {days}");
        }
        assert_eq!(mean_moon_age(0), Ratio::new(351, 703));
    }

    #[test]
    fn test_year_start_quantities() {
        // BE 2568 (2024-2025)
        assert_eq!(aharkun(2568), 937_989);
        assert_eq!(kromthupul(2568), 725);
        assert!(!is_solar_leap(2568));
        assert_eq!(avoman(2568), 184);
        assert_eq!(bodithey(2568), 8);

        assert_eq!(bodithey(2567), 26);
        assert_eq!(avoman(2567), 310);
        assert_eq!(kromthupul(2567), 132);
        assert!(is_solar_leap(2567));
    }

    #[test]
    fn test_bodithey_and_avoman_bounds() {
        for be in 2400..2800 {
            assert!((0..30).contains(&bodithey(be)));
            assert!((0..692).contains(&avoman(be)));
            assert!((1..=800).contains(&kromthupul(be)));
        }
    }
}
