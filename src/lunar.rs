//! Gregorian to Khmer lunar date conversion.
//!
//! Lunar years are laid out as consecutive blocks starting at the epoch.
//! Each block runs from Boss to Migasir and has the length of its
//! [`YearKind`]; the block is labelled with the Buddhist era of its Jesth.
//! Months alternate 30 and 29 days starting with Boss.

use serde::Serialize;
use tracing::trace;

use crate::{
    GregorianDate, LunarDay,
    consts::DAYS_IN_FORTNIGHT,
    epoch::{ANIMAL_YEAR_OFFSET, BUDDHIST_ERA_OFFSET, CHULA_SAKARAT_OFFSET, EPOCH, days_since_epoch},
    error::{CalendarError, OutOfRange, ensure_supported_date, ensure_supported_khmer_year},
    leap::{YearKind, year_kind_unchecked},
    new_year::new_year_moment_unchecked,
    prelude::*,
};

/// Days from the start of a lunar year block to the first of Jesth.
pub(crate) const JESTH_OFFSET_DAYS: i64 = 148;

/// Waxing or waning half of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    #[display(fmt = "កើត")]
    Waxing,
    #[display(fmt = "រោច")]
    Waning,
}

impl MoonPhase {
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Waxing => "waxing",
            Self::Waning => "waning",
        }
    }
}

/// A month of the Khmer lunar year.
///
/// A regular year has twelve months. A leap-month year replaces `Asadh`
/// with `Pathamasadh` followed by `Tutiyasadh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LunarMonth {
    #[display(fmt = "មិគសិរ")]
    Migasir,
    #[display(fmt = "បុស្ស")]
    Boss,
    #[display(fmt = "មាឃ")]
    Meak,
    #[display(fmt = "ផល្គុន")]
    Phalkun,
    #[display(fmt = "ចេត្រ")]
    Chet,
    #[display(fmt = "ពិសាខ")]
    Pisakh,
    #[display(fmt = "ជេស្ឋ")]
    Jesth,
    #[display(fmt = "អាសាឍ")]
    Asadh,
    #[display(fmt = "ស្រាពណ៍")]
    Srap,
    #[display(fmt = "ភទ្របទ")]
    Photrobot,
    #[display(fmt = "អស្សុជ")]
    Assoch,
    #[display(fmt = "កត្ដិក")]
    Kadeuk,
    #[display(fmt = "បឋមាសាឍ")]
    Pathamasadh,
    #[display(fmt = "ទុតិយាសាឍ")]
    Tutiyasadh,
}

const REGULAR_YEAR: [LunarMonth; 12] = [
    LunarMonth::Boss,
    LunarMonth::Meak,
    LunarMonth::Phalkun,
    LunarMonth::Chet,
    LunarMonth::Pisakh,
    LunarMonth::Jesth,
    LunarMonth::Asadh,
    LunarMonth::Srap,
    LunarMonth::Photrobot,
    LunarMonth::Assoch,
    LunarMonth::Kadeuk,
    LunarMonth::Migasir,
];

const LEAP_MONTH_YEAR: [LunarMonth; 13] = [
    LunarMonth::Boss,
    LunarMonth::Meak,
    LunarMonth::Phalkun,
    LunarMonth::Chet,
    LunarMonth::Pisakh,
    LunarMonth::Jesth,
    LunarMonth::Pathamasadh,
    LunarMonth::Tutiyasadh,
    LunarMonth::Srap,
    LunarMonth::Photrobot,
    LunarMonth::Assoch,
    LunarMonth::Kadeuk,
    LunarMonth::Migasir,
];

impl LunarMonth {
    /// Months of a year of the given kind, in block order from Boss.
    pub const fn months_of(kind: YearKind) -> &'static [Self] {
        match kind {
            YearKind::LeapMonth => &LEAP_MONTH_YEAR,
            YearKind::Regular | YearKind::LeapDay => &REGULAR_YEAR,
        }
    }

    /// Length of the month in a year of the given kind.
    pub const fn days(self, kind: YearKind) -> u8 {
        match self {
            Self::Jesth if kind.has_leap_day() => 30,
            Self::Boss
            | Self::Phalkun
            | Self::Pisakh
            | Self::Asadh
            | Self::Pathamasadh
            | Self::Tutiyasadh
            | Self::Photrobot
            | Self::Kadeuk => 30,
            Self::Meak | Self::Chet | Self::Jesth | Self::Srap | Self::Assoch | Self::Migasir => 29,
        }
    }

    /// Whether the month only exists in a leap-month year.
    pub const fn is_intercalary(self) -> bool {
        matches!(self, Self::Pathamasadh | Self::Tutiyasadh)
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Migasir => "Migasir",
            Self::Boss => "Boss",
            Self::Meak => "Meak",
            Self::Phalkun => "Phalkun",
            Self::Chet => "Chet",
            Self::Pisakh => "Pisakh",
            Self::Jesth => "Jesth",
            Self::Asadh => "Asadh",
            Self::Srap => "Srap",
            Self::Photrobot => "Photrobot",
            Self::Assoch => "Assoch",
            Self::Kadeuk => "Kadeuk",
            Self::Pathamasadh => "Pathamasadh",
            Self::Tutiyasadh => "Tutiyasadh",
        }
    }
}

/// The twelve-year animal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalYear {
    #[display(fmt = "ជូត")]
    Rat,
    #[display(fmt = "ឆ្លូវ")]
    Ox,
    #[display(fmt = "ខាល")]
    Tiger,
    #[display(fmt = "ថោះ")]
    Rabbit,
    #[display(fmt = "រោង")]
    Dragon,
    #[display(fmt = "ម្សាញ់")]
    Snake,
    #[display(fmt = "មមី")]
    Horse,
    #[display(fmt = "មមែ")]
    Goat,
    #[display(fmt = "វក")]
    Monkey,
    #[display(fmt = "រកា")]
    Rooster,
    #[display(fmt = "ច")]
    Dog,
    #[display(fmt = "កុរ")]
    Pig,
}

impl AnimalYear {
    const ALL: [Self; 12] = [
        Self::Rat,
        Self::Ox,
        Self::Tiger,
        Self::Rabbit,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];

    /// Animal of Buddhist era year `era_year`.
    pub const fn from_era_year(era_year: i32) -> Self {
        Self::ALL[(era_year as i64 + ANIMAL_YEAR_OFFSET as i64).rem_euclid(12).unsigned_abs() as usize]
    }
}

/// The ten-year *sak* cycle, numbered by the last digit of the Chula Sakarat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sak {
    #[display(fmt = "សំរឹទ្ធិស័ក")]
    Samrithi,
    #[display(fmt = "ឯកស័ក")]
    Ek,
    #[display(fmt = "ទោស័ក")]
    To,
    #[display(fmt = "ត្រីស័ក")]
    Trei,
    #[display(fmt = "ចត្វាស័ក")]
    Chattva,
    #[display(fmt = "បញ្ចស័ក")]
    Pancha,
    #[display(fmt = "ឆស័ក")]
    Chha,
    #[display(fmt = "សប្តស័ក")]
    Sappa,
    #[display(fmt = "អដ្ឋស័ក")]
    Attha,
    #[display(fmt = "នព្វស័ក")]
    Nopp,
}

impl Sak {
    const ALL: [Self; 10] = [
        Self::Samrithi,
        Self::Ek,
        Self::To,
        Self::Trei,
        Self::Chattva,
        Self::Pancha,
        Self::Chha,
        Self::Sappa,
        Self::Attha,
        Self::Nopp,
    ];

    /// Sak of Buddhist era year `era_year`.
    pub const fn from_era_year(era_year: i32) -> Self {
        Self::ALL[(era_year as i64 - CHULA_SAKARAT_OFFSET as i64).rem_euclid(10).unsigned_abs() as usize]
    }
}

/// A date of the Khmer lunar calendar, derived from its Gregorian source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{lunar_day}{phase} ខែ{month}")]
pub struct KhmerLunarDate {
    lunar_day:              LunarDay,
    phase:                  MoonPhase,
    month:                  LunarMonth,
    is_leap_month_inserted: bool,
    animal_year:            AnimalYear,
    sak:                    Sak,
    era_year:               i32,
    lunar_year:             i32,
    source:                 GregorianDate,
}

impl KhmerLunarDate {
    pub const fn lunar_day(&self) -> LunarDay {
        self.lunar_day
    }

    pub const fn phase(&self) -> MoonPhase {
        self.phase
    }

    pub const fn month(&self) -> LunarMonth {
        self.month
    }

    /// True when the lunar year of this date carries the doubled Asadh.
    pub const fn is_leap_month_inserted(&self) -> bool {
        self.is_leap_month_inserted
    }

    pub const fn animal_year(&self) -> AnimalYear {
        self.animal_year
    }

    pub const fn sak(&self) -> Sak {
        self.sak
    }

    /// Buddhist era year, which turns over on the Khmer New Year.
    pub const fn era_year(&self) -> i32 {
        self.era_year
    }

    /// Buddhist era label of the lunar year block, used by the leap rules.
    pub const fn lunar_year(&self) -> i32 {
        self.lunar_year
    }

    pub const fn source(&self) -> GregorianDate {
        self.source
    }

    /// Position inside the month, `0..30`: waxing days first.
    pub const fn day_index(&self) -> u8 {
        let base = match self.phase {
            MoonPhase::Waxing => 0,
            MoonPhase::Waning => DAYS_IN_FORTNIGHT,
        };
        base + self.lunar_day.get() - 1
    }

    /// Whether this date is `day` `phase` of `month`.
    pub fn matches(&self, month: LunarMonth, day: LunarDay, phase: MoonPhase) -> bool {
        self.month == month && self.lunar_day == day && self.phase == phase
    }

    /// Year line as printed on Khmer calendars, e.g. `ឆ្នាំរោង ឆស័ក ព.ស. 2568`.
    pub fn year_label(&self) -> String {
        format!("ឆ្នាំ{} {} ព.ស. {}", self.animal_year, self.sak, self.era_year)
    }
}

/// A lunar year block located relative to the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct YearBlock {
    start:      i64,
    lunar_year: i32,
    kind:       YearKind,
}

impl YearBlock {
    const fn end(&self) -> i64 {
        self.start + self.kind.days_in_year() as i64
    }
}

fn block_at(start: i64) -> Result<YearBlock, CalendarError> {
    let jesth = EPOCH
        .checked_add_days(start + JESTH_OFFSET_DAYS)
        .ok_or(CalendarError::UnsupportedRange(OutOfRange::Date(EPOCH)))?;
    let lunar_year = i32::from(jesth.year()) + BUDDHIST_ERA_OFFSET + 1;
    Ok(YearBlock {
        start,
        lunar_year,
        kind: year_kind_unchecked(lunar_year),
    })
}

/// Walks the blocks from the epoch until `stop` accepts one.
fn walk_blocks(mut stop: impl FnMut(&YearBlock) -> bool) -> Result<YearBlock, CalendarError> {
    let mut block = block_at(0)?;
    while !stop(&block) {
        trace!(lunar_year = block.lunar_year, kind = %block.kind, start = block.start, "skipping lunar year block");
        block = block_at(block.end())?;
    }
    Ok(block)
}

/// Finds the month holding day `offset` of a block, with the offset inside that month.
fn locate_month(kind: YearKind, offset: i64) -> (LunarMonth, i64) {
    let mut remaining = offset;
    for &month in LunarMonth::months_of(kind) {
        let len = i64::from(month.days(kind));
        if remaining < len {
            return (month, remaining);
        }
        remaining -= len;
    }
    // blocks end with Migasir
    (LunarMonth::Migasir, remaining)
}

/// Buddhist era year of `date`, turning over on the Moha Songkran date.
///
/// # Errors
/// Returns `CalendarError::UnsupportedRange` outside the supported dates.
pub fn era_year_of(date: GregorianDate) -> Result<i32, CalendarError> {
    let date = ensure_supported_date(date)?;
    let new_year = new_year_moment_unchecked(date.year())?.date;
    let offset = if date >= new_year { BUDDHIST_ERA_OFFSET + 1 } else { BUDDHIST_ERA_OFFSET };
    Ok(i32::from(date.year()) + offset)
}

/// Converts a Gregorian date to its Khmer lunar date.
///
/// # Errors
/// Returns `CalendarError::UnsupportedRange` outside
/// [`DateRange::supported`](crate::DateRange::supported).
pub fn to_khmer_date(date: GregorianDate) -> Result<KhmerLunarDate, CalendarError> {
    let date = ensure_supported_date(date)?;
    let days = days_since_epoch(&date);

    let block = walk_blocks(|block| days < block.end())?;
    let (month, index) = locate_month(block.kind, days - block.start);

    // index < 30
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = index as u8;
    let phase = if index < DAYS_IN_FORTNIGHT { MoonPhase::Waxing } else { MoonPhase::Waning };

    let era_year = era_year_of(date)?;
    Ok(KhmerLunarDate {
        lunar_day: LunarDay::from_fortnight_index(index % DAYS_IN_FORTNIGHT),
        phase,
        month,
        is_leap_month_inserted: block.kind.has_leap_month(),
        animal_year: AnimalYear::from_era_year(era_year),
        sak: Sak::from_era_year(era_year),
        era_year,
        lunar_year: block.lunar_year,
        source: date,
    })
}

/// First day (1 waxing Boss) of the lunar year block labelled `lunar_year`.
///
/// # Errors
/// Returns `CalendarError::UnsupportedRange` when the block does not start
/// inside the supported dates.
pub fn lunar_year_start(lunar_year: i32) -> Result<GregorianDate, CalendarError> {
    let unsupported = CalendarError::UnsupportedRange(OutOfRange::KhmerYear(lunar_year));
    ensure_supported_khmer_year(lunar_year)?;

    let block = walk_blocks(|block| block.lunar_year >= lunar_year)?;
    if block.lunar_year != lunar_year {
        return Err(unsupported);
    }
    EPOCH
        .checked_add_days(block.start)
        .and_then(|start| ensure_supported_date(start).ok())
        .ok_or(unsupported)
}
