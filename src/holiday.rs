//! Cambodian holiday catalog and its resolution into dated occurrences.

use serde::Serialize;
use tracing::debug;

use crate::{
    DateRange, GregorianDate, LunarDay, Month,
    error::{CalendarError, OutOfRange, ensure_supported_date, ensure_supported_year},
    lunar::{KhmerLunarDate, LunarMonth, MoonPhase, to_khmer_date},
    new_year::new_year_moment,
};

/// A rule placing a holiday in any Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HolidayDefinition {
    /// Same Gregorian month and day every year.
    FixedGregorian {
        month:        u8,
        day:          u8,
        khmer_name:   &'static str,
        english_name: &'static str,
        is_public:    bool,
    },
    /// A day of the lunar calendar.
    LunarRelative {
        month:        LunarMonth,
        day:          LunarDay,
        phase:        MoonPhase,
        khmer_name:   &'static str,
        english_name: &'static str,
        is_public:    bool,
    },
    /// A festival day counted from Moha Songkran.
    NewYearRelative {
        day_offset:   u8,
        khmer_name:   &'static str,
        english_name: &'static str,
        is_public:    bool,
    },
}

impl HolidayDefinition {
    pub const fn khmer_name(&self) -> &'static str {
        match self {
            Self::FixedGregorian { khmer_name, .. }
            | Self::LunarRelative { khmer_name, .. }
            | Self::NewYearRelative { khmer_name, .. } => *khmer_name,
        }
    }

    pub const fn english_name(&self) -> &'static str {
        match self {
            Self::FixedGregorian { english_name, .. }
            | Self::LunarRelative { english_name, .. }
            | Self::NewYearRelative { english_name, .. } => *english_name,
        }
    }

    pub const fn is_public(&self) -> bool {
        match self {
            Self::FixedGregorian { is_public, .. }
            | Self::LunarRelative { is_public, .. }
            | Self::NewYearRelative { is_public, .. } => *is_public,
        }
    }
}

const fn fixed(month: u8, day: u8, khmer_name: &'static str, english_name: &'static str, is_public: bool) -> HolidayDefinition {
    HolidayDefinition::FixedGregorian {
        month,
        day,
        khmer_name,
        english_name,
        is_public,
    }
}

const fn lunar(
    month: LunarMonth,
    day: u8,
    phase: MoonPhase,
    khmer_name: &'static str,
    english_name: &'static str,
    is_public: bool,
) -> HolidayDefinition {
    HolidayDefinition::LunarRelative {
        month,
        day: LunarDay::from_fortnight_index(day - 1),
        phase,
        khmer_name,
        english_name,
        is_public,
    }
}

const fn new_year(day_offset: u8, khmer_name: &'static str, english_name: &'static str) -> HolidayDefinition {
    HolidayDefinition::NewYearRelative {
        day_offset,
        khmer_name,
        english_name,
        is_public: true,
    }
}

const LENT_KH: &str = "ពិធីបុណ្យចូលព្រះវស្សា";
const LENT_EN: &str = "Beginning of Buddhist Lent";
const PCHUM_KH: &str = "ពិធីបុណ្យភ្ជុំបិណ្ឌ";
const PCHUM_EN: &str = "Pchum Ben Day";
const WATER_KH: &str = "ព្រះរាជពិធីបុណ្យអុំទូក បណ្តែតប្រទីប និងសំពះព្រះខែ អកអំបុក";
const WATER_EN: &str = "Water Festival";

/// Every holiday the resolver knows, in catalog order.
pub static CATALOG: [HolidayDefinition; 27] = [
    fixed(1, 1, "ទិវាចូលឆ្នាំសកល", "International New Year Day", true),
    fixed(1, 7, "ទិវាជ័យជម្នះលើរបបប្រល័យពូជសាសន៍", "Victory over Genocide Day", true),
    fixed(3, 8, "ទិវានារីអន្តរជាតិ", "International Women's Day", true),
    fixed(5, 1, "ទិវាពលកម្មអន្តរជាតិ", "International Labour Day", true),
    fixed(5, 14, "ព្រះរាជពិធីបុណ្យចម្រើនព្រះជន្ម ព្រះមហាក្សត្រ", "King's Birthday", true),
    fixed(6, 1, "ទិវាកុមារអន្តរជាតិ", "International Children's Day", false),
    fixed(
        6,
        18,
        "ព្រះរាជពិធីបុណ្យចម្រើនព្រះជន្ម សម្តេចព្រះមហាក្សត្រីព្រះវររាជមាតា",
        "Queen Mother's Birthday",
        true,
    ),
    fixed(9, 24, "ទិវាប្រកាសរដ្ឋធម្មនុញ្ញ", "Constitution Day", true),
    fixed(
        10,
        15,
        "ទិវាប្រារព្ធពិធីគោរពព្រះវិញ្ញាណក្ខន្ធ ព្រះបរមរតនកោដ្ឋ",
        "King Father's Commemoration Day",
        true,
    ),
    fixed(10, 29, "ព្រះរាជពិធីគ្រងព្រះបរមរាជសម្បត្តិ", "King's Coronation Day", true),
    fixed(11, 9, "ពិធីបុណ្យឯករាជ្យជាតិ", "Independence Day", true),
    fixed(12, 29, "ទិវាសន្តិភាពនៅកម្ពុជា", "Peace Day in Cambodia", true),
    new_year(0, "ពិធីបុណ្យចូលឆ្នាំថ្មីប្រពៃណីជាតិ ថ្ងៃមហាសង្ក្រាន្ត", "Khmer New Year (Maha Songkran)"),
    new_year(1, "ពិធីបុណ្យចូលឆ្នាំថ្មីប្រពៃណីជាតិ ថ្ងៃវារៈវ័នបត", "Khmer New Year (Virak Vanabat)"),
    new_year(2, "ពិធីបុណ្យចូលឆ្នាំថ្មីប្រពៃណីជាតិ ថ្ងៃវារៈឡើងស័ក", "Khmer New Year (Virak Loeng Sak)"),
    lunar(LunarMonth::Meak, 15, MoonPhase::Waxing, "ពិធីបុណ្យមាឃបូជា", "Meak Bochea Day", false),
    lunar(LunarMonth::Pisakh, 15, MoonPhase::Waxing, "ពិធីបុណ្យវិសាខបូជា", "Visak Bochea Day", true),
    lunar(LunarMonth::Pisakh, 4, MoonPhase::Waning, "ព្រះរាជពិធីច្រត់ព្រះនង្គ័ល", "Royal Ploughing Ceremony", true),
    lunar(LunarMonth::Asadh, 1, MoonPhase::Waning, LENT_KH, LENT_EN, false),
    lunar(LunarMonth::Tutiyasadh, 1, MoonPhase::Waning, LENT_KH, LENT_EN, false),
    lunar(LunarMonth::Photrobot, 14, MoonPhase::Waning, PCHUM_KH, PCHUM_EN, true),
    lunar(LunarMonth::Photrobot, 15, MoonPhase::Waning, PCHUM_KH, PCHUM_EN, true),
    lunar(LunarMonth::Assoch, 1, MoonPhase::Waxing, PCHUM_KH, PCHUM_EN, true),
    lunar(LunarMonth::Assoch, 15, MoonPhase::Waxing, "ពិធីបុណ្យចេញព្រះវស្សា", "End of Buddhist Lent", false),
    lunar(LunarMonth::Kadeuk, 14, MoonPhase::Waxing, WATER_KH, WATER_EN, true),
    lunar(LunarMonth::Kadeuk, 15, MoonPhase::Waxing, WATER_KH, WATER_EN, true),
    lunar(LunarMonth::Kadeuk, 1, MoonPhase::Waning, WATER_KH, WATER_EN, true),
];

/// A holiday resolved to a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HolidayOccurrence {
    /// `<yyyy-mm-dd>-<catalog index>`, stable across calls.
    pub id:           String,
    pub date:         GregorianDate,
    pub khmer_name:   &'static str,
    pub english_name: &'static str,
    pub is_public:    bool,
}

impl HolidayOccurrence {
    fn new(index: usize, definition: &HolidayDefinition, date: GregorianDate) -> Self {
        Self {
            id: format!("{date}-{index}"),
            date,
            khmer_name: definition.khmer_name(),
            english_name: definition.english_name(),
            is_public: definition.is_public(),
        }
    }
}

/// Resolves the catalog for a year, month or day.
#[derive(Debug, Clone, Copy)]
pub struct HolidayResolver {
    catalog:             &'static [HolidayDefinition],
    include_observances: bool,
}

impl Default for HolidayResolver {
    fn default() -> Self {
        Self::new(true)
    }
}

impl HolidayResolver {
    /// Resolver over [`CATALOG`]; `include_observances = false` drops
    /// the non-public entries.
    pub fn new(include_observances: bool) -> Self {
        Self {
            catalog: &CATALOG,
            include_observances,
        }
    }

    pub const fn catalog(&self) -> &'static [HolidayDefinition] {
        self.catalog
    }

    /// All occurrences in Gregorian `year`, by date with ties in catalog order.
    ///
    /// A lunar definition that does not fall inside the year yields nothing.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported years.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn for_year(&self, year: u16) -> Result<Vec<HolidayOccurrence>, CalendarError> {
        ensure_supported_year(year)?;
        let lunar_days = DateRange::year(year)
            .map_err(|_| CalendarError::UnsupportedRange(OutOfRange::GregorianYear(year)))?
            .days()
            .map(to_khmer_date)
            .collect::<Result<Vec<KhmerLunarDate>, _>>()?;
        let new_year = new_year_moment(year)?.date;

        let mut occurrences = Vec::with_capacity(self.catalog.len());
        for (index, definition) in self.catalog.iter().enumerate() {
            if !self.include_observances && !definition.is_public() {
                continue;
            }
            let date = match *definition {
                HolidayDefinition::FixedGregorian { month, day, .. } => Some(GregorianDate::new(year, month, day)?),
                HolidayDefinition::NewYearRelative { day_offset, .. } => {
                    new_year.checked_add_days(i64::from(day_offset))
                },
                HolidayDefinition::LunarRelative {
                    month, day, phase, ..
                } => lunar_days
                    .iter()
                    .find(|khmer| khmer.matches(month, day, phase))
                    .map(KhmerLunarDate::source),
            };
            match date {
                Some(date) => occurrences.push(HolidayOccurrence::new(index, definition, date)),
                None => debug!(holiday = definition.english_name(), index, "no occurrence this year"),
            }
        }

        occurrences.sort_by_key(|occurrence| occurrence.date);
        debug!(count = occurrences.len(), "resolved holidays");
        Ok(occurrences)
    }

    /// Occurrences falling in `month` of `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported years
    /// and `CalendarError::InvalidDate` for a month outside `1..=12`.
    pub fn for_month(&self, year: u16, month: u8) -> Result<Vec<HolidayOccurrence>, CalendarError> {
        Month::new(month)?;
        let mut occurrences = self.for_year(year)?;
        occurrences.retain(|occurrence| occurrence.date.month() == month);
        Ok(occurrences)
    }

    /// Occurrences falling on `date`.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported dates.
    pub fn on(&self, date: GregorianDate) -> Result<Vec<HolidayOccurrence>, CalendarError> {
        let date = ensure_supported_date(date)?;
        let mut occurrences = self.for_year(date.year())?;
        occurrences.retain(|occurrence| occurrence.date == date);
        Ok(occurrences)
    }

    /// First occurrence strictly after `today`, looking into the next year
    /// when needed. `None` past the end of the supported window.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` when `today` is unsupported.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn next_after(&self, today: GregorianDate) -> Result<Option<HolidayOccurrence>, CalendarError> {
        let today = ensure_supported_date(today)?;
        let upcoming = self
            .for_year(today.year())?
            .into_iter()
            .find(|occurrence| occurrence.date > today);
        if upcoming.is_some() {
            return Ok(upcoming);
        }

        match ensure_supported_year(today.year() + 1) {
            Ok(next_year) => Ok(self.for_year(next_year)?.into_iter().next()),
            Err(_) => Ok(None),
        }
    }

    /// Whether a public holiday falls on `date`.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported dates.
    pub fn is_public(&self, date: GregorianDate) -> Result<bool, CalendarError> {
        Ok(self.on(date)?.iter().any(|occurrence| occurrence.is_public))
    }
}
