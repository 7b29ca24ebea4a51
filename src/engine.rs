//! The [`Chhankitek`] facade bundling configuration with every calendar
//! operation.

use crate::{
    GregorianDate,
    config::EngineConfig,
    error::CalendarError,
    holiday::{HolidayOccurrence, HolidayResolver},
    leap::{self, LeapYearFacts, YearKind},
    lunar::{self, KhmerLunarDate},
    new_year::{self, Songkran},
    reminder::{LocalDateTime, ReminderPlan, plan_reminders},
    summary::{self, DayStatus, MonthSummary},
};

/// Khmer calendar engine.
///
/// Stateless apart from its configuration; share it by reference.
///
/// ```
/// use chhankitek::{Chhankitek, GregorianDate};
///
/// let engine = Chhankitek::default();
/// let date: GregorianDate = "2024-05-22".parse().unwrap();
/// let khmer = engine.to_khmer_date(date).unwrap();
/// assert_eq!(khmer.to_string(), "15កើត ខែពិសាខ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Chhankitek {
    config:   EngineConfig,
    resolver: HolidayResolver,
}

impl Chhankitek {
    /// # Errors
    /// Returns `CalendarError::InvalidConfig` if `config` does not validate.
    pub fn new(config: EngineConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        let resolver = HolidayResolver::new(config.include_observances());
        Ok(Self { config, resolver })
    }

    /// Builds an engine from a TOML document.
    ///
    /// # Errors
    /// See [`EngineConfig::from_toml_str`].
    pub fn from_toml_str(s: &str) -> Result<Self, CalendarError> {
        Self::new(EngineConfig::from_toml_str(s)?)
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub const fn resolver(&self) -> &HolidayResolver {
        &self.resolver
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported dates.
    pub fn to_khmer_date(&self, date: GregorianDate) -> Result<KhmerLunarDate, CalendarError> {
        lunar::to_khmer_date(date)
    }

    /// Converts the date reported by `now`; the engine never reads a clock.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported dates.
    pub fn today(&self, now: impl FnOnce() -> GregorianDate) -> Result<KhmerLunarDate, CalendarError> {
        self.to_khmer_date(now())
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported years.
    pub fn holidays_for_year(&self, year: u16) -> Result<Vec<HolidayOccurrence>, CalendarError> {
        self.resolver.for_year(year)
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported years.
    pub fn holidays_for_month(&self, year: u16, month: u8) -> Result<Vec<HolidayOccurrence>, CalendarError> {
        self.resolver.for_month(year, month)
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported dates.
    pub fn holidays_on(&self, date: GregorianDate) -> Result<Vec<HolidayOccurrence>, CalendarError> {
        self.resolver.on(date)
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported dates.
    pub fn next_holiday_after(&self, today: GregorianDate) -> Result<Option<HolidayOccurrence>, CalendarError> {
        self.resolver.next_after(today)
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported dates.
    pub fn is_public_holiday(&self, date: GregorianDate) -> Result<bool, CalendarError> {
        self.resolver.is_public(date)
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported Khmer years.
    pub fn leap_facts(&self, khmer_year: i32) -> Result<LeapYearFacts, CalendarError> {
        leap::leap_facts(khmer_year)
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported Khmer years.
    pub fn year_kind(&self, khmer_year: i32) -> Result<YearKind, CalendarError> {
        leap::year_kind(khmer_year)
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported years.
    pub fn new_year_moment(&self, year: u16) -> Result<Songkran, CalendarError> {
        new_year::new_year_moment(year)
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported years.
    pub fn new_year_date(&self, year: u16) -> Result<GregorianDate, CalendarError> {
        new_year::new_year_date(year)
    }

    /// Reminders for `year` using the configured lead time.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported years.
    pub fn holiday_reminders(&self, year: u16, now: LocalDateTime) -> Result<Vec<ReminderPlan>, CalendarError> {
        plan_reminders(&self.resolver, self.config.reminder(), year, now)
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported years.
    pub fn month_summary(&self, year: u16, month: u8) -> Result<MonthSummary, CalendarError> {
        summary::month_summary(&self.resolver, year, month)
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedRange` outside the supported dates.
    pub fn day_status(&self, date: GregorianDate) -> Result<DayStatus, CalendarError> {
        summary::day_status(&self.resolver, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> GregorianDate {
        GregorianDate::new(y, m, d).expect("test date must be valid")
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Chhankitek>();
    }

    #[test]
    fn test_today_uses_injected_clock() {
        let engine = Chhankitek::default();
        let khmer = engine.today(|| date(2024, 4, 13)).unwrap();
        assert_eq!(khmer.era_year(), 2568);
        assert_eq!(khmer.source(), date(2024, 4, 13));
    }

    #[test]
    fn test_observances_follow_config() {
        let engine = Chhankitek::new(EngineConfig::default().with_include_observances(false)).unwrap();
        assert_eq!(engine.holidays_for_year(2024).unwrap().len(), 22);
        assert!(engine.holidays_on(date(2024, 6, 1)).unwrap().is_empty());

        let engine = Chhankitek::default();
        assert_eq!(engine.holidays_for_year(2024).unwrap().len(), 26);
        assert_eq!(engine.holidays_on(date(2024, 6, 1)).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig::default()
            .with_reminder(crate::ReminderConfig::default().with_lead_days(45));
        assert!(matches!(Chhankitek::new(config), Err(CalendarError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_toml() {
        let engine = Chhankitek::from_toml_str("[reminder]\nhour = 9").unwrap();
        let plans = engine
            .holiday_reminders(2024, LocalDateTime::start_of(date(2024, 12, 1)))
            .unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].fire_at.to_string(), "2024-12-28 09:00");
    }
}
