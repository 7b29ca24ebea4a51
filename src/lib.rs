//! Khmer lunar calendar conversion and Cambodian holiday resolution.
//!
//! All computations are pure and exact: the engine never reads the clock,
//! never touches the file system and uses no floating point. Diagnostics
//! are emitted through `tracing`; installing a subscriber is up to the
//! application.

mod config;
mod consts;
mod date;
mod engine;
mod error;
mod holiday;
mod leap;
mod lunar;
mod new_year;
mod prelude;
mod range;
mod reminder;
mod summary;
mod types;

pub mod epoch;

pub use config::{EngineConfig, MAX_REMINDER_LEAD_DAYS, ReminderConfig};
pub use consts::*;
pub use date::{DateError, GregorianDate, Weekday};
pub use engine::Chhankitek;
pub use error::{CalendarError, OutOfRange};
pub use holiday::{CATALOG, HolidayDefinition, HolidayOccurrence, HolidayResolver};
pub use leap::{LeapYearFacts, YearKind, days_in_year, leap_facts, raw_leap_facts, year_kind};
pub use lunar::{
    AnimalYear, KhmerLunarDate, LunarMonth, MoonPhase, Sak, era_year_of, lunar_year_start, to_khmer_date,
};
pub use new_year::{NEW_YEAR_FESTIVAL_DAYS, Songkran, chula_sakarat_of, new_year_date, new_year_moment};
pub use range::{DateRange, Days, RangeError};
pub use reminder::{LocalDateTime, REMINDER_TITLE, ReminderPlan, plan_reminders};
pub use summary::{DayStatus, MonthSummary, day_status, month_summary};
pub use types::{Day, LunarDay, Month, Year, days_in_month, is_leap_year};
