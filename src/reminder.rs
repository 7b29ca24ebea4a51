//! Plans the "holiday tomorrow" reminders for a year.
//!
//! Planning only: delivering the reminders is left to the caller.

use serde::Serialize;
use tracing::debug;

use crate::{
    GregorianDate,
    config::ReminderConfig,
    error::CalendarError,
    holiday::{HolidayOccurrence, HolidayResolver},
    prelude::*,
};

/// Title shown on every holiday reminder ("holiday tomorrow").
pub const REMINDER_TITLE: &str = "ថ្ងៃបុណ្យស្អែក";

/// A civil date with a local wall-clock time, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{date} {hour:02}:{minute:02}")]
pub struct LocalDateTime {
    pub date:   GregorianDate,
    pub hour:   u8,
    pub minute: u8,
}

impl LocalDateTime {
    pub const fn new(date: GregorianDate, hour: u8, minute: u8) -> Self {
        Self { date, hour, minute }
    }

    /// Midnight at the start of `date`.
    pub const fn start_of(date: GregorianDate) -> Self {
        Self::new(date, 0, 0)
    }
}

/// One reminder to schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReminderPlan {
    /// `holiday-<occurrence id>`.
    pub id:      String,
    pub fire_at: LocalDateTime,
    pub title:   &'static str,
    pub body:    String,
}

impl ReminderPlan {
    fn for_occurrence(occurrence: &HolidayOccurrence, fire_at: LocalDateTime) -> Self {
        Self {
            id: format!("holiday-{}", occurrence.id),
            fire_at,
            title: REMINDER_TITLE,
            body: format!("{} — {}", occurrence.khmer_name, occurrence.english_name),
        }
    }
}

/// Reminders for the public holidays of `year` that fire strictly after `now`.
///
/// # Errors
/// Returns `CalendarError::UnsupportedRange` outside the supported years.
#[tracing::instrument(level = "debug", skip(resolver, config, now), fields(now = %now))]
pub fn plan_reminders(
    resolver: &HolidayResolver,
    config: &ReminderConfig,
    year: u16,
    now: LocalDateTime,
) -> Result<Vec<ReminderPlan>, CalendarError> {
    let lead = -i64::from(config.lead_days());
    let plans: Vec<ReminderPlan> = resolver
        .for_year(year)?
        .iter()
        .filter(|occurrence| occurrence.is_public)
        .filter_map(|occurrence| {
            let fire_date = occurrence.date.checked_add_days(lead)?;
            let fire_at = LocalDateTime::new(fire_date, config.hour(), config.minute());
            (fire_at > now).then(|| ReminderPlan::for_occurrence(occurrence, fire_at))
        })
        .collect();

    debug!(count = plans.len(), "planned reminders");
    Ok(plans)
}
