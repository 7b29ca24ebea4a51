//! Engine configuration, loadable from TOML.

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Longest reminder lead, in days.
pub const MAX_REMINDER_LEAD_DAYS: u8 = 30;

/// Top-level engine configuration.
///
/// ```
/// use chhankitek::EngineConfig;
///
/// let config = EngineConfig::from_toml_str(
///     r#"
///     include_observances = false
///
///     [reminder]
///     lead_days = 2
///     "#,
/// )
/// .unwrap();
///
/// assert!(!config.include_observances());
/// assert_eq!(config.reminder().lead_days(), 2);
/// assert_eq!(config.reminder().hour(), 18);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Resolve non-public observances alongside public holidays.
    #[serde(default = "default_true")]
    include_observances: bool,

    /// Reminder scheduling.
    #[serde(default)]
    reminder: ReminderConfig,
}

/// When holiday reminders fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReminderConfig {
    #[serde(default = "default_lead_days")]
    lead_days: u8,
    #[serde(default = "default_hour")]
    hour:      u8,
    #[serde(default)]
    minute:    u8,
}

fn default_true() -> bool {
    true
}
fn default_lead_days() -> u8 {
    1
}
fn default_hour() -> u8 {
    18
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            include_observances: true,
            reminder:            ReminderConfig::default(),
        }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            lead_days: default_lead_days(),
            hour:      default_hour(),
            minute:    0,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// Returns `CalendarError::Config` for malformed TOML or unknown keys and
    /// `CalendarError::InvalidConfig` when a value is out of range.
    pub fn from_toml_str(s: &str) -> Result<Self, CalendarError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub const fn with_include_observances(mut self, include: bool) -> Self {
        self.include_observances = include;
        self
    }

    #[must_use]
    pub const fn with_reminder(mut self, reminder: ReminderConfig) -> Self {
        self.reminder = reminder;
        self
    }

    pub const fn include_observances(&self) -> bool {
        self.include_observances
    }

    pub const fn reminder(&self) -> &ReminderConfig {
        &self.reminder
    }

    /// # Errors
    /// Returns `CalendarError::InvalidConfig` naming the first bad value.
    pub fn validate(&self) -> Result<(), CalendarError> {
        self.reminder.validate()
    }
}

impl ReminderConfig {
    #[must_use]
    pub const fn with_lead_days(mut self, lead_days: u8) -> Self {
        self.lead_days = lead_days;
        self
    }

    /// Local time of day the reminder fires.
    #[must_use]
    pub const fn with_time(mut self, hour: u8, minute: u8) -> Self {
        self.hour = hour;
        self.minute = minute;
        self
    }

    /// Days before the holiday.
    pub const fn lead_days(&self) -> u8 {
        self.lead_days
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// # Errors
    /// Returns `CalendarError::InvalidConfig` naming the first bad value.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.lead_days > MAX_REMINDER_LEAD_DAYS {
            return Err(CalendarError::InvalidConfig(format!(
                "reminder.lead_days must be at most {MAX_REMINDER_LEAD_DAYS}, got {}",
                self.lead_days
            )));
        }
        if self.hour > 23 {
            return Err(CalendarError::InvalidConfig(format!(
                "reminder.hour must be 0-23, got {}",
                self.hour
            )));
        }
        if self.minute > 59 {
            return Err(CalendarError::InvalidConfig(format!(
                "reminder.minute must be 0-59, got {}",
                self.minute
            )));
        }
        Ok(())
    }
}
