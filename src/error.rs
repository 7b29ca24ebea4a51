use crate::{
    DateError, DateRange, GregorianDate,
    consts::{FIRST_SUPPORTED_KHMER_YEAR, FIRST_SUPPORTED_YEAR, LAST_SUPPORTED_KHMER_YEAR, LAST_SUPPORTED_YEAR},
    prelude::*,
};

/// Input that fell outside the window the calendar engine covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum OutOfRange {
    #[display(fmt = "date {} (supported {})", "_0", "DateRange::supported()")]
    Date(GregorianDate),
    #[display(fmt = "Gregorian year {} (supported {}-{})", "_0", FIRST_SUPPORTED_YEAR, LAST_SUPPORTED_YEAR)]
    GregorianYear(u16),
    #[display(
        fmt = "Khmer year {} (supported {}-{})",
        "_0",
        FIRST_SUPPORTED_KHMER_YEAR,
        LAST_SUPPORTED_KHMER_YEAR
    )]
    KhmerYear(i32),
}

/// Errors surfaced by the calendar engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The input is outside the supported window.
    #[error("unsupported range: {0}")]
    UnsupportedRange(OutOfRange),

    /// A date component could not be built.
    #[error(transparent)]
    InvalidDate(#[from] DateError),

    /// The configuration parsed but holds a value the engine cannot use.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration text is not valid TOML for [`crate::EngineConfig`].
    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl CalendarError {
    pub const fn is_unsupported_range(&self) -> bool {
        matches!(self, Self::UnsupportedRange(_))
    }
}

/// Fails with [`CalendarError::UnsupportedRange`] unless `date` lies inside
/// [`DateRange::supported`].
pub(crate) fn ensure_supported_date(date: GregorianDate) -> Result<GregorianDate, CalendarError> {
    if DateRange::supported().contains(&date) {
        Ok(date)
    } else {
        Err(CalendarError::UnsupportedRange(OutOfRange::Date(date)))
    }
}

pub(crate) const fn ensure_supported_year(year: u16) -> Result<u16, CalendarError> {
    if year >= FIRST_SUPPORTED_YEAR && year <= LAST_SUPPORTED_YEAR {
        Ok(year)
    } else {
        Err(CalendarError::UnsupportedRange(OutOfRange::GregorianYear(year)))
    }
}

pub(crate) const fn ensure_supported_khmer_year(year: i32) -> Result<i32, CalendarError> {
    if year >= FIRST_SUPPORTED_KHMER_YEAR && year <= LAST_SUPPORTED_KHMER_YEAR {
        Ok(year)
    } else {
        Err(CalendarError::UnsupportedRange(OutOfRange::KhmerYear(year)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_date_bounds() {
        let first = GregorianDate::new(1900, 1, 1).unwrap();
        let before = GregorianDate::new(1899, 12, 31).unwrap();
        let after = GregorianDate::new(2200, 1, 1).unwrap();

        assert_eq!(ensure_supported_date(first), Ok(first));
        assert!(ensure_supported_date(before).unwrap_err().is_unsupported_range());
        assert!(ensure_supported_date(after).unwrap_err().is_unsupported_range());
    }

    #[test]
    fn test_supported_year_bounds() {
        assert!(ensure_supported_year(1900).is_ok());
        assert!(ensure_supported_year(2199).is_ok());
        assert!(ensure_supported_year(1899).is_err());
        assert!(ensure_supported_khmer_year(2443).is_ok());
        assert!(ensure_supported_khmer_year(2744).is_ok());
        assert!(ensure_supported_khmer_year(2745).is_err());
    }

    #[test]
    fn test_error_messages() {
        let after = GregorianDate::new(2200, 1, 1).unwrap();
        let err = ensure_supported_date(after).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported range: date 2200-01-01 (supported 1900-01-01/2199-12-31)"
        );

        let err = ensure_supported_khmer_year(3000).unwrap_err();
        assert_eq!(err.to_string(), "unsupported range: Khmer year 3000 (supported 2443-2744)");

        let err = CalendarError::from(DateError::InvalidMonth(13));
        assert_eq!(err.to_string(), "Invalid month: 13 (must be 1-12)");
    }
}
