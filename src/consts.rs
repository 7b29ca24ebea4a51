/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for April, when the Khmer New Year falls
pub const APRIL: u8 = 4;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// First Gregorian year the lunar converter accepts
pub const FIRST_SUPPORTED_YEAR: u16 = 1900;
/// Last Gregorian year the lunar converter accepts (inclusive)
pub const LAST_SUPPORTED_YEAR: u16 = 2199;

/// First Buddhist era year the leap rules accept
pub const FIRST_SUPPORTED_KHMER_YEAR: i32 = 2443;
/// Last Buddhist era year the leap rules accept (inclusive)
pub const LAST_SUPPORTED_KHMER_YEAR: i32 = 2744;

/// Days in a week
pub const DAYS_IN_WEEK: u8 = 7;
/// Days in a lunar fortnight (waxing or waning half)
pub const DAYS_IN_FORTNIGHT: u8 = 15;
