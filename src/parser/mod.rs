//! Field extraction for raw citation rows.
//!
//! Turns the date, time, violation and location columns of one row into a
//! [`ParsedCitation`]. Nothing in here fails: a sub-field that cannot be read
//! is simply absent from the result.

pub mod clock;
pub mod street;

use chrono::{Datelike, Days, Months, NaiveDate};

pub use clock::{ClockTime, Meridiem};
pub use street::match_street;

/// Year the `month/day` pairs of the citation log are interpreted against.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;

/// Hour bucket used when the time field does not match the clock grammar.
///
/// Such a record is counted as a midnight citation.
pub const UNPARSED_HOUR: u8 = 0;

/// Number of columns a row needs to be considered a citation.
pub const MIN_FIELDS: usize = 5;

const DATE_FIELD: usize = 1;
const TIME_FIELD: usize = 2;
const VIOLATION_FIELD: usize = 3;
const LOCATION_FIELD: usize = 4;

/// One input row, split into its text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub line: u64,
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }
}

/// Everything the aggregator needs from one citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCitation {
    /// 24-hour clock hour, or [`UNPARSED_HOUR`] when `time_matched` is false.
    pub hour: u8,
    pub time_matched: bool,
    /// 0 = Sunday.
    pub day_of_week: Option<u8>,
    pub violation: Option<String>,
    pub street: Option<String>,
}

/// Parses a row, returning `None` if it has fewer than [`MIN_FIELDS`] fields.
pub fn parse_record(record: &RawRecord, year: i32) -> Option<ParsedCitation> {
    if record.fields.len() < MIN_FIELDS {
        return None;
    }

    Some(parse_fields(
        &record.fields[DATE_FIELD],
        &record.fields[TIME_FIELD],
        &record.fields[VIOLATION_FIELD],
        &record.fields[LOCATION_FIELD],
        year,
    ))
}

/// Whitespace as the citation export understands it: Unicode whitespace plus
/// the byte-order mark, which some exports leave on the first data line.
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Parses the four columns of interest independently of one another.
pub fn parse_fields(
    date: &str,
    time: &str,
    violation: &str,
    location: &str,
    year: i32,
) -> ParsedCitation {
    let clock = ClockTime::find(time);

    ParsedCitation {
        hour: clock.map_or(UNPARSED_HOUR, |t| t.hour24()),
        time_matched: clock.is_some(),
        day_of_week: day_of_week(date, year),
        violation: (!violation.is_empty()).then(|| violation.to_string()),
        street: match_street(location),
    }
}

/// Resolves a `month/day/year` date to a weekday, 0 = Sunday.
///
/// The year component is ignored in favour of `year`. Month and day values
/// outside their calendar range roll over into neighbouring months and years,
/// so `13/1` is January 1 of the following year and `3/0` is the last day of
/// February.
pub fn day_of_week(date: &str, year: i32) -> Option<u8> {
    let parts: Vec<&str> = date.split('/').collect();
    let [month, day, _] = parts.as_slice() else {
        return None;
    };

    let month = leading_int(month)?;
    let day = leading_int(day)?;

    let first_of_year = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let first_of_month = shift_months(first_of_year, month - 1)?;
    let date = shift_days(first_of_month, day - 1)?;

    u8::try_from(date.weekday().num_days_from_sunday()).ok()
}

/// Reads an optionally signed integer prefix, skipping leading whitespace.
///
/// Trailing characters after the digits are ignored. Returns `None` when no
/// digit follows the optional sign.
fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    let value: i64 = digits.parse().ok()?;

    Some(if negative { -value } else { value })
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months < 0 {
        date.checked_sub_months(magnitude)
    } else {
        date.checked_add_months(magnitude)
    }
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days < 0 {
        date.checked_sub_days(magnitude)
    } else {
        date.checked_add_days(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> RawRecord {
        RawRecord::new(2, fields.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn test_well_formed_record() {
        let parsed = parse_record(
            &record(&["_", "01/02/2025", "10:15:00 AM", "SPEEDING", "123 N MAIN ST"]),
            2025,
        )
        .unwrap();

        assert_eq!(parsed.hour, 10);
        assert!(parsed.time_matched);
        // January 2, 2025 was a Thursday.
        assert_eq!(parsed.day_of_week, Some(4));
        assert_eq!(parsed.violation.as_deref(), Some("SPEEDING"));
        assert_eq!(parsed.street.as_deref(), Some("N MAIN ST"));
    }

    #[test]
    fn test_malformed_subfields_fall_back() {
        let parsed = parse_record(
            &record(&["_", "13/40", "25:00:00 XM", "", "NO MATCH HERE"]),
            2025,
        )
        .unwrap();

        assert_eq!(parsed.hour, UNPARSED_HOUR);
        assert!(!parsed.time_matched);
        assert_eq!(parsed.day_of_week, None);
        assert_eq!(parsed.violation, None);
        assert_eq!(parsed.street, None);
    }

    #[test]
    fn test_single_digit_minutes_keep_their_hour() {
        let parsed = parse_fields("1/2/2025", "9:5:00 AM", "METER", "5 W OAK ST", 2025);
        assert_eq!(parsed.hour, 9);
        assert!(parsed.time_matched);

        let parsed = parse_fields("1/2/2025", "10:60:00 AM", "METER", "5 W OAK ST", 2025);
        assert_eq!(parsed.hour, 10);
        assert!(parsed.time_matched);
    }

    #[test]
    fn test_is_space() {
        assert!(is_space(' '));
        assert!(is_space('\t'));
        assert!(is_space('\u{feff}'));
        assert!(!is_space('N'));
    }

    #[test]
    fn test_short_record_is_rejected() {
        assert_eq!(parse_record(&record(&["_", "01/02/2025", "10:15:00 AM", "X"]), 2025), None);
        assert_eq!(parse_record(&record(&[]), 2025), None);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let parsed = parse_record(
            &record(&["_", "1/1/2025", "1:00:00 PM", "METER", "5 W ELM DR", "extra", "more"]),
            2025,
        )
        .unwrap();
        assert_eq!(parsed.hour, 13);
        assert_eq!(parsed.street.as_deref(), Some("W ELM DR"));
    }

    #[test]
    fn test_day_of_week_uses_reference_year() {
        // 2025-01-01 Wednesday, 2024-01-01 Monday; the year component is ignored.
        assert_eq!(day_of_week("1/1/1999", 2025), Some(3));
        assert_eq!(day_of_week("1/1/1999", 2024), Some(1));
        assert_eq!(day_of_week("07/04/2025", 2025), Some(5));
    }

    #[test]
    fn test_day_of_week_requires_three_parts() {
        assert_eq!(day_of_week("01/02", 2025), None);
        assert_eq!(day_of_week("2025-01-02", 2025), None);
        assert_eq!(day_of_week("1/2/3/4", 2025), None);
        assert_eq!(day_of_week("", 2025), None);
    }

    #[test]
    fn test_day_of_week_rolls_over() {
        // 13/1 -> 2026-01-01 (Thursday), 3/0 -> 2025-02-28 (Friday),
        // 0/1 -> 2024-12-01 (Sunday).
        assert_eq!(day_of_week("13/1/2025", 2025), Some(4));
        assert_eq!(day_of_week("3/0/2025", 2025), Some(5));
        assert_eq!(day_of_week("0/1/2025", 2025), Some(0));
    }

    #[test]
    fn test_day_of_week_non_numeric() {
        assert_eq!(day_of_week("JAN/02/2025", 2025), None);
        assert_eq!(day_of_week("1//2025", 2025), None);
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("07"), Some(7));
        assert_eq!(leading_int(" 12abc"), Some(12));
        assert_eq!(leading_int("-3"), Some(-3));
        assert_eq!(leading_int("+4"), Some(4));
        assert_eq!(leading_int("x1"), None);
        assert_eq!(leading_int("-"), None);
    }
}
