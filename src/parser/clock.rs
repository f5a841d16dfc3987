//! 12-hour clock grammar: `H:M:S AM|PM`.

use super::is_space;

/// Half of the day a [`ClockTime`] falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// A time of day read off a citation's time field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u32,
    pub second: u32,
    pub meridiem: Meridiem,
}

impl ClockTime {
    /// Searches `text` for the first `H:M:S AM|PM` occurrence.
    ///
    /// The hour is one or two digits in `1..=12` and must not be preceded by
    /// another digit. Minutes and seconds are any run of digits and are not
    /// range-checked; only the hour feeds the buckets.
    /// Any amount of whitespace (including none) may separate the seconds
    /// from the meridiem, which is matched case-insensitively.
    pub fn find(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();

        (0..bytes.len())
            .filter(|&i| i == 0 || !bytes[i - 1].is_ascii_digit())
            .find_map(|i| Self::parse_at(bytes, i))
    }

    /// Converts to a 24-hour clock hour: 12 AM is 0, 12 PM stays 12.
    pub fn hour24(&self) -> u8 {
        match (self.meridiem, self.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        }
    }

    fn parse_at(bytes: &[u8], start: usize) -> Option<Self> {
        let mut pos = start;

        let hour_len = bytes[pos..]
            .iter()
            .take(2)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if hour_len == 0 {
            return None;
        }
        let hour = u8::try_from(digits_value(&bytes[pos..pos + hour_len])).ok()?;
        pos += hour_len;

        pos = consume(bytes, pos, b':')?;
        let (minute, next) = number(bytes, pos)?;
        pos = consume(bytes, next, b':')?;
        let (second, next) = number(bytes, pos)?;
        pos = next;

        // `pos` sits just past an ASCII digit, so it is a char boundary.
        let rest = std::str::from_utf8(&bytes[pos..]).ok()?;
        pos = bytes.len() - rest.trim_start_matches(is_space).len();

        let meridiem = match bytes.get(pos..pos + 2)? {
            [a, m] if m.eq_ignore_ascii_case(&b'M') => match a.to_ascii_uppercase() {
                b'A' => Meridiem::Am,
                b'P' => Meridiem::Pm,
                _ => return None,
            },
            _ => return None,
        };

        if !(1..=12).contains(&hour) {
            return None;
        }

        Some(Self {
            hour,
            minute,
            second,
            meridiem,
        })
    }
}

fn consume(bytes: &[u8], pos: usize, want: u8) -> Option<usize> {
    (bytes.get(pos) == Some(&want)).then_some(pos + 1)
}

/// Reads one or more digits at `pos`, returning the value and the end position.
fn number(bytes: &[u8], pos: usize) -> Option<(u32, usize)> {
    let len = bytes
        .get(pos..)?
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    (len > 0).then(|| (digits_value(&bytes[pos..pos + len]), pos + len))
}

fn digits_value(digits: &[u8]) -> u32 {
    digits.iter().fold(0u32, |acc, d| {
        acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour_of(text: &str) -> Option<u8> {
        ClockTime::find(text).map(|t| t.hour24())
    }

    #[test]
    fn test_morning_and_evening_hours() {
        assert_eq!(hour_of("10:15:00 AM"), Some(10));
        assert_eq!(hour_of("1:05:09 PM"), Some(13));
        assert_eq!(hour_of("11:59:59 pm"), Some(23));
    }

    #[test]
    fn test_noon_and_midnight() {
        assert_eq!(hour_of("12:00:00 PM"), Some(12));
        assert_eq!(hour_of("12:00:00 AM"), Some(0));
        assert_eq!(hour_of("12:30:00 am"), Some(0));
    }

    #[test]
    fn test_meridiem_without_space() {
        let t = ClockTime::find("07:45:30PM").unwrap();
        assert_eq!(t.hour, 7);
        assert_eq!(t.minute, 45);
        assert_eq!(t.second, 30);
        assert_eq!(t.meridiem, Meridiem::Pm);
    }

    #[test]
    fn test_unicode_whitespace_before_meridiem() {
        assert_eq!(hour_of("8:00:00\u{feff}PM"), Some(20));
        assert_eq!(hour_of("8:00:00\u{a0}AM"), Some(8));
    }

    #[test]
    fn test_found_inside_surrounding_text() {
        assert_eq!(hour_of("issued 3:20:00 PM local"), Some(15));
    }

    #[test]
    fn test_rejects_bad_meridiem() {
        assert_eq!(hour_of("25:00:00 XM"), None);
        assert_eq!(hour_of("10:15:00"), None);
        assert_eq!(hour_of("10:15:00 A"), None);
    }

    #[test]
    fn test_rejects_out_of_range_hours() {
        assert_eq!(hour_of("13:00:00 PM"), None);
        assert_eq!(hour_of("0:00:00 AM"), None);
        assert_eq!(hour_of("112:00:00 PM"), None);
    }

    #[test]
    fn test_minutes_and_seconds_take_any_digit_run() {
        assert_eq!(hour_of("9:5:00 AM"), Some(9));
        assert_eq!(hour_of("3:07:5 PM"), Some(15));
        assert_eq!(hour_of("10:60:00 AM"), Some(10));
        assert_eq!(hour_of("10:00:61 AM"), Some(10));

        let t = ClockTime::find("4:123:4567 PM").unwrap();
        assert_eq!(t.minute, 123);
        assert_eq!(t.second, 4567);
    }

    #[test]
    fn test_rejects_missing_components() {
        assert_eq!(hour_of("10::00 AM"), None);
        assert_eq!(hour_of("10:15: AM"), None);
        assert_eq!(hour_of(""), None);
    }
}
