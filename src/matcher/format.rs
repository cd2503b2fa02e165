//! Format checks for the `#uuid`, `#uuid-v4`, `#date` and `#datetime` markers.

use once_cell::sync::Lazy;
use regex::Regex;

static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$")
        .expect("uuid pattern is valid")
});

static UUID_V4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-f0-9]{8}-[a-f0-9]{4}-4[a-f0-9]{3}-[89ab][a-f0-9]{3}-[a-f0-9]{12}$")
        .expect("uuid-v4 pattern is valid")
});

static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("date pattern is valid")
});

static DATETIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})",
        r"T([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.[0-9]+)?",
        r"(?:Z|[+-]([0-9]{2}):([0-9]{2}))$",
    ))
    .expect("datetime pattern is valid")
});

pub fn is_uuid(s: &str) -> bool {
    UUID.is_match(s)
}

pub fn is_uuid_v4(s: &str) -> bool {
    UUID_V4.is_match(s)
}

/// Returns true for a real calendar date written as `YYYY-MM-DD`.
pub fn is_date(s: &str) -> bool {
    let Some(caps) = DATE.captures(s) else {
        return false;
    };
    valid_date(&caps[1], &caps[2], &caps[3])
}

/// Returns true for an RFC 3339 timestamp.
pub fn is_datetime(s: &str) -> bool {
    let Some(caps) = DATETIME.captures(s) else {
        return false;
    };
    if !valid_date(&caps[1], &caps[2], &caps[3]) {
        return false;
    }
    let in_range = |i: usize, max: u32| caps.get(i).map_or(true, |m| number(m.as_str()) < max);
    in_range(4, 24) && in_range(5, 60) && in_range(6, 60) && in_range(7, 24) && in_range(8, 60)
}

// Callers only pass regex-captured ASCII digit runs of at most four digits.
fn number(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

fn valid_date(year: &str, month: &str, day: &str) -> bool {
    let (year, month, day) = (number(year), number(month), number(day));
    (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month)
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
