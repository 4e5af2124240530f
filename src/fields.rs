//! Pure field-format validators shared by the entity rule sets.
//!
//! All three functions are deterministic, side-effect free, and operate on
//! the raw string form of a field. None of them touch the network: email
//! validation is a format check only, no MX lookup.

use regex::Regex;

/// Email format: local part, `@`, domain, and a final extension of two or
/// more letters. The local part allows letters, digits, `.`, `_`, `%`, `+`
/// and `-`; the domain allows letters, digits, `.` and `-`.
pub fn validate_email(value: &str) -> bool {
    let re = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
    re.is_match(value)
}

/// URL format: an `http://` or `https://` scheme followed by a non-empty
/// host, with any path or query tail accepted. Bare domains without a
/// scheme are rejected.
pub fn validate_url(value: &str) -> bool {
    let re = Regex::new(r"^https?://[A-Za-z0-9.-]+").unwrap();
    re.is_match(value)
}

/// Date format: `YYYY-MM-DD` with month in 1..=12 and day in 1..=31.
///
/// The day check is deliberately lax: `2024-02-31` passes because no
/// per-month day count is applied. Callers needing real calendar dates
/// (such as the course date-range check) parse with `chrono` afterwards.
pub fn validate_date(value: &str) -> bool {
    let re = Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap();
    let Some(caps) = re.captures(value) else {
        return false;
    };
    let month: u32 = caps[2].parse().unwrap_or(0);
    let day: u32 = caps[3].parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}
