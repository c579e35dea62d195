use crate::analysis::types::Minute;
use once_cell::sync::Lazy;
use regex::Regex;

// HH must not be the tail of a longer digit run, otherwise "2020:13:55" would read 13 as the minute.
static CLOCK_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^0-9])[0-9]{2}:([0-9]{2}):[0-9]{2}").expect("clock time pattern must compile")
});

/// Extracts the minute-of-hour from a timestamp field such as
/// `10/Oct/2020:13:55:36 -0700`.
///
/// Timestamps without a readable `HH:MM:SS` (or with a minute past 59) map to
/// [`Minute::Corrupt`] instead of failing.
pub fn minute_of(timestamp: &str) -> Minute {
    CLOCK_TIME
        .captures(timestamp)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u8>().ok())
        .map(Minute::new)
        .unwrap_or(Minute::Corrupt)
}
