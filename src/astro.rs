//! Sun/moon up-or-down evaluation against a same-day rise/set window.

use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AstroError {
    #[error("invalid date {0:?}")]
    InvalidDate(String),
    #[error("invalid clock time {0:?}")]
    InvalidClock(String),
}

fn parse_date(date: &str) -> Result<Date, AstroError> {
    Date::parse(date, format_description!("[year]-[month]-[day]"))
        .map_err(|_| AstroError::InvalidDate(date.to_string()))
}

fn parse_component(raw: &str, source: &str) -> Result<u8, AstroError> {
    raw.trim()
        .parse()
        .map_err(|_| AstroError::InvalidClock(source.to_string()))
}

/// Parses weatherapi's 12-hour rise/set labels, "06:05 AM". Sentinels like
/// "No moonrise" fall out as errors, which callers surface as unknown.
fn parse_clock_12h(label: &str) -> Result<Time, AstroError> {
    let invalid = || AstroError::InvalidClock(label.to_string());
    let (clock, period) = label.trim().split_once(' ').ok_or_else(invalid)?;
    let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
    let hour = parse_component(hour, label)?;
    let minute = parse_component(minute, label)?;
    let hour = match (period, hour) {
        ("AM", 12) => 0,
        ("AM", 1..=11) => hour,
        ("PM", 12) => 12,
        ("PM", 1..=11) => hour + 12,
        _ => return Err(invalid()),
    };
    Time::from_hms(hour, minute, 0).map_err(|_| invalid())
}

/// Parses the location's local timestamp, "YYYY-MM-DD H:MM" — the hour can
/// arrive unpadded.
fn parse_local(localtime: &str) -> Result<PrimitiveDateTime, AstroError> {
    let invalid = || AstroError::InvalidClock(localtime.to_string());
    let (date, clock) = localtime.trim().split_once(' ').ok_or_else(invalid)?;
    let date = parse_date(date)?;
    let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
    let hour = parse_component(hour, localtime)?;
    let minute = parse_component(minute, localtime)?;
    let time = Time::from_hms(hour, minute, 0).map_err(|_| invalid())?;
    Ok(PrimitiveDateTime::new(date, time))
}

/// Whether the body is above the horizon: rise and set labels are combined
/// with the forecast date (both on the same calendar day, the provider never
/// hands out cross-midnight windows) and the local instant is tested against
/// the inclusive window.
pub fn is_up(localtime: &str, date: &str, rise: &str, set: &str) -> Result<bool, AstroError> {
    let local = parse_local(localtime)?;
    let day = parse_date(date)?;
    let rise = PrimitiveDateTime::new(day, parse_clock_12h(rise)?);
    let set = PrimitiveDateTime::new(day, parse_clock_12h(set)?);
    Ok(rise <= local && local <= set)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: &str = "2024-06-01";

    #[test]
    fn up_inside_the_window() {
        assert_eq!(is_up("2024-06-01 12:00", DAY, "06:00 AM", "08:00 PM"), Ok(true));
    }

    #[test]
    fn down_outside_the_window() {
        assert_eq!(is_up("2024-06-01 22:00", DAY, "06:00 AM", "08:00 PM"), Ok(false));
        assert_eq!(is_up("2024-06-01 5:59", DAY, "06:00 AM", "08:00 PM"), Ok(false));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        assert_eq!(is_up("2024-06-01 6:00", DAY, "06:00 AM", "08:00 PM"), Ok(true));
        assert_eq!(is_up("2024-06-01 20:00", DAY, "06:00 AM", "08:00 PM"), Ok(true));
    }

    #[test]
    fn unpadded_local_hour_parses() {
        assert_eq!(is_up("2024-06-01 7:30", DAY, "06:05 AM", "08:45 PM"), Ok(true));
    }

    #[test]
    fn twelve_oclock_conversions() {
        // Midnight and noon are the 12-hour clock's awkward corners.
        assert_eq!(is_up("2024-06-01 0:00", DAY, "12:00 AM", "11:59 PM"), Ok(true));
        assert_eq!(is_up("2024-06-01 12:00", DAY, "11:00 AM", "12:30 PM"), Ok(true));
        assert_eq!(is_up("2024-06-01 12:31", DAY, "11:00 AM", "12:30 PM"), Ok(false));
    }

    #[test]
    fn sentinel_rise_label_is_a_typed_error() {
        assert_eq!(
            is_up("2024-06-01 12:00", DAY, "No moonrise", "08:00 PM"),
            Err(AstroError::InvalidClock("No moonrise".to_string()))
        );
    }

    #[test]
    fn garbage_inputs_fail_explicitly() {
        assert!(is_up("not a time", DAY, "06:00 AM", "08:00 PM").is_err());
        assert!(is_up("2024-06-01 12:00", "June first", "06:00 AM", "08:00 PM").is_err());
        assert!(is_up("2024-06-01 12:00", DAY, "25:00 AM", "08:00 PM").is_err());
        assert!(is_up("2024-06-01 12:00", DAY, "06:00 XM", "08:00 PM").is_err());
    }
}
