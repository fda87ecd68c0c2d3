//! Shared formatting utilities for the UI layer.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a `YYYY-MM-DD` date as "Sep 25, 2025".
///
/// Falls back to the input string if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    if date_str.len() < 10 {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month: usize = match date_str[5..7].parse() {
        Ok(m) if (1..=12).contains(&m) => m,
        _ => return date_str.to_string(),
    };
    let day: u32 = match date_str[8..10].parse() {
        Ok(d) => d,
        Err(_) => return date_str.to_string(),
    };
    format!("{} {}, {}", MONTH_NAMES[month - 1], day, year)
}

/// Format an `HH:MM` time as "2:00 PM" (12-hour clock).
///
/// Falls back to the input string if parsing fails.
pub fn format_time_human(time_str: &str) -> String {
    if time_str.len() < 5 {
        return time_str.to_string();
    }
    let hour: u32 = match time_str[..2].parse() {
        Ok(h) if h < 24 => h,
        _ => return time_str.to_string(),
    };
    let minutes = &time_str[3..5];

    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{display_hour}:{minutes} {ampm}")
}
