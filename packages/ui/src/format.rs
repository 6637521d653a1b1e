use chrono::{DateTime, Local, TimeZone, Utc};

/// pt-BR short date and time in the browser's time zone, e.g. `05/03/2025, 14:07`.
pub fn format_datetime(at: &DateTime<Utc>) -> String {
    format_datetime_in(at, &Local)
}

pub fn format_datetime_in<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%d/%m/%Y, %H:%M").to_string()
}

/// Progress as shown next to the bar: at most two decimals, no trailing zeros.
pub fn format_percent(progress: f64) -> String {
    let rounded = (progress * 100.0).round() / 100.0;
    format!("{rounded}%")
}
