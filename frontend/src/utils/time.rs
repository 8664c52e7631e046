use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::config;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

/// Parses a server timestamp into `tz`.
///
/// Offset-carrying values (RFC 3339) are converted; naive values are taken as
/// wall-clock time in `tz`, and a bare date as local midnight.
pub fn parse_timestamp(raw: &str, tz: Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&tz));
    }
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;
    tz.from_local_datetime(&naive).earliest()
}

/// Calendar date of a timestamp in `tz`.
pub fn parse_date(raw: &str, tz: Tz) -> Option<NaiveDate> {
    parse_timestamp(raw, tz).map(|dt| dt.date_naive())
}

/// `"DD Mon YYYY, HH"`, or `"-"` when absent or unparseable.
pub fn format_date_in(raw: Option<&str>, tz: Tz) -> String {
    raw.and_then(|value| parse_timestamp(value, tz))
        .map(|dt| dt.format("%d %b %Y, %H").to_string())
        .unwrap_or_else(|| "-".into())
}

/// `"HH:MM"` 24-hour, or `"-"` when absent or unparseable.
pub fn format_time_in(raw: Option<&str>, tz: Tz) -> String {
    raw.and_then(|value| parse_timestamp(value, tz))
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".into())
}

pub fn format_date(raw: Option<&str>) -> String {
    format_date_in(raw, app_time_zone())
}

pub fn format_time(raw: Option<&str>) -> String {
    format_time_in(raw, app_time_zone())
}

/// Long form used on the portal, e.g. `"Thursday, 02 January 2025"`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %d %B %Y").to_string()
}

pub fn clock_string(now: &DateTime<Tz>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Live `HH:MM:SS` for display only.
pub fn current_time_string() -> String {
    clock_string(&now_in_app_tz())
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    }
}

pub fn current_greeting() -> &'static str {
    greeting_for_hour(now_in_app_tz().hour())
}

/// Sunday to Saturday week containing `today`.
pub fn week_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(today.weekday().num_days_from_sunday());
    let start = today - Duration::days(offset);
    (start, start + Duration::days(6))
}

pub fn month_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.with_day(1).unwrap_or(today);
    let next_month = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    };
    let end = next_month
        .and_then(|d| d.pred_opt())
        .unwrap_or(today);
    (start, end)
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
