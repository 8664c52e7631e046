use chrono::NaiveTime;
use chrono_tz::Tz;
use thiserror::Error;

use super::time::parse_timestamp;

/// Punctuality of a single clock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    NotRecorded,
    OnTime,
    Late,
    LeftOnTime,
    LeftEarly,
    /// Deadline or timestamp could not be read; only the server can classify it.
    Unverified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-green-100 text-green-800 border border-green-200",
            BadgeVariant::Secondary => "bg-gray-100 text-gray-700 border border-gray-200",
            BadgeVariant::Destructive => "bg-red-100 text-red-800 border border-red-200",
        }
    }
}

impl AttendanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::NotRecorded => "Belum Absen",
            AttendanceStatus::OnTime => "Tepat Waktu",
            AttendanceStatus::Late => "Terlambat",
            AttendanceStatus::LeftOnTime => "Pulang Tepat Waktu",
            AttendanceStatus::LeftEarly => "Pulang Cepat",
            AttendanceStatus::Unverified => "Perlu Verifikasi",
        }
    }

    pub fn badge_variant(self) -> BadgeVariant {
        match self {
            AttendanceStatus::OnTime | AttendanceStatus::LeftOnTime => BadgeVariant::Default,
            AttendanceStatus::Late | AttendanceStatus::LeftEarly => BadgeVariant::Destructive,
            AttendanceStatus::NotRecorded | AttendanceStatus::Unverified => {
                BadgeVariant::Secondary
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    fn on_time(self) -> AttendanceStatus {
        match self {
            Direction::In => AttendanceStatus::OnTime,
            Direction::Out => AttendanceStatus::LeftOnTime,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeadlineError {
    #[error("deadline is empty")]
    Empty,
    #[error("deadline `{0}` must be HH:MM or HH:MM:SS")]
    Shape(String),
    #[error("deadline component `{0}` is not a number")]
    NotNumeric(String),
    #[error("deadline `{0}` is not a valid time of day")]
    OutOfRange(String),
}

/// Parses `HH:MM:SS`; `HH:MM` is read with zero seconds.
pub fn parse_deadline(raw: &str) -> Result<NaiveTime, DeadlineError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DeadlineError::Empty);
    }
    let parts: Vec<&str> = raw.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(DeadlineError::Shape(raw.to_string()));
    }
    let mut numbers = [0u32; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| DeadlineError::NotNumeric(part.to_string()))?;
    }
    let [hour, minute, second] = numbers;
    NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| DeadlineError::OutOfRange(raw.to_string()))
}

/// Classifies one clock event against its deadline.
///
/// The server flag short-circuits local comparison. Otherwise the deadline is
/// placed on the calendar date of the clock event in `tz`: arriving strictly
/// after it is late, leaving strictly before it is early.
pub fn evaluate(
    clock: Option<&str>,
    deadline: &str,
    on_time: bool,
    direction: Direction,
    tz: Tz,
) -> AttendanceStatus {
    let Some(clock) = clock.map(str::trim).filter(|c| !c.is_empty()) else {
        return AttendanceStatus::NotRecorded;
    };
    if on_time {
        return direction.on_time();
    }
    let Some(actual) = parse_timestamp(clock, tz) else {
        log::warn!("unparseable clock timestamp `{clock}`");
        return AttendanceStatus::Unverified;
    };
    let deadline_time = match parse_deadline(deadline) {
        Ok(time) => time,
        Err(err) => {
            log::warn!("{err}");
            return AttendanceStatus::Unverified;
        }
    };
    let actual = actual.naive_local();
    let limit = actual.date().and_time(deadline_time);
    match direction {
        Direction::In if actual > limit => AttendanceStatus::Late,
        Direction::Out if actual < limit => AttendanceStatus::LeftEarly,
        _ => direction.on_time(),
    }
}
