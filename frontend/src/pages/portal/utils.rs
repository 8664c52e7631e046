use crate::{
    api::{AttendanceRecord, UserProfile},
    state::attendance::{record_date, TodayContext, TodayState},
    utils::{status::parse_deadline, time::format_long_date, time::format_time_in},
};
use chrono::NaiveDate;
use chrono_tz::Tz;

pub const HISTORY_STEP: usize = 10;
pub const DEFAULT_SCHEDULE_IN: &str = "08:00";
pub const DEFAULT_SCHEDULE_OUT: &str = "17:00";
pub const NOT_RECORDED: &str = "Not recorded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchKind {
    CheckIn,
    CheckOut,
}

impl PunchKind {
    pub fn label(self) -> &'static str {
        match self {
            PunchKind::CheckIn => "Check-in",
            PunchKind::CheckOut => "Check-out",
        }
    }

    pub fn confirm_title(self) -> String {
        format!("Konfirmasi {}", self.label())
    }

    pub fn confirm_message(self, time: &str) -> String {
        format!(
            "Apakah Anda yakin ingin {} pada pukul {time}?",
            self.label().to_lowercase()
        )
    }

    pub fn success_title(self) -> &'static str {
        match self {
            PunchKind::CheckIn => "Check In Successful!",
            PunchKind::CheckOut => "Check Out Successful!",
        }
    }

    pub fn success_lead(self) -> &'static str {
        match self {
            PunchKind::CheckIn => "You have successfully checked in at:",
            PunchKind::CheckOut => "You have successfully checked out at:",
        }
    }
}

/// What the schedule card offers for today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchControl {
    Completed,
    Ready { kind: PunchKind, enabled: bool },
}

pub fn punch_control(today: &TodayContext) -> PunchControl {
    match today.state {
        TodayState::Done => PunchControl::Completed,
        TodayState::CheckIn => PunchControl::Ready {
            kind: PunchKind::CheckIn,
            enabled: today.can_check_in(),
        },
        TodayState::CheckOut => PunchControl::Ready {
            kind: PunchKind::CheckOut,
            enabled: today.can_check_out(),
        },
    }
}

/// Shown after a successful punch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchReceipt {
    pub kind: PunchKind,
    pub time: String,
    pub date: String,
}

impl PunchReceipt {
    pub fn new(kind: PunchKind, time: String, today: NaiveDate) -> Self {
        Self {
            kind,
            time,
            date: format_long_date(today),
        }
    }
}

fn hhmm(raw: Option<&str>, fallback: &str) -> String {
    raw.and_then(|value| parse_deadline(value).ok())
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// `"08:00 - 17:00"` from the user's deadlines, defaulting missing ones.
pub fn schedule_label(user: Option<&UserProfile>) -> String {
    let clock_in = user.and_then(|u| u.max_clock_in_time.as_deref());
    let clock_out = user.and_then(|u| u.max_clock_out_time.as_deref());
    format!(
        "{} - {}",
        hhmm(clock_in, DEFAULT_SCHEDULE_IN),
        hhmm(clock_out, DEFAULT_SCHEDULE_OUT)
    )
}

pub fn today_short(today: NaiveDate) -> String {
    today.format("%a, %d %b").to_string()
}

/// Client-side bounds over already fetched records; both ends inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub start: String,
    pub end: String,
}

fn bound(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

impl HistoryFilter {
    pub fn is_active(&self) -> bool {
        bound(&self.start).is_some() || bound(&self.end).is_some()
    }

    pub fn matches(&self, record: &AttendanceRecord, tz: Tz) -> bool {
        let (start, end) = (bound(&self.start), bound(&self.end));
        if start.is_none() && end.is_none() {
            return true;
        }
        let Some(day) = record_date(record, tz) else {
            return false;
        };
        start.map_or(true, |s| day >= s) && end.map_or(true, |e| day <= e)
    }

    pub fn apply(&self, records: &[AttendanceRecord], tz: Tz) -> Vec<AttendanceRecord> {
        records
            .iter()
            .filter(|record| self.matches(record, tz))
            .cloned()
            .collect()
    }
}

pub fn empty_message(filter_active: bool) -> &'static str {
    if filter_active {
        "No records found for the selected date range. Try adjusting your filters."
    } else {
        "You haven't recorded any attendance yet. Start by checking in!"
    }
}

pub fn record_count_label(count: usize) -> String {
    if count == 1 {
        "1 record found".into()
    } else {
        format!("{count} records found")
    }
}

pub fn remaining(total: usize, shown: usize) -> usize {
    total.saturating_sub(shown)
}

pub fn record_day(record: &AttendanceRecord, tz: Tz) -> String {
    record_date(record, tz)
        .map(format_long_date)
        .unwrap_or_else(|| "-".into())
}

pub fn punch_time(raw: Option<&str>, tz: Tz) -> String {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => format_time_in(Some(value), tz),
        None => NOT_RECORDED.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, record};
    use chrono_tz::Asia::Jakarta;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn control_follows_today_state() {
        assert_eq!(
            punch_control(&TodayContext::default()),
            PunchControl::Ready {
                kind: PunchKind::CheckIn,
                enabled: true
            }
        );
        let checkout = TodayContext {
            state: TodayState::CheckOut,
            attendance_id: Some("a1".into()),
        };
        assert_eq!(
            punch_control(&checkout),
            PunchControl::Ready {
                kind: PunchKind::CheckOut,
                enabled: true
            }
        );
        let orphan = TodayContext {
            state: TodayState::CheckOut,
            attendance_id: None,
        };
        assert_eq!(
            punch_control(&orphan),
            PunchControl::Ready {
                kind: PunchKind::CheckOut,
                enabled: false
            }
        );
        let done = TodayContext {
            state: TodayState::Done,
            attendance_id: Some("a1".into()),
        };
        assert_eq!(punch_control(&done), PunchControl::Completed);
    }

    #[test]
    fn confirmation_texts() {
        assert_eq!(PunchKind::CheckIn.confirm_title(), "Konfirmasi Check-in");
        assert_eq!(
            PunchKind::CheckOut.confirm_message("17:01:02"),
            "Apakah Anda yakin ingin check-out pada pukul 17:01:02?"
        );
        assert_eq!(PunchKind::CheckOut.success_title(), "Check Out Successful!");
    }

    #[test]
    fn schedule_defaults_and_trims_seconds() {
        assert_eq!(schedule_label(None), "08:00 - 17:00");
        let mut user = employee_user();
        user.max_clock_in_time = Some("07:30:00".into());
        user.max_clock_out_time = Some("not a time".into());
        assert_eq!(schedule_label(Some(&user)), "07:30 - 17:00");
    }

    #[test]
    fn filter_bounds_are_inclusive() {
        let records = vec![
            record("a", "2025-01-01", None, None),
            record("b", "2025-01-02", None, None),
            record("c", "2025-01-03", None, None),
            record("d", "", None, None),
        ];
        let filter = HistoryFilter {
            start: "2025-01-02".into(),
            end: "2025-01-03".into(),
        };
        let ids: Vec<_> = filter
            .apply(&records, Jakarta)
            .into_iter()
            .map(|r| r.attendance_id)
            .collect();
        assert_eq!(ids, vec!["b", "c"]);

        let open_end = HistoryFilter {
            start: String::new(),
            end: "2025-01-01".into(),
        };
        assert_eq!(open_end.apply(&records, Jakarta).len(), 1);
        assert_eq!(HistoryFilter::default().apply(&records, Jakarta).len(), 4);
        assert!(!HistoryFilter::default().is_active());
        assert!(open_end.is_active());
    }

    #[test]
    fn empty_text_depends_on_filter() {
        assert!(empty_message(true).contains("selected date range"));
        assert!(empty_message(false).contains("Start by checking in"));
    }

    #[test]
    fn counts_and_paging() {
        assert_eq!(record_count_label(1), "1 record found");
        assert_eq!(record_count_label(12), "12 records found");
        assert_eq!(remaining(25, HISTORY_STEP), 15);
        assert_eq!(remaining(5, HISTORY_STEP), 0);
    }

    #[test]
    fn record_cells() {
        let r = record("a", "2025-01-02T00:00:00", Some("2025-01-02T08:05:00"), None);
        assert_eq!(record_day(&r, Jakarta), "Thursday, 02 January 2025");
        assert_eq!(punch_time(r.clock_in.as_deref(), Jakarta), "08:05");
        assert_eq!(punch_time(r.clock_out.as_deref(), Jakarta), NOT_RECORDED);
        assert_eq!(today_short(date(2025, 1, 2)), "Thu, 02 Jan");
        assert_eq!(
            PunchReceipt::new(PunchKind::CheckIn, "08:05:00".into(), date(2025, 1, 2)).date,
            "Thursday, 02 January 2025"
        );
    }
}
