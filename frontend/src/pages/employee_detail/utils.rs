use crate::{
    api::{AttendanceRecord, LogQuery},
    state::attendance::record_date,
    utils::{
        csv::build_csv,
        time::{format_time_in, iso_date, month_range, parse_date, week_range},
    },
};
use chrono::NaiveDate;
use chrono_tz::Tz;

pub const EMPTY_RANGE_MESSAGE: &str = "Please select at least one date to filter";

/// Date inputs as typed, `YYYY-MM-DD` or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: iso_date(start),
            end: iso_date(end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.trim().is_empty() && self.end.trim().is_empty()
    }

    /// Active-filter caption; `None` when no bound is set.
    pub fn label(&self) -> Option<String> {
        let start = self.start.trim();
        let end = self.end.trim();
        match (start.is_empty(), end.is_empty()) {
            (false, false) => Some(format!("{start} to {end}")),
            (false, true) => Some(format!("From {start}")),
            (true, false) => Some(format!("Until {end}")),
            (true, true) => None,
        }
    }

    pub fn query(&self, employee_id: &str) -> LogQuery {
        let bound = |value: &str| Some(value.trim().to_string()).filter(|v| !v.is_empty());
        LogQuery::for_employee(employee_id).with_range(bound(&self.start), bound(&self.end))
    }

    /// A custom range needs at least one bound.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.is_empty() {
            Err(EMPTY_RANGE_MESSAGE)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickRange {
    Today,
    ThisWeek,
    ThisMonth,
}

impl QuickRange {
    pub const ALL: [QuickRange; 3] = [QuickRange::Today, QuickRange::ThisWeek, QuickRange::ThisMonth];

    pub fn label(self) -> &'static str {
        match self {
            QuickRange::Today => "Today",
            QuickRange::ThisWeek => "This Week",
            QuickRange::ThisMonth => "This Month",
        }
    }

    pub fn range(self, today: NaiveDate) -> DateRange {
        match self {
            QuickRange::Today => DateRange::between(today, today),
            QuickRange::ThisWeek => {
                let (start, end) = week_range(today);
                DateRange::between(start, end)
            }
            QuickRange::ThisMonth => {
                let (start, end) = month_range(today);
                DateRange::between(start, end)
            }
        }
    }
}

/// Same day rule as the portal's check-in state.
pub fn is_today(record: &AttendanceRecord, today: NaiveDate, tz: Tz) -> bool {
    record_date(record, tz) == Some(today)
}

/// `"Thu, 02 Jan 2025"`, falling back to the raw value.
pub fn format_record_date(raw: &str, tz: Tz) -> String {
    parse_date(raw, tz)
        .map(|date| date.format("%a, %d %b %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn logs_csv(records: &[AttendanceRecord], tz: Tz) -> String {
    build_csv(
        &[
            "Employee Name",
            "Department",
            "Date",
            "Clock In",
            "Clock Out",
            "Clock In Status",
            "Clock Out Status",
        ],
        records.iter().map(|record| {
            vec![
                record.employee_name.clone(),
                record.departement_name.clone(),
                parse_date(&record.date_attendance, tz)
                    .map(iso_date)
                    .unwrap_or_else(|| record.date_attendance.clone()),
                format_time_in(record.clock_in.as_deref(), tz),
                format_time_in(record.clock_out.as_deref(), tz),
                record.clock_in_status(tz).label().to_string(),
                record.clock_out_status(tz).label().to_string(),
            ]
        }),
    )
}
