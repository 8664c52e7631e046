use crate::api::{ApiClient, ApiError, AttendanceRecord, LogQuery};
use crate::utils::time::parse_date;
use chrono::NaiveDate;
use chrono_tz::Tz;
use leptos::*;
use std::{cell::Cell, future::Future, rc::Rc};

/// Where the employee stands for the current calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodayState {
    #[default]
    CheckIn,
    CheckOut,
    Done,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodayContext {
    pub state: TodayState,
    pub attendance_id: Option<String>,
}

impl TodayContext {
    pub fn can_check_in(&self) -> bool {
        self.state == TodayState::CheckIn
    }

    /// Check-out needs today's record id; without it the control stays disabled.
    pub fn can_check_out(&self) -> bool {
        self.state == TodayState::CheckOut && self.attendance_id.is_some()
    }

    fn after_check_in(&self) -> Self {
        Self {
            state: TodayState::CheckOut,
            attendance_id: self.attendance_id.clone(),
        }
    }

    fn after_check_out(&self) -> Self {
        Self {
            state: TodayState::Done,
            attendance_id: self.attendance_id.clone(),
        }
    }
}

/// Calendar day a record belongs to, falling back to its clock-in.
pub fn record_date(record: &AttendanceRecord, tz: Tz) -> Option<NaiveDate> {
    parse_date(&record.date_attendance, tz)
        .or_else(|| record.clock_in.as_deref().and_then(|c| parse_date(c, tz)))
}

pub fn find_today_record(
    records: &[AttendanceRecord],
    today: NaiveDate,
    tz: Tz,
) -> Option<&AttendanceRecord> {
    records
        .iter()
        .find(|record| record_date(record, tz) == Some(today))
}

/// Derives the day's check-in/check-out state from the fetched records.
pub fn derive_today_state(records: &[AttendanceRecord], today: NaiveDate, tz: Tz) -> TodayContext {
    let Some(record) = find_today_record(records, today, tz) else {
        return TodayContext::default();
    };
    let state = match (record.clock_in.is_some(), record.clock_out.is_some()) {
        (false, false) => TodayState::CheckIn,
        (true, false) => TodayState::CheckOut,
        // A clock-out always closes the day, even if the clock-in is missing.
        (_, true) => TodayState::Done,
    };
    TodayContext {
        state,
        attendance_id: Some(record.attendance_id.clone()).filter(|id| !id.trim().is_empty()),
    }
}

/// Monotonic fetch counter; only the newest request may write its result.
#[derive(Debug, Clone, Default)]
pub struct FetchGeneration(Rc<Cell<u64>>);

impl FetchGeneration {
    pub fn begin(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}

#[derive(Debug, Clone, Default)]
pub struct AttendanceState {
    pub records: Vec<AttendanceRecord>,
    pub today: TodayContext,
    pub loading: bool,
    pub submitting: bool,
    pub last_error: Option<ApiError>,
}

impl AttendanceState {
    pub fn replace_records(&mut self, records: Vec<AttendanceRecord>, today: NaiveDate, tz: Tz) {
        self.today = derive_today_state(&records, today, tz);
        self.records = records;
        self.loading = false;
        self.last_error = None;
    }
}

pub fn use_attendance() -> (ReadSignal<AttendanceState>, WriteSignal<AttendanceState>) {
    create_signal(AttendanceState::default())
}

/// Claims a fetch generation at call time; the returned future only writes
/// its result if no later call has claimed a newer one.
pub fn load_logs(
    api: &ApiClient,
    set_state: WriteSignal<AttendanceState>,
    generation: &FetchGeneration,
    query: LogQuery,
    today: NaiveDate,
    tz: Tz,
) -> impl Future<Output = Result<(), ApiError>> {
    let token = generation.begin();
    let generation = generation.clone();
    let api = api.clone();
    set_state.update(|state| state.loading = true);

    async move {
        let result = api.list_attendance_logs(&query).await;
        if !generation.is_current(token) {
            log::debug!("dropping superseded attendance response #{token}");
            return Ok(());
        }
        match result {
            Ok(records) => {
                set_state.update(|state| state.replace_records(records, today, tz));
                Ok(())
            }
            Err(err) => {
                log::error!("failed to load attendance logs: {err}");
                set_state.update(|state| {
                    state.loading = false;
                    state.last_error = Some(err.clone());
                });
                Err(err)
            }
        }
    }
}

pub async fn check_in(
    api: &ApiClient,
    set_state: WriteSignal<AttendanceState>,
    employee_id: &str,
) -> Result<(), ApiError> {
    set_state.update(|state| state.submitting = true);
    let result = api.clock_in(employee_id).await;
    set_state.update(|state| {
        state.submitting = false;
        match &result {
            Ok(()) => state.today = state.today.after_check_in(),
            Err(err) => state.last_error = Some(err.clone()),
        }
    });
    if let Err(err) = &result {
        log::error!("check-in failed for {employee_id}: {err}");
    }
    result
}

pub async fn check_out(
    api: &ApiClient,
    set_state: WriteSignal<AttendanceState>,
    employee_id: &str,
    today: &TodayContext,
) -> Result<(), ApiError> {
    let Some(attendance_id) = today.attendance_id.as_deref().filter(|_| today.can_check_out())
    else {
        return Err(ApiError::validation("No attendance record to check out from"));
    };
    set_state.update(|state| state.submitting = true);
    let result = api.clock_out(employee_id, attendance_id).await;
    set_state.update(|state| {
        state.submitting = false;
        match &result {
            Ok(()) => state.today = state.today.after_check_out(),
            Err(err) => state.last_error = Some(err.clone()),
        }
    });
    if let Err(err) = &result {
        log::error!("check-out failed for {employee_id}: {err}");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::record;
    use chrono_tz::Asia::Jakarta;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
    }

    #[test]
    fn no_record_today_means_check_in() {
        let records = vec![record(
            "old",
            "2025-01-01T00:00:00",
            Some("2025-01-01T08:00:00"),
            Some("2025-01-01T17:00:00"),
        )];
        let ctx = derive_today_state(&records, today(), Jakarta);
        assert_eq!(ctx, TodayContext::default());
        assert!(ctx.can_check_in());
        assert!(derive_today_state(&[], today(), Jakarta).can_check_in());
    }

    #[test]
    fn empty_record_today_means_check_in_with_id() {
        let records = vec![record("a1", "2025-01-02", None, None)];
        let ctx = derive_today_state(&records, today(), Jakarta);
        assert_eq!(ctx.state, TodayState::CheckIn);
        assert_eq!(ctx.attendance_id.as_deref(), Some("a1"));
    }

    #[test]
    fn clocked_in_today_means_check_out() {
        let records = vec![record("a1", "2025-01-02T00:00:00", Some("2025-01-02T08:05:00"), None)];
        let ctx = derive_today_state(&records, today(), Jakarta);
        assert_eq!(ctx.state, TodayState::CheckOut);
        assert!(ctx.can_check_out());
    }

    #[test]
    fn both_clocks_today_means_done() {
        let records = vec![record(
            "a1",
            "2025-01-02T00:00:00",
            Some("2025-01-02T08:00:00"),
            Some("2025-01-02T17:00:00"),
        )];
        let ctx = derive_today_state(&records, today(), Jakarta);
        assert_eq!(ctx.state, TodayState::Done);
        assert!(!ctx.can_check_in());
        assert!(!ctx.can_check_out());
    }

    #[test]
    fn clock_out_without_clock_in_is_done() {
        let records = vec![record("a1", "2025-01-02", None, Some("2025-01-02T17:00:00"))];
        assert_eq!(derive_today_state(&records, today(), Jakarta).state, TodayState::Done);
    }

    #[test]
    fn today_is_taken_in_the_organization_zone() {
        // 2025-01-01T18:00Z is already 2025-01-02 01:00 in Jakarta.
        let records = vec![record("late-night", "2025-01-01T18:00:00Z", Some("2025-01-01T18:00:00Z"), None)];
        let ctx = derive_today_state(&records, today(), Jakarta);
        assert_eq!(ctx.state, TodayState::CheckOut);
        assert!(derive_today_state(&records, today(), chrono_tz::UTC).can_check_in());
    }

    #[test]
    fn check_out_is_blocked_without_attendance_id() {
        let ctx = TodayContext {
            state: TodayState::CheckOut,
            attendance_id: None,
        };
        assert!(!ctx.can_check_out());
        let records = vec![record("  ", "2025-01-02", Some("2025-01-02T08:00:00"), None)];
        assert!(!derive_today_state(&records, today(), Jakarta).can_check_out());
    }

    #[test]
    fn transitions_only_move_forward() {
        let ctx = TodayContext::default().after_check_in();
        assert_eq!(ctx.state, TodayState::CheckOut);
        assert_eq!(ctx.after_check_out().state, TodayState::Done);
    }

    #[test]
    fn generation_tracks_latest_request() {
        let generation = FetchGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        let shared = generation.clone();
        let third = shared.begin();
        assert!(!generation.is_current(second));
        assert!(generation.is_current(third));
    }

    #[test]
    fn replace_records_resets_error_and_rederives() {
        let mut state = AttendanceState {
            loading: true,
            last_error: Some(ApiError::unknown("boom")),
            ..AttendanceState::default()
        };
        state.replace_records(
            vec![record("a1", "2025-01-02", Some("2025-01-02T08:00:00"), None)],
            today(),
            Jakarta,
        );
        assert!(!state.loading);
        assert!(state.last_error.is_none());
        assert_eq!(state.today.state, TodayState::CheckOut);
        assert_eq!(state.records.len(), 1);
    }
}
