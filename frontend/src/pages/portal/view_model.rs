use super::utils::{HistoryFilter, PunchKind, PunchReceipt, HISTORY_STEP};
use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, LogQuery, UserProfile},
    config,
    state::{
        attendance::{check_in, check_out, load_logs, use_attendance, AttendanceState, FetchGeneration},
        auth::use_auth,
    },
    utils::time::{current_time_string, today_in_app_tz},
};
use leptos::*;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct PortalViewModel {
    pub user: Memo<Option<UserProfile>>,
    pub attendance: ReadSignal<AttendanceState>,
    pub filter: RwSignal<HistoryFilter>,
    pub show_filter: RwSignal<bool>,
    pub shown: RwSignal<usize>,
    pub filtered: Memo<Vec<AttendanceRecord>>,
    pub pending: RwSignal<Option<PunchKind>>,
    pub clock: RwSignal<String>,
    pub receipt: RwSignal<Option<PunchReceipt>>,
    pub punch_action: Action<PunchKind, Result<(), ApiError>>,
    set_attendance: WriteSignal<AttendanceState>,
    api: StoredValue<ApiClient>,
    generation: StoredValue<FetchGeneration>,
}

fn employee_id_of(user: Memo<Option<UserProfile>>) -> Option<String> {
    user.with_untracked(|user| user.as_ref().map(|u| u.employee_id.clone()))
        .filter(|id| !id.trim().is_empty())
}

fn reload(
    api: StoredValue<ApiClient>,
    generation: StoredValue<FetchGeneration>,
    set_attendance: WriteSignal<AttendanceState>,
    employee_id: &str,
) -> impl Future<Output = Result<(), ApiError>> {
    let api = api.get_value();
    generation.with_value(|generation| {
        load_logs(
            &api,
            set_attendance,
            generation,
            LogQuery::for_employee(employee_id),
            today_in_app_tz(),
            config::current_time_zone(),
        )
    })
}

impl PortalViewModel {
    pub fn loading(&self) -> Signal<bool> {
        let attendance = self.attendance;
        Signal::derive(move || attendance.with(|state| state.loading))
    }

    pub fn submitting(&self) -> Signal<bool> {
        let (attendance, action) = (self.attendance, self.punch_action);
        Signal::derive(move || {
            attendance.with(|state| state.submitting) || action.pending().get()
        })
    }

    /// Refetches the signed-in employee's logs; a stale response is dropped.
    pub fn refresh(&self) {
        let Some(employee_id) = employee_id_of(self.user) else {
            log::warn!("skipping attendance refresh without a signed-in employee");
            return;
        };
        let fut = reload(self.api, self.generation, self.set_attendance, &employee_id);
        spawn_local(async move {
            let _ = fut.await;
        });
    }

    pub fn visible_records(&self) -> Signal<Vec<AttendanceRecord>> {
        let (filtered, shown) = (self.filtered, self.shown);
        Signal::derive(move || {
            filtered.with(|records| records.iter().take(shown.get()).cloned().collect())
        })
    }

    pub fn load_more(&self) {
        self.shown.update(|shown| *shown += HISTORY_STEP);
    }

    pub fn set_filter_start(&self, value: String) {
        self.filter.update(|filter| filter.start = value);
        self.shown.set(HISTORY_STEP);
    }

    pub fn set_filter_end(&self, value: String) {
        self.filter.update(|filter| filter.end = value);
        self.shown.set(HISTORY_STEP);
    }

    pub fn clear_filter(&self) {
        self.filter.set(HistoryFilter::default());
        self.shown.set(HISTORY_STEP);
    }

    pub fn toggle_filter(&self) {
        self.show_filter.update(|open| *open = !*open);
    }

    pub fn open_confirm(&self, kind: PunchKind) {
        self.clock.set(current_time_string());
        self.pending.set(Some(kind));
    }

    pub fn cancel_confirm(&self) {
        self.pending.set(None);
    }

    pub fn confirm(&self) {
        if let Some(kind) = self.pending.get_untracked() {
            self.pending.set(None);
            self.punch_action.dispatch(kind);
        }
    }

    pub fn close_receipt(&self) {
        self.receipt.set(None);
    }
}

pub fn use_portal_view_model() -> PortalViewModel {
    let (auth, _) = use_auth();
    let user = create_memo(move |_| auth.with(|state| state.user.clone()));
    let api = store_value(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let generation = store_value(FetchGeneration::default());
    let (attendance, set_attendance) = use_attendance();
    let filter = create_rw_signal(HistoryFilter::default());
    let receipt = create_rw_signal(None::<PunchReceipt>);

    let filtered = create_memo(move |_| {
        let tz = config::current_time_zone();
        filter.with(|filter| attendance.with(|state| filter.apply(&state.records, tz)))
    });

    let punch_action = create_action(move |kind: &PunchKind| {
        let kind = *kind;
        let employee_id = employee_id_of(user);
        let today = attendance.with_untracked(|state| state.today.clone());
        async move {
            let Some(employee_id) = employee_id else {
                return Err(ApiError::unauthorized("Sesi tidak ditemukan"));
            };
            let client = api.get_value();
            match kind {
                PunchKind::CheckIn => check_in(&client, set_attendance, &employee_id).await?,
                PunchKind::CheckOut => {
                    check_out(&client, set_attendance, &employee_id, &today).await?
                }
            }
            log::info!("{} recorded for {employee_id}", kind.label());
            let _ = receipt.try_set(Some(PunchReceipt::new(
                kind,
                current_time_string(),
                today_in_app_tz(),
            )));
            // The refetch failure is logged by `load_logs`; the punch itself succeeded.
            let _ = reload(api, generation, set_attendance, &employee_id).await;
            Ok(())
        }
    });

    let vm = PortalViewModel {
        user,
        attendance,
        filter,
        show_filter: create_rw_signal(false),
        shown: create_rw_signal(HISTORY_STEP),
        filtered,
        pending: create_rw_signal(None),
        clock: create_rw_signal(current_time_string()),
        receipt,
        punch_action,
        set_attendance,
        api,
        generation,
    };

    create_effect(move |_| {
        if user.with(|user| user.is_some()) {
            vm.refresh();
        }
    });

    vm
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::attendance::TodayState;
    use crate::test_support::helpers::{employee_user, provide_auth};
    use crate::test_support::ssr::{wait_until, with_local_runtime, with_local_runtime_async, with_runtime};
    use crate::utils::{storage::MemorySessionStore, token::encode_test_token};
    use crate::utils::time::iso_date;
    use serde_json::json;
    use std::rc::Rc;

    fn provide_api(server: &MockServer) {
        let token = encode_test_token(json!({ "exp": chrono::Utc::now().timestamp() + 600 }));
        provide_context(ApiClient::with_store(
            Some(server.url("/api")),
            Rc::new(MemorySessionStore::with_session(&token, None)),
        ));
    }

    fn today_log(clock_in: Option<&str>) -> serde_json::Value {
        let today = iso_date(today_in_app_tz());
        json!({
            "attendance_id": "att-1",
            "employee_name": "Budi Santoso",
            "departement_name": "IT",
            "date_attendance": format!("{today}T00:00:00"),
            "clock_in": clock_in.map(|time| format!("{today}T{time}")),
            "clock_out": null,
            "max_clock_in_time": "08:00:00",
            "max_clock_out_time": "17:00:00"
        })
    }

    #[test]
    fn paging_and_filter_reset_window() {
        with_local_runtime(|| {
            with_runtime(|| {
                provide_auth(Some(employee_user()));
                let vm = use_portal_view_model();
                assert_eq!(vm.shown.get_untracked(), HISTORY_STEP);
                vm.load_more();
                assert_eq!(vm.shown.get_untracked(), 2 * HISTORY_STEP);
                vm.set_filter_start("2025-01-01".into());
                assert_eq!(vm.shown.get_untracked(), HISTORY_STEP);
                assert!(vm.filter.get_untracked().is_active());
                vm.clear_filter();
                assert_eq!(vm.filter.get_untracked(), HistoryFilter::default());
                vm.toggle_filter();
                assert!(vm.show_filter.get_untracked());
            });
        });
    }

    #[test]
    fn cancel_leaves_state_untouched() {
        with_local_runtime(|| {
            with_runtime(|| {
                provide_auth(Some(employee_user()));
                let vm = use_portal_view_model();
                vm.open_confirm(PunchKind::CheckIn);
                assert_eq!(vm.pending.get_untracked(), Some(PunchKind::CheckIn));
                assert_eq!(vm.clock.get_untracked().len(), 8);
                vm.cancel_confirm();
                assert_eq!(vm.pending.get_untracked(), None);
                vm.confirm();
                assert!(vm.punch_action.value().get_untracked().is_none());
            });
        });
    }

    #[test]
    fn confirmed_check_in_shows_receipt_and_refetches() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(POST).path("/api/attendance/clock-in/");
                then.status(201).json_body(json!({ "message": "ok" }));
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance/logs");
                then.status(200).json_body(json!([today_log(Some("08:05:00"))]));
            });
            provide_api(&server);
            provide_auth(Some(employee_user()));
            let vm = use_portal_view_model();

            vm.open_confirm(PunchKind::CheckIn);
            vm.confirm();
            assert!(
                wait_until(|| vm.receipt.get_untracked().is_some()).await,
                "receipt should appear"
            );
            assert!(
                wait_until(|| !vm.attendance.get_untracked().records.is_empty()).await,
                "logs should reload"
            );
            let receipt = vm.receipt.get_untracked().unwrap();
            assert_eq!(receipt.kind, PunchKind::CheckIn);
            let state = vm.attendance.get_untracked();
            assert_eq!(state.today.state, TodayState::CheckOut);
            assert!(state.today.can_check_out());

            let clock_in = server
                .received()
                .into_iter()
                .find(|req| req.path == "/api/attendance/clock-in/")
                .unwrap();
            assert_eq!(clock_in.body, Some(json!({ "employee_id": "EMP-001" })));
            let logs = server
                .received()
                .into_iter()
                .find(|req| req.path == "/api/attendance/logs")
                .unwrap();
            assert!(logs.query.unwrap_or_default().contains("employee_id=EMP-001"));

            vm.close_receipt();
            assert!(vm.receipt.get_untracked().is_none());
            runtime.dispose();
        });
    }

    #[test]
    fn failed_check_in_shows_no_receipt() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(POST).path("/api/attendance/clock-in/");
                then.status(400).json_body(json!({ "error": "Sudah check-in" }));
            });
            provide_api(&server);
            provide_auth(Some(employee_user()));
            let vm = use_portal_view_model();

            vm.open_confirm(PunchKind::CheckIn);
            vm.confirm();
            assert!(
                wait_until(|| vm.punch_action.value().get_untracked().is_some()).await,
                "action should settle"
            );
            let err = vm.punch_action.value().get_untracked().unwrap().unwrap_err();
            assert_eq!(err.error, "Sudah check-in");
            assert!(vm.receipt.get_untracked().is_none());
            assert_eq!(vm.attendance.get_untracked().today.state, TodayState::CheckIn);
            runtime.dispose();
        });
    }

    #[test]
    fn history_filter_narrows_fetched_records() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance/logs");
                then.status(200).json_body(json!([
                    today_log(Some("08:00:00")),
                    {
                        "attendance_id": "old",
                        "employee_name": "Budi Santoso",
                        "departement_name": "IT",
                        "date_attendance": "2020-05-01T00:00:00",
                        "clock_in": "2020-05-01T07:55:00",
                        "clock_out": "2020-05-01T17:05:00",
                        "max_clock_in_time": "08:00:00",
                        "max_clock_out_time": "17:00:00"
                    }
                ]));
            });
            provide_api(&server);
            provide_auth(Some(employee_user()));
            let vm = use_portal_view_model();
            vm.refresh();
            assert!(
                wait_until(|| vm.attendance.get_untracked().records.len() == 2).await,
                "logs should load"
            );
            assert_eq!(vm.filtered.get_untracked().len(), 2);

            vm.set_filter_start("2020-05-01".into());
            vm.set_filter_end("2020-05-01".into());
            let ids: Vec<_> = vm
                .filtered
                .get_untracked()
                .into_iter()
                .map(|r| r.attendance_id)
                .collect();
            assert_eq!(ids, vec!["old"]);
            assert_eq!(vm.visible_records().get_untracked().len(), 1);
            runtime.dispose();
        });
    }
}
