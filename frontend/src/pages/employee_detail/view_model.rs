use super::{
    repository::EmployeeDetailRepository,
    utils::{DateRange, QuickRange},
};
use crate::{
    api::{ApiClient, ApiError, Employee},
    config,
    state::attendance::{load_logs, use_attendance, AttendanceState, FetchGeneration},
    utils::time::today_in_app_tz,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct EmployeeDetailViewModel {
    pub employee_id: Signal<String>,
    pub employee_resource: Resource<String, Result<Option<Employee>, ApiError>>,
    pub logs: ReadSignal<AttendanceState>,
    pub range: RwSignal<DateRange>,
    pub applied: RwSignal<DateRange>,
    pub filter_error: RwSignal<Option<String>>,
    set_logs: WriteSignal<AttendanceState>,
    repository: StoredValue<EmployeeDetailRepository>,
    generation: StoredValue<FetchGeneration>,
}

impl EmployeeDetailViewModel {
    pub fn filtering(&self) -> Signal<bool> {
        let logs = self.logs;
        Signal::derive(move || logs.with(|state| state.loading))
    }

    /// Refetches logs for `range`; an older in-flight response is discarded.
    pub fn fetch(&self, range: DateRange) {
        let employee_id = self.employee_id.get_untracked();
        if employee_id.trim().is_empty() {
            return;
        }
        let query = range.query(&employee_id);
        self.applied.set(range);
        let fut = self.repository.with_value(|repo| {
            self.generation.with_value(|generation| {
                load_logs(
                    repo.client(),
                    self.set_logs,
                    generation,
                    query,
                    today_in_app_tz(),
                    config::current_time_zone(),
                )
            })
        });
        spawn_local(async move {
            // Failures are logged by `load_logs`; the previous rows stay visible.
            let _ = fut.await;
        });
    }

    pub fn apply_custom(&self) {
        let range = self.range.get_untracked();
        match range.validate() {
            Ok(()) => {
                self.filter_error.set(None);
                self.fetch(range);
            }
            Err(message) => self.filter_error.set(Some(message.to_string())),
        }
    }

    pub fn apply_quick(&self, quick: QuickRange) {
        let range = quick.range(today_in_app_tz());
        self.filter_error.set(None);
        self.range.set(range.clone());
        self.fetch(range);
    }

    pub fn reset(&self) {
        self.filter_error.set(None);
        self.range.set(DateRange::default());
        self.fetch(DateRange::default());
    }
}

pub fn use_employee_detail_view_model(employee_id: Signal<String>) -> EmployeeDetailViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeeDetailRepository::new_with_client(Rc::new(api));

    let repo_for_resource = repository.clone();
    let employee_resource = create_resource(
        move || employee_id.get(),
        move |employee_id| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_employee(&employee_id).await }
        },
    );
    let (logs, set_logs) = use_attendance();

    let vm = EmployeeDetailViewModel {
        employee_id,
        employee_resource,
        logs,
        range: create_rw_signal(DateRange::default()),
        applied: create_rw_signal(DateRange::default()),
        filter_error: create_rw_signal(None),
        set_logs,
        repository: store_value(repository),
        generation: store_value(FetchGeneration::default()),
    };

    // A new employee starts unfiltered.
    create_effect(move |_| {
        if !employee_id.get().is_empty() {
            vm.range.set(DateRange::default());
            vm.fetch(DateRange::default());
        }
    });

    vm
}
