use super::{
    components::{
        columns::attendance_columns,
        filter::DateRangeFilter,
        info::{DetailSkeleton, EmployeeInfoCard, EmployeeNotFound},
    },
    utils::logs_csv,
    view_model::{use_employee_detail_view_model, EmployeeDetailViewModel},
};
use crate::{
    api::{AttendanceRecord, Employee},
    components::{
        common::Badge,
        data_grid::{DataTable, GridConfig},
    },
    config,
    utils::{download::download_csv_or_log, time::today_in_app_tz},
};
use leptos::*;
use leptos_router::use_params_map;

fn grid_config(employee: &Employee) -> GridConfig<AttendanceRecord> {
    let filename = format!("attendance-{}.csv", employee.employee_id);
    GridConfig::new(|r: &AttendanceRecord| r.attendance_id.clone())
        .title("Attendance Records")
        .description(format!("Attendance logs for {}", employee.name))
        .search_placeholder("Filter by date...")
        .empty_message("No attendance records found for the selected period.")
        .on_export(Callback::new(move |rows: Vec<AttendanceRecord>| {
            download_csv_or_log(&filename, &logs_csv(&rows, config::current_time_zone()));
        }))
}

fn loaded_view(vm: EmployeeDetailViewModel, employee: Employee) -> View {
    let tz = config::current_time_zone();
    let records = Signal::derive(move || vm.logs.with(|state| state.records.clone()));
    let record_count = move || vm.logs.with(|state| state.records.len());
    let config = grid_config(&employee);

    view! {
        <div class="flex items-center justify-between">
            <a href="/admin/employee" class="text-sm text-fg-muted hover:text-fg">"← Back"</a>
            <Badge class="text-sm">"Employee Details"</Badge>
        </div>
        <EmployeeInfoCard employee=employee />
        <section class="rounded-lg border border-border bg-surface-elevated p-6 shadow-sm space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-fg">"Attendance Logs"</h2>
                <Badge>{move || format!("{} Records", record_count())}</Badge>
            </div>
            <DateRangeFilter
                range=vm.range
                applied=vm.applied
                error=vm.filter_error
                busy=vm.filtering()
                on_apply=Callback::new(move |_| vm.apply_custom())
                on_quick=Callback::new(move |quick| vm.apply_quick(quick))
                on_reset=Callback::new(move |_| vm.reset())
            />
            <DataTable
                rows=records
                columns=attendance_columns(today_in_app_tz(), tz)
                config=config
                loading=vm.filtering()
            />
        </section>
    }
    .into_view()
}

/// Detail view for one employee id.
#[component]
pub fn EmployeeDetail(#[prop(into)] employee_id: Signal<String>) -> impl IntoView {
    let vm = use_employee_detail_view_model(employee_id);

    view! {
        <div class="container mx-auto p-6 space-y-6">
            {move || match vm.employee_resource.get() {
                None => view! { <DetailSkeleton /> }.into_view(),
                Some(Ok(Some(employee))) => loaded_view(vm, employee),
                Some(Ok(None)) => view! { <EmployeeNotFound /> }.into_view(),
                Some(Err(err)) => {
                    log::error!("failed to load employee: {err}");
                    view! { <EmployeeNotFound /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
pub fn EmployeeDetailPage() -> impl IntoView {
    let params = use_params_map();
    let employee_id = Signal::derive(move || {
        params.with(|params| params.get("employee_id").cloned().unwrap_or_default())
    });
    view! { <EmployeeDetail employee_id=employee_id /> }
}
