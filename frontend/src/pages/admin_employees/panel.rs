use super::{
    components::{filter::DepartementFilter, form::EmployeeFormModal},
    utils::{departement_label, detail_path, employees_csv},
    view_model::{use_employees_view_model, EmployeesViewModel},
};
use crate::{
    api::Employee,
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::{ConfirmDialog, Modal},
        data_grid::{Column, DataTable, GridConfig, SortCycle},
        layout::ErrorMessage,
    },
    utils::download::download_csv_or_log,
};
use leptos::*;

fn columns(vm: EmployeesViewModel) -> Vec<Column<Employee>> {
    vec![
        Column::text("employee_id", "ID", |row: &Employee| row.employee_id.clone()),
        Column::text("name", "Name", |row: &Employee| row.name.clone())
            .sortable(SortCycle::Toggle),
        Column::text("address", "Address", |row: &Employee| row.address.clone())
            .sortable(SortCycle::Toggle)
            .with_cell(|row: &Employee| {
                let address = row.address.clone();
                view! {
                    <div class="max-w-xs truncate font-medium" title=address.clone()>
                        {address}
                    </div>
                }
                .into_view()
            }),
        Column::text("departement_name", "Department", departement_label)
            .sortable(SortCycle::Toggle),
        Column::display("actions", "Actions").with_cell(move |row: &Employee| {
            let href = detail_path(&row.employee_id);
            let for_edit = row.clone();
            let for_delete = row.clone();
            view! {
                <div class="flex flex-wrap gap-2">
                    <a
                        href=href
                        class=format!(
                            "inline-flex items-center justify-center rounded-md px-3 py-1.5 text-sm font-semibold {}",
                            ButtonVariant::Primary.classes()
                        )
                    >
                        "View"
                    </a>
                    <Button variant=ButtonVariant::Outline on:click=move |_| vm.open_edit(&for_edit)>
                        "Edit"
                    </Button>
                    <Button
                        variant=ButtonVariant::Destructive
                        on:click=move |_| vm.request_delete(for_delete.clone())
                    >
                        "Delete"
                    </Button>
                </div>
            }
            .into_view()
        }),
    ]
}

fn grid_config() -> GridConfig<Employee> {
    GridConfig::new(|row: &Employee| row.employee_id.clone())
        .title("Data Employee")
        .description("Daftar semua employee sistem")
        .search_placeholder("Cari employee...")
        .on_export(Callback::new(|rows: Vec<Employee>| {
            download_csv_or_log("employees.csv", &employees_csv(&rows));
        }))
}

#[component]
pub fn AdminEmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    let rows = Signal::derive(move || vm.visible_rows.get());
    let departements = Signal::derive(move || vm.departements.get());
    let saving = Signal::derive(move || vm.save_action.pending().get());
    let deleting = Signal::derive(move || vm.delete_action.pending().get());
    let success = Signal::derive(move || vm.messages.with(|m| m.success.clone()));

    view! {
        <div class="w-full overflow-auto p-6 lg:p-10">
            <div class="min-w-[768px] space-y-4">
                {move || {
                    vm.messages
                        .with(|m| m.error.clone())
                        .map(|message| view! { <ErrorMessage message=message /> })
                }}
                <DataTable
                    rows=rows
                    columns=columns(vm)
                    config=grid_config()
                    loading=vm.loading()
                    actions=view! {
                        <div class="flex items-center gap-4">
                            <DepartementFilter departements=departements value=vm.departement_filter />
                            <Button on:click=move |_| vm.open_add()>"+ Add Employee"</Button>
                        </div>
                    }
                    .into_view()
                />
            </div>
            <EmployeeFormModal
                form=vm.form
                error=vm.form_error
                departements=departements
                saving=saving
                on_submit=Callback::new(move |_| vm.submit_form())
                on_close=Callback::new(move |_| vm.close_form())
            />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Confirm Deletion"
                message="Are you sure you want to delete this employee?"
                confirm_label="Delete"
                cancel_label="Cancel"
                confirm_disabled=deleting
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
            <Modal
                is_open=Signal::derive(move || success.with(Option::is_some))
                title="Berhasil"
                on_close=Callback::new(move |_| vm.dismiss_success())
                class="text-center"
            >
                <p class="text-sm text-fg-muted">{move || success.get().unwrap_or_default()}</p>
            </Modal>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::{helpers::employee, ssr::render_to_string};

    #[test]
    fn renders_title_filter_and_add_button() {
        let html = render_to_string(|| {
            provide_context(ApiClient::new_with_base_url("http://localhost/api"));
            view! { <AdminEmployeesPage /> }
        });
        assert!(html.contains("Data Employee"));
        assert!(html.contains("Daftar semua employee sistem"));
        assert!(html.contains("Semua Departement"));
        assert!(html.contains("Add Employee"));
        assert!(!html.contains("Berhasil"));
    }

    #[test]
    fn rows_link_to_detail_and_show_dash_without_departement() {
        let html = render_to_string(|| {
            provide_context(ApiClient::new_with_base_url("http://localhost/api"));
            let vm = use_employees_view_model();
            let rows = Signal::derive(|| vec![employee(1, "EMP-001", "Budi", None)]);
            view! { <DataTable rows=rows columns=columns(vm) config=grid_config() /> }
        });
        assert!(html.contains("href=\"/admin/employee/EMP-001\""));
        assert!(html.contains("View"));
        assert!(html.contains("Budi"));
    }
}
