use super::{
    components::form::DepartementFormModal,
    utils::{departements_csv, short_time},
    view_model::{use_departements_view_model, DepartementsViewModel},
};
use crate::{
    api::Departement,
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::ConfirmDialog,
        data_grid::{Column, DataTable, GridConfig, SortCycle},
        layout::{ErrorMessage, SuccessMessage},
    },
    utils::download::download_csv_or_log,
};
use leptos::*;

fn columns(vm: DepartementsViewModel) -> Vec<Column<Departement>> {
    vec![
        Column::text("departement_name", "Departement Name", |row: &Departement| {
            row.departement_name.clone()
        })
        .sortable(SortCycle::Toggle),
        Column::text("max_clock_in_time", "Max Clock In Time", |row: &Departement| {
            short_time(&row.max_clock_in_time)
        })
        .sortable(SortCycle::Toggle),
        Column::text("max_clock_out_time", "Max Clock Out Time", |row: &Departement| {
            short_time(&row.max_clock_out_time)
        })
        .sortable(SortCycle::Toggle),
        Column::display("actions", "Actions").with_cell(move |row: &Departement| {
            let for_edit = row.clone();
            let for_delete = row.clone();
            view! {
                <div class="flex gap-2">
                    <Button
                        variant=ButtonVariant::Outline
                        on:click=move |_| vm.open_edit(&for_edit)
                    >
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

fn grid_config() -> GridConfig<Departement> {
    GridConfig::new(|row: &Departement| row.id.to_string())
        .title("Data Departement")
        .description("Daftar semua departement yang ada di perusahaan")
        .on_export(Callback::new(|rows: Vec<Departement>| {
            download_csv_or_log("departements.csv", &departements_csv(&rows));
        }))
}

#[component]
pub fn AdminDepartementsPage() -> impl IntoView {
    let vm = use_departements_view_model();
    let rows = Signal::derive(move || vm.rows.get());
    let deleting = Signal::derive(move || vm.delete_action.pending().get());
    let saving = Signal::derive(move || vm.save_action.pending().get());

    view! {
        <div class="flex w-full flex-col gap-4 p-6 lg:p-10">
            {move || {
                vm.messages
                    .with(|m| m.success.clone())
                    .map(|message| view! { <SuccessMessage message=message /> })
            }}
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
                    <Button on:click=move |_| vm.open_add()>"+ Add Departement"</Button>
                }
                .into_view()
            />
            <DepartementFormModal
                form=vm.form
                error=vm.form_error
                saving=saving
                on_submit=Callback::new(move |_| vm.submit_form())
                on_close=Callback::new(move |_| vm.close_form())
            />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Confirm Deletion"
                message="Are you sure you want to delete this departement?"
                confirm_label="Delete"
                cancel_label="Cancel"
                confirm_disabled=deleting
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </div>
    }
}
