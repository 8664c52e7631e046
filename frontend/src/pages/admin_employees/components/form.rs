use crate::{
    api::Departement,
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::Modal,
    },
    pages::admin_employees::utils::EmployeeForm,
};
use leptos::ev::SubmitEvent;
use leptos::*;

const INPUT_CLASS: &str = "w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-form-control-text disabled:opacity-60";

fn set_field(
    form: RwSignal<Option<EmployeeForm>>,
    value: String,
    apply: impl FnOnce(&mut EmployeeForm, String),
) {
    form.update(|form| {
        if let Some(form) = form.as_mut() {
            apply(form, value);
        }
    });
}

fn read_field(form: RwSignal<Option<EmployeeForm>>, read: impl Fn(&EmployeeForm) -> String) -> String {
    form.with(|form| form.as_ref().map(read)).unwrap_or_default()
}

#[component]
pub fn EmployeeFormModal(
    form: RwSignal<Option<EmployeeForm>>,
    error: RwSignal<Option<String>>,
    #[prop(into)] departements: Signal<Vec<Departement>>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || form.with(Option::is_some));
    let is_edit = move || form.with(|form| form.as_ref().is_some_and(EmployeeForm::is_edit));
    let title = Signal::derive(move || read_field(form, |form| form.title().to_string()));
    let selected_departement = move || read_field(form, |form| form.departement_id.clone());

    view! {
        <Modal is_open=is_open title=title on_close=on_close>
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <p class="text-sm text-fg-muted">
                    {move || read_field(form, |form| form.description().to_string())}
                </p>
                <div class="grid gap-2">
                    <label for="employee_id" class="text-sm font-medium text-fg">"Employee ID"</label>
                    <input
                        id="employee_id"
                        name="employee_id"
                        class=INPUT_CLASS
                        required
                        disabled=is_edit
                        prop:value=move || read_field(form, |form| form.employee_id.clone())
                        on:input=move |ev| set_field(form, event_target_value(&ev), |form, value| form.employee_id = value)
                    />
                </div>
                <div class="grid gap-2">
                    <label for="name" class="text-sm font-medium text-fg">"Name"</label>
                    <input
                        id="name"
                        name="name"
                        class=INPUT_CLASS
                        required
                        prop:value=move || read_field(form, |form| form.name.clone())
                        on:input=move |ev| set_field(form, event_target_value(&ev), |form, value| form.name = value)
                    />
                </div>
                <div class="grid gap-2">
                    <label for="address" class="text-sm font-medium text-fg">"Address"</label>
                    <input
                        id="address"
                        name="address"
                        class=INPUT_CLASS
                        required
                        prop:value=move || read_field(form, |form| form.address.clone())
                        on:input=move |ev| set_field(form, event_target_value(&ev), |form, value| form.address = value)
                    />
                </div>
                <div class="grid gap-2">
                    <label for="departement_id" class="text-sm font-medium text-fg">"Department"</label>
                    <select
                        id="departement_id"
                        name="departement_id"
                        class=INPUT_CLASS
                        required
                        on:change=move |ev| set_field(form, event_target_value(&ev), |form, value| form.departement_id = value)
                    >
                        <option value="" selected=move || selected_departement().is_empty()>
                            "Select a department"
                        </option>
                        <For
                            each=move || departements.get()
                            key=|departement| departement.id
                            children=move |departement| {
                                let id = departement.id.to_string();
                                let matches = id.clone();
                                view! {
                                    <option value=id selected=move || selected_departement() == matches>
                                        {departement.departement_name}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>
                <Show when=move || error.with(Option::is_some)>
                    <p class="text-sm text-status-error-text" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class=format!("inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold {}", ButtonVariant::Outline.classes())
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </button>
                    <Button loading=saving>
                        {move || read_field(form, |form| form.submit_label().to_string())}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
