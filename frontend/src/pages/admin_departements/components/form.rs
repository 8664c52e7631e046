use crate::{
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::Modal,
    },
    pages::admin_departements::utils::DepartementForm,
};
use leptos::ev::SubmitEvent;
use leptos::*;

const INPUT_CLASS: &str = "w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

fn field(
    form: RwSignal<Option<DepartementForm>>,
    read: fn(&DepartementForm) -> &String,
) -> impl Fn() -> String + Copy {
    move || {
        form.with(|form| form.as_ref().map(|form| read(form).clone()))
            .unwrap_or_default()
    }
}

fn set_field(
    form: RwSignal<Option<DepartementForm>>,
    value: String,
    apply: impl FnOnce(&mut DepartementForm, String),
) {
    form.update(|form| {
        if let Some(form) = form.as_mut() {
            apply(form, value);
        }
    });
}

/// Add/edit dialog; open while `form` holds a value.
#[component]
pub fn DepartementFormModal(
    form: RwSignal<Option<DepartementForm>>,
    error: RwSignal<Option<String>>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || form.with(Option::is_some));
    let title = Signal::derive(move || {
        form.with(|form| form.as_ref().map(DepartementForm::title).unwrap_or_default())
            .to_string()
    });
    let description =
        move || form.with(|form| form.as_ref().map(DepartementForm::description).unwrap_or_default());
    let submit_label =
        move || form.with(|form| form.as_ref().map(DepartementForm::submit_label).unwrap_or_default());

    let name = field(form, |form| &form.departement_name);
    let clock_in = field(form, |form| &form.max_clock_in_time);
    let clock_out = field(form, |form| &form.max_clock_out_time);

    view! {
        <Modal is_open=is_open title=title on_close=on_close>
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <p class="text-sm text-fg-muted">{description}</p>
                <div class="grid gap-2">
                    <label for="departement_name" class="text-sm font-medium text-fg">"Departement Name"</label>
                    <input
                        id="departement_name"
                        name="departement_name"
                        class=INPUT_CLASS
                        prop:value=name
                        on:input=move |ev| set_field(form, event_target_value(&ev), |form, value| form.departement_name = value)
                    />
                </div>
                <div class="grid gap-2">
                    <label for="max_clock_in_time" class="text-sm font-medium text-fg">"Max Clock In Time"</label>
                    <input
                        id="max_clock_in_time"
                        name="max_clock_in_time"
                        type="time"
                        class=INPUT_CLASS
                        prop:value=clock_in
                        on:input=move |ev| set_field(form, event_target_value(&ev), |form, value| form.max_clock_in_time = value)
                    />
                </div>
                <div class="grid gap-2">
                    <label for="max_clock_out_time" class="text-sm font-medium text-fg">"Max Clock Out Time"</label>
                    <input
                        id="max_clock_out_time"
                        name="max_clock_out_time"
                        type="time"
                        class=INPUT_CLASS
                        prop:value=clock_out
                        on:input=move |ev| set_field(form, event_target_value(&ev), |form, value| form.max_clock_out_time = value)
                    />
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
                        {submit_label}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::departement, ssr::render_to_string};

    fn render(form: Option<DepartementForm>, error: Option<&'static str>) -> String {
        render_to_string(move || {
            let form = create_rw_signal(form);
            let error = create_rw_signal(error.map(str::to_string));
            view! {
                <DepartementFormModal
                    form=form
                    error=error
                    saving=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn add_mode_shows_defaults() {
        let html = render(Some(DepartementForm::default()), None);
        assert!(html.contains("Add Departement"));
        assert!(html.contains("Fill out to create a new departement."));
        assert!(html.contains("Create"));
        assert!(html.contains("Max Clock In Time"));
    }

    #[test]
    fn edit_mode_shows_save_and_error() {
        let form = DepartementForm::for_edit(&departement(2, "IT"));
        let html = render(Some(form), Some("Nama departement wajib diisi"));
        assert!(html.contains("Edit Departement"));
        assert!(html.contains("Save"));
        assert!(html.contains("Nama departement wajib diisi"));
    }

    #[test]
    fn closed_without_form() {
        let html = render(None, None);
        assert!(!html.contains("Departement Name"));
    }
}
