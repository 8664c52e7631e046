use crate::{api::Departement, pages::admin_employees::utils::ALL_DEPARTEMENTS};
use leptos::*;

/// Narrows the employee grid to one department by name.
#[component]
pub fn DepartementFilter(
    #[prop(into)] departements: Signal<Vec<Departement>>,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <select
            aria-label="Filter Departement"
            class="w-[200px] rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-form-control-text"
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            <option value=ALL_DEPARTEMENTS selected=move || value.with(|v| v == ALL_DEPARTEMENTS)>
                "Semua Departement"
            </option>
            <For
                each=move || departements.get()
                key=|departement| departement.id
                children=move |departement| {
                    let name = departement.departement_name;
                    let selected_name = name.clone();
                    view! {
                        <option
                            value=name.clone()
                            selected=move || value.with(|v| *v == selected_name)
                        >
                            {name}
                        </option>
                    }
                }
            />
        </select>
    }
}
