use crate::{api::Employee, pages::admin_employees::utils::departement_label};
use leptos::*;

#[component]
fn InfoItem(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div>
            <p class="text-sm text-fg-muted">{label}</p>
            <p class="font-semibold text-fg">{value}</p>
        </div>
    }
}

#[component]
pub fn EmployeeInfoCard(employee: Employee) -> impl IntoView {
    let departement = departement_label(&employee);
    view! {
        <section class="rounded-lg border border-border bg-surface-elevated p-6 shadow-sm space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Employee Information"</h2>
            <div class="grid grid-cols-1 gap-6 md:grid-cols-3">
                <InfoItem label="Full Name" value=employee.name />
                <InfoItem label="Address" value=employee.address />
                <InfoItem label="Department" value=departement />
            </div>
        </section>
    }
}

#[component]
pub fn DetailSkeleton() -> impl IntoView {
    let bar = |size: &'static str| {
        view! { <div class=format!("animate-pulse rounded bg-surface-muted {size}")></div> }
    };
    view! {
        <div class="space-y-6" aria-busy="true">
            <div class="flex items-center justify-between">
                {bar("h-10 w-24")}
                {bar("h-8 w-32")}
            </div>
            <div class="rounded-lg border border-border p-6 space-y-4">
                {bar("h-8 w-48")}
                {bar("h-6 w-64")}
                {bar("h-6 w-72")}
                {bar("h-6 w-56")}
            </div>
            <div class="rounded-lg border border-border p-6 space-y-4">
                {bar("h-8 w-40")}
                {bar("h-64 w-full")}
            </div>
        </div>
    }
}

#[component]
pub fn EmployeeNotFound() -> impl IntoView {
    view! {
        <div class="flex h-32 flex-col items-center justify-center rounded-lg border border-border bg-surface-elevated">
            <p class="text-lg text-fg-muted">"Employee not found."</p>
            <a href="/admin/employee" class="mt-4 text-sm font-semibold text-fg underline">
                "Go Back"
            </a>
        </div>
    }
}
