use crate::{
    api::UserProfile,
    components::common::{Badge, Button, ButtonVariant},
    utils::time::current_greeting,
};
use leptos::*;

#[component]
pub fn PortalHeader(
    user: Signal<Option<UserProfile>>,
    #[prop(into)] refreshing: Signal<bool>,
    on_refresh: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let name = move || {
        user.with(|user| user.as_ref().map(|u| u.name.clone()))
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "User".into())
    };
    let departement = move || user.with(|user| user.as_ref().map(|u| u.departement.clone()).unwrap_or_default());
    let employee_id = move || user.with(|user| user.as_ref().map(|u| u.employee_id.clone()).unwrap_or_default());
    let initials = move || user.with(|user| user.as_ref().map(UserProfile::initials).unwrap_or_else(|| "U".into()));

    view! {
        <header class="bg-surface-elevated border-b border-border">
            <div class="max-w-5xl mx-auto px-4 py-4 flex items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    <div class="h-12 w-12 rounded-full bg-action-primary-bg text-action-primary-text flex items-center justify-center font-bold">
                        {initials}
                    </div>
                    <div>
                        <p class="text-sm text-fg-muted">{current_greeting()}</p>
                        <h1 class="text-lg font-semibold text-fg">{name}</h1>
                        <div class="flex items-center gap-2 text-xs text-fg-muted">
                            <span>{departement}</span>
                            <Badge>{move || format!("ID: {}", employee_id())}</Badge>
                        </div>
                    </div>
                </div>
                <div class="flex items-center gap-2">
                    <Button
                        variant=ButtonVariant::Outline
                        loading=refreshing
                        on:click=move |_| on_refresh.call(())
                    >
                        "Refresh"
                    </Button>
                    <Button variant=ButtonVariant::Ghost on:click=move |_| on_logout.call(())>
                        "Logout"
                    </Button>
                </div>
            </div>
        </header>
    }
}
