use crate::{
    api::LOGIN_PATH,
    components::layout::LoadingSpinner,
    state::auth::{landing_path, use_auth, AuthState},
    utils::storage::set_location,
};
use leptos::*;

/// Where `/` sends the visitor once the session is known.
pub fn home_target(state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    match (&state.user, state.is_authenticated) {
        (Some(user), true) => Some(landing_path(user)),
        _ => Some(LOGIN_PATH),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let loading = create_memo(move |_| auth.with(|state| state.loading));
    create_effect(move |_| {
        if let Some(target) = auth.with(home_target) {
            set_location(target);
        }
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface">
            <div class="text-center">
                <Show
                    when=move || loading.get()
                    fallback=|| view! { <div class="animate-pulse text-fg-muted">"Redirecting..."</div> }
                >
                    <LoadingSpinner label="Checking authentication..." />
                </Show>
            </div>
        </div>
    }
}
