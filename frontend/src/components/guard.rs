use crate::{
    api::LOGIN_PATH,
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState, ADMIN_HOME, EMPLOYEE_HOME},
    utils::storage::set_location,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Admin,
    Employee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Wait,
    Render,
    Redirect(&'static str),
}

/// Where a session may go for a protected `area`.
pub fn decide(state: &AuthState, area: Area) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    if !state.is_authenticated || state.user.is_none() {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    match (area, state.is_admin()) {
        (Area::Admin, true) | (Area::Employee, false) => GuardDecision::Render,
        (Area::Admin, false) => GuardDecision::Redirect(EMPLOYEE_HOME),
        (Area::Employee, true) => GuardDecision::Redirect(ADMIN_HOME),
    }
}

fn should_render_children(decision: GuardDecision) -> bool {
    decision == GuardDecision::Render
}

fn guarded(area: Area, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| auth.with(|state| decide(state, area)));
    create_effect(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            log::info!("redirecting to {target}");
            set_location(target);
        }
    });
    view! {
        <Show
            when=move || should_render_children(decision.get())
            fallback=move || {
                if decision.get() == GuardDecision::Wait {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(Area::Admin, children)
}

#[component]
pub fn RequireEmployee(children: ChildrenFn) -> impl IntoView {
    guarded(Area::Employee, children)
}
