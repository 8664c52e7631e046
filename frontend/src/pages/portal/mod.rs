use leptos::*;

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::PortalPanel;

/// Employee self-service at `/employee`.
#[component]
pub fn PortalPage() -> impl IntoView {
    view! { <PortalPanel /> }
}
