use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

/// Sign-in by employee ID, served at `/auth`.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <LoginPanel /> }
}
