use crate::utils::status::{AttendanceStatus, BadgeVariant};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Outline => "border border-border bg-surface text-fg hover:bg-action-ghost-bg-hover",
            ButtonVariant::Ghost => "text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover",
            ButtonVariant::Destructive => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text shadow-sm",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: Option<BadgeVariant>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let variant = variant.unwrap_or(BadgeVariant::Secondary);
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold {} {}",
            variant.class(),
            class
        )>
            {children()}
        </span>
    }
}

/// Label and color for one evaluated clock event.
#[component]
pub fn StatusBadge(status: AttendanceStatus) -> impl IntoView {
    view! { <Badge variant=status.badge_variant()>{status.label()}</Badge> }
}
