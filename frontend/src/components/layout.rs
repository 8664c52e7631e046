use crate::state::auth::use_logout;
use leptos::*;

pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
}

pub static ADMIN_NAV: [NavItem; 2] = [
    NavItem {
        title: "Departement",
        href: "/admin",
    },
    NavItem {
        title: "Employee",
        href: "/admin/employee",
    },
];

/// Marks the nav entry for the current path; the departement entry only
/// matches `/admin` itself.
pub fn is_active_nav(href: &str, path: &str) -> bool {
    if href == "/admin" {
        path == "/admin" || path == "/admin/"
    } else {
        path == href || path.starts_with(&format!("{href}/"))
    }
}

#[component]
pub fn AdminSidebar(#[prop(optional, into)] current_path: MaybeSignal<String>) -> impl IntoView {
    let (collapsed, set_collapsed) = create_signal(false);
    view! {
        <aside
            class="border-r border-border bg-surface-elevated transition-all duration-200"
            class:w-60=move || !collapsed.get()
            class:w-16=move || collapsed.get()
        >
            <div class="flex items-center justify-between px-3 py-4">
                <Show when=move || !collapsed.get()>
                    <span class="pl-1 text-2xl font-bold text-fg">"ABSENS"</span>
                </Show>
                <button
                    type="button"
                    class="rounded-md p-2 text-fg-muted hover:bg-action-ghost-bg-hover"
                    aria-label="Toggle sidebar"
                    on:click=move |_| set_collapsed.update(|value| *value = !*value)
                >
                    "☰"
                </button>
            </div>
            <nav class="space-y-1 px-2">
                {ADMIN_NAV
                    .iter()
                    .map(|item| {
                        let (title, href) = (item.title, item.href);
                        let path = current_path.clone();
                        view! {
                            <a
                                href=href
                                class="flex items-center gap-2 rounded-md px-3 py-2 text-sm font-medium text-fg-muted hover:bg-action-ghost-bg-hover hover:text-fg"
                                class:bg-surface-muted=move || is_active_nav(href, &path.get())
                            >
                                <span class="h-4 w-4 text-center">{title.chars().next().map(String::from)}</span>
                                <Show when=move || !collapsed.get()>
                                    <span>{title}</span>
                                </Show>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let logout = use_logout();
    let current_path = leptos_router::use_location().pathname;
    view! {
        <div class="flex min-h-screen w-full bg-surface">
            <AdminSidebar current_path=current_path />
            <main class="flex-1 overflow-auto">
                <div class="border-b border-border bg-surface-elevated">
                    <div class="flex h-14 items-center px-4">
                        <h1 class="font-semibold text-fg">"Admin Dashboard"</h1>
                        <button
                            type="button"
                            class="ml-auto rounded-md px-3 py-2 text-sm font-medium text-fg-muted hover:bg-action-ghost-bg-hover hover:text-fg"
                            on:click=move |_| logout.call(())
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
                <div class="p-6">{children()}</div>
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            {label.map(|label| view! { <p class="mt-4 text-fg-muted">{label}</p> })}
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn sidebar_lists_admin_sections() {
        let html = render_to_string(|| view! { <AdminSidebar current_path="/admin".to_string() /> });
        assert!(html.contains("ABSENS"));
        assert!(html.contains("href=\"/admin/employee\""));
        assert!(html.contains("Departement"));
        assert!(html.contains("Employee"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(|| {
            view! {
                <div>
                    <LoadingSpinner label="Checking authentication..." />
                    <ErrorMessage message="gagal" />
                    <SuccessMessage message="berhasil" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Checking authentication..."));
        assert!(html.contains("gagal"));
        assert!(html.contains("berhasil"));
    }
}
