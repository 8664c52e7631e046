use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        guard::{RequireAdmin, RequireEmployee},
        layout::AdminLayout,
    },
    pages::{
        AdminDepartementsPage, AdminEmployeesPage, EmployeeDetailPage, HomePage, LoginPage,
        PortalPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/auth",
    "/admin",
    "/admin/employee",
    "/admin/employee/:employee_id",
    "/employee",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/admin",
    "/admin/employee",
    "/admin/employee/:employee_id",
];

pub const EMPLOYEE_ROUTE_PATHS: &[&str] = &["/employee"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/auth"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="Absensi"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/auth" view=LoginPage/>
                    <Route path="/admin" view=ProtectedDepartements/>
                    <Route path="/admin/employee" view=ProtectedEmployees/>
                    <Route path="/admin/employee/:employee_id" view=ProtectedEmployeeDetail/>
                    <Route path="/employee" view=ProtectedPortal/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDepartements() -> impl IntoView {
    view! { <RequireAdmin><AdminLayout><AdminDepartementsPage/></AdminLayout></RequireAdmin> }
}

#[component]
fn ProtectedEmployees() -> impl IntoView {
    view! { <RequireAdmin><AdminLayout><AdminEmployeesPage/></AdminLayout></RequireAdmin> }
}

#[component]
fn ProtectedEmployeeDetail() -> impl IntoView {
    view! { <RequireAdmin><AdminLayout><EmployeeDetailPage/></AdminLayout></RequireAdmin> }
}

#[component]
fn ProtectedPortal() -> impl IntoView {
    view! { <RequireEmployee><PortalPage/></RequireEmployee> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn guarded_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in ADMIN_ROUTE_PATHS.iter().chain(EMPLOYEE_ROUTE_PATHS) {
            assert!(all.contains(path), "guarded path missing from ROUTE_PATHS: {path}");
        }
    }

    #[test]
    fn every_route_is_classified_once() {
        let mut seen = HashSet::new();
        for path in ADMIN_ROUTE_PATHS
            .iter()
            .chain(EMPLOYEE_ROUTE_PATHS)
            .chain(PUBLIC_ROUTE_PATHS)
        {
            assert!(seen.insert(*path), "route classified twice: {path}");
        }
        assert_eq!(seen.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn landing_paths_are_routed() {
        use crate::state::auth::{ADMIN_HOME, EMPLOYEE_HOME};
        assert!(ADMIN_ROUTE_PATHS.contains(&ADMIN_HOME));
        assert!(EMPLOYEE_ROUTE_PATHS.contains(&EMPLOYEE_HOME));
        assert!(PUBLIC_ROUTE_PATHS.contains(&crate::api::LOGIN_PATH));
    }
}
