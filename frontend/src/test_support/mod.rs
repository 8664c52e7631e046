#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, Departement, Employee, UserProfile};
    use crate::state::auth::AuthState;
    use leptos::*;
    use serde_json::{json, Value};

    pub fn admin_user() -> UserProfile {
        UserProfile {
            employee_id: "ADM-1".into(),
            name: "Admin Utama".into(),
            addres: "Kantor Pusat".into(),
            departement: "Admin".into(),
            max_clock_in_time: None,
            max_clock_out_time: None,
        }
    }

    pub fn employee_user() -> UserProfile {
        UserProfile {
            employee_id: "EMP-001".into(),
            name: "Budi Santoso".into(),
            addres: "Jl. Merdeka 1".into(),
            departement: "IT".into(),
            max_clock_in_time: Some("08:00".into()),
            max_clock_out_time: Some("17:00".into()),
        }
    }

    pub fn user_json(employee_id: &str, departement: &str) -> Value {
        json!({
            "employee_id": employee_id,
            "name": "Budi Santoso",
            "addres": "Jl. Merdeka 1",
            "departement": departement,
            "max_clock_in_time": "08:00",
            "max_clock_out_time": "17:00"
        })
    }

    pub fn departement(id: i64, name: &str) -> Departement {
        Departement {
            id,
            departement_name: name.into(),
            max_clock_in_time: "08:00".into(),
            max_clock_out_time: "17:00".into(),
        }
    }

    pub fn employee(id: i64, employee_id: &str, name: &str, departement: Option<&str>) -> Employee {
        Employee {
            id,
            employee_id: employee_id.into(),
            name: name.into(),
            address: "Jl. Sudirman 5".into(),
            departement_id: id.to_string(),
            departement_name: departement.map(str::to_string),
        }
    }

    pub fn record(
        id: &str,
        date: &str,
        clock_in: Option<&str>,
        clock_out: Option<&str>,
    ) -> AttendanceRecord {
        AttendanceRecord {
            attendance_id: id.into(),
            employee_name: "Budi Santoso".into(),
            departement_name: "IT".into(),
            date_attendance: date.into(),
            clock_in: clock_in.map(str::to_string),
            clock_out: clock_out.map(str::to_string),
            max_clock_in_time: "08:00:00".into(),
            max_clock_out_time: "17:00:00".into(),
            status_clock_in: None,
            status_clock_out: None,
            is_late: false,
            is_leave_early: false,
        }
    }

    pub fn provide_auth(
        user: Option<UserProfile>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
