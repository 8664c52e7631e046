use super::utils::{login_failure_message, validate_employee_id};
use crate::{
    api::{ApiError, UserProfile},
    state::auth::{self, landing_path},
    utils::storage::set_location,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub employee_id: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<String, Result<UserProfile, ApiError>>,
}

impl LoginViewModel {
    pub fn pending(&self) -> Signal<bool> {
        self.login_action.pending().into()
    }

    /// Validates the form and dispatches the login; a blank id never reaches
    /// the network.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match validate_employee_id(&self.employee_id.get_untracked()) {
            Ok(employee_id) => {
                self.error.set(None);
                self.login_action.dispatch(employee_id);
            }
            Err(message) => self.error.set(Some(message)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let employee_id = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(user) => {
                    error.set(None);
                    set_location(landing_path(&user));
                }
                Err(err) => error.set(Some(login_failure_message(&err))),
            }
        }
    });

    LoginViewModel {
        employee_id,
        error,
        login_action,
    }
}
