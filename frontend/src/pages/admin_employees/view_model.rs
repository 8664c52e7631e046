use super::{
    repository::EmployeesRepository,
    utils::{filter_by_departement, save_message, EmployeeForm, EmployeeSave, ALL_DEPARTEMENTS},
};
use crate::{
    api::{ApiClient, ApiError, Departement, Employee},
    utils::message::{dismiss_success_after, MessageState, SUCCESS_DISMISS_MS},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub reload: RwSignal<u32>,
    pub employees_resource: Resource<u32, Result<Vec<Employee>, ApiError>>,
    pub departements_resource: Resource<(), Result<Vec<Departement>, ApiError>>,
    pub employees: Memo<Vec<Employee>>,
    pub departements: Memo<Vec<Departement>>,
    pub departement_filter: RwSignal<String>,
    pub visible_rows: Memo<Vec<Employee>>,
    pub form: RwSignal<Option<EmployeeForm>>,
    pub form_error: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub messages: RwSignal<MessageState>,
    pub save_action: Action<EmployeeSave, Result<(), ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl EmployeesViewModel {
    pub fn loading(&self) -> Signal<bool> {
        let resource = self.employees_resource;
        Signal::derive(move || resource.loading().get())
    }

    pub fn open_add(&self) {
        self.form_error.set(None);
        self.form.set(Some(EmployeeForm::default()));
    }

    pub fn open_edit(&self, employee: &Employee) {
        self.form_error.set(None);
        self.form.set(Some(EmployeeForm::for_edit(employee)));
    }

    pub fn close_form(&self) {
        self.form.set(None);
        self.form_error.set(None);
    }

    pub fn update_form(&self, edit: impl FnOnce(&mut EmployeeForm)) {
        self.form.update(|form| {
            if let Some(form) = form.as_mut() {
                edit(form);
            }
        });
    }

    pub fn submit_form(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let Some(form) = self.form.get_untracked() else {
            return;
        };
        match form.to_request() {
            Ok(request) => {
                self.form_error.set(None);
                self.save_action.dispatch(request);
            }
            Err(message) => self.form_error.set(Some(message)),
        }
    }

    pub fn request_delete(&self, employee: Employee) {
        self.pending_delete.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(employee) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(employee.employee_id);
        }
    }

    pub fn dismiss_success(&self) {
        self.messages.update(|state| state.success = None);
    }
}

fn keep_previous<T: Clone>(
    previous: Option<&Vec<T>>,
    result: Option<Result<Vec<T>, ApiError>>,
    what: &str,
) -> Vec<T> {
    match result {
        Some(Ok(rows)) => rows,
        Some(Err(err)) => {
            log::error!("failed to load {what}: {err}");
            previous.cloned().unwrap_or_default()
        }
        None => previous.cloned().unwrap_or_default(),
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api));

    let reload = create_rw_signal(0u32);
    let departement_filter = create_rw_signal(ALL_DEPARTEMENTS.to_string());
    let form = create_rw_signal(None::<EmployeeForm>);
    let form_error = create_rw_signal(None::<String>);
    let pending_delete = create_rw_signal(None::<Employee>);
    let messages = create_rw_signal(MessageState::default());

    let repo_for_employees = repository.clone();
    let employees_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_employees.clone();
            async move { repo.fetch_employees().await }
        },
    );
    let repo_for_departements = repository.clone();
    let departements_resource = create_resource(
        || (),
        move |_| {
            let repo = repo_for_departements.clone();
            async move { repo.fetch_departements().await }
        },
    );

    let employees =
        create_memo(move |previous| keep_previous(previous, employees_resource.get(), "employees"));
    let departements = create_memo(move |previous| {
        keep_previous(previous, departements_resource.get(), "departements")
    });
    let visible_rows = create_memo(move |_| {
        departement_filter.with(|filter| employees.with(|rows| filter_by_departement(rows, filter)))
    });

    let repo_for_save = repository.clone();
    let save_action = create_action(move |request: &EmployeeSave| {
        let repo = repo_for_save.clone();
        let request = request.clone();
        async move { repo.save(request).await }
    });

    let repo_for_delete = repository;
    let delete_action = create_action(move |employee_id: &String| {
        let repo = repo_for_delete.clone();
        let employee_id = employee_id.clone();
        async move { repo.delete(&employee_id).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    let edit = save_action
                        .input()
                        .get_untracked()
                        .map(|request| request.is_edit())
                        .unwrap_or(false);
                    form.set(None);
                    messages.update(|state| state.set_success(save_message(edit)));
                    dismiss_success_after(messages, SUCCESS_DISMISS_MS);
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    log::error!("failed to save employee: {err}");
                    form_error.set(Some(err.error));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            pending_delete.set(None);
            match result {
                Ok(()) => {
                    messages.update(|state| state.set_success("Berhasil menghapus karyawan"));
                    dismiss_success_after(messages, SUCCESS_DISMISS_MS);
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    log::error!("failed to delete employee: {err}");
                    messages.update(|state| state.set_error(err.error));
                }
            }
        }
    });

    EmployeesViewModel {
        reload,
        employees_resource,
        departements_resource,
        employees,
        departements,
        departement_filter,
        visible_rows,
        form,
        form_error,
        pending_delete,
        messages,
        save_action,
        delete_action,
    }
}
