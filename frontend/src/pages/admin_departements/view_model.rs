use super::{
    repository::DepartementsRepository,
    utils::{DepartementForm, DepartementSave},
};
use crate::{
    api::{ApiClient, ApiError, Departement},
    utils::message::{dismiss_success_after, MessageState, SUCCESS_DISMISS_MS},
};
use leptos::*;
use std::rc::Rc;

fn save_message(edit: bool) -> &'static str {
    if edit {
        "Berhasil mengedit departement"
    } else {
        "Berhasil menambahkan departement"
    }
}

#[derive(Clone, Copy)]
pub struct DepartementsViewModel {
    pub reload: RwSignal<u32>,
    pub resource: Resource<u32, Result<Vec<Departement>, ApiError>>,
    pub rows: Memo<Vec<Departement>>,
    pub form: RwSignal<Option<DepartementForm>>,
    pub form_error: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<Departement>>,
    pub messages: RwSignal<MessageState>,
    pub save_action: Action<DepartementSave, Result<(), ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
}

impl DepartementsViewModel {
    pub fn loading(&self) -> Signal<bool> {
        let resource = self.resource;
        Signal::derive(move || resource.loading().get())
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn open_add(&self) {
        self.form_error.set(None);
        self.form.set(Some(DepartementForm::default()));
    }

    pub fn open_edit(&self, departement: &Departement) {
        self.form_error.set(None);
        self.form.set(Some(DepartementForm::for_edit(departement)));
    }

    pub fn close_form(&self) {
        self.form.set(None);
        self.form_error.set(None);
    }

    pub fn update_form(&self, edit: impl FnOnce(&mut DepartementForm)) {
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

    pub fn request_delete(&self, departement: Departement) {
        self.pending_delete.set(Some(departement));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(departement) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(departement.id);
        }
    }
}

pub fn use_departements_view_model() -> DepartementsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DepartementsRepository::new_with_client(Rc::new(api));

    let reload = create_rw_signal(0u32);
    let form = create_rw_signal(None::<DepartementForm>);
    let form_error = create_rw_signal(None::<String>);
    let pending_delete = create_rw_signal(None::<Departement>);
    let messages = create_rw_signal(MessageState::default());

    let repo_for_resource = repository.clone();
    let resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_departements().await }
        },
    );

    // A failed refetch keeps the rows already on screen.
    let rows = create_memo(move |previous: Option<&Vec<Departement>>| match resource.get() {
        Some(Ok(rows)) => rows,
        Some(Err(err)) => {
            log::error!("failed to load departements: {err}");
            previous.cloned().unwrap_or_default()
        }
        None => previous.cloned().unwrap_or_default(),
    });

    let repo_for_save = repository.clone();
    let save_action = create_action(move |request: &DepartementSave| {
        let repo = repo_for_save.clone();
        let request = request.clone();
        async move { repo.save(request).await }
    });

    let repo_for_delete = repository;
    let delete_action = create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { repo.delete(id).await }
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
                    log::error!("failed to save departement: {err}");
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
                    messages.update(|state| state.set_success("Berhasil menghapus departement"));
                    dismiss_success_after(messages, SUCCESS_DISMISS_MS);
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    log::error!("failed to delete departement: {err}");
                    messages.update(|state| state.set_error(err.error));
                }
            }
        }
    });

    DepartementsViewModel {
        reload,
        resource,
        rows,
        form,
        form_error,
        pending_delete,
        messages,
        save_action,
        delete_action,
    }
}

#[cfg(test)]
mod tests {
    use super::save_message;

    #[test]
    fn save_message_follows_mode() {
        assert_eq!(save_message(false), "Berhasil menambahkan departement");
        assert_eq!(save_message(true), "Berhasil mengedit departement");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::DepartementPayload;
    use crate::test_support::{
        helpers::departement,
        ssr::{with_local_runtime, with_local_runtime_async, with_runtime, wait_until},
    };
    use crate::utils::{storage::MemorySessionStore, token::encode_test_token};
    use serde_json::json;

    fn provide_api(server: &MockServer) {
        let token = encode_test_token(json!({ "exp": chrono::Utc::now().timestamp() + 600 }));
        provide_context(ApiClient::with_store(
            Some(server.url("/api")),
            Rc::new(MemorySessionStore::with_session(&token, None)),
        ));
    }

    fn mock_server() -> MockServer {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/departement");
            then.status(200).json_body(json!([{
                "id": 3,
                "departement_name": "HR",
                "max_clock_in_time": "08:00:00",
                "max_clock_out_time": "17:00:00"
            }]));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/departement");
            then.status(201).json_body(json!({ "message": "created" }));
        });
        server
    }

    #[test]
    fn add_and_edit_open_prefilled_forms() {
        with_local_runtime(|| {
            with_runtime(|| {
                provide_api(&mock_server());
                let vm = use_departements_view_model();
                assert!(vm.form.get_untracked().is_none());

                vm.open_add();
                let form = vm.form.get_untracked().unwrap();
                assert!(!form.is_edit());
                assert_eq!(form.max_clock_in_time, "08:00");

                vm.open_edit(&departement(3, "HR"));
                let form = vm.form.get_untracked().unwrap();
                assert_eq!(form.editing, Some(3));
                assert_eq!(form.departement_name, "HR");

                vm.close_form();
                assert!(vm.form.get_untracked().is_none());
            });
        });
    }

    #[test]
    fn invalid_form_is_not_dispatched() {
        with_local_runtime(|| {
            with_runtime(|| {
                provide_api(&mock_server());
                let vm = use_departements_view_model();
                vm.open_add();
                vm.update_form(|form| form.max_clock_out_time = "5pm".into());
                vm.submit_form();
                assert_eq!(
                    vm.form_error.get_untracked().as_deref(),
                    Some("Nama departement wajib diisi")
                );
                vm.update_form(|form| form.departement_name = "Ops".into());
                vm.submit_form();
                assert_eq!(
                    vm.form_error.get_untracked().as_deref(),
                    Some("Max Clock Out Time harus berformat HH:MM")
                );
                assert_eq!(vm.save_action.version().get_untracked(), 0);
            });
        });
    }

    #[test]
    fn loads_rows_and_submits_valid_form() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = mock_server();
            provide_api(&server);
            let vm = use_departements_view_model();

            assert!(
                wait_until(|| !vm.rows.get_untracked().is_empty()).await,
                "departements should load"
            );
            assert_eq!(vm.rows.get_untracked()[0].departement_name, "HR");

            vm.open_add();
            vm.update_form(|form| form.departement_name = "Finance".into());
            vm.submit_form();
            assert!(
                wait_until(|| vm.save_action.value().get_untracked().is_some()).await,
                "save should complete"
            );
            assert!(matches!(vm.save_action.value().get_untracked(), Some(Ok(()))));
            let sent: DepartementPayload =
                serde_json::from_value(server.last_request().body.unwrap()).unwrap();
            assert_eq!(sent.departement_name, "Finance");
            assert_eq!(sent.max_clock_in_time, "08:00");

            runtime.dispose();
        });
    }

    #[test]
    fn delete_confirmation_tracks_target() {
        with_local_runtime(|| {
            with_runtime(|| {
                provide_api(&mock_server());
                let vm = use_departements_view_model();
                vm.confirm_delete();
                assert_eq!(vm.delete_action.version().get_untracked(), 0);

                vm.request_delete(departement(5, "Legal"));
                assert_eq!(vm.pending_delete.get_untracked().map(|d| d.id), Some(5));
                vm.cancel_delete();
                assert!(vm.pending_delete.get_untracked().is_none());
            });
        });
    }
}
