use crate::{
    api::{ApiClient, ApiError, UserProfile},
    pages::login::repository::LoginRepository,
    utils::{
        storage::SessionStore,
        token::{now_epoch_secs, token_status, TokenStatus},
    },
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

pub const ADMIN_HOME: &str = "/admin";
pub const EMPLOYEE_HOME: &str = "/employee";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(UserProfile::is_admin).unwrap_or(false)
    }
}

pub fn landing_path(user: &UserProfile) -> &'static str {
    if user.is_admin() {
        ADMIN_HOME
    } else {
        EMPLOYEE_HOME
    }
}

/// Rebuilds the session from stored credentials.
///
/// A missing, expired or malformed token, or a token without a stored user,
/// wipes the store and yields a signed-out state.
pub fn restore_session(store: &dyn SessionStore, now_secs: i64) -> AuthState {
    let Some(token) = store.token() else {
        store.clear();
        return AuthState::signed_out();
    };
    match token_status(&token, now_secs) {
        TokenStatus::Valid => {}
        status => {
            log::info!("discarding stored session: {status:?}");
            store.clear();
            return AuthState::signed_out();
        }
    }
    match store.user() {
        Some(user) => AuthState::signed_in(user),
        None => {
            log::warn!("token present without user profile, signing out");
            store.clear();
            AuthState::signed_out()
        }
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let restored = restore_session(api_client.session_store().as_ref(), now_epoch_secs());
    set_auth_state.set(restored);

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    employee_id: String,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserProfile, ApiError> {
    if employee_id.trim().is_empty() {
        return Err(ApiError::validation("Employee ID wajib diisi"));
    }
    set_auth_state.update(|state| state.loading = true);

    match repo.login(&employee_id).await {
        Ok(response) => {
            set_auth_state.set(AuthState::signed_in(response.user.clone()));
            Ok(response.user)
        }
        Err(error) => {
            log::error!("login failed for {}: {}", employee_id.trim(), error);
            set_auth_state.set(AuthState::signed_out());
            Err(error)
        }
    }
}

pub fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.set(AuthState::signed_out());
}

pub fn use_login_action() -> Action<String, Result<UserProfile, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |employee_id: &String| {
        let employee_id = employee_id.clone();
        let repo = repo.clone();
        async move { login_request(employee_id, &repo, set_auth).await }
    })
}

/// Clears the session and leaves for the login page.
pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    Callback::new(move |_| {
        logout(&repo, set_auth);
        crate::utils::storage::set_location(crate::api::LOGIN_PATH);
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::user_json;
    use crate::utils::storage::MemorySessionStore;
    use crate::utils::token::encode_test_token;
    use serde_json::json;

    #[test]
    fn use_auth_returns_default_without_context() {
        crate::test_support::ssr::with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        let token = encode_test_token(json!({ "exp": now_epoch_secs() + 60 }));
        server.mock(|when, then| {
            when.method(POST).path("/api/login/ADM-1");
            then.status(200)
                .json_body(json!({ "token": token, "user": user_json("ADM-1", "Admin") }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let store = Rc::new(MemorySessionStore::default());
        let api = ApiClient::with_store(Some(server.url("/api")), store.clone());
        let repo = LoginRepository::new_with_client(Rc::new(api));

        let user = login_request("ADM-1".into(), &repo, set_state).await.unwrap();
        assert_eq!(landing_path(&user), "/admin");

        let snapshot = state.get_untracked();
        assert!(snapshot.is_authenticated);
        assert!(snapshot.is_admin());
        assert!(store.token().is_some());

        logout(&repo, set_state);
        let snapshot = state.get_untracked();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(store.token().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_leaves_state_signed_out() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/login/NOPE");
            then.status(404).json_body(json!({ "message": "Employee not found" }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::with_store(
            Some(server.url("/api")),
            Rc::new(MemorySessionStore::default()),
        );
        let repo = LoginRepository::new_with_client(Rc::new(api));

        let err = login_request("NOPE".into(), &repo, set_state).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(state.get_untracked(), AuthState::signed_out());

        let err = login_request("  ".into(), &repo, set_state).await.unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        runtime.dispose();
    }
}
