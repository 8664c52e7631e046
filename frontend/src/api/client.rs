use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, RequestBuilder, Response, StatusCode,
};
use serde::de::DeserializeOwned;

use crate::{
    api::types::ApiError,
    config,
    utils::{
        storage::{self as storage_utils, BrowserSessionStore, SessionStore},
        token::{now_epoch_secs, token_status, TokenStatus},
    },
};

pub const LOGIN_PATH: &str = "/auth";

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value.trim(), PATH_SEGMENT).to_string()
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    store: Rc<dyn SessionStore>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            store: Rc::new(BrowserSessionStore),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_store(base_url: Option<String>, store: Rc<dyn SessionStore>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            store,
        }
    }

    pub fn http_client(&self) -> &Client {
        &self.client
    }

    pub fn session_store(&self) -> Rc<dyn SessionStore> {
        Rc::clone(&self.store)
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let Some(token) = self.store.token() else {
            self.expire_session();
            return Err(ApiError::unauthorized("No token"));
        };
        match token_status(&token, now_epoch_secs()) {
            TokenStatus::Valid => {}
            TokenStatus::Expired => {
                self.expire_session();
                return Err(ApiError::unauthorized("Session expired"));
            }
            TokenStatus::Malformed => {
                self.expire_session();
                return Err(ApiError::unauthorized("Invalid token"));
            }
        }

        let mut headers = json_headers();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ApiError::unauthorized("Invalid token format"))?;
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }

    /// Drops stored credentials and leaves protected views.
    pub fn expire_session(&self) {
        self.store.clear();
        redirect_to_login_if_needed();
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = find_mock(request.url().as_str()) {
            return responder.respond(&request)?.into_response();
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    async fn read_body(response: Response) -> Result<(StatusCode, String), ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok((status, text))
    }

    fn error_from(status: StatusCode, text: &str) -> ApiError {
        ApiError::from_body(status.as_u16(), serde_json::from_str(text).ok())
    }

    /// Decodes an authenticated response; a 401 ends the session.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let (status, text) = Self::read_body(response).await?;
        if status.is_success() {
            return serde_json::from_str(&text)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)));
        }
        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
        }
        Err(Self::error_from(status, &text))
    }

    /// Like `handle_response` but a `null` or empty body becomes an empty list.
    pub(crate) async fn handle_list<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<Vec<T>, ApiError> {
        let (status, text) = Self::read_body(response).await?;
        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(Vec::new());
            }
            return serde_json::from_str::<Option<Vec<T>>>(&text)
                .map(Option::unwrap_or_default)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)));
        }
        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
        }
        Err(Self::error_from(status, &text))
    }

    pub(crate) async fn handle_empty(&self, response: Response) -> Result<(), ApiError> {
        let (status, text) = Self::read_body(response).await?;
        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
        }
        Err(Self::error_from(status, &text))
    }

    /// Unauthenticated endpoints: a 401 is an ordinary failure.
    pub(crate) async fn handle_public_response<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        let (status, text) = Self::read_body(response).await?;
        if status.is_success() {
            serde_json::from_str(&text)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from(status, &text))
        }
    }
}

pub(crate) fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

fn redirect_to_login_if_needed() {
    let Ok(window) = storage_utils::window() else {
        return;
    };
    let location = window.location();
    if let Ok(pathname) = location.pathname() {
        if pathname == LOGIN_PATH {
            return;
        }
    }
    log::info!("session ended, redirecting to {LOGIN_PATH}");
    let _ = location.set_href(LOGIN_PATH);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_transport::find_mock;
