use super::{
    client::{encode_segment, json_headers, ApiClient},
    types::{ApiError, LoginResponse},
};

impl ApiClient {
    /// Authenticates by employee id and persists the returned session.
    pub async fn login(&self, employee_id: &str) -> Result<LoginResponse, ApiError> {
        let employee_id = employee_id.trim();
        if employee_id.is_empty() {
            return Err(ApiError::validation("Employee ID is required"));
        }
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/login/{}", base_url, encode_segment(employee_id)))
                    .headers(json_headers()),
            )
            .await?;
        let login: LoginResponse = Self::handle_public_response(response).await?;

        let store = self.session_store();
        store.set_token(&login.token);
        store.set_user(Some(&login.user));
        Ok(login)
    }

    pub fn logout(&self) {
        self.session_store().clear();
    }
}
