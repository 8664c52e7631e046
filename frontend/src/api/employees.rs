use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, Employee, EmployeePayload},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/employee", base_url))
                    .headers(headers),
            )
            .await?;
        self.handle_list(response).await
    }

    /// `Ok(None)` when the service reports the employee as missing.
    pub async fn get_employee(&self, employee_id: &str) -> Result<Option<Employee>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/employee/{}", base_url, encode_segment(employee_id)))
                    .headers(headers),
            )
            .await?;
        match self.handle_response::<Option<Employee>>(response).await {
            Err(err) if err.is_not_found() => Ok(None),
            other => other,
        }
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/employee", base_url))
                    .headers(headers)
                    .json(payload),
            )
            .await?;
        self.handle_empty(response).await
    }

    pub async fn update_employee(
        &self,
        employee_id: &str,
        payload: &EmployeePayload,
    ) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/employee/{}", base_url, encode_segment(employee_id)))
                    .headers(headers)
                    .json(payload),
            )
            .await?;
        self.handle_empty(response).await
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/employee/{}", base_url, encode_segment(employee_id)))
                    .headers(headers),
            )
            .await?;
        self.handle_empty(response).await
    }
}
