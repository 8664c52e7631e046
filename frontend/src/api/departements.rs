use super::{
    client::ApiClient,
    types::{ApiError, Departement, DepartementPayload},
};

impl ApiClient {
    pub async fn list_departements(&self) -> Result<Vec<Departement>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/departement", base_url))
                    .headers(headers),
            )
            .await?;
        self.handle_list(response).await
    }

    pub async fn get_departement(&self, id: i64) -> Result<Departement, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/departement/{}", base_url, id))
                    .headers(headers),
            )
            .await?;
        self.handle_response(response).await
    }

    pub async fn create_departement(&self, payload: &DepartementPayload) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/departement", base_url))
                    .headers(headers)
                    .json(payload),
            )
            .await?;
        self.handle_empty(response).await
    }

    pub async fn update_departement(
        &self,
        id: i64,
        payload: &DepartementPayload,
    ) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/departement/{}", base_url, id))
                    .headers(headers)
                    .json(payload),
            )
            .await?;
        self.handle_empty(response).await
    }

    pub async fn delete_departement(&self, id: i64) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/departement/{}", base_url, id))
                    .headers(headers),
            )
            .await?;
        self.handle_empty(response).await
    }
}
