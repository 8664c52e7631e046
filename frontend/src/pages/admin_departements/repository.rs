use super::utils::DepartementSave;
use crate::api::{ApiClient, ApiError, Departement, SaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct DepartementsRepository {
    client: Rc<ApiClient>,
}

impl Default for DepartementsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DepartementsRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_departements(&self) -> Result<Vec<Departement>, ApiError> {
        self.client.list_departements().await
    }

    pub async fn save(&self, request: DepartementSave) -> Result<(), ApiError> {
        match request {
            SaveRequest::Add(payload) => self.client.create_departement(&payload).await,
            SaveRequest::Edit { id, payload } => {
                self.client.update_departement(id, &payload).await
            }
        }
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_departement(id).await
    }
}
