use super::utils::EmployeeSave;
use crate::api::{ApiClient, ApiError, Departement, Employee, SaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn fetch_departements(&self) -> Result<Vec<Departement>, ApiError> {
        self.client.list_departements().await
    }

    pub async fn save(&self, request: EmployeeSave) -> Result<(), ApiError> {
        match request {
            SaveRequest::Add(payload) => self.client.create_employee(&payload).await,
            SaveRequest::Edit { id, payload } => self.client.update_employee(&id, &payload).await,
        }
    }

    pub async fn delete(&self, employee_id: &str) -> Result<(), ApiError> {
        self.client.delete_employee(employee_id).await
    }
}
