use crate::api::{ApiClient, ApiError, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeeDetailRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeeDetailRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeDetailRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn fetch_employee(&self, employee_id: &str) -> Result<Option<Employee>, ApiError> {
        if employee_id.trim().is_empty() {
            return Ok(None);
        }
        self.client.get_employee(employee_id).await
    }
}
