use serde_json::json;

use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, AttendanceRecord, LogQuery},
};

impl ApiClient {
    pub async fn clock_in(&self, employee_id: &str) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/attendance/clock-in/", base_url))
                    .headers(headers)
                    .json(&json!({ "employee_id": employee_id })),
            )
            .await?;
        self.handle_empty(response).await
    }

    pub async fn clock_out(&self, employee_id: &str, attendance_id: &str) -> Result<(), ApiError> {
        if attendance_id.trim().is_empty() {
            return Err(ApiError::validation("Attendance ID is required to clock out"));
        }
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!(
                        "{}/attendance/clock-out/{}",
                        base_url,
                        encode_segment(attendance_id)
                    ))
                    .headers(headers)
                    .json(&json!({ "employee_id": employee_id })),
            )
            .await?;
        self.handle_empty(response).await
    }

    pub async fn list_attendance_logs(
        &self,
        query: &LogQuery,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/attendance/logs", base_url))
                    .headers(headers)
                    .query(&query.query_pairs()),
            )
            .await?;
        self.handle_list(response).await
    }
}
