use crate::api::ApiError;

pub const LOGIN_FAILED: &str = "Login gagal";

/// Trimmed employee id, or the message to show when it is blank.
pub fn validate_employee_id(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err("Nomor Karyawan wajib diisi".into())
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn login_failure_message(error: &ApiError) -> String {
    if error.error.trim().is_empty() {
        LOGIN_FAILED.to_string()
    } else {
        format!("{LOGIN_FAILED}: {}", error.error)
    }
}
