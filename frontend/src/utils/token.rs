use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub departement: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    Valid,
    Expired,
    Malformed,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("token payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads the payload segment of a JWT. The signature is left to the server.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let payload = token
        .split('.')
        .nth(1)
        .map(|segment| segment.trim_end_matches('='))
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::MissingPayload)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub fn token_status(token: &str, now_secs: i64) -> TokenStatus {
    match decode_claims(token) {
        Ok(TokenClaims { exp: Some(exp), .. }) if exp < now_secs => TokenStatus::Expired,
        Ok(_) => TokenStatus::Valid,
        Err(err) => {
            log::warn!("rejecting stored token: {err}");
            TokenStatus::Malformed
        }
    }
}

pub fn now_epoch_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
pub(crate) fn encode_test_token(claims: serde_json::Value) -> String {
    format!(
        "eyJhbGciOiJIUzI1NiJ9.{}.sig",
        URL_SAFE_NO_PAD.encode(claims.to_string())
    )
}
