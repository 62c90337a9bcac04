use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::TokenPayload;
use crate::domain::identity::ports::CredentialServicePort;
use crate::inbound::http::middleware::BearerToken;
use crate::inbound::http::router::AppState;

pub async fn validate_token<S: CredentialServicePort>(
    State(state): State<AppState<S>>,
    Extension(BearerToken(token)): Extension<BearerToken>,
) -> Result<ApiSuccess<ValidateTokenResponseData>, ApiError> {
    state
        .credential_service
        .validate_token(&token)
        .await
        .map_err(ApiError::from)
        .map(|payload| ApiSuccess::new(StatusCode::OK, "Token is valid", payload.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateTokenResponseData {
    pub nik: String,
    pub password: String,
    pub exp: i64,
}

impl From<TokenPayload> for ValidateTokenResponseData {
    fn from(payload: TokenPayload) -> Self {
        Self {
            nik: payload.nik,
            password: payload.password,
            exp: payload.exp,
        }
    }
}
