use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::INVALID_CREDENTIALS;
use super::MISSING_FIELDS;
use crate::domain::identity::models::AuthenticatedIdentity;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::Nik;
use crate::domain::identity::ports::CredentialServicePort;
use crate::inbound::http::router::AppState;

pub async fn login<S: CredentialServicePort>(
    State(state): State<AppState<S>>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body?;

    if body.nik.is_empty() || body.password.is_empty() {
        return Err(ApiError::BadRequest(MISSING_FIELDS.to_string()));
    }

    // A NIK that cannot exist is reported exactly like a wrong password
    let nik = Nik::new(body.nik)
        .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    state
        .credential_service
        .login(LoginCommand::new(nik, body.password))
        .await
        .map_err(ApiError::from)
        .map(|ref authenticated| {
            ApiSuccess::new(StatusCode::OK, "Login successful", authenticated.into())
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    nik: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub id: i64,
    pub nik: String,
    pub role: String,
    pub token: String,
}

impl From<&AuthenticatedIdentity> for LoginResponseData {
    fn from(authenticated: &AuthenticatedIdentity) -> Self {
        Self {
            id: authenticated.id.0,
            nik: authenticated.nik.to_string(),
            role: authenticated.role.to_string(),
            token: authenticated.token.clone(),
        }
    }
}
