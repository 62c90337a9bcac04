use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::MISSING_FIELDS;
use crate::domain::identity::models::Nik;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::RegisteredIdentity;
use crate::domain::identity::models::Role;
use crate::domain::identity::ports::CredentialServicePort;
use crate::identity::errors::CredentialError;
use crate::identity::errors::NikError;
use crate::identity::errors::PersistenceError;
use crate::inbound::http::router::AppState;

pub async fn register<S: CredentialServicePort>(
    State(state): State<AppState<S>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .credential_service
        .register(body.try_into_command()?)
        .await
        .map_err(|e| match e {
            CredentialError::Persistence(PersistenceError::Conflict(_)) => ApiError::from(e),
            _ => ApiError::InternalServerError("Failed to register user".to_string()),
        })
        .map(|ref registered| {
            ApiSuccess::new(
                StatusCode::OK,
                "User registered successfully",
                registered.into(),
            )
        })
}

/// HTTP request body for registering an identity (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    nik: String,
    #[serde(default)]
    role: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("{}", MISSING_FIELDS)]
    MissingFields,

    #[error("NIK must be {} characters", Nik::LENGTH)]
    Nik(#[from] NikError),
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ParseRegisterRequestError> {
        if self.nik.is_empty() || self.role.trim().is_empty() {
            return Err(ParseRegisterRequestError::MissingFields);
        }
        let nik = Nik::new(self.nik)?;
        let role = Role::new(self.role).map_err(|_| ParseRegisterRequestError::MissingFields)?;
        Ok(RegisterCommand::new(nik, role))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub nik: String,
    pub role: String,
    pub password: String,
}

impl From<&RegisteredIdentity> for RegisterResponseData {
    fn from(registered: &RegisteredIdentity) -> Self {
        Self {
            nik: registered.nik.to_string(),
            role: registered.role.to_string(),
            password: registered.password.clone(),
        }
    }
}
