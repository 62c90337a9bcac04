use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::identity::errors::CredentialError;
use crate::identity::errors::PersistenceError;

pub mod health;
pub mod login;
pub mod register;
pub mod validate_token;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const INVALID_TOKEN: &str = "Invalid or expired token";
pub const MISSING_FIELDS: &str = "Missing required fields";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: &str, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, message, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Conflict(String),
    Unauthorized(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        Self::BadRequest("Invalid request body".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::InvalidNik(_) | CredentialError::InvalidRole(_) => {
                ApiError::BadRequest(err.to_string())
            }
            CredentialError::Persistence(PersistenceError::Conflict(_)) => {
                ApiError::Conflict(err.to_string())
            }
            // Unknown NIK and wrong password must look identical to the caller
            CredentialError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            CredentialError::Token(_) => ApiError::Unauthorized(INVALID_TOKEN.to_string()),
            CredentialError::Persistence(PersistenceError::Database(_))
            | CredentialError::Password(_)
            | CredentialError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Envelope shared by every JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    message: String,
    data: Option<T>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, message: &str, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponseBody<()> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            message,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::errors::NikError;

    #[test]
    fn test_credential_errors_map_to_status() {
        assert_eq!(
            ApiError::from(CredentialError::InvalidCredentials),
            ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
        );
        assert_eq!(
            ApiError::from(CredentialError::Token(auth::TokenError::Expired)),
            ApiError::Unauthorized(INVALID_TOKEN.to_string())
        );
        assert_eq!(
            ApiError::from(CredentialError::Token(auth::TokenError::Signature)),
            ApiError::Unauthorized(INVALID_TOKEN.to_string())
        );
        assert!(matches!(
            ApiError::from(CredentialError::from(PersistenceError::Conflict(
                "1234567890123456".to_string()
            ))),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(CredentialError::from(PersistenceError::Database(
                "down".to_string()
            ))),
            ApiError::InternalServerError(_)
        ));
        assert!(matches!(
            ApiError::from(CredentialError::from(NikError::InvalidLength {
                expected: 16,
                actual: 3
            })),
            ApiError::BadRequest(_)
        ));
    }

    #[test]
    fn test_error_body_has_null_data() {
        let body = ApiResponseBody::new_error(StatusCode::UNAUTHORIZED, "nope".to_string());
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "status_code": 401, "message": "nope", "data": null })
        );
    }
}
