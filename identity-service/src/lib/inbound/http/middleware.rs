use axum::extract::Request;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// Raw token taken from the `Authorization` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

/// Middleware that requires a bearer token and adds it to request extensions.
///
/// The token is not verified here; handlers pass it to the credential service.
pub async fn require_bearer_token(mut req: Request, next: Next) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)
        .map_err(IntoResponse::into_response)?
        .to_string();

    req.extensions_mut().insert(BearerToken(token));

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization token".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    let token = auth_str.strip_prefix(BEARER_PREFIX).ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
    })?;

    if token.trim().is_empty() {
        return Err(ApiError::Unauthorized(
            "Missing Authorization token".to_string(),
        ));
    }

    Ok(token.trim())
}
