use auth::TokenError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified identity through the request.
///
/// Handlers must treat this as the authenticated identity; usernames in the
/// path or body only select resources.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Middleware guarding protected routes.
///
/// Verifies the bearer token's signature and expiry, then stores the
/// embedded identity in request extensions. Every failure is a 401 with a
/// structured body; no token, a non-bearer header, an expired token and a
/// bad signature are distinguished only by the message.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).map_err(reject)?;

    let claims = state.authenticator.verify_token(token).map_err(reject)?;

    req.extensions_mut().insert(AuthenticatedUser {
        username: claims.sub,
    });

    Ok(next.run(req).await)
}

fn reject(err: TokenError) -> Response {
    tracing::warn!(error = %err, "Rejected bearer token");
    ApiError::from(err).into_response()
}

fn extract_bearer_token(req: &Request) -> Result<&str, TokenError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or(TokenError::Missing)?;

    let auth_str = auth_header.to_str().map_err(|_| TokenError::Missing)?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or(TokenError::Missing)
}
