//! Authorization Gate Middleware
//!
//! Two stackable guards implementing the per-request state machine
//! `Unauthenticated -> Authenticated -> (optionally) Authorized-Admin`:
//!
//! - [`require_credential`] verifies the bearer credential and attaches the
//!   decoded [`Principal`] to request extensions.
//! - [`require_admin`] runs after it and requires the admin role claim.
//!
//! Neither gate touches the database; trust rests entirely on the
//! credential's signature, and the embedded role is not re-checked against
//! storage.

use axum::body::Body;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::principal::Principal;
use platform::token::TokenCodec;

use crate::error::{AuthError, AuthResult};

/// Credential gate state
#[derive(Clone)]
pub struct CredentialGate {
    pub codec: Arc<TokenCodec>,
}

impl CredentialGate {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }
}

/// Middleware requiring a valid bearer credential
///
/// Rejects with 401 when the `Authorization` header is absent or not a
/// bearer scheme, and 403 when the token fails verification. On success the
/// verified [`Principal`] is inserted into request extensions for handlers
/// and the admin gate.
pub async fn require_credential(
    gate: CredentialGate,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let principal = match authenticate(&gate, req.headers()) {
        Ok(principal) => principal,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

/// Middleware requiring the admin role claim
///
/// Must be stacked inside [`require_credential`]; a missing principal
/// extension is rejected as a missing credential.
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, Response> {
    match req.extensions().get::<Principal>() {
        Some(principal) if principal.is_admin => Ok(next.run(req).await),
        Some(_) => Err(AuthError::InsufficientPrivilege.into_response()),
        None => Err(AuthError::MissingCredential.into_response()),
    }
}

/// Extract and verify the bearer credential from request headers
fn authenticate(gate: &CredentialGate, headers: &HeaderMap) -> AuthResult<Principal> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingCredential)?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingCredential)?;

    gate.codec
        .verify::<Principal>(token)
        .map_err(|_| AuthError::InvalidCredential)
}
