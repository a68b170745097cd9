use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use tracing::debug;

use confessly_types::api::Claims;
use confessly_types::models::is_moderator;

use crate::error::ApiError;
use crate::state::{AppState, run_db};

/// Extract and validate JWT from Authorization header.
/// A missing token is 401, a bad or expired one is 403.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Access token required".into()))?;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        debug!("Rejected token: {}", e);
        ApiError::Forbidden("Invalid or expired token".into())
    })?;

    req.extensions_mut().insert(token_data.claims);
    Ok(next.run(req).await)
}

/// Must run after `require_auth`. Karma is read fresh on every request so a
/// user who drops below the threshold loses access immediately.
pub async fn require_moderator(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user_id = req
        .extensions()
        .get::<Claims>()
        .map(|c| c.sub)
        .ok_or_else(|| ApiError::Unauthorized("Access token required".into()))?;

    let user = run_db(&state, move |db| db.get_user_by_id(user_id)).await?;

    match user {
        Some(u) if is_moderator(u.karma) => Ok(next.run(req).await),
        _ => Err(ApiError::Forbidden(
            "Moderator privileges required (100+ karma)".into(),
        )),
    }
}
