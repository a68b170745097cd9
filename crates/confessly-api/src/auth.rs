use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use tracing::{error, info};

use confessly_db::models::UserRow;
use confessly_types::api::{AuthResponse, Claims, LoginRequest, RegisterRequest, UserSummary};

use crate::error::ApiError;
use crate::state::{AppState, run_db};

const MIN_PASSWORD_LEN: usize = 6;
const MIN_HANDLE_LEN: usize = 3;

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    let email = req.email.trim().to_string();
    let handle = req.handle.trim().to_string();

    if email.is_empty() || req.password.is_empty() || handle.is_empty() {
        return Err(ApiError::bad_request("Email, password, and handle are required"));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::bad_request("Password must be at least 6 characters"));
    }
    if handle.chars().count() < MIN_HANDLE_LEN {
        return Err(ApiError::bad_request("Handle must be at least 3 characters"));
    }

    let password_hash = hash_password(req.password).await?;
    let bio = req.bio.unwrap_or_default();
    let favorite_snack = req.favorite_snack.unwrap_or_default();

    let user = run_db(&state, move |db| {
        match db.create_user(&email, &password_hash, &handle, &bio, &favorite_snack)? {
            Some(id) => db.get_user_by_id(id),
            None => Ok(None),
        }
    })
    .await?
    .ok_or_else(|| ApiError::bad_request("Email or handle already exists"))?;

    let token = create_token(&state, &user)?;
    info!(user_id = user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully".into(),
            token,
            user: summary(user),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let email = req.email.trim().to_string();
    let user = run_db(&state, move |db| db.get_user_by_email(&email))
        .await?
        .ok_or_else(invalid_credentials)?;

    if user.is_suspended {
        return Err(ApiError::Forbidden("Account is suspended".into()));
    }

    verify_password(req.password, user.password_hash.clone()).await?;

    let token = create_token(&state, &user)?;

    Ok(Json(AuthResponse {
        message: "Login successful".into(),
        token,
        user: summary(user),
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid credentials".into())
}

fn summary(user: UserRow) -> UserSummary {
    UserSummary {
        id: user.id,
        email: user.email,
        handle: user.handle,
        bio: user.bio,
        favorite_snack: user.favorite_snack,
        karma: user.karma,
    }
}

/// Argon2id PHC string with a random salt. Blocks; async callers go through
/// `hash_password`.
pub fn hash_password_blocking(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| anyhow::anyhow!("password hashing failed: {}", e))
}

async fn hash_password(password: String) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || hash_password_blocking(&password))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(anyhow::anyhow!("blocking task failed: {}", e))
        })?
        .map_err(ApiError::from)
}

async fn verify_password(password: String, stored: String) -> Result<(), ApiError> {
    let verified = tokio::task::spawn_blocking(move || {
        // Unparseable hashes belong to accounts that cannot log in.
        PasswordHash::new(&stored)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    })
    .await
    .map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        ApiError::Internal(anyhow::anyhow!("blocking task failed: {}", e))
    })?;

    if verified { Ok(()) } else { Err(invalid_credentials()) }
}

pub fn create_token(state: &AppState, user: &UserRow) -> anyhow::Result<String> {
    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        exp: (chrono::Utc::now() + chrono::Duration::days(state.config.token_ttl_days)).timestamp()
            as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.config.jwt_secret.as_bytes()),
    )?;

    Ok(token)
}
