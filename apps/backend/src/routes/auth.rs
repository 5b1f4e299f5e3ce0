//! Registration, login and the authentication middleware

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
    Extension, Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{AuthResponse, CredentialsRequest, UserResponse};
use crate::AppState;

/// Authenticated user info stored in request extensions
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub session_id: Uuid,
}

/// Auth middleware - resolves the bearer token to a login session
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response> {
    // Extract Bearer token
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization format".to_string()))?;

    // Look up session by token
    let session = state
        .db
        .get_session_by_token(token)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid session token".to_string()))?;

    // Update last_seen
    state.db.update_last_seen(session.id).await?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: session.user_id,
        session_id: session.id,
    });

    Ok(next.run(request).await)
}

/// POST /api/auth/register
/// Creates a user account and returns a session token
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let email = payload.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::BadRequest("invalid email".to_string()));
    }
    if payload.password.is_empty() {
        return Err(ApiError::BadRequest("password must not be empty".to_string()));
    }

    let password_hash = hash_password(&payload.password)?;
    let user = state.db.create_user(email, &password_hash).await?;
    let session = state.db.create_session(user.id).await?;

    tracing::info!("Registered new user: {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: session.token,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>> {
    // Missing user and wrong password are indistinguishable to the caller.
    let user = state
        .db
        .get_user_by_email(payload.email.trim())
        .await?
        .ok_or_else(|| ApiError::BadRequest("invalid credentials".to_string()))?;

    if !verify_password(&payload.password, &user.password_hash) {
        return Err(ApiError::BadRequest("invalid credentials".to_string()));
    }

    let session = state.db.create_session(user.id).await?;

    Ok(Json(AuthResponse {
        token: session.token,
    }))
}

/// GET /api/user
/// Returns the authenticated user without the credential hash
pub async fn current_user(
    Extension(auth): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>> {
    let user = state
        .db
        .get_user(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse {
        id: user.id,
        email: user.email,
        created_at: user.created_at,
    }))
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {}", e)))
}

fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
