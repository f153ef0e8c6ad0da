//! Login, signup and current-user handlers

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{AppError, AppState, MAX_BODY_SIZE};
use tally_core::models::{NewUser, Session, UserProfile};
use tally_core::{auth, Error};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login - Exchange credentials for a token
pub async fn login(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<Session>, AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let req: LoginRequest = serde_json::from_slice(&bytes)
        .map_err(|_| AppError::bad_request("Email and password are required"))?;

    let session = auth::login(state.store.as_ref(), &req.email, &req.password, Utc::now())
        .map_err(AppError::from_core)?;

    Ok(Json(session))
}

/// POST /api/auth/signup - Register a new account
pub async fn signup(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<Session>, AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let form: NewUser = serde_json::from_slice(&bytes)
        .map_err(|_| AppError::bad_request("Email, password and name are required"))?;

    let session = auth::signup(state.store.as_ref(), form, Utc::now()).map_err(|e| match e {
        // Existing accounts are reported as a plain bad request
        Error::Conflict(msg) => AppError::bad_request(&msg),
        other => AppError::from_core(other),
    })?;

    Ok(Json(session))
}

/// GET /api/auth/me - Profile of the token's owner
pub async fn get_me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<UserProfile>, AppError> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let user =
        auth::authenticate(state.store.as_ref(), authorization).map_err(AppError::from_core)?;

    Ok(Json(user.profile()))
}
