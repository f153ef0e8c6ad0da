//! Accounts and bearer tokens
//!
//! Tokens are opaque strings whose prefix identifies the user:
//! - `demo-token-<ms>` always belongs to the demo account
//! - `token-<suffix>` belongs to the user with id `user-<suffix>`
//!
//! There is no signature or expiry. Anyone who can guess a user id can
//! build a matching token; keep the server on trusted networks.

use chrono::{DateTime, TimeZone, Utc};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{NewUser, Session, User};
use crate::store::UserStore;

pub const DEMO_USER_ID: &str = "demo-user-1";
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password";

const BEARER_PREFIX: &str = "Bearer ";
const DEMO_TOKEN_PREFIX: &str = "demo-token-";
const TOKEN_PREFIX: &str = "token-";
const USER_ID_PREFIX: &str = "user-";

/// The built-in demo account
pub fn demo_user() -> User {
    User {
        id: DEMO_USER_ID.to_string(),
        email: DEMO_EMAIL.to_string(),
        password: DEMO_PASSWORD.to_string(),
        name: "Demo User".to_string(),
        age: Some(30),
        occupation: Some("Software Developer".to_string()),
        company: Some("Tech Corp".to_string()),
        industry: Some("Technology".to_string()),
        annual_income: Some(75_000.0),
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_default(),
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    header?.strip_prefix(BEARER_PREFIX)
}

/// Map a token to the id of the user it was issued for
pub fn user_id_for_token(token: &str) -> Option<String> {
    if token.starts_with(DEMO_TOKEN_PREFIX) {
        return Some(DEMO_USER_ID.to_string());
    }
    token
        .strip_prefix(TOKEN_PREFIX)
        .map(|suffix| format!("{}{}", USER_ID_PREFIX, suffix))
}

/// Resolve an `Authorization` header value straight to a user id
pub fn resolve_authorization(header: Option<&str>) -> Option<String> {
    bearer_token(header).and_then(user_id_for_token)
}

/// Build a token that [`user_id_for_token`] maps back to `user_id`
pub fn issue_token(user_id: &str, issued_at_millis: i64) -> String {
    match user_id.strip_prefix(USER_ID_PREFIX) {
        Some(suffix) => format!("{}{}", TOKEN_PREFIX, suffix),
        None => format!("{}{}", DEMO_TOKEN_PREFIX, issued_at_millis),
    }
}

/// Check credentials and issue a token
pub fn login<S: UserStore + ?Sized>(
    store: &S,
    email: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<Session> {
    let user = store
        .find_user_by_email(email)?
        .filter(|u| u.password == password)
        .ok_or_else(|| {
            warn!(email = email, "Invalid credentials");
            Error::Unauthorized("Invalid credentials".into())
        })?;

    info!(user = %user.id, "Login successful");
    Ok(Session {
        token: issue_token(&user.id, now.timestamp_millis()),
        user: user.profile(),
    })
}

/// Register a new account and issue its first token
pub fn signup<S: UserStore + ?Sized>(
    store: &S,
    form: NewUser,
    now: DateTime<Utc>,
) -> Result<Session> {
    if form.email.trim().is_empty() || form.password.is_empty() || form.name.trim().is_empty() {
        return Err(Error::InvalidData(
            "email, password and name are required".into(),
        ));
    }

    if store.find_user_by_email(&form.email)?.is_some() {
        return Err(Error::Conflict("User already exists".into()));
    }

    let mut millis = now.timestamp_millis();
    let mut user = User {
        id: String::new(),
        email: form.email,
        password: form.password,
        name: form.name,
        age: form.age,
        occupation: form.occupation,
        company: form.company,
        industry: form.industry,
        annual_income: form.annual_income,
        created_at: now,
    };

    // Ids derive from the clock; step past any signup that took this millisecond
    loop {
        user.id = format!("{}{}", USER_ID_PREFIX, millis);
        match store.insert_user(user.clone()) {
            Ok(()) => break,
            Err(Error::Conflict(_)) if store.find_user_by_email(&user.email)?.is_none() => {
                millis += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(user = %user.id, "Signup successful");
    Ok(Session {
        token: issue_token(&user.id, millis),
        user: user.profile(),
    })
}

/// Look up the user a bearer header belongs to
pub fn authenticate<S: UserStore + ?Sized>(store: &S, header: Option<&str>) -> Result<User> {
    let token =
        bearer_token(header).ok_or_else(|| Error::Unauthorized("No token provided".into()))?;
    let user_id =
        user_id_for_token(token).ok_or_else(|| Error::Unauthorized("Invalid token".into()))?;
    store
        .find_user(&user_id)?
        .ok_or_else(|| Error::Unauthorized("Invalid token".into()))
}
