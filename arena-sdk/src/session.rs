//! Who is looking at the page.
//!
//! The viewer is resolved once at start-up from the stored token and kept in
//! [`SessionState`](crate::state::SessionState). Guarded pages receive the
//! resolved user as a property instead of reading the store themselves.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::api::auth::AuthApi;
use crate::api::user::UserApi;
use crate::error::{Error, Result};
use crate::model::user::{LoginRequest, User};
use crate::storage::TokenStore;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Session {
    /// token exchange still in flight, no navigation decision yet
    #[default]
    Loading,
    Authenticated(User),
    Unauthenticated,
}

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    exp: Option<i64>,
}

/// Reads the `exp` claim of a JWT without verifying it. Tokens that are not
/// JWTs, or carry no expiry, are left for the server to judge.
pub fn token_expired(token: &str, now_secs: i64) -> bool {
    token
        .split('.')
        .nth(1)
        .and_then(|payload| URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok())
        .and_then(|decoded| serde_json::from_slice::<Claims>(&decoded).ok())
        .and_then(|claims| claims.exp)
        .map(|exp| exp <= now_secs)
        .unwrap_or(false)
}

/// Whether the server refused the credential itself rather than failing.
pub fn rejects_token(err: &Error) -> bool {
    matches!(err.status(), Some(401) | Some(403))
}

pub async fn hydrate(users: &dyn UserApi, tokens: &dyn TokenStore) -> Session {
    let Some(token) = tokens.load() else {
        return Session::Unauthenticated;
    };
    if token_expired(&token, chrono::Utc::now().timestamp()) {
        log::info!("stored token expired");
        tokens.clear();
        return Session::Unauthenticated;
    }
    match users.me().await {
        Ok(user) => Session::Authenticated(user),
        Err(err) => {
            log::warn!("session hydration failed: {:?}", err);
            if rejects_token(&err) {
                tokens.clear();
            }
            Session::Unauthenticated
        }
    }
}

/// Exchanges credentials for a token, then loads the viewer.
///
/// A failing profile fetch after a successful login still counts as a login;
/// the session stays unauthenticated until the next hydration.
pub async fn login(
    auth: &dyn AuthApi,
    users: &dyn UserApi,
    tokens: &dyn TokenStore,
    req: LoginRequest,
) -> Result<Session> {
    let resp = auth.login(req).await?;
    tokens.save(&resp.token)?;
    match users.me().await {
        Ok(user) => Ok(Session::Authenticated(user)),
        Err(err) => {
            log::warn!("profile fetch after login failed: {:?}", err);
            Ok(Session::Unauthenticated)
        }
    }
}

/// Re-reads the viewer after a profile change.
pub async fn refresh(users: &dyn UserApi) -> Result<Session> {
    users.me().await.map(Session::Authenticated)
}

pub fn logout(tokens: &dyn TokenStore) -> Session {
    tokens.clear();
    Session::Unauthenticated
}

/// Irreversible. The token is only dropped once the server confirmed.
pub async fn delete_account(users: &dyn UserApi, tokens: &dyn TokenStore) -> Result<Session> {
    users.delete_me().await?;
    Ok(logout(tokens))
}
