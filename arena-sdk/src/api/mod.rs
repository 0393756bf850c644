use crate::error::{Error, Result};
use crate::storage::{LocalToken, TokenStore};

pub use crate::config::AUTHORIZE_HEADER;

use self::{
    auth::AuthApi,
    file::FileApi,
    friend::FriendApi,
    http::{AuthHttp, FileHttp, FriendHttp, UserHttp},
    user::UserApi,
};

pub mod auth;
pub mod file;
pub mod friend;
mod http;
pub mod user;

/// Bearer header value, read from local storage on every call.
///
/// Fails with [`Error::MissingToken`] before anything is sent when the viewer
/// has no stored credential.
pub fn token() -> Result<String> {
    LocalToken
        .load()
        .map(|token| format!("Bearer {}", token))
        .ok_or(Error::MissingToken)
}

pub fn users() -> Box<dyn UserApi> {
    Box::new(UserHttp)
}

pub fn auth() -> Box<dyn AuthApi> {
    Box::new(AuthHttp)
}

pub fn friends() -> Box<dyn FriendApi> {
    Box::new(FriendHttp)
}

pub fn file() -> Box<dyn FileApi> {
    Box::new(FileHttp)
}
