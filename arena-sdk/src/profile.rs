use std::fmt::{Display, Formatter};
use std::future::Future;

use crate::api::user::UserApi;
use crate::config::{AVATAR_MAX_BYTES, AVATAR_TYPES};
use crate::error::Result;
use crate::model::user::{ProfileUpdate, TwoFactorSetup};
use crate::session::{self, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarRejection {
    UnsupportedType,
    TooLarge,
}

impl Display for AvatarRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AvatarRejection::UnsupportedType => write!(f, "Only JPEG and PNG images are allowed."),
            AvatarRejection::TooLarge => write!(f, "Image must be smaller than 2MB."),
        }
    }
}

/// Checked before a preview is made, nothing reaches the network otherwise.
pub fn validate_avatar(mime: &str, size: u64) -> std::result::Result<(), AvatarRejection> {
    if !AVATAR_TYPES.contains(&mime) {
        return Err(AvatarRejection::UnsupportedType);
    }
    if size > AVATAR_MAX_BYTES {
        return Err(AvatarRejection::TooLarge);
    }
    Ok(())
}

/// Two-factor enrollment as seen from the profile page.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum TwoFactorState {
    /// status request still pending
    #[default]
    Unknown,
    Disabled,
    /// secret issued, waiting for the first code
    Provisioning(TwoFactorSetup),
    Enabled,
}

impl TwoFactorState {
    pub fn from_status(enabled: bool) -> Self {
        if enabled {
            TwoFactorState::Enabled
        } else {
            TwoFactorState::Disabled
        }
    }

    pub fn provision(&mut self, setup: TwoFactorSetup) {
        if *self == TwoFactorState::Disabled {
            *self = TwoFactorState::Provisioning(setup);
        }
    }

    /// The code to submit, if verification makes sense right now.
    pub fn code_to_verify(&self, code: &str) -> Option<String> {
        let code = code.trim();
        match self {
            TwoFactorState::Provisioning(_) if !code.is_empty() => Some(code.to_string()),
            _ => None,
        }
    }

    pub fn verified(&mut self) {
        if matches!(self, TwoFactorState::Provisioning(_)) {
            *self = TwoFactorState::Enabled;
        }
    }
}

/// Avatar URL with a cache-busting suffix so a fresh upload shows up.
pub fn fresh_avatar_url(user_id: i64, millis: i64) -> String {
    format!("{}?t={}", crate::config::avatar_url(user_id), millis)
}

/// Stores the edited fields, then re-reads the viewer.
///
/// `Ok(None)` means the change was stored but the viewer could not be
/// re-read; the current session stays as it is.
pub async fn save(users: &dyn UserApi, update: ProfileUpdate) -> Result<Option<Session>> {
    users.update_me(update).await?;
    Ok(refreshed(users).await)
}

/// Awaits the avatar upload, then re-reads the viewer. Whatever the upload
/// answered is ignored.
pub async fn upload_avatar<F>(upload: F, users: &dyn UserApi) -> Result<Option<Session>>
where
    F: Future<Output = Result<()>>,
{
    upload.await?;
    Ok(refreshed(users).await)
}

async fn refreshed(users: &dyn UserApi) -> Option<Session> {
    match session::refresh(users).await {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("refresh viewer error: {:?}", err);
            None
        }
    }
}
