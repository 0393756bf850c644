use serde::{Deserialize, Serialize};
use yew::AttrValue;

use super::null_as_default;
use crate::config;

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: AttrValue,
    #[serde(default)]
    pub avatar_url: Option<AttrValue>,
    #[serde(default)]
    pub bio: Option<AttrValue>,
    /// only present on the viewer's own record
    #[serde(default)]
    pub email: Option<AttrValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wins: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub losses: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub online: bool,
}

impl User {
    pub fn avatar(&self) -> String {
        config::avatar_url(self.id)
    }

    /// First letter shown when no avatar image can be loaded.
    pub fn initial(&self) -> char {
        self.display_name
            .chars()
            .chain(self.email.iter().flat_map(|e| e.chars()))
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }

    /// Rounded percentage of won games, zero before the first game.
    pub fn win_rate(&self) -> u32 {
        let total = u64::from(self.wins) + u64::from(self.losses);
        if total == 0 {
            return 0;
        }
        ((self.wins as f64 * 100.0) / total as f64).round() as u32
    }
}

/// `/api/user/me` answers either the bare record or a `{user}` / `{data}`
/// envelope depending on the gateway version.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum MeResponse {
    User { user: User },
    Data { data: User },
    Bare(User),
}

impl From<MeResponse> for User {
    fn from(value: MeResponse) -> Self {
        match value {
            MeResponse::User { user } => user,
            MeResponse::Data { data } => data,
            MeResponse::Bare(user) => user,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub display_name: String,
    pub bio: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twofa_code: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LoginResp {
    #[serde(alias = "access_token")]
    pub token: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct TwoFactorStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub twofa_enabled: bool,
}

/// Provisioning artifact of the first two-factor step.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct TwoFactorSetup {
    #[serde(rename = "qrCode", alias = "qr_code")]
    pub qr_code: AttrValue,
    pub secret: AttrValue,
}

#[derive(Serialize, Debug, Clone)]
pub struct TwoFactorVerify {
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_counters_default_to_zero() {
        let user: User = serde_json::from_str(r#"{"id":3,"display_name":"Ana"}"#).unwrap();
        assert_eq!(user.wins, 0);
        assert_eq!(user.losses, 0);
        assert!(!user.online);
        assert!(user.avatar().ends_with("/api/user/3/avatar"));
    }

    #[test]
    fn null_counters_read_as_zero() {
        let user: User = serde_json::from_str(
            r#"{"id":3,"display_name":null,"avatar_url":null,"wins":null,"losses":null,"online":null}"#,
        )
        .unwrap();
        assert_eq!(user.display_name.as_str(), "");
        assert_eq!(user.avatar_url, None);
        assert_eq!((user.wins, user.losses), (0, 0));
        assert!(!user.online);
        assert_eq!(user.initial(), 'U');
    }

    #[test]
    fn me_response_envelopes() {
        let bare: User = serde_json::from_str::<MeResponse>(r#"{"id":1,"display_name":"a"}"#)
            .unwrap()
            .into();
        let wrapped: User =
            serde_json::from_str::<MeResponse>(r#"{"user":{"id":1,"display_name":"a"}}"#)
                .unwrap()
                .into();
        let data: User =
            serde_json::from_str::<MeResponse>(r#"{"data":{"id":1,"display_name":"a"}}"#)
                .unwrap()
                .into();
        assert_eq!(bare, wrapped);
        assert_eq!(bare, data);
    }

    #[test]
    fn win_rate_rounds() {
        let mut user = User::default();
        assert_eq!(user.win_rate(), 0);
        user.wins = 2;
        user.losses = 1;
        assert_eq!(user.win_rate(), 67);
        user.losses = 0;
        assert_eq!(user.win_rate(), 100);
        user.wins = u32::MAX;
        user.losses = u32::MAX;
        assert_eq!(user.win_rate(), 50);
    }

    #[test]
    fn initial_falls_back() {
        let mut user = User {
            display_name: "ana".into(),
            ..Default::default()
        };
        assert_eq!(user.initial(), 'A');
        user.display_name = AttrValue::default();
        user.email = Some("zed@arena.io".into());
        assert_eq!(user.initial(), 'Z');
        user.email = None;
        assert_eq!(user.initial(), 'U');
    }

    #[test]
    fn login_request_omits_empty_code() {
        let req = LoginRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
            twofa_code: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("twofa_code").is_none());
    }

    #[test]
    fn two_factor_setup_wire_name() {
        let setup: TwoFactorSetup =
            serde_json::from_str(r#"{"qrCode":"data:image/png;base64,xx","secret":"ABC"}"#)
                .unwrap();
        assert_eq!(setup.secret.as_str(), "ABC");
        assert!(setup.qr_code.starts_with("data:image/png"));
    }
}
