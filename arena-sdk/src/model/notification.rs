use yew::AttrValue;
use yewdux::{Dispatch, Store};

use crate::error::Error;

/// Transient toast, rendered by the notification component.
#[derive(Default, Debug, Clone, PartialEq, Store)]
pub struct Notification {
    pub content: AttrValue,
    pub delay: u32,
    pub type_: NotificationType,
    pub error: Option<Error>,
}

impl Notification {
    fn new(content: impl ToString, type_: NotificationType, delay: u32) -> Self {
        Self {
            content: content.to_string().into(),
            type_,
            delay,
            error: None,
        }
    }

    pub fn info(content: impl ToString) -> Self {
        Self::new(content, NotificationType::Info, 3000)
    }

    pub fn success(content: impl ToString) -> Self {
        Self::new(content, NotificationType::Success, 3000)
    }

    pub fn error(err: Error, fallback: &str) -> Self {
        let mut noti = Self::new(err.user_message(fallback), NotificationType::Error, 5000);
        noti.error = Some(err);
        noti
    }

    pub fn notify(self) {
        Dispatch::<Notification>::global().set(self);
    }
}

#[derive(Default, Clone, Debug, PartialEq)]
pub enum NotificationType {
    #[default]
    Info,
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn error_toast_uses_server_message() {
        let err = Error::Api(ApiError::from_body(400, r#"{"message":"bad code"}"#));
        let noti = Notification::error(err.clone(), "Invalid 2FA code.");
        assert_eq!(noti.content.as_str(), "bad code");
        assert_eq!(noti.type_, NotificationType::Error);
        assert_eq!(noti.error, Some(err));
        assert_eq!(noti.delay, 5000);
    }
}
