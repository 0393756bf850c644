use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// Error body returned by the gateway on a non-2xx status.
///
/// Services are not consistent about the field name, so both `message` and
/// `error` are accepted; everything else is ignored.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    #[serde(default, skip_serializing)]
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiError {
    pub fn unknown(status: u16) -> Self {
        ApiError {
            status,
            ..Default::default()
        }
    }

    /// Parse the body best-effort; an unreadable body yields an error without
    /// a message.
    pub fn from_body(status: u16, body: &str) -> Self {
        let mut err = serde_json::from_str::<ApiError>(body).unwrap_or_default();
        err.status = status;
        err
    }

    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.message() {
            Some(msg) => write!(f, "{}", msg),
            None => write!(f, "request failed with status {}", self.status),
        }
    }
}
