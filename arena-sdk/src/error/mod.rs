use thiserror::Error as ThisError;
use wasm_bindgen::JsValue;

pub mod api_err;

pub use api_err::ApiError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum Error {
    /// no token in local storage, nothing was sent
    #[error("you are not logged in")]
    MissingToken,
    /// request never got a response
    #[error("network error: {0}")]
    Network(String),
    /// server answered with a non-2xx status
    #[error("{0}")]
    Api(ApiError),
    #[error("invalid response: {0}")]
    Json(String),
    #[error("javascript error: {0}")]
    JavaScript(String),
}

impl Error {
    /// Message suitable for the page error slot. Only server-provided messages
    /// are shown verbatim; every other failure collapses into `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Api(err) => err.message().unwrap_or(fallback).to_string(),
            Error::MissingToken => self.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(err) => Some(err.status),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for Error {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(err) => Error::Json(err.to_string()),
            gloo_net::Error::JsError(err) => Error::Network(err.to_string()),
            other => Error::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Json(value.to_string())
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::JavaScript(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = Error::Api(ApiError::from_body(409, r#"{"message":"request exists"}"#));
        assert_eq!(err.user_message("Failed to send request"), "request exists");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn fallback_when_server_is_silent() {
        let err = Error::Api(ApiError::unknown(500));
        assert_eq!(err.user_message("Failed to respond"), "Failed to respond");

        let err = Error::Network("connection refused".to_string());
        assert_eq!(err.user_message("Failed to remove"), "Failed to remove");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn missing_token_is_explicit() {
        assert_eq!(
            Error::MissingToken.user_message("Failed to fetch friends"),
            "you are not logged in"
        );
    }
}
