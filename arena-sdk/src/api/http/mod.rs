use async_trait::async_trait;
use gloo_net::http::Response;

pub use auth::*;
pub use file::*;
pub use friend::*;
pub use user::*;

use crate::error::{api_err::ApiError, Error, Result};

mod auth;
mod file;
mod friend;
mod user;

#[async_trait(?Send)]
pub trait RespStatus: Sized {
    async fn success(self) -> Result<Self>;
}

#[async_trait(?Send)]
impl RespStatus for Response {
    async fn success(self) -> Result<Self> {
        if self.ok() {
            Ok(self)
        } else {
            // the body is best-effort, a gateway page is not json
            let body = self.text().await.unwrap_or_default();
            let err = ApiError::from_body(self.status(), &body);
            log::warn!("{} {} -> {}", self.status(), self.url(), err);
            Err(Error::Api(err))
        }
    }
}
