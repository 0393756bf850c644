use gloo_net::http::Request;

use crate::api::user::UserApi;
use crate::api::{token, AUTHORIZE_HEADER};
use crate::config::api_url;
use crate::error::Result;
use crate::model::user::{MeResponse, ProfileUpdate, User};

use super::RespStatus;

pub struct UserHttp;

#[async_trait::async_trait(?Send)]
impl UserApi for UserHttp {
    async fn me(&self) -> Result<User> {
        let me: MeResponse = Request::get(&api_url("/api/user/me"))
            .header(AUTHORIZE_HEADER, &token()?)
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(me.into())
    }

    async fn update_me(&self, update: ProfileUpdate) -> Result<()> {
        log::debug!("update profile: {:?}", update);
        Request::put(&api_url("/api/user/me"))
            .header(AUTHORIZE_HEADER, &token()?)
            .json(&update)?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn delete_me(&self) -> Result<()> {
        Request::delete(&api_url("/api/user/me"))
            .header(AUTHORIZE_HEADER, &token()?)
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }
}
