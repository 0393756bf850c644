use gloo_net::http::Request;

use crate::api::auth::AuthApi;
use crate::api::{token, AUTHORIZE_HEADER};
use crate::config::api_url;
use crate::error::Result;
use crate::model::user::{
    LoginRequest, LoginResp, RegisterRequest, TwoFactorSetup, TwoFactorStatus, TwoFactorVerify,
};

use super::RespStatus;

pub struct AuthHttp;

#[async_trait::async_trait(?Send)]
impl AuthApi for AuthHttp {
    async fn login(&self, req: LoginRequest) -> Result<LoginResp> {
        let resp = Request::post(&api_url("/api/auth/login"))
            .json(&req)?
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(resp)
    }

    async fn register(&self, req: RegisterRequest) -> Result<()> {
        log::debug!("register {}", req.email);
        Request::post(&api_url("/api/auth/register"))
            .json(&req)?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn twofa_enabled(&self) -> Result<bool> {
        let status: TwoFactorStatus = Request::get(&api_url("/api/auth/2fa/status"))
            .header(AUTHORIZE_HEADER, &token()?)
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(status.twofa_enabled)
    }

    async fn twofa_setup(&self) -> Result<TwoFactorSetup> {
        let setup = Request::post(&api_url("/api/auth/2fa/setup"))
            .header(AUTHORIZE_HEADER, &token()?)
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(setup)
    }

    async fn twofa_verify(&self, code: String) -> Result<()> {
        Request::post(&api_url("/api/auth/2fa/verify"))
            .header(AUTHORIZE_HEADER, &token()?)
            .json(&TwoFactorVerify { code })?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }
}
