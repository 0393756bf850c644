use crate::error::Result;
use crate::model::user::{LoginRequest, LoginResp, RegisterRequest, TwoFactorSetup};

#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, req: LoginRequest) -> Result<LoginResp>;

    async fn register(&self, req: RegisterRequest) -> Result<()>;

    async fn twofa_enabled(&self) -> Result<bool>;

    async fn twofa_setup(&self) -> Result<TwoFactorSetup>;

    async fn twofa_verify(&self, code: String) -> Result<()>;
}
