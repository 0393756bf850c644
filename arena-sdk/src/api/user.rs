use crate::error::Result;
use crate::model::user::{ProfileUpdate, User};

#[async_trait::async_trait(?Send)]
pub trait UserApi {
    async fn me(&self) -> Result<User>;

    /// The reply body is ignored, callers re-read the viewer with `me`.
    async fn update_me(&self, update: ProfileUpdate) -> Result<()>;

    async fn delete_me(&self) -> Result<()>;
}
