use async_trait::async_trait;
use web_sys::File;

use crate::error::Result;

#[async_trait(?Send)]
pub trait FileApi {
    /// the response body is ignored; callers re-hydrate the viewer instead
    async fn upload_avatar(&self, user_id: i64, file: &File) -> Result<()>;
}
