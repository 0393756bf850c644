use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::api::file::FileApi;
use crate::api::{token, AUTHORIZE_HEADER};
use crate::config::api_url;
use crate::error::Result;

use super::RespStatus;

pub struct FileHttp;

#[async_trait(?Send)]
impl FileApi for FileHttp {
    async fn upload_avatar(&self, user_id: i64, file: &File) -> Result<()> {
        let auth = token()?;
        let form = FormData::new()?;
        form.append_with_blob_and_filename("avatar", file, &file.name())?;

        let url = api_url(&format!("/api/user/{}/avatar", user_id));
        Request::post(&url)
            .header(AUTHORIZE_HEADER, &auth)
            .body(form)?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }
}
