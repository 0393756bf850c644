use gloo_net::http::Request;

use crate::api::friend::FriendApi;
use crate::api::{token, AUTHORIZE_HEADER};
use crate::config::api_url;
use crate::error::Result;
use crate::model::friend::{
    Friend, FriendsResp, NewFriendRequest, OnlineFriendsResp, PendingRequests, RequestAction,
    RespondRequest, SearchResp,
};
use crate::model::user::User;

use super::RespStatus;

pub struct FriendHttp;

#[async_trait::async_trait(?Send)]
impl FriendApi for FriendHttp {
    async fn friends(&self) -> Result<Vec<Friend>> {
        let resp: FriendsResp = Request::get(&api_url("/api/user/friends"))
            .header(AUTHORIZE_HEADER, &token()?)
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(resp.friends)
    }

    async fn online_friends(&self) -> Result<Vec<User>> {
        let resp: OnlineFriendsResp = Request::get(&api_url("/api/user/friends/online"))
            .header(AUTHORIZE_HEADER, &token()?)
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(resp.online_friends)
    }

    async fn requests(&self) -> Result<PendingRequests> {
        let requests = Request::get(&api_url("/api/user/friends/requests"))
            .header(AUTHORIZE_HEADER, &token()?)
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(requests)
    }

    async fn search(&self, query: &str, limit: u32) -> Result<Vec<User>> {
        let limit = limit.to_string();
        let resp: SearchResp = Request::get(&api_url("/api/user/search"))
            .query([("q", query), ("limit", limit.as_str())])
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(resp.users)
    }

    async fn send_request(&self, friend_id: i64) -> Result<()> {
        Request::post(&api_url("/api/user/friends"))
            .header(AUTHORIZE_HEADER, &token()?)
            .json(&NewFriendRequest { friend_id })?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn respond(&self, request_id: i64, action: RequestAction) -> Result<()> {
        Request::patch(&api_url(&format!("/api/user/friends/{}", request_id)))
            .header(AUTHORIZE_HEADER, &token()?)
            .json(&RespondRequest { action })?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        Request::delete(&api_url(&format!("/api/user/friends/{}", id)))
            .header(AUTHORIZE_HEADER, &token()?)
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }
}
