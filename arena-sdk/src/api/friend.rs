use crate::{
    error::Result,
    model::{
        friend::{Friend, PendingRequests, RequestAction},
        user::User,
    },
};

#[async_trait::async_trait(?Send)]
pub trait FriendApi {
    async fn friends(&self) -> Result<Vec<Friend>>;

    async fn online_friends(&self) -> Result<Vec<User>>;

    async fn requests(&self) -> Result<PendingRequests>;

    /// unauthenticated, matches display names
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<User>>;

    async fn send_request(&self, friend_id: i64) -> Result<()>;

    async fn respond(&self, request_id: i64, action: RequestAction) -> Result<()>;

    /// removes a friendship or drops a pending request, either direction
    async fn delete(&self, id: i64) -> Result<()>;
}
