use serde::{Deserialize, Serialize};
use yew::AttrValue;

use super::null_as_default;
use super::user::User;
use crate::config;

#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FriendshipStatus {
    #[default]
    Accepted,
}

/// accepted friend as returned by `/api/user/friends`
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Friend {
    #[serde(flatten)]
    pub user: User,
    #[serde(default, deserialize_with = "null_as_default")]
    pub friendship_status: FriendshipStatus,
    #[serde(default)]
    pub last_seen: Option<AttrValue>,
}

impl Friend {
    pub fn id(&self) -> i64 {
        self.user.id
    }
}

/// Pending friend request.
///
/// The server does not tag the direction; incoming requests carry the
/// `from_*` fields, outgoing ones the `to_*` fields.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct FriendRequest {
    pub id: i64,
    #[serde(default)]
    pub from_user_id: Option<i64>,
    #[serde(default)]
    pub to_user_id: Option<i64>,
    #[serde(default)]
    pub from_user_display_name: Option<AttrValue>,
    #[serde(default)]
    pub to_user_display_name: Option<AttrValue>,
    #[serde(default)]
    pub avatar_url: Option<AttrValue>,
    #[serde(default)]
    pub created_at: Option<AttrValue>,
}

impl FriendRequest {
    /// The other party of the request, whichever side is populated.
    pub fn counterpart_id(&self) -> Option<i64> {
        self.from_user_id.or(self.to_user_id)
    }

    pub fn counterpart_name(&self) -> AttrValue {
        self.from_user_display_name
            .clone()
            .or_else(|| self.to_user_display_name.clone())
            .unwrap_or_default()
    }

    pub fn counterpart_avatar(&self) -> Option<String> {
        self.counterpart_id().map(config::avatar_url)
    }
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct PendingRequests {
    #[serde(default, deserialize_with = "null_as_default")]
    pub incoming: Vec<FriendRequest>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub outgoing: Vec<FriendRequest>,
}

impl PendingRequests {
    pub fn incoming_from(&self, user_id: i64) -> Option<&FriendRequest> {
        self.incoming
            .iter()
            .find(|req| req.from_user_id == Some(user_id))
    }

    pub fn outgoing_to(&self, user_id: i64) -> Option<&FriendRequest> {
        self.outgoing.iter().find(|req| req.to_user_id == Some(user_id))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewFriendRequest {
    pub friend_id: i64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestAction {
    Accept,
    Reject,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RespondRequest {
    pub action: RequestAction,
}

#[derive(Deserialize, Debug, Default)]
pub struct FriendsResp {
    #[serde(default, deserialize_with = "null_as_default")]
    pub friends: Vec<Friend>,
}

#[derive(Deserialize, Debug, Default)]
pub struct OnlineFriendsResp {
    #[serde(default, deserialize_with = "null_as_default")]
    pub online_friends: Vec<User>,
}

#[derive(Deserialize, Debug, Default)]
pub struct SearchResp {
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<User>,
}

/// How a searched user relates to the viewer, derived from loaded lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Friend,
    OutgoingPending,
    /// carries the id of the request to accept
    IncomingPending(i64),
    Stranger,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friend_flattens_user_fields() {
        let friend: Friend = serde_json::from_str(
            r#"{"id":9,"display_name":"Bo","wins":3,"losses":1,"online":true,
                "friendship_status":"accepted","last_seen":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(friend.id(), 9);
        assert_eq!(friend.user.wins, 3);
        assert_eq!(friend.friendship_status, FriendshipStatus::Accepted);
        assert!(friend.last_seen.is_some());
    }

    #[test]
    fn requests_resolve_their_counterpart() {
        let pending: PendingRequests = serde_json::from_str(
            r#"{"incoming":[{"id":7,"from_user_id":42,"from_user_display_name":"Ana","avatar_url":"","created_at":"now"}],
                "outgoing":[{"id":8,"to_user_id":5,"to_user_display_name":"Cy","avatar_url":"","created_at":"now"}]}"#,
        )
        .unwrap();
        let incoming = &pending.incoming[0];
        assert_eq!(incoming.counterpart_id(), Some(42));
        assert_eq!(incoming.counterpart_name().as_str(), "Ana");
        assert_eq!(pending.outgoing[0].counterpart_id(), Some(5));
        assert_eq!(pending.incoming_from(42).map(|r| r.id), Some(7));
        assert_eq!(pending.outgoing_to(5).map(|r| r.id), Some(8));
        assert!(pending.outgoing_to(42).is_none());
    }

    #[test]
    fn null_fields_do_not_sink_the_request_list() {
        let pending: PendingRequests = serde_json::from_str(
            r#"{"incoming":[{"id":7,"from_user_id":42,"from_user_display_name":"Ana","avatar_url":null,"created_at":null}],
                "outgoing":null}"#,
        )
        .unwrap();
        assert_eq!(pending.incoming.len(), 1);
        assert_eq!(pending.incoming[0].avatar_url, None);
        assert_eq!(pending.incoming[0].counterpart_name().as_str(), "Ana");
        assert!(pending.outgoing.is_empty());

        let friends: FriendsResp = serde_json::from_str(
            r#"{"friends":[{"id":9,"display_name":"Bo","wins":null,"losses":2,"friendship_status":null,"last_seen":null}]}"#,
        )
        .unwrap();
        let bo = &friends.friends[0];
        assert_eq!((bo.user.wins, bo.user.losses), (0, 2));
        assert_eq!(bo.friendship_status, FriendshipStatus::Accepted);
        assert_eq!(bo.last_seen, None);
    }

    #[test]
    fn missing_collections_are_empty() {
        let pending: PendingRequests = serde_json::from_str("{}").unwrap();
        assert!(pending.incoming.is_empty() && pending.outgoing.is_empty());
        let friends: FriendsResp = serde_json::from_str("{}").unwrap();
        assert!(friends.friends.is_empty());
    }

    #[test]
    fn actions_serialize_lowercase() {
        let body = serde_json::to_string(&RespondRequest {
            action: RequestAction::Accept,
        })
        .unwrap();
        assert_eq!(body, r#"{"action":"accept"}"#);
    }
}
