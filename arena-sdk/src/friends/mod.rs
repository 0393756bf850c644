//! State and server calls behind the friends page.
//!
//! The server owns every friendship transition. Mutations never patch the
//! local lists; they report success and the affected lists are fetched again.

use futures::future::{join, join3};
use yew::AttrValue;

use crate::api::friend::FriendApi;
use crate::config::SEARCH_LIMIT;
use crate::model::friend::{Friend, PendingRequests, Relation, RequestAction};
use crate::model::user::User;

mod search;

pub use search::{SearchGate, SearchInput};

pub const FETCH_FRIENDS_FAILED: &str = "Failed to fetch friends";
pub const FETCH_REQUESTS_FAILED: &str = "Failed to fetch requests";
pub const SEARCH_FAILED: &str = "Search failed";
pub const SEND_FAILED: &str = "Failed to send request";
pub const RESPOND_FAILED: &str = "Failed to respond";
pub const REMOVE_FAILED: &str = "Failed to remove";

/// Completed mutation, used for the confirmation toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Sent,
    Accepted,
    Rejected,
    Cancelled,
    Removed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FriendsEvent {
    Friends(Vec<Friend>),
    Online(Vec<User>),
    Requests(PendingRequests),
    SearchResults { seq: u64, users: Vec<User> },
    SearchFailed { seq: u64, message: String },
    Done(Mutation),
    Failed(String),
}

/// Page-local copy of the viewer's social graph.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FriendsBook {
    pub friends: Vec<Friend>,
    pub online: Vec<User>,
    pub requests: PendingRequests,
    pub results: Vec<User>,
    pub searching: bool,
    pub error: Option<AttrValue>,
    search: SearchGate,
}

impl FriendsBook {
    pub fn relation(&self, user_id: i64) -> Relation {
        if self.is_friend(user_id) {
            Relation::Friend
        } else if self.requests.outgoing_to(user_id).is_some() {
            Relation::OutgoingPending
        } else if let Some(req) = self.requests.incoming_from(user_id) {
            Relation::IncomingPending(req.id)
        } else {
            Relation::Stranger
        }
    }

    pub fn is_friend(&self, user_id: i64) -> bool {
        self.friends.iter().any(|f| f.id() == user_id)
    }

    pub fn is_online(&self, user_id: i64) -> bool {
        self.online.iter().any(|u| u.id == user_id)
    }

    pub fn search_input(&mut self, query: &str) -> SearchInput {
        let input = self.search.input(query);
        if input == SearchInput::Clear {
            self.results.clear();
            self.searching = false;
        }
        input
    }

    /// Debounce tick; returns the query to send, if still wanted.
    pub fn search_fire(&mut self, seq: u64) -> Option<String> {
        let query = self.search.fire(seq);
        if query.is_some() {
            self.searching = true;
        }
        query
    }

    /// Folds a server outcome into the page state, returns whether to render.
    pub fn apply(&mut self, event: FriendsEvent) -> bool {
        match event {
            FriendsEvent::Friends(friends) => {
                self.friends = friends;
                true
            }
            FriendsEvent::Online(online) => {
                self.online = online;
                true
            }
            FriendsEvent::Requests(requests) => {
                self.requests = requests;
                true
            }
            FriendsEvent::SearchResults { seq, users } => {
                if !self.search.is_current(seq) {
                    log::debug!("drop stale search response {seq}");
                    return false;
                }
                self.results = users;
                self.searching = false;
                true
            }
            FriendsEvent::SearchFailed { seq, message } => {
                if !self.search.is_current(seq) {
                    return false;
                }
                self.searching = false;
                self.error = Some(message.into());
                true
            }
            FriendsEvent::Done(_) => false,
            FriendsEvent::Failed(message) => {
                self.error = Some(message.into());
                true
            }
        }
    }
}

pub async fn fetch_friends(api: &dyn FriendApi) -> FriendsEvent {
    match api.friends().await {
        Ok(friends) => FriendsEvent::Friends(friends),
        Err(err) => {
            log::error!("fetch friends error: {:?}", err);
            FriendsEvent::Failed(err.user_message(FETCH_FRIENDS_FAILED))
        }
    }
}

/// Polled in the background, so a failure is only logged.
pub async fn fetch_online(api: &dyn FriendApi) -> Option<FriendsEvent> {
    match api.online_friends().await {
        Ok(online) => Some(FriendsEvent::Online(online)),
        Err(err) => {
            log::warn!("fetch online friends error: {:?}", err);
            None
        }
    }
}

pub async fn fetch_requests(api: &dyn FriendApi) -> FriendsEvent {
    match api.requests().await {
        Ok(requests) => FriendsEvent::Requests(requests),
        Err(err) => {
            log::error!("fetch friend requests error: {:?}", err);
            FriendsEvent::Failed(err.user_message(FETCH_REQUESTS_FAILED))
        }
    }
}

/// Initial page load, the three lists are independent.
pub async fn load(api: &dyn FriendApi) -> Vec<FriendsEvent> {
    let (friends, online, requests) =
        join3(fetch_friends(api), fetch_online(api), fetch_requests(api)).await;
    let mut events = vec![friends, requests];
    events.extend(online);
    events
}

pub async fn search(api: &dyn FriendApi, viewer_id: i64, query: String, seq: u64) -> FriendsEvent {
    match api.search(&query, SEARCH_LIMIT).await {
        Ok(users) => FriendsEvent::SearchResults {
            seq,
            users: users.into_iter().filter(|u| u.id != viewer_id).collect(),
        },
        Err(err) => {
            log::error!("search users error: {:?}", err);
            FriendsEvent::SearchFailed {
                seq,
                message: err.user_message(SEARCH_FAILED),
            }
        }
    }
}

pub async fn send_request(api: &dyn FriendApi, friend_id: i64) -> Vec<FriendsEvent> {
    match api.send_request(friend_id).await {
        Ok(()) => vec![FriendsEvent::Done(Mutation::Sent), fetch_requests(api).await],
        Err(err) => vec![FriendsEvent::Failed(err.user_message(SEND_FAILED))],
    }
}

pub async fn respond_to_request(
    api: &dyn FriendApi,
    request_id: i64,
    action: RequestAction,
) -> Vec<FriendsEvent> {
    let (result, done) = match action {
        RequestAction::Accept => (api.respond(request_id, action).await, Mutation::Accepted),
        RequestAction::Reject => (api.delete(request_id).await, Mutation::Rejected),
    };
    match result {
        Ok(()) => refetch_after(api, done).await,
        Err(err) => vec![FriendsEvent::Failed(err.user_message(RESPOND_FAILED))],
    }
}

pub async fn cancel_request(api: &dyn FriendApi, request_id: i64) -> Vec<FriendsEvent> {
    match api.delete(request_id).await {
        Ok(()) => refetch_after(api, Mutation::Cancelled).await,
        Err(err) => vec![FriendsEvent::Failed(err.user_message(REMOVE_FAILED))],
    }
}

pub async fn remove_friendship(api: &dyn FriendApi, friend_id: i64) -> Vec<FriendsEvent> {
    match api.delete(friend_id).await {
        Ok(()) => refetch_after(api, Mutation::Removed).await,
        Err(err) => vec![FriendsEvent::Failed(err.user_message(REMOVE_FAILED))],
    }
}

async fn refetch_after(api: &dyn FriendApi, done: Mutation) -> Vec<FriendsEvent> {
    let (requests, friends) = join(fetch_requests(api), fetch_friends(api)).await;
    vec![FriendsEvent::Done(done), requests, friends]
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use crate::error::{ApiError, Error, Result};
    use crate::model::friend::FriendRequest;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Friends,
        Online,
        Requests,
        Search(String),
        Send(i64),
        Respond(i64, RequestAction),
        Delete(i64),
    }

    const VIEWER: i64 = 1;

    /// In-memory gateway that applies friendship transitions like the server.
    #[derive(Default)]
    struct FakeGateway {
        calls: RefCell<Vec<Call>>,
        friends: RefCell<Vec<Friend>>,
        requests: RefCell<PendingRequests>,
        users: Vec<User>,
        fail: RefCell<Option<Error>>,
        next_request_id: Cell<i64>,
    }

    impl FakeGateway {
        fn record(&self, call: Call) -> Result<()> {
            self.calls.borrow_mut().push(call);
            match self.fail.borrow_mut().take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn user(&self, id: i64) -> User {
            self.users
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .unwrap_or(User {
                    id,
                    ..Default::default()
                })
        }
    }

    #[async_trait::async_trait(?Send)]
    impl FriendApi for FakeGateway {
        async fn friends(&self) -> Result<Vec<Friend>> {
            self.record(Call::Friends)?;
            Ok(self.friends.borrow().clone())
        }

        async fn online_friends(&self) -> Result<Vec<User>> {
            self.record(Call::Online)?;
            Ok(self
                .friends
                .borrow()
                .iter()
                .filter(|f| f.user.online)
                .map(|f| f.user.clone())
                .collect())
        }

        async fn requests(&self) -> Result<PendingRequests> {
            self.record(Call::Requests)?;
            Ok(self.requests.borrow().clone())
        }

        async fn search(&self, query: &str, limit: u32) -> Result<Vec<User>> {
            self.record(Call::Search(query.to_string()))?;
            Ok(self
                .users
                .iter()
                .filter(|u| u.display_name.to_lowercase().contains(&query.to_lowercase()))
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn send_request(&self, friend_id: i64) -> Result<()> {
            self.record(Call::Send(friend_id))?;
            let id = self.next_request_id.get() + 100;
            self.next_request_id.set(id);
            self.requests.borrow_mut().outgoing.push(FriendRequest {
                id,
                to_user_id: Some(friend_id),
                to_user_display_name: Some(self.user(friend_id).display_name),
                ..Default::default()
            });
            Ok(())
        }

        async fn respond(&self, request_id: i64, action: RequestAction) -> Result<()> {
            self.record(Call::Respond(request_id, action))?;
            let mut requests = self.requests.borrow_mut();
            if let Some(pos) = requests.incoming.iter().position(|r| r.id == request_id) {
                let req = requests.incoming.remove(pos);
                if let Some(from) = req.from_user_id {
                    self.friends.borrow_mut().push(Friend {
                        user: self.user(from),
                        ..Default::default()
                    });
                }
            }
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<()> {
            self.record(Call::Delete(id))?;
            let mut requests = self.requests.borrow_mut();
            requests.incoming.retain(|r| r.id != id);
            requests.outgoing.retain(|r| r.id != id);
            self.friends.borrow_mut().retain(|f| f.id() != id);
            Ok(())
        }
    }

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            display_name: name.to_string().into(),
            ..Default::default()
        }
    }

    fn gateway_with_ana_request() -> FakeGateway {
        let gateway = FakeGateway {
            users: vec![user(VIEWER, "Me"), user(42, "Ana"), user(5, "Anabel")],
            ..Default::default()
        };
        gateway.requests.borrow_mut().incoming.push(FriendRequest {
            id: 7,
            from_user_id: Some(42),
            from_user_display_name: Some("Ana".into()),
            ..Default::default()
        });
        gateway
    }

    fn apply_all(book: &mut FriendsBook, events: Vec<FriendsEvent>) {
        for event in events {
            book.apply(event);
        }
    }

    #[test]
    fn accepting_request_patches_then_refetches_both_lists() {
        let gateway = gateway_with_ana_request();
        let mut book = FriendsBook::default();
        apply_all(&mut book, block_on(load(&gateway)));
        assert!(book.friends.is_empty());
        assert_eq!(book.relation(42), Relation::IncomingPending(7));

        gateway.calls.borrow_mut().clear();
        let events = block_on(respond_to_request(&gateway, 7, RequestAction::Accept));

        let calls = gateway.calls();
        assert_eq!(calls[0], Call::Respond(7, RequestAction::Accept));
        assert_eq!(calls.len(), 3);
        assert!(calls[1..].contains(&Call::Requests));
        assert!(calls[1..].contains(&Call::Friends));
        assert_eq!(events[0], FriendsEvent::Done(Mutation::Accepted));

        apply_all(&mut book, events);
        assert!(book.requests.incoming.is_empty());
        assert!(book.is_friend(42));
        assert_eq!(book.relation(42), Relation::Friend);
    }

    #[test]
    fn sent_request_shows_as_outgoing_after_refetch() {
        let gateway = gateway_with_ana_request();
        let mut book = FriendsBook::default();

        let events = block_on(send_request(&gateway, 5));
        assert_eq!(gateway.calls(), vec![Call::Send(5), Call::Requests]);
        apply_all(&mut book, events);

        assert_eq!(book.relation(5), Relation::OutgoingPending);
        let incoming = book.requests.incoming_from(5);
        assert!(incoming.is_none());
    }

    #[test]
    fn reject_and_cancel_use_delete() {
        let gateway = gateway_with_ana_request();
        let mut book = FriendsBook::default();

        apply_all(
            &mut book,
            block_on(respond_to_request(&gateway, 7, RequestAction::Reject)),
        );
        assert_eq!(gateway.calls()[0], Call::Delete(7));
        assert_eq!(book.relation(42), Relation::Stranger);

        block_on(send_request(&gateway, 42));
        let request_id = gateway.requests.borrow().outgoing[0].id;
        gateway.calls.borrow_mut().clear();
        apply_all(&mut book, block_on(cancel_request(&gateway, request_id)));
        assert_eq!(gateway.calls()[0], Call::Delete(request_id));
        assert!(book.requests.outgoing.is_empty());
    }

    #[test]
    fn removing_a_friend_refetches() {
        let gateway = gateway_with_ana_request();
        gateway.friends.borrow_mut().push(Friend {
            user: user(5, "Anabel"),
            ..Default::default()
        });
        let mut book = FriendsBook::default();
        apply_all(&mut book, block_on(load(&gateway)));
        assert!(book.is_friend(5));

        let events = block_on(remove_friendship(&gateway, 5));
        assert_eq!(events[0], FriendsEvent::Done(Mutation::Removed));
        apply_all(&mut book, events);
        assert!(!book.is_friend(5));
    }

    #[test]
    fn failed_mutation_keeps_lists_and_reports_server_message() {
        let gateway = gateway_with_ana_request();
        let mut book = FriendsBook::default();
        apply_all(&mut book, block_on(load(&gateway)));
        let before = book.requests.clone();

        *gateway.fail.borrow_mut() = Some(Error::Api(ApiError::from_body(
            409,
            r#"{"message":"request already exists"}"#,
        )));
        let events = block_on(send_request(&gateway, 42));
        assert_eq!(
            events,
            vec![FriendsEvent::Failed("request already exists".to_string())]
        );
        apply_all(&mut book, events);
        assert_eq!(book.requests, before);
        assert_eq!(
            book.error.as_ref().map(|e| e.as_str()),
            Some("request already exists")
        );
    }

    #[test]
    fn silent_server_falls_back_to_generic_message() {
        let gateway = gateway_with_ana_request();
        *gateway.fail.borrow_mut() = Some(Error::Network("offline".into()));
        let events = block_on(remove_friendship(&gateway, 42));
        assert_eq!(events, vec![FriendsEvent::Failed(REMOVE_FAILED.to_string())]);
    }

    #[test]
    fn failed_fetch_leaves_previous_state() {
        let gateway = gateway_with_ana_request();
        let mut book = FriendsBook::default();
        apply_all(&mut book, block_on(load(&gateway)));

        *gateway.fail.borrow_mut() = Some(Error::Api(ApiError::unknown(500)));
        let event = block_on(fetch_requests(&gateway));
        assert_eq!(
            event,
            FriendsEvent::Failed(FETCH_REQUESTS_FAILED.to_string())
        );
        book.apply(event);
        assert_eq!(book.requests.incoming.len(), 1);
    }

    #[test]
    fn online_failure_does_not_touch_error_slot() {
        let gateway = gateway_with_ana_request();
        *gateway.fail.borrow_mut() = Some(Error::Network("offline".into()));
        assert_eq!(block_on(fetch_online(&gateway)), None);
    }

    #[test]
    fn online_status_is_derived_from_the_online_list() {
        let gateway = gateway_with_ana_request();
        let mut online = user(5, "Anabel");
        online.online = true;
        gateway.friends.borrow_mut().push(Friend {
            user: online,
            ..Default::default()
        });
        let mut book = FriendsBook::default();
        apply_all(&mut book, block_on(load(&gateway)));
        assert!(book.is_online(5));
        assert!(!book.is_online(42));
    }

    #[test]
    fn burst_of_keystrokes_sends_one_search() {
        let gateway = gateway_with_ana_request();
        let mut book = FriendsBook::default();

        let seqs: Vec<u64> = ["a", "an", "ana"]
            .into_iter()
            .filter_map(|q| match book.search_input(q) {
                SearchInput::Schedule(seq) => Some(seq),
                SearchInput::Clear => None,
            })
            .collect();
        for seq in seqs {
            if let Some(query) = book.search_fire(seq) {
                let event = block_on(search(&gateway, VIEWER, query, seq));
                book.apply(event);
            }
        }

        assert_eq!(gateway.calls(), vec![Call::Search("ana".to_string())]);
        assert!(!book.searching);
        assert_eq!(book.results.len(), 2);
    }

    #[test]
    fn blank_search_clears_without_network() {
        let gateway = gateway_with_ana_request();
        let mut book = FriendsBook {
            results: vec![user(42, "Ana")],
            ..Default::default()
        };
        assert_eq!(book.search_input("  \t"), SearchInput::Clear);
        assert!(book.results.is_empty());
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn viewer_is_never_a_search_result() {
        let gateway = FakeGateway {
            users: vec![user(VIEWER, "Pong Master"), user(2, "Pong Rookie")],
            ..Default::default()
        };
        let FriendsEvent::SearchResults { users, .. } =
            block_on(search(&gateway, VIEWER, "pong".into(), 1))
        else {
            panic!("search should succeed");
        };
        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn stale_search_response_is_discarded() {
        let gateway = gateway_with_ana_request();
        let mut book = FriendsBook::default();

        let SearchInput::Schedule(first) = book.search_input("anab") else {
            panic!("expected a scheduled search");
        };
        let first_query = book.search_fire(first).unwrap_or_default();
        let SearchInput::Schedule(second) = book.search_input("ana") else {
            panic!("expected a scheduled search");
        };
        let second_query = book.search_fire(second).unwrap_or_default();

        // the newer response lands first, the older one must not override it
        let newer = block_on(search(&gateway, VIEWER, second_query, second));
        let older = block_on(search(&gateway, VIEWER, first_query, first));
        assert!(book.apply(newer));
        assert!(!book.apply(older));
        assert_eq!(book.results.len(), 2);
    }

    #[test]
    fn relation_prefers_friendship_over_pending() {
        let mut book = FriendsBook::default();
        book.requests.outgoing.push(FriendRequest {
            id: 3,
            to_user_id: Some(9),
            ..Default::default()
        });
        assert_eq!(book.relation(9), Relation::OutgoingPending);
        book.friends.push(Friend {
            user: user(9, "Zed"),
            ..Default::default()
        });
        assert_eq!(book.relation(9), Relation::Friend);
        assert_eq!(book.relation(10), Relation::Stranger);
    }
}
