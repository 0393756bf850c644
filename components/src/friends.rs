use fluent::{FluentBundle, FluentResource};
use gloo::timers::callback::{Interval, Timeout};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use arena_sdk::api;
use arena_sdk::config::{ONLINE_POLL_MS, SEARCH_DEBOUNCE_MS};
use arena_sdk::friends::{self, FriendsBook, FriendsEvent, Mutation, SearchInput};
use arena_sdk::model::friend::{Friend, FriendRequest, Relation, RequestAction};
use arena_sdk::model::notification::Notification;
use arena_sdk::model::user::User;
use arena_sdk::state::{I18nState, Notify};
use i18n::resource;
use icons::SearchIcon;
use utils::tr;

use crate::avatar::Avatar;

/// Requests, friends with their online status, and user search.
///
/// Both timers live in the component: dropping the page drops the pending
/// debounce and stops the online poll.
pub struct FriendsPage {
    i18n: FluentBundle<FluentResource>,
    book: FriendsBook,
    query: AttrValue,
    debounce: Option<Timeout>,
    _poll: Interval,
}

#[derive(Properties, PartialEq)]
pub struct FriendsProps {
    pub user: User,
}

pub enum FriendsMsg {
    Events(Vec<FriendsEvent>),
    PollOnline,
    QueryChanged(InputEvent),
    Fire(u64),
    Send(i64),
    Accept(i64),
    Reject(i64),
    Cancel(i64),
    Remove(i64),
}

impl Component for FriendsPage {
    type Message = FriendsMsg;

    type Properties = FriendsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            let api = api::friends();
            FriendsMsg::Events(friends::load(api.as_ref()).await)
        });

        let link = ctx.link().clone();
        let _poll = Interval::new(ONLINE_POLL_MS, move || {
            link.send_message(FriendsMsg::PollOnline)
        });

        Self {
            i18n: utils::create_bundle(resource!(I18nState::get().lang, FRIENDS)),
            book: FriendsBook::default(),
            query: AttrValue::default(),
            debounce: None,
            _poll,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FriendsMsg::Events(events) => {
                let mut render = false;
                for event in events {
                    if let FriendsEvent::Done(mutation) = &event {
                        self.book.error = None;
                        Notification::success(self.done_text(*mutation)).notify();
                        render = true;
                    }
                    render |= self.book.apply(event);
                }
                render
            }
            FriendsMsg::PollOnline => {
                ctx.link().send_future(async {
                    let api = api::friends();
                    FriendsMsg::Events(friends::fetch_online(api.as_ref()).await.into_iter().collect())
                });
                false
            }
            FriendsMsg::QueryChanged(event) => {
                let input: HtmlInputElement = event.target_unchecked_into();
                let value = input.value();
                match self.book.search_input(&value) {
                    SearchInput::Clear => self.debounce = None,
                    SearchInput::Schedule(seq) => {
                        let link = ctx.link().clone();
                        // replacing the timeout cancels the previous keystroke
                        self.debounce = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                            link.send_message(FriendsMsg::Fire(seq))
                        }));
                    }
                }
                self.query = value.into();
                true
            }
            FriendsMsg::Fire(seq) => {
                self.debounce = None;
                let Some(query) = self.book.search_fire(seq) else {
                    return false;
                };
                let viewer = ctx.props().user.id;
                ctx.link().send_future(async move {
                    let api = api::friends();
                    FriendsMsg::Events(vec![friends::search(api.as_ref(), viewer, query, seq).await])
                });
                true
            }
            FriendsMsg::Send(friend_id) => {
                ctx.link().send_future(async move {
                    let api = api::friends();
                    FriendsMsg::Events(friends::send_request(api.as_ref(), friend_id).await)
                });
                false
            }
            FriendsMsg::Accept(request_id) => {
                self.respond(ctx, request_id, RequestAction::Accept);
                false
            }
            FriendsMsg::Reject(request_id) => {
                self.respond(ctx, request_id, RequestAction::Reject);
                false
            }
            FriendsMsg::Cancel(request_id) => {
                ctx.link().send_future(async move {
                    let api = api::friends();
                    FriendsMsg::Events(friends::cancel_request(api.as_ref(), request_id).await)
                });
                false
            }
            FriendsMsg::Remove(friend_id) => {
                ctx.link().send_future(async move {
                    let api = api::friends();
                    FriendsMsg::Events(friends::remove_friendship(api.as_ref(), friend_id).await)
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let error = match &self.book.error {
            Some(message) => html!(<div class="error">{message.clone()}</div>),
            None => html!(),
        };

        html! {
            <div class="friends-page">
                <h2>{tr!(self.i18n, "title")}</h2>
                {error}
                <section class="friends-requests">
                    <h3>{tr!(self.i18n, "requests")}</h3>
                    <h4>{tr!(self.i18n, "incoming")}</h4>
                    {self.incoming(ctx)}
                    <h4>{tr!(self.i18n, "outgoing")}</h4>
                    {self.outgoing(ctx)}
                </section>
                <section class="friends-list">
                    <h3>{tr!(self.i18n, "my_friends")}</h3>
                    {self.friend_list(ctx)}
                </section>
                <section class="friends-search">
                    <h3>{tr!(self.i18n, "find_users")}</h3>
                    <div class="search-box">
                        <SearchIcon />
                        <input
                            type="search"
                            value={self.query.clone()}
                            placeholder={tr!(self.i18n, "search_placeholder")}
                            oninput={ctx.link().callback(FriendsMsg::QueryChanged)}
                            />
                    </div>
                    {self.search_results(ctx)}
                </section>
            </div>
        }
    }
}

impl FriendsPage {
    fn respond(&self, ctx: &Context<Self>, request_id: i64, action: RequestAction) {
        ctx.link().send_future(async move {
            let api = api::friends();
            FriendsMsg::Events(friends::respond_to_request(api.as_ref(), request_id, action).await)
        });
    }

    fn done_text(&self, mutation: Mutation) -> String {
        let key = match mutation {
            Mutation::Sent => "sent",
            Mutation::Accepted => "accepted",
            Mutation::Rejected => "rejected",
            Mutation::Cancelled => "cancelled",
            Mutation::Removed => "removed",
        };
        tr!(self.i18n, key)
    }

    fn request_avatar(&self, req: &FriendRequest) -> Html {
        let name = req.counterpart_name();
        let initial = name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U');
        match req.counterpart_avatar() {
            Some(src) => html!(<Avatar src={src} {initial} alt={tr!(self.i18n, "avatar")} />),
            None => html!(<div class="avatar avatar-fallback">{initial}</div>),
        }
    }

    fn incoming(&self, ctx: &Context<Self>) -> Html {
        if self.book.requests.incoming.is_empty() {
            return html!(<p class="empty">{tr!(self.i18n, "no_incoming")}</p>);
        }
        self.book
            .requests
            .incoming
            .iter()
            .map(|req| {
                let id = req.id;
                html! {
                    <div class="friend-card" key={id}>
                        {self.request_avatar(req)}
                        <span class="friend-name">{req.counterpart_name()}</span>
                        <button class="accept" onclick={ctx.link().callback(move |_| FriendsMsg::Accept(id))}>
                            {tr!(self.i18n, "accept")}
                        </button>
                        <button class="reject" onclick={ctx.link().callback(move |_| FriendsMsg::Reject(id))}>
                            {tr!(self.i18n, "reject")}
                        </button>
                    </div>
                }
            })
            .collect()
    }

    fn outgoing(&self, ctx: &Context<Self>) -> Html {
        if self.book.requests.outgoing.is_empty() {
            return html!(<p class="empty">{tr!(self.i18n, "no_outgoing")}</p>);
        }
        self.book
            .requests
            .outgoing
            .iter()
            .map(|req| {
                let id = req.id;
                let name = req.counterpart_name().to_string();
                html! {
                    <div class="friend-card" key={id}>
                        {self.request_avatar(req)}
                        <span class="friend-name">{tr!(self.i18n, "pending", "name" => name)}</span>
                        <button class="cancel" onclick={ctx.link().callback(move |_| FriendsMsg::Cancel(id))}>
                            {tr!(self.i18n, "cancel")}
                        </button>
                    </div>
                }
            })
            .collect()
    }

    fn friend_list(&self, ctx: &Context<Self>) -> Html {
        if self.book.friends.is_empty() {
            return html!(<p class="empty">{tr!(self.i18n, "no_friends")}</p>);
        }
        self.book
            .friends
            .iter()
            .map(|friend: &Friend| {
                let id = friend.id();
                let (status, class) = if self.book.is_online(id) {
                    (tr!(self.i18n, "status_online"), "online")
                } else {
                    (tr!(self.i18n, "status_offline"), "offline")
                };
                html! {
                    <div class="friend-card" key={id}>
                        <Avatar src={friend.user.avatar()} initial={friend.user.initial()} alt={tr!(self.i18n, "avatar")} />
                        <div class="friend-info">
                            <span class="friend-name">{friend.user.display_name.clone()}</span>
                            <span class={classes!("friend-status", class)}>{status}</span>
                            {self.record(&friend.user)}
                        </div>
                        <button class="remove" onclick={ctx.link().callback(move |_| FriendsMsg::Remove(id))}>
                            {tr!(self.i18n, "remove")}
                        </button>
                    </div>
                }
            })
            .collect()
    }

    fn record(&self, user: &User) -> Html {
        html! {
            <span class="friend-record">
                {tr!(self.i18n, "record", "wins" => user.wins, "losses" => user.losses)}
            </span>
        }
    }

    fn search_results(&self, ctx: &Context<Self>) -> Html {
        if self.book.searching {
            return html!(<p class="loading">{tr!(self.i18n, "loading")}</p>);
        }
        if self.book.results.is_empty() {
            if self.query.trim().is_empty() {
                return html!();
            }
            return html!(<p class="empty">{tr!(self.i18n, "no_result")}</p>);
        }
        self.book
            .results
            .iter()
            .map(|user| {
                let id = user.id;
                let action = match self.book.relation(id) {
                    Relation::Friend => {
                        html!(<span class="relation">{tr!(self.i18n, "already_friends")}</span>)
                    }
                    Relation::OutgoingPending => {
                        html!(<span class="relation">{tr!(self.i18n, "request_sent")}</span>)
                    }
                    Relation::IncomingPending(request_id) => html! {
                        <button class="accept" onclick={ctx.link().callback(move |_| FriendsMsg::Accept(request_id))}>
                            {tr!(self.i18n, "accept")}
                        </button>
                    },
                    Relation::Stranger => html! {
                        <button class="send" onclick={ctx.link().callback(move |_| FriendsMsg::Send(id))}>
                            {tr!(self.i18n, "send_request")}
                        </button>
                    },
                };
                html! {
                    <div class="friend-card" key={id}>
                        <Avatar src={user.avatar()} initial={user.initial()} alt={tr!(self.i18n, "avatar")} />
                        <div class="friend-info">
                            <span class="friend-name">{user.display_name.clone()}</span>
                            {self.record(user)}
                        </div>
                        {action}
                    </div>
                }
            })
            .collect()
    }
}
