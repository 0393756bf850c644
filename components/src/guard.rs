use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::Redirect;
use yewdux::Dispatch;

use arena_sdk::model::page::Page;
use arena_sdk::model::user::User;
use arena_sdk::session::Session;
use arena_sdk::state::SessionState;

/// Renders its page only for a resolved viewer.
///
/// While the session is still loading nothing is drawn, so a guest never sees
/// a protected page flash before the redirect to the login page.
pub struct Guard {
    state: Rc<SessionState>,
    _dispatch: Dispatch<SessionState>,
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    /// builds the protected page for the authenticated viewer
    pub render: Callback<User, Html>,
}

pub enum GuardMsg {
    SessionChanged(Rc<SessionState>),
}

impl Component for Guard {
    type Message = GuardMsg;

    type Properties = GuardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let _dispatch =
            Dispatch::<SessionState>::global().subscribe(ctx.link().callback(GuardMsg::SessionChanged));
        Self {
            state: _dispatch.get(),
            _dispatch,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            GuardMsg::SessionChanged(state) => {
                let changed = self.state != state;
                self.state = state;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.state.session {
            Session::Loading => html!(),
            Session::Unauthenticated => html!(<Redirect<Page> to={Page::Login} />),
            Session::Authenticated(user) => ctx.props().render.emit(user.clone()),
        }
    }
}
