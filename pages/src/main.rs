mod home;
mod legal;
mod login;
mod not_found;
mod register;

use yew::prelude::*;
use yew::platform::spawn_local;
use yew_router::{BrowserRouter, Switch};
use yewdux::use_selector;

use arena_sdk::api;
use arena_sdk::model::page::Page;
use arena_sdk::model::user::User;
use arena_sdk::session;
use arena_sdk::state::{I18nState, SessionState};
use arena_sdk::storage::LocalToken;
use components::footer::Footer;
use components::friends::FriendsPage;
use components::guard::Guard;
use components::nav_bar::NavBar;
use components::notification::NotificationCom;
use components::profile::ProfilePage;

use crate::home::Home;
use crate::legal::{Privacy, Terms};
use crate::login::Login;
use crate::not_found::NotFound;
use crate::register::Register;

fn switch(page: Page) -> Html {
    if page.is_protected() {
        let render = Callback::from(move |user: User| protected(&page, user));
        return html! {<Guard {render} />};
    }
    match page {
        Page::Home => html! {<Home />},
        Page::Login => html! {<Login />},
        Page::Register => html! {<Register />},
        Page::Terms => html! {<Terms />},
        Page::Privacy => html! {<Privacy />},
        _ => html! {<NotFound />},
    }
}

fn protected(page: &Page, user: User) -> Html {
    match page {
        Page::Profile => html! {<ProfilePage {user} />},
        Page::Friends => html! {<FriendsPage {user} />},
        _ => html! {<NotFound />},
    }
}

#[function_component(App)]
fn app() -> Html {
    // resolve the viewer once, guarded routes wait for it
    use_effect_with((), |_| {
        spawn_local(async {
            let session = session::hydrate(api::users().as_ref(), &LocalToken).await;
            log::debug!("session hydrated: {:?}", session);
            SessionState::set(session);
        });
    });
    // switching language rebuilds the tree with the new bundles
    let lang = use_selector(|state: &I18nState| state.lang);

    html! {
        <BrowserRouter>
            <div class="app" key={lang.to_string()}>
                <NavBar />
                <main class="content">
                    <Switch<Page> render={switch} />
                </main>
                <Footer />
                <NotificationCom />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
