use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::use_store_value;

use arena_sdk::model::page::Page;
use arena_sdk::session::Session;
use arena_sdk::state::{I18nState, SessionState};
use i18n::resource;
use utils::tr;

/// game routes are served by the game client, outside this router
const GUEST_GAME: &str = "/game/guest";
const RANKED_GAME: &str = "/game/ranked";
const TOURNAMENTS: &str = "/tournaments";

#[function_component(Home)]
pub fn home() -> Html {
    let lang = use_store_value::<I18nState>().lang;
    let state = use_store_value::<SessionState>();
    let i18n = utils::create_bundle(resource!(lang, HOME));

    let view = match &state.session {
        Session::Loading => html!(),
        Session::Unauthenticated => html! {
            <div class="home-guest">
                <h2>{tr!(i18n, "how_to_play")}</h2>
                <ol>
                    <li>{tr!(i18n, "guest_rule_1")}</li>
                    <li>{tr!(i18n, "guest_rule_2")}</li>
                    <li>{tr!(i18n, "guest_rule_3")}</li>
                </ol>
                <p>{tr!(i18n, "guest_hint")}</p>
                <div class="home-actions">
                    <Link<Page> to={Page::Login} classes="btn btn--primary">{tr!(i18n, "login")}</Link<Page>>
                    <Link<Page> to={Page::Register} classes="btn btn--ghost">{tr!(i18n, "register")}</Link<Page>>
                    <a href={GUEST_GAME} class="btn">{tr!(i18n, "play_guest")}</a>
                </div>
            </div>
        },
        Session::Authenticated(user) => html! {
            <div class="home-user">
                <p class="welcome">{tr!(i18n, "welcome", "name" => user.display_name.to_string())}</p>
                <h2>{tr!(i18n, "tournament_rules")}</h2>
                <ol>
                    <li>{tr!(i18n, "tournament_rule_1")}</li>
                    <li>{tr!(i18n, "tournament_rule_2")}</li>
                    <li>{tr!(i18n, "tournament_rule_3")}</li>
                </ol>
                <h2>{tr!(i18n, "game_rules")}</h2>
                <ol>
                    <li>{tr!(i18n, "game_rule_1")}</li>
                    <li>{tr!(i18n, "game_rule_2")}</li>
                    <li>{tr!(i18n, "game_rule_3")}</li>
                </ol>
                <div class="home-actions">
                    <a href={TOURNAMENTS} class="btn btn--primary">{tr!(i18n, "tournaments")}</a>
                    <Link<Page> to={Page::Friends} classes="btn">{tr!(i18n, "friends")}</Link<Page>>
                    <a href={RANKED_GAME} class="btn btn--ghost">{tr!(i18n, "play_ranked")}</a>
                    <a href={GUEST_GAME} class="btn">{tr!(i18n, "play_casual")}</a>
                </div>
            </div>
        },
    };

    html! {
        <section class="home page-home">
            <h1>{tr!(i18n, "title")}</h1>
            {view}
        </section>
    }
}
