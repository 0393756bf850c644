use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::use_store_value;

use arena_sdk::model::page::Page;
use arena_sdk::state::I18nState;
use i18n::resource;
use utils::tr;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let lang = use_store_value::<I18nState>().lang;
    let i18n = utils::create_bundle(resource!(lang, NOT_FOUND));
    html! {
        <section class="not-found">
            <h1>{"404"}</h1>
            <h2>{tr!(i18n, "title")}</h2>
            <p>{tr!(i18n, "hint")}</p>
            <Link<Page> to={Page::Home}>{tr!(i18n, "back_home")}</Link<Page>>
        </section>
    }
}
