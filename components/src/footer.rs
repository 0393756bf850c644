use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::use_store_value;

use arena_sdk::model::page::Page;
use arena_sdk::state::I18nState;
use i18n::resource;
use utils::tr;

#[function_component(Footer)]
pub fn footer() -> Html {
    let lang = use_store_value::<I18nState>().lang;
    let i18n = utils::create_bundle(resource!(lang, FOOTER));
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <span>{tr!(i18n, "rights", "year" => year.to_string())}</span>
            <nav>
                <Link<Page> to={Page::Terms}>{tr!(i18n, "terms")}</Link<Page>>
                {" · "}
                <Link<Page> to={Page::Privacy}>{tr!(i18n, "privacy")}</Link<Page>>
            </nav>
        </footer>
    }
}
