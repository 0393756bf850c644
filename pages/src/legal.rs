use yew::prelude::*;
use yewdux::use_store_value;

use arena_sdk::state::I18nState;
use i18n::resource;
use utils::tr;

#[function_component(Terms)]
pub fn terms() -> Html {
    let lang = use_store_value::<I18nState>().lang;
    let i18n = utils::create_bundle(resource!(lang, TERMS));
    html! {
        <section class="legal page-terms">
            <h1>{tr!(i18n, "title")}</h1>
            <p>{tr!(i18n, "intro")}</p>
            <ul>
                <li>{tr!(i18n, "rule_1")}</li>
                <li>{tr!(i18n, "rule_2")}</li>
                <li>{tr!(i18n, "rule_3")}</li>
            </ul>
            <p>{tr!(i18n, "outro")}</p>
        </section>
    }
}

#[function_component(Privacy)]
pub fn privacy() -> Html {
    let lang = use_store_value::<I18nState>().lang;
    let i18n = utils::create_bundle(resource!(lang, PRIVACY));
    html! {
        <section class="legal page-privacy">
            <h1>{tr!(i18n, "title")}</h1>
            <p>{tr!(i18n, "collect")}</p>
            <p>{tr!(i18n, "store")}</p>
            <p>{tr!(i18n, "contact")}</p>
        </section>
    }
}
