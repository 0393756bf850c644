use std::rc::Rc;

use fluent::{FluentBundle, FluentResource};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::Dispatch;

use arena_sdk::model::notification::Notification;
use arena_sdk::model::page::Page;
use arena_sdk::session::{self, Session};
use arena_sdk::state::{I18nState, SessionState, ThemeState};
use arena_sdk::storage::LocalToken;
use i18n::{resource, LanguageType};
use icons::{LogoutIcon, MoonIcon, PaddleIcon, SunIcon};
use utils::tr;

pub struct NavBar {
    i18n: FluentBundle<FluentResource>,
    session: Rc<SessionState>,
    theme: Dispatch<ThemeState>,
    lang: Dispatch<I18nState>,
    _session_dis: Dispatch<SessionState>,
}

pub enum NavBarMsg {
    SessionChanged(Rc<SessionState>),
    SwitchTheme(Rc<ThemeState>),
    SwitchLanguage(Rc<I18nState>),
    Logout,
}

impl Component for NavBar {
    type Message = NavBarMsg;

    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let _session_dis = Dispatch::<SessionState>::global()
            .subscribe(ctx.link().callback(NavBarMsg::SessionChanged));
        let theme =
            Dispatch::<ThemeState>::global().subscribe(ctx.link().callback(NavBarMsg::SwitchTheme));
        let lang = Dispatch::<I18nState>::global()
            .subscribe_silent(ctx.link().callback(NavBarMsg::SwitchLanguage));
        let i18n = utils::create_bundle(resource!(lang.get().lang, NAV));
        Self {
            i18n,
            session: _session_dis.get(),
            theme,
            lang,
            _session_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NavBarMsg::SessionChanged(session) => {
                self.session = session;
                true
            }
            NavBarMsg::SwitchTheme(theme) => {
                utils::set_theme(&theme.to_string());
                true
            }
            NavBarMsg::SwitchLanguage(state) => {
                self.i18n = utils::create_bundle(resource!(state.lang, NAV));
                true
            }
            NavBarMsg::Logout => {
                log::info!("logout");
                SessionState::set(session::logout(&LocalToken));
                Notification::info(tr!(self.i18n, "logged_out")).notify();
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Page::Home);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let links = match &self.session.session {
            Session::Loading => html!(),
            Session::Authenticated(user) => html! {
                <>
                    <Link<Page> to={Page::Friends}>{tr!(self.i18n, "friends")}</Link<Page>>
                    <Link<Page> to={Page::Profile}>{tr!(self.i18n, "profile")}</Link<Page>>
                    <span class="nav-user">{user.display_name.clone()}</span>
                    <button class="nav-logout" onclick={ctx.link().callback(|_| NavBarMsg::Logout)}>
                        <LogoutIcon />
                        {tr!(self.i18n, "logout")}
                    </button>
                </>
            },
            Session::Unauthenticated => html! {
                <>
                    <Link<Page> to={Page::Login}>{tr!(self.i18n, "login")}</Link<Page>>
                    <Link<Page> to={Page::Register}>{tr!(self.i18n, "register")}</Link<Page>>
                </>
            },
        };

        let theme_icon = if *self.theme.get() == ThemeState::Dark {
            html!(<SunIcon/>)
        } else {
            html!(<MoonIcon/>)
        };
        let toggle_theme = self.theme.reduce_mut_callback(|s| *s = s.toggled());

        let current = self.lang.get().lang;
        let onchange = self.lang.reduce_mut_callback_with(|s, e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            s.lang = LanguageType::from(select.value().as_str());
        });

        html! {
            <nav class="nav-bar">
                <Link<Page> to={Page::Home} classes="nav-brand">
                    <PaddleIcon />
                    {tr!(self.i18n, "brand")}
                </Link<Page>>
                <div class="nav-links">
                    <Link<Page> to={Page::Home}>{tr!(self.i18n, "home")}</Link<Page>>
                    {links}
                </div>
                <div class="nav-prefs">
                    <span class="nav-theme" onclick={toggle_theme}>{theme_icon}</span>
                    <select class="nav-lang" {onchange}>
                        <option value="en_us" selected={current == LanguageType::EnUS}>{"ENG"}</option>
                        <option value="zh_cn" selected={current == LanguageType::ZhCN}>{"中文"}</option>
                    </select>
                </div>
            </nav>
        }
    }
}
