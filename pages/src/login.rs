use fluent::{FluentBundle, FluentResource};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yew_router::scope_ext::RouterScopeExt;

use arena_sdk::api;
use arena_sdk::error::Error;
use arena_sdk::model::page::Page;
use arena_sdk::model::user::LoginRequest;
use arena_sdk::session::{self, Session};
use arena_sdk::state::{I18nState, Notify, SessionState};
use arena_sdk::storage::LocalToken;
use i18n::resource;
use utils::tr;

pub struct Login {
    email_ref: NodeRef,
    pwd_ref: NodeRef,
    code_ref: NodeRef,
    login_state: LoginState,
    i18n: FluentBundle<FluentResource>,
}

pub enum LoginMsg {
    Login(SubmitEvent),
    Success(Session),
    Failed(Error),
}

pub enum LoginState {
    Nothing,
    Logining,
    Success,
    Failed(AttrValue),
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

impl Component for Login {
    type Message = LoginMsg;

    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email_ref: NodeRef::default(),
            pwd_ref: NodeRef::default(),
            code_ref: NodeRef::default(),
            login_state: LoginState::Nothing,
            i18n: utils::create_bundle(resource!(I18nState::get().lang, LOGIN)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginMsg::Login(event) => {
                event.prevent_default();
                if matches!(self.login_state, LoginState::Logining) {
                    return false;
                }
                let code = input_value(&self.code_ref).trim().to_string();
                let req = LoginRequest {
                    email: input_value(&self.email_ref).trim().to_string(),
                    password: input_value(&self.pwd_ref),
                    twofa_code: (!code.is_empty()).then_some(code),
                };
                ctx.link().send_future(async move {
                    let auth = api::auth();
                    let users = api::users();
                    match session::login(auth.as_ref(), users.as_ref(), &LocalToken, req).await {
                        Ok(session) => LoginMsg::Success(session),
                        Err(err) => LoginMsg::Failed(err),
                    }
                });
                self.login_state = LoginState::Logining;
                true
            }
            LoginMsg::Success(session) => {
                log::info!("login success");
                SessionState::set(session);
                self.login_state = LoginState::Success;
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Page::Home);
                }
                true
            }
            LoginMsg::Failed(err) => {
                log::error!("login error: {:?}", err);
                let message = err.user_message(&tr!(self.i18n, "error"));
                self.login_state = LoginState::Failed(message.into());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let info = match &self.login_state {
            LoginState::Nothing => html!(),
            LoginState::Logining => html!(<div class="info">{tr!(self.i18n, "contacting")}</div>),
            LoginState::Success => html!(<div class="success">{tr!(self.i18n, "success")}</div>),
            LoginState::Failed(message) => html!(<div class="error">{message.clone()}</div>),
        };
        let login_title = tr!(self.i18n, "login_text");

        html! {
            <div class="login-container">
                <Link<Page> to={Page::Home} classes="back-home">{tr!(self.i18n, "back_home")}</Link<Page>>
                <form class="login-wrapper" onsubmit={ctx.link().callback(LoginMsg::Login)}>
                    <div class="sign">
                        {login_title}
                    </div>
                    <p class="subtitle">{tr!(self.i18n, "subtitle")}</p>
                    {info}
                    <div class="email">
                        <input type="email" ref={self.email_ref.clone()} required={true} autocomplete="email" placeholder={tr!(self.i18n, "email")}/>
                    </div>
                    <div class="pwd">
                        <input type="password" ref={self.pwd_ref.clone()} required={true} autocomplete="current-password" placeholder={tr!(self.i18n, "password")}/>
                    </div>
                    <div class="twofa">
                        <input type="text" ref={self.code_ref.clone()} inputmode="numeric" autocomplete="one-time-code" placeholder={tr!(self.i18n, "twofa")}/>
                    </div>
                    <input
                        type="submit"
                        class="submit"
                        disabled={matches!(self.login_state, LoginState::Logining)}
                        value={tr!(self.i18n, "submit")}/>
                    <div class="login-register">
                        {tr!(self.i18n, "to_register_prefix")}
                        <Link<Page> to={Page::Register}>{tr!(self.i18n, "to_register")}</Link<Page>>
                    </div>
                </form>
            </div>
        }
    }
}
