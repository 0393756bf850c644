use fluent::{FluentBundle, FluentResource};
use gloo::timers::callback::Timeout;
use regex::Regex;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yew_router::scope_ext::RouterScopeExt;
use zxcvbn::zxcvbn;

use arena_sdk::api;
use arena_sdk::error::Error;
use arena_sdk::model::page::Page;
use arena_sdk::model::user::RegisterRequest;
use arena_sdk::state::{I18nState, Notify};
use i18n::resource;
use utils::tr;

const MIN_PASSWORD_LEN: usize = 8;

pub struct Register {
    email: String,
    display_name: String,
    pwd: String,
    re_pwd: String,
    /// zxcvbn score, 0..=4
    pwd_strength: u8,
    req_status: RequestStatus,
    i18n: FluentBundle<FluentResource>,
    jump_timer: Option<Timeout>,
}

pub enum RegisterMsg {
    EmailInput(InputEvent),
    NameInput(InputEvent),
    PwdInput(InputEvent),
    RePwdInput(InputEvent),
    Submit(SubmitEvent),
    Success,
    Failed(Error),
}

#[derive(Default, Debug, PartialEq)]
pub enum RequestStatus {
    #[default]
    Default,
    Invalid(&'static str),
    Pendding,
    Success,
    Failed(String),
}

pub fn email_valid(email: &str) -> bool {
    Regex::new(r"^([a-zA-Z0-9_\-\.\+]+)@([a-zA-Z0-9_\-\.]+)\.([a-zA-Z]{2,})$")
        .map(|regex| regex.is_match(email))
        .unwrap_or(false)
}

pub fn password_strength(pwd: &str) -> u8 {
    if pwd.is_empty() {
        return 0;
    }
    zxcvbn(pwd, &[]).map(|estimate| estimate.score()).unwrap_or(0)
}

/// Client-side checks, the failing one is reported by its message key.
pub fn validate(
    email: &str,
    display_name: &str,
    pwd: &str,
    re_pwd: &str,
) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    let display_name = display_name.trim();
    if !email_valid(email) {
        return Err("email_invalid");
    }
    if display_name.is_empty() {
        return Err("name_required");
    }
    if pwd.chars().count() < MIN_PASSWORD_LEN {
        return Err("pwd_too_short");
    }
    if pwd != re_pwd {
        return Err("pwd_not_match");
    }
    Ok(RegisterRequest {
        email: email.to_string(),
        password: pwd.to_string(),
        display_name: display_name.to_string(),
    })
}

impl Component for Register {
    type Message = RegisterMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            display_name: String::new(),
            pwd: String::new(),
            re_pwd: String::new(),
            pwd_strength: 0,
            req_status: RequestStatus::Default,
            i18n: utils::create_bundle(resource!(I18nState::get().lang, REGISTER)),
            jump_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RegisterMsg::EmailInput(event) => {
                self.email = event.target_unchecked_into::<HtmlInputElement>().value();
                false
            }
            RegisterMsg::NameInput(event) => {
                self.display_name = event.target_unchecked_into::<HtmlInputElement>().value();
                false
            }
            RegisterMsg::PwdInput(event) => {
                self.pwd = event.target_unchecked_into::<HtmlInputElement>().value();
                self.pwd_strength = password_strength(&self.pwd);
                true
            }
            RegisterMsg::RePwdInput(event) => {
                self.re_pwd = event.target_unchecked_into::<HtmlInputElement>().value();
                true
            }
            RegisterMsg::Submit(event) => {
                event.prevent_default();
                if self.req_status == RequestStatus::Pendding {
                    return false;
                }
                let register = match validate(&self.email, &self.display_name, &self.pwd, &self.re_pwd) {
                    Ok(register) => register,
                    Err(key) => {
                        self.req_status = RequestStatus::Invalid(key);
                        return true;
                    }
                };
                ctx.link().send_future(async move {
                    match api::auth().register(register).await {
                        Ok(()) => RegisterMsg::Success,
                        Err(err) => RegisterMsg::Failed(err),
                    }
                });
                self.req_status = RequestStatus::Pendding;
                true
            }
            RegisterMsg::Success => {
                log::info!("register success");
                self.req_status = RequestStatus::Success;
                let link = ctx.link().clone();
                self.jump_timer = Some(Timeout::new(1500, move || {
                    if let Some(navigator) = link.navigator() {
                        navigator.push(&Page::Login);
                    }
                }));
                true
            }
            RegisterMsg::Failed(err) => {
                log::error!("register error: {:?}", err);
                let message = err.user_message(&tr!(self.i18n, "failed"));
                self.req_status = RequestStatus::Failed(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let i18n = &self.i18n;
        let req_status = match &self.req_status {
            RequestStatus::Default => html!(),
            RequestStatus::Invalid(key) => html!(<div class="error">{tr!(i18n, key)}</div>),
            RequestStatus::Pendding => html!(<div class="info">{tr!(i18n, "submitting")}</div>),
            RequestStatus::Success => html!(<div class="success">{tr!(i18n, "success")}</div>),
            RequestStatus::Failed(message) => html!(<div class="error">{message.clone()}</div>),
        };
        let pwd_strength = if self.pwd.is_empty() {
            html!()
        } else {
            html! {
                <>
                    <meter max="4" low="2" high="3" optimum="4" value={self.pwd_strength.to_string()}></meter>
                    <span class="strength">{tr!(i18n, "strength", "level" => self.pwd_strength)}</span>
                </>
            }
        };
        let pwd_is_same = if self.re_pwd.is_empty() {
            html!()
        } else if self.re_pwd == self.pwd {
            html!(<span style="color: green;">{"√"}</span>)
        } else {
            html!(<span style="color: red;">{"×"}</span>)
        };

        html! {
            <div class="register-container">
                <form class="register-wrapper" onsubmit={ctx.link().callback(RegisterMsg::Submit)}>
                    <div class="sign">{tr!(i18n, "title")}</div>
                    {req_status}
                    <div class="email">
                        <label for="email">{tr!(i18n, "email")}</label>
                        <input
                            type="email"
                            id="email"
                            required={true}
                            autocomplete="email"
                            oninput={ctx.link().callback(RegisterMsg::EmailInput)}
                            />
                    </div>
                    <div class="nickname">
                        <label for="display-name">{tr!(i18n, "display_name")}</label>
                        <input
                            type="text"
                            id="display-name"
                            required={true}
                            autocomplete="nickname"
                            oninput={ctx.link().callback(RegisterMsg::NameInput)}
                            />
                    </div>
                    <div class="pwd">
                        <label for="pwd">{tr!(i18n, "password")}</label>
                        <input
                            type="password"
                            id="pwd"
                            required={true}
                            autocomplete="new-password"
                            oninput={ctx.link().callback(RegisterMsg::PwdInput)}
                            />
                        {pwd_strength}
                    </div>
                    <div class="re-pwd">
                        <label for="re-pwd">{tr!(i18n, "re_password")}</label>
                        <input
                            type="password"
                            id="re-pwd"
                            required={true}
                            autocomplete="new-password"
                            oninput={ctx.link().callback(RegisterMsg::RePwdInput)}
                            />
                        {pwd_is_same}
                    </div>
                    <input
                        type="submit"
                        class="submit"
                        disabled={self.req_status == RequestStatus::Pendding}
                        value={tr!(i18n, "submit")}/>
                    <div class="register-login">
                        {tr!(i18n, "to_login_prefix")}
                        <Link<Page> to={Page::Login}>{tr!(i18n, "to_login")}</Link<Page>>
                    </div>
                </form>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_format() {
        assert!(email_valid("ana@arena.io"));
        assert!(email_valid("first.last+pong@mail.example.org"));
        assert!(!email_valid("ana@arena"));
        assert!(!email_valid("not an email"));
        assert!(!email_valid(""));
    }

    #[test]
    fn first_failing_check_is_reported() {
        assert_eq!(validate("bad", "Ana", "longenough", "longenough").err(), Some("email_invalid"));
        assert_eq!(validate("ana@arena.io", "  ", "longenough", "longenough").err(), Some("name_required"));
        assert_eq!(validate("ana@arena.io", "Ana", "short", "short").err(), Some("pwd_too_short"));
        assert_eq!(validate("ana@arena.io", "Ana", "longenough", "different").err(), Some("pwd_not_match"));
    }

    #[test]
    fn valid_form_is_trimmed() {
        let req = validate(" ana@arena.io ", " Ana ", "correct horse", "correct horse").unwrap();
        assert_eq!(req.email, "ana@arena.io");
        assert_eq!(req.display_name, "Ana");
        assert_eq!(req.password, "correct horse");
    }

    #[test]
    fn eight_characters_are_enough() {
        assert!(validate("ana@arena.io", "Ana", "12345678", "12345678").is_ok());
        assert_eq!(validate("ana@arena.io", "Ana", "1234567", "1234567").err(), Some("pwd_too_short"));
    }

    #[test]
    fn strength_grows_with_entropy() {
        assert_eq!(password_strength(""), 0);
        assert!(password_strength("password") <= 1);
        assert!(password_strength("t4ble-L@mp-h0rizon-9!") >= 3);
    }
}
