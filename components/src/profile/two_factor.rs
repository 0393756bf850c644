use fluent::{FluentBundle, FluentResource};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use arena_sdk::api;
use arena_sdk::error::Error;
use arena_sdk::model::notification::Notification;
use arena_sdk::model::user::TwoFactorSetup;
use arena_sdk::profile::TwoFactorState;
use arena_sdk::state::{I18nState, Notify};
use i18n::resource;
use utils::tr;

pub struct TwoFactorPanel {
    i18n: FluentBundle<FluentResource>,
    state: TwoFactorState,
    code: AttrValue,
    busy: bool,
    error: Option<AttrValue>,
}

pub enum TwoFactorMsg {
    Status(bool),
    Setup,
    Provisioned(TwoFactorSetup),
    CodeInput(InputEvent),
    Verify,
    Verified,
    Failed(Error, &'static str),
}

impl Component for TwoFactorPanel {
    type Message = TwoFactorMsg;

    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            // an unreadable status offers the setup flow
            let enabled = api::auth().twofa_enabled().await.unwrap_or_else(|err| {
                log::warn!("fetch 2fa status error: {:?}", err);
                false
            });
            TwoFactorMsg::Status(enabled)
        });
        Self {
            i18n: utils::create_bundle(resource!(I18nState::get().lang, PROFILE)),
            state: TwoFactorState::Unknown,
            code: AttrValue::default(),
            busy: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            TwoFactorMsg::Status(enabled) => {
                self.state = TwoFactorState::from_status(enabled);
                true
            }
            TwoFactorMsg::Setup => {
                ctx.link().send_future(async {
                    match api::auth().twofa_setup().await {
                        Ok(setup) => TwoFactorMsg::Provisioned(setup),
                        Err(err) => TwoFactorMsg::Failed(err, "twofa_setup_failed"),
                    }
                });
                self.busy = true;
                self.error = None;
                true
            }
            TwoFactorMsg::Provisioned(setup) => {
                self.busy = false;
                self.state.provision(setup);
                true
            }
            TwoFactorMsg::CodeInput(event) => {
                let input: HtmlInputElement = event.target_unchecked_into();
                self.code = input.value().into();
                false
            }
            TwoFactorMsg::Verify => {
                let Some(code) = self.state.code_to_verify(&self.code) else {
                    return false;
                };
                ctx.link().send_future(async move {
                    match api::auth().twofa_verify(code).await {
                        Ok(()) => TwoFactorMsg::Verified,
                        Err(err) => TwoFactorMsg::Failed(err, "twofa_invalid"),
                    }
                });
                self.busy = true;
                self.error = None;
                true
            }
            TwoFactorMsg::Verified => {
                self.busy = false;
                self.code = AttrValue::default();
                self.state.verified();
                Notification::success(tr!(self.i18n, "twofa_success")).notify();
                true
            }
            TwoFactorMsg::Failed(err, fallback) => {
                log::error!("2fa error: {:?}", err);
                self.busy = false;
                self.error = Some(err.user_message(&tr!(self.i18n, fallback)).into());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.state {
            TwoFactorState::Unknown => html!(<p>{tr!(self.i18n, "twofa_loading")}</p>),
            TwoFactorState::Enabled => html!(<p class="success">{tr!(self.i18n, "twofa_enabled")}</p>),
            TwoFactorState::Disabled => {
                let label = if self.busy {
                    tr!(self.i18n, "twofa_setting_up")
                } else {
                    tr!(self.i18n, "twofa_setup")
                };
                html! {
                    <>
                        <p>{tr!(self.i18n, "twofa_intro")}</p>
                        <button disabled={self.busy} onclick={ctx.link().callback(|_| TwoFactorMsg::Setup)}>
                            {label}
                        </button>
                    </>
                }
            }
            TwoFactorState::Provisioning(setup) => {
                let label = if self.busy {
                    tr!(self.i18n, "twofa_verifying")
                } else {
                    tr!(self.i18n, "twofa_verify")
                };
                let onsubmit = ctx.link().callback(|e: SubmitEvent| {
                    e.prevent_default();
                    TwoFactorMsg::Verify
                });
                html! {
                    <form class="twofa-setup" {onsubmit}>
                        <p>{tr!(self.i18n, "twofa_scan")}</p>
                        <img class="twofa-qr" src={setup.qr_code.clone()} alt="2FA QR code" />
                        <p>{tr!(self.i18n, "twofa_secret")}</p>
                        <code class="twofa-secret">{setup.secret.clone()}</code>
                        <label for="twofa-code">{tr!(self.i18n, "twofa_code")}</label>
                        <input
                            id="twofa-code"
                            type="text"
                            inputmode="numeric"
                            autocomplete="one-time-code"
                            maxlength="6"
                            value={self.code.clone()}
                            oninput={ctx.link().callback(TwoFactorMsg::CodeInput)}
                            />
                        <input type="submit" class="submit" disabled={self.busy} value={label} />
                    </form>
                }
            }
        };
        let error = match &self.error {
            Some(message) => html!(<p class="error">{message.clone()}</p>),
            None => html!(),
        };
        html! {
            <section class="profile-twofa">
                <h3>{tr!(self.i18n, "twofa_title")}</h3>
                {body}
                {error}
            </section>
        }
    }
}
