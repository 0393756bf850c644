use fluent::{FluentBundle, FluentResource};
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use arena_sdk::api;
use arena_sdk::error::Error;
use arena_sdk::model::page::Page;
use arena_sdk::session::{self, Session};
use arena_sdk::state::{I18nState, Notify, SessionState};
use arena_sdk::storage::LocalToken;
use i18n::resource;
use utils::tr;

/// Confirmation modal; a failure stays inside it and the page stays usable.
pub struct DeleteAccount {
    i18n: FluentBundle<FluentResource>,
    deleting: bool,
    error: Option<AttrValue>,
}

#[derive(Properties, PartialEq)]
pub struct DeleteAccountProps {
    pub on_cancel: Callback<()>,
}

pub enum DeleteAccountMsg {
    Confirm,
    Deleted(Session),
    Failed(Error),
}

impl Component for DeleteAccount {
    type Message = DeleteAccountMsg;

    type Properties = DeleteAccountProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            i18n: utils::create_bundle(resource!(I18nState::get().lang, PROFILE)),
            deleting: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DeleteAccountMsg::Confirm => {
                ctx.link().send_future(async {
                    match session::delete_account(api::users().as_ref(), &LocalToken).await {
                        Ok(session) => DeleteAccountMsg::Deleted(session),
                        Err(err) => DeleteAccountMsg::Failed(err),
                    }
                });
                self.deleting = true;
                self.error = None;
                true
            }
            DeleteAccountMsg::Deleted(session) => {
                log::info!("account deleted");
                SessionState::set(session);
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Page::Login);
                }
                false
            }
            DeleteAccountMsg::Failed(err) => {
                log::error!("delete account error: {:?}", err);
                self.deleting = false;
                self.error = Some(err.user_message(&tr!(self.i18n, "delete_failed")).into());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_cancel = ctx.props().on_cancel.reform(|_: MouseEvent| ());
        let confirm = if self.deleting {
            tr!(self.i18n, "deleting")
        } else {
            tr!(self.i18n, "delete_confirm")
        };
        let error = match &self.error {
            Some(message) => html!(<p class="error">{message.clone()}</p>),
            None => html!(),
        };
        html! {
            <div class="modal-backdrop">
                <div class="modal" role="dialog">
                    <h3>{tr!(self.i18n, "delete_title")}</h3>
                    <p>{tr!(self.i18n, "delete_warning")}</p>
                    {error}
                    <div class="modal-actions">
                        <button disabled={self.deleting} onclick={on_cancel}>
                            {tr!(self.i18n, "delete_cancel")}
                        </button>
                        <button
                            class="danger"
                            disabled={self.deleting}
                            onclick={ctx.link().callback(|_| DeleteAccountMsg::Confirm)}>
                            {confirm}
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
