mod delete_account;
mod two_factor;

use fluent::{FluentBundle, FluentResource};
use web_sys::{File, HtmlInputElement, HtmlTextAreaElement, Url};
use yew::prelude::*;

use arena_sdk::api;
use arena_sdk::error::Error;
use arena_sdk::model::notification::Notification;
use arena_sdk::model::user::{ProfileUpdate, User};
use arena_sdk::profile::{self, fresh_avatar_url, validate_avatar, AvatarRejection};
use arena_sdk::session::Session;
use arena_sdk::state::{I18nState, Notify, SessionState};
use i18n::resource;
use utils::tr;

use crate::avatar::Avatar;

use self::delete_account::DeleteAccount;
use self::two_factor::TwoFactorPanel;

/// A chosen avatar waiting for upload, previewed through an object URL.
struct Preview {
    file: File,
    url: String,
}

impl Drop for Preview {
    fn drop(&mut self) {
        if let Err(err) = Url::revoke_object_url(&self.url) {
            log::warn!("revoke avatar preview error: {:?}", err);
        }
    }
}

pub struct ProfilePage {
    i18n: FluentBundle<FluentResource>,
    display_name: AttrValue,
    bio: AttrValue,
    saving: bool,
    preview: Option<Preview>,
    avatar_error: Option<AttrValue>,
    uploading: bool,
    /// cache-busting stamp of the displayed avatar
    avatar_stamp: i64,
    show_delete: bool,
}

#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub user: User,
}

pub enum ProfileMsg {
    NameInput(InputEvent),
    BioInput(InputEvent),
    Save,
    Saved(Option<Session>),
    SaveFailed(Error),
    AvatarChosen(Event),
    UploadAvatar,
    Uploaded(Option<Session>),
    UploadFailed(Error),
    ShowDelete(bool),
}

impl Component for ProfilePage {
    type Message = ProfileMsg;

    type Properties = ProfileProps;

    fn create(ctx: &Context<Self>) -> Self {
        let user = &ctx.props().user;
        Self {
            i18n: utils::create_bundle(resource!(I18nState::get().lang, PROFILE)),
            display_name: user.display_name.clone(),
            bio: user.bio.clone().unwrap_or_default(),
            saving: false,
            preview: None,
            avatar_error: None,
            uploading: false,
            avatar_stamp: chrono::Utc::now().timestamp_millis(),
            show_delete: false,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let user = &ctx.props().user;
        if *user != old_props.user {
            self.display_name = user.display_name.clone();
            self.bio = user.bio.clone().unwrap_or_default();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ProfileMsg::NameInput(event) => {
                let input: HtmlInputElement = event.target_unchecked_into();
                self.display_name = input.value().into();
                false
            }
            ProfileMsg::BioInput(event) => {
                let input: HtmlTextAreaElement = event.target_unchecked_into();
                self.bio = input.value().into();
                false
            }
            ProfileMsg::Save => {
                let update = ProfileUpdate {
                    display_name: self.display_name.trim().to_string(),
                    bio: self.bio.to_string(),
                };
                ctx.link().send_future(async move {
                    let users = api::users();
                    match profile::save(users.as_ref(), update).await {
                        Ok(session) => ProfileMsg::Saved(session),
                        Err(err) => ProfileMsg::SaveFailed(err),
                    }
                });
                self.saving = true;
                true
            }
            ProfileMsg::Saved(session) => {
                self.saving = false;
                if let Some(session) = session {
                    SessionState::set(session);
                }
                Notification::success(tr!(self.i18n, "saved")).notify();
                true
            }
            ProfileMsg::SaveFailed(err) => {
                self.saving = false;
                Notification::error(err, &tr!(self.i18n, "save_failed")).notify();
                true
            }
            ProfileMsg::AvatarChosen(event) => {
                let input: HtmlInputElement = event.target_unchecked_into();
                let Some(file) = input.files().and_then(|files| files.get(0)) else {
                    return false;
                };
                self.preview = None;
                if let Err(rejection) = validate_avatar(&file.type_(), file.size() as u64) {
                    log::debug!("avatar rejected: {}", rejection);
                    let key = match rejection {
                        AvatarRejection::UnsupportedType => "avatar_type",
                        AvatarRejection::TooLarge => "avatar_size",
                    };
                    self.avatar_error = Some(tr!(self.i18n, key).into());
                    input.set_value("");
                    return true;
                }
                self.avatar_error = None;
                match Url::create_object_url_with_blob(&file) {
                    Ok(url) => self.preview = Some(Preview { file, url }),
                    Err(err) => log::error!("create avatar preview error: {:?}", err),
                }
                true
            }
            ProfileMsg::UploadAvatar => {
                let Some(preview) = &self.preview else {
                    return false;
                };
                let file = preview.file.clone();
                let user_id = ctx.props().user.id;
                ctx.link().send_future(async move {
                    let files = api::file();
                    let users = api::users();
                    let upload = files.upload_avatar(user_id, &file);
                    match profile::upload_avatar(upload, users.as_ref()).await {
                        Ok(session) => ProfileMsg::Uploaded(session),
                        Err(err) => ProfileMsg::UploadFailed(err),
                    }
                });
                self.uploading = true;
                true
            }
            ProfileMsg::Uploaded(session) => {
                self.uploading = false;
                self.preview = None;
                self.avatar_stamp = chrono::Utc::now().timestamp_millis();
                if let Some(session) = session {
                    SessionState::set(session);
                }
                Notification::success(tr!(self.i18n, "avatar_uploaded")).notify();
                true
            }
            ProfileMsg::UploadFailed(err) => {
                self.uploading = false;
                self.avatar_error = Some(err.user_message(&tr!(self.i18n, "avatar_failed")).into());
                true
            }
            ProfileMsg::ShowDelete(show) => {
                self.show_delete = show;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let user = &ctx.props().user;
        let delete = if self.show_delete {
            html!(<DeleteAccount on_cancel={ctx.link().callback(|_| ProfileMsg::ShowDelete(false))} />)
        } else {
            html!()
        };
        html! {
            <div class="profile-page">
                <h2>{tr!(self.i18n, "title")}</h2>
                <p class="subtitle">{tr!(self.i18n, "subtitle")}</p>
                {self.avatar_section(ctx, user)}
                {self.stats(user)}
                {self.info_form(ctx, user)}
                <TwoFactorPanel />
                <button class="danger" onclick={ctx.link().callback(|_| ProfileMsg::ShowDelete(true))}>
                    {tr!(self.i18n, "delete")}
                </button>
                {delete}
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // revokes a preview that was never uploaded
        self.preview = None;
    }
}

impl ProfilePage {
    fn avatar_section(&self, ctx: &Context<Self>, user: &User) -> Html {
        let image = match &self.preview {
            Some(preview) => html! {
                <img class="avatar avatar-large" src={preview.url.clone()} alt={tr!(self.i18n, "avatar_preview")} />
            },
            None => html! {
                <Avatar
                    class="avatar avatar-large"
                    src={fresh_avatar_url(user.id, self.avatar_stamp)}
                    initial={user.initial()}
                    alt={tr!(self.i18n, "avatar_current")} />
            },
        };
        let error = match &self.avatar_error {
            Some(message) => html!(<p class="error">{message.clone()}</p>),
            None => html!(),
        };
        let upload = if self.preview.is_some() {
            let label = if self.uploading {
                tr!(self.i18n, "uploading")
            } else {
                tr!(self.i18n, "save_avatar")
            };
            html! {
                <button disabled={self.uploading} onclick={ctx.link().callback(|_| ProfileMsg::UploadAvatar)}>
                    {label}
                </button>
            }
        } else {
            html!()
        };
        html! {
            <section class="profile-avatar">
                <h3>{tr!(self.i18n, "avatar")}</h3>
                {image}
                <label class="avatar-picker">
                    {tr!(self.i18n, "choose_avatar")}
                    <input
                        type="file"
                        accept="image/jpeg,image/png"
                        onchange={ctx.link().callback(ProfileMsg::AvatarChosen)}
                        />
                </label>
                {upload}
                {error}
            </section>
        }
    }

    fn stats(&self, user: &User) -> Html {
        html! {
            <section class="profile-stats">
                <h3>{tr!(self.i18n, "stats")}</h3>
                <div class="stat">
                    <span class="stat-label">{tr!(self.i18n, "wins")}</span>
                    <span class="stat-value">{user.wins}</span>
                </div>
                <div class="stat">
                    <span class="stat-label">{tr!(self.i18n, "losses")}</span>
                    <span class="stat-value">{user.losses}</span>
                </div>
                <div class="stat">
                    <span class="stat-label">{tr!(self.i18n, "win_rate")}</span>
                    <span class="stat-value">{format!("{}%", user.win_rate())}</span>
                </div>
            </section>
        }
    }

    fn info_form(&self, ctx: &Context<Self>, user: &User) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ProfileMsg::Save
        });
        let submit = if self.saving {
            tr!(self.i18n, "saving")
        } else {
            tr!(self.i18n, "save")
        };
        html! {
            <form class="profile-info" {onsubmit}>
                <h3>{tr!(self.i18n, "info")}</h3>
                <label for="display-name">{tr!(self.i18n, "display_name")}</label>
                <input
                    id="display-name"
                    type="text"
                    required={true}
                    value={self.display_name.clone()}
                    oninput={ctx.link().callback(ProfileMsg::NameInput)}
                    />
                <label for="email">{tr!(self.i18n, "email")}</label>
                <input id="email" type="email" readonly={true} value={user.email.clone().unwrap_or_default()} />
                <label for="bio">{tr!(self.i18n, "bio")}</label>
                <textarea
                    id="bio"
                    value={self.bio.clone()}
                    placeholder={tr!(self.i18n, "bio_placeholder")}
                    oninput={ctx.link().callback(ProfileMsg::BioInput)}
                    />
                <input type="submit" class="submit" disabled={self.saving} value={submit} />
            </form>
        }
    }
}
