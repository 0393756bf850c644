use std::{collections::BTreeMap, rc::Rc};

use gloo::timers::callback::Timeout;
use yew::{classes, html, Component, Context, Html, Properties};
use yewdux::Dispatch;

use arena_sdk::model::notification::{Notification, NotificationType};
use icons::CloseIcon;

/// toasts keyed by arrival order, each one owns its expiry timer
type ToastList = BTreeMap<u64, (Rc<Notification>, Timeout)>;

pub struct NotificationCom {
    toasts: ToastList,
    next: u64,
    _noti_dis: Dispatch<Notification>,
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {}

pub enum Msg {
    Notification(Rc<Notification>),
    Remove(u64),
}

impl Component for NotificationCom {
    type Message = Msg;

    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let _noti_dis = Dispatch::global().subscribe_silent(ctx.link().callback(Msg::Notification));
        Self {
            toasts: BTreeMap::new(),
            next: 0,
            _noti_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Notification(noti) => {
                if let Some(err) = &noti.error {
                    log::error!("{}: {:?}", noti.content, err);
                }
                let key = self.next;
                self.next += 1;
                let link = ctx.link().clone();
                let timeout = Timeout::new(noti.delay, move || link.send_message(Msg::Remove(key)));
                self.toasts.insert(key, (noti, timeout));
                true
            }
            Msg::Remove(key) => self.toasts.remove(&key).is_some(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toasts = self
            .toasts
            .iter()
            .map(|(key, (item, _))| {
                let mut class = classes!("notification-item");
                match item.type_ {
                    NotificationType::Info => class.push("info"),
                    NotificationType::Success => class.push("success"),
                    NotificationType::Error => class.push("error"),
                }
                let key = *key;
                let onclick = ctx.link().callback(move |_| Msg::Remove(key));
                html! {
                    <div {class} key={key}>
                        <span>{item.content.clone()}</span>
                        <button class="notification-close" {onclick}><CloseIcon /></button>
                    </div>
                }
            })
            .collect::<Html>();
        html! {
            <div class="notify">
                {toasts}
            </div>
        }
    }
}
