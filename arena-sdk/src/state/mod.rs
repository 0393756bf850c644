use std::fmt::{Display, Formatter};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yewdux::{Dispatch, Store};

use i18n::LanguageType;

use crate::session::Session;

/// publish a new value of a global store
pub trait Notify: Store + Sized {
    fn notify(self) {
        Dispatch::<Self>::global().set(self);
    }

    fn get() -> Rc<Self> {
        Dispatch::<Self>::global().get()
    }
}

impl<T: Store> Notify for T {}

/// the viewer, shared by the guard, the nav bar and the pages
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct SessionState {
    pub session: Session,
}

impl SessionState {
    pub fn set(session: Session) {
        Dispatch::<SessionState>::global().set(SessionState { session });
    }
}

/// language type
#[derive(Debug, Default, Clone, PartialEq, Store, Serialize, Deserialize)]
#[store(storage = "local")]
pub struct I18nState {
    pub lang: LanguageType,
}

#[derive(Default, Clone, PartialEq, Debug, Store, Serialize, Deserialize)]
#[store(storage = "local")]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    pub fn toggled(&self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }
}

impl Display for ThemeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeState::Light => write!(f, "light"),
            ThemeState::Dark => write!(f, "dark"),
        }
    }
}

impl From<&str> for ThemeState {
    fn from(value: &str) -> Self {
        match value {
            "dark" => ThemeState::Dark,
            _ => ThemeState::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_its_name() {
        assert_eq!(ThemeState::from("dark"), ThemeState::Dark);
        assert_eq!(ThemeState::from("sepia"), ThemeState::Light);
        assert_eq!(ThemeState::Dark.toggled().to_string(), "light");
    }
}
