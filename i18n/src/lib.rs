use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub mod en_us;
pub mod zh_cn;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageType {
    ZhCN,
    #[default]
    EnUS,
}

impl Display for LanguageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LanguageType::ZhCN => write!(f, "zh_cn"),
            LanguageType::EnUS => write!(f, "en_us"),
        }
    }
}

impl From<&str> for LanguageType {
    fn from(value: &str) -> Self {
        match value {
            "zh_cn" => LanguageType::ZhCN,
            _ => LanguageType::EnUS,
        }
    }
}

/// Picks the resource of one component in the requested language.
#[macro_export]
macro_rules! resource {
    ($lang:expr, $name:ident) => {
        match $lang {
            $crate::LanguageType::ZhCN => $crate::zh_cn::$name,
            $crate::LanguageType::EnUS => $crate::en_us::$name,
        }
    };
}
