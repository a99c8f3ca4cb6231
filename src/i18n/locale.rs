//! ロケール定義

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// ページがサポートするロケール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// トルコ語（既定）
    #[default]
    Tr,
    /// 英語
    En,
}

/// 未知のロケールコード
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported locale code: '{0}'")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// All supported locales, in toggle order.
    pub const ALL: [Self; 2] = [Self::Tr, Self::En];

    /// Two-letter code, as persisted in local storage.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Tr => "tr",
            Self::En => "en",
        }
    }

    /// Short label shown on the language toggle button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tr => "TR",
            Self::En => "EN",
        }
    }

    /// The locale the toggle button switches to.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Tr => Self::En,
            Self::En => Self::Tr,
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_ascii_lowercase().as_str() {
            "tr" | "tr-tr" => Ok(Self::Tr),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            _ => Err(UnknownLocale(code.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
