//! 二言語（トルコ語・英語）の辞書
/// Binding attributes and translation
mod binding;
/// Translation keys and locale tables
mod key;
/// Supported locales
mod locale;

pub use binding::{
    BindingKind,
    translate,
};
pub use key::{
    TranslationKey,
    UnknownKey,
};
pub use locale::{
    Locale,
    UnknownLocale,
};
