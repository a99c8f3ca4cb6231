//! ページ設定
/// Embedded configuration loader
mod loader;
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    CursorSettings,
    LanguageSettings,
    PageSettings,
    ScrollSettings,
    SelectorSettings,
    ValidationError,
};
