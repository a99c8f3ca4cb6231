//! portfolio-page
//!
//! トルコ語・英語のバイリンガルなポートフォリオページの振る舞い（カーソル、ブログ、
//! スクロールナビゲーション、お問い合わせフォーム、言語切り替え）。
//!
//! ロジックは DOM の薄い境界（[`dom`]）越しに動くため、ブラウザ無しでテストできる。
//! WebAssembly ビルドでは `web` モジュールがブラウザの API に接続する。

pub mod blog;
pub mod config;
pub mod contact;
pub mod cursor;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod language;
pub mod page;
pub mod scroll;
pub mod storage;
pub mod types;

/// In-memory test doubles
#[cfg(test)]
mod test_utils;
/// Browser adapter
#[cfg(target_arch = "wasm32")]
mod web;

pub use error::PageError;
pub use page::{
    ContactElements,
    PageController,
    PageElements,
};
