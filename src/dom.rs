//! DOM の薄い境界
//!
//! ページのロジックは DOM を直接操作せず、[`Mutation`] を生成して [`Element`] に適用させる。
//! ブラウザでは `web` モジュールの実装が、テストではインメモリ実装が使われる。

use std::fmt::Debug;

use crate::i18n::BindingKind;
use crate::types::{
    Layout,
    Point,
};

/// 要素に対する 1 回分の書き込み
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// `textContent` を置き換える
    Text(String),
    /// `innerHTML` を置き換える
    Markup(String),
    /// `placeholder` プロパティを置き換える
    Placeholder(String),
    /// `value` プロパティを置き換える
    Value(String),
    /// クラスを付け外しする
    Class { name: &'static str, enabled: bool },
    /// `className` 全体を置き換える
    ClassName(String),
    /// `style.left` / `style.top` を即座に設定する
    Position(Point),
    /// 位置へのアニメーションを開始する（進行中のものは置き換えられる）
    AnimatePosition { target: Point, duration_ms: u32 },
}

/// ページ上の 1 要素
pub trait Element: Debug {
    /// 属性値を取得する
    fn attribute(&self, name: &str) -> Option<String>;

    /// 書き込みを適用する
    fn apply(&self, mutation: &Mutation);

    /// ドキュメント上の縦方向の位置と高さ
    fn layout(&self) -> Layout;
}

/// 送信対象のフォーム
pub trait FormElement: Debug {
    /// フォームの `action` 属性（送信先 URL）
    fn action(&self) -> String;

    /// 送信されるフィールド（ドキュメント順）
    fn entries(&self) -> Vec<(String, String)>;

    /// 全フィールドを初期状態に戻す
    fn reset(&self);
}

/// 翻訳キー属性を持つ要素の検索範囲
///
/// ブログカードのように後から描画される要素も対象にするため、呼び出しのたびに検索する。
pub trait BindingScope: Debug {
    /// このスコープが返す要素の型
    type Element: Element;

    /// `kind` の属性を持つ要素をドキュメント順に返す
    fn bound_elements(&self, kind: BindingKind) -> Vec<Self::Element>;
}
