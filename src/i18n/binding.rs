//! 翻訳キー属性と DOM プロパティの対応

use super::{
    Locale,
    TranslationKey,
};
use crate::dom::Mutation;

/// 要素が翻訳キーを指定する属性の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// `data-i18n`: 表示テキスト（見出しはマークアップ）
    Text,
    /// `data-placeholder`: `placeholder` プロパティ
    Placeholder,
    /// `data-value`: `value` プロパティ
    Value,
}

impl BindingKind {
    /// 全種類（適用順）
    pub const ALL: [Self; 3] = [Self::Text, Self::Placeholder, Self::Value];

    /// 属性名
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Text => "data-i18n",
            Self::Placeholder => "data-placeholder",
            Self::Value => "data-value",
        }
    }
}

/// 属性値のキーを `locale` の訳に変換した書き込みを返す
///
/// # Returns
/// - `Some(mutation)`: キーが辞書に存在する
/// - `None`: 未知のキー（要素はそのまま）
#[must_use]
pub fn translate(locale: Locale, kind: BindingKind, key: &str) -> Option<Mutation> {
    let key: TranslationKey = key.parse().ok()?;
    let text = key.text(locale).to_string();

    Some(match kind {
        BindingKind::Text if key.is_markup() => Mutation::Markup(text),
        BindingKind::Text => Mutation::Text(text),
        BindingKind::Placeholder => Mutation::Placeholder(text),
        BindingKind::Value => Mutation::Value(text),
    })
}
