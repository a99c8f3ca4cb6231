//! 言語切り替え
//!
//! 翻訳キー属性を持つ全要素を選択中のロケールで書き換え、選択をストレージに保存する。

use std::cell::Cell;

use crate::config::LanguageSettings;
use crate::dom::{
    BindingScope,
    Element,
    Mutation,
};
use crate::i18n::{
    BindingKind,
    Locale,
    translate,
};
use crate::storage::PreferenceStore;

/// 言語切り替え
#[derive(Debug)]
pub struct LanguageSwitcher<D: BindingScope, S> {
    /// 翻訳対象の要素の検索範囲
    scope: D,
    /// 切り替えボタン
    toggle: D::Element,
    /// 言語設定の保存先
    store: S,
    /// 保存キーと既定ロケール
    settings: LanguageSettings,
    /// 現在のロケール
    locale: Cell<Locale>,
}

impl<D: BindingScope, S: PreferenceStore> LanguageSwitcher<D, S> {
    #[must_use]
    pub fn new(scope: D, toggle: D::Element, store: S, settings: LanguageSettings) -> Self {
        let locale = Cell::new(settings.default_locale);
        Self { scope, toggle, store, settings, locale }
    }

    /// 現在のロケール
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// 保存済みのロケール（無い・不明な場合は既定値）
    #[must_use]
    pub fn stored_locale(&self) -> Locale {
        let Some(code) = self.store.load(&self.settings.storage_key) else {
            return self.settings.default_locale;
        };

        code.parse().unwrap_or_else(|e| {
            tracing::debug!("Ignoring stored language: {e}");
            self.settings.default_locale
        })
    }

    /// 起動時の同期：保存済み（または既定）のロケールをページ全体に適用する
    pub fn init(&self) -> usize {
        self.set_language(self.stored_locale())
    }

    /// ロケールを切り替える
    ///
    /// ボタンのラベルを「もう一方」のロケール名に更新し、選択を保存してから、
    /// 辞書にキーがある全要素を書き換える。保存の失敗は記録するだけで処理は続ける。
    ///
    /// # Returns
    /// 書き換えた要素の数
    pub fn set_language(&self, locale: Locale) -> usize {
        self.locale.set(locale);
        self.toggle.apply(&Mutation::Text(locale.opposite().label().to_string()));

        if let Err(e) = self.store.save(&self.settings.storage_key, locale.code()) {
            tracing::warn!("Failed to persist language preference: {e}");
        }

        let mut updated = 0;
        for kind in BindingKind::ALL {
            for element in self.scope.bound_elements(kind) {
                let Some(key) = element.attribute(kind.attribute()) else {
                    continue;
                };
                match translate(locale, kind, &key) {
                    Some(mutation) => {
                        element.apply(&mutation);
                        updated += 1;
                    }
                    None => tracing::debug!("No '{locale}' translation for '{key}'"),
                }
            }
        }

        tracing::debug!("Applied language '{locale}' to {updated} elements");
        updated
    }

    /// 切り替えボタンのクリックハンドラー
    ///
    /// # Returns
    /// 切り替え後のロケール
    pub fn toggle(&self) -> Locale {
        let next = self.locale().opposite();
        self.set_language(next);
        next
    }
}
