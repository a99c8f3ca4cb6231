//! ページコントローラー
//!
//! 起動時に一度だけ作られ、各イベントハンドラーから共有される。現在のロケールもここが持つ。

use crate::blog::{
    BLOG_POSTS,
    BlogPost,
    render_posts,
};
use crate::config::PageSettings;
use crate::contact::{
    ContactForm,
    SubmitError,
    Transport,
};
use crate::cursor::CursorTracker;
use crate::dom::{
    BindingScope,
    FormElement,
};
use crate::i18n::Locale;
use crate::language::LanguageSwitcher;
use crate::scroll::ScrollNavigator;
use crate::storage::PreferenceStore;
use crate::types::Point;

/// お問い合わせフォームの要素
#[derive(Debug)]
pub struct ContactElements<F, E> {
    pub form: F,
    pub status: E,
}

/// ページの DOM 参照
#[derive(Debug)]
pub struct PageElements<D: BindingScope, F> {
    /// 翻訳キー属性の検索範囲（ドキュメント）
    pub scope: D,
    pub cursor_dot: D::Element,
    pub cursor_outline: D::Element,
    pub blog_container: D::Element,
    /// ドキュメント順
    pub sections: Vec<D::Element>,
    pub nav_links: Vec<D::Element>,
    pub header: D::Element,
    pub language_toggle: D::Element,
    /// フォームが無いページでは `None`
    pub contact: Option<ContactElements<F, D::Element>>,
}

/// ページコントローラー
#[derive(Debug)]
pub struct PageController<D: BindingScope, F, S, T> {
    /// カーソル追従
    cursor: CursorTracker<D::Element>,
    /// ブログカードの描画先
    blog_container: D::Element,
    /// 表示する投稿
    posts: &'static [BlogPost],
    /// スクロールナビゲーター
    scroll: ScrollNavigator<D::Element>,
    /// 言語切り替え
    language: LanguageSwitcher<D, S>,
    /// お問い合わせフォーム
    contact: Option<ContactForm<F, D::Element, T>>,
}

impl<D, F, S, T> PageController<D, F, S, T>
where
    D: BindingScope,
    F: FormElement,
    S: PreferenceStore,
    T: Transport,
{
    /// 注入された DOM 参照からコントローラーを組み立てる
    #[must_use]
    pub fn new(elements: PageElements<D, F>, settings: &PageSettings, store: S, transport: T) -> Self {
        let PageElements {
            scope,
            cursor_dot,
            cursor_outline,
            blog_container,
            sections,
            nav_links,
            header,
            language_toggle,
            contact,
        } = elements;

        Self {
            cursor: CursorTracker::new(
                cursor_dot,
                cursor_outline,
                settings.cursor.outline_duration_ms,
            ),
            blog_container,
            posts: &BLOG_POSTS,
            scroll: ScrollNavigator::new(sections, nav_links, header, settings.scroll),
            language: LanguageSwitcher::new(
                scope,
                language_toggle,
                store,
                settings.language.clone(),
            ),
            contact: contact.map(|ContactElements { form, status }| {
                ContactForm::new(form, status, transport)
            }),
        }
    }

    /// 起動処理：ブログカードを描画し、保存済みの言語をページ全体に適用する
    ///
    /// カードにも翻訳キーがあるため、描画を先に行う。
    pub fn start(&self) {
        render_posts(self.posts, &self.blog_container);
        let updated = self.language.init();
        tracing::info!("Page ready in '{}' ({updated} translated elements)", self.locale());
    }

    /// 現在のロケール
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.language.locale()
    }

    /// ポインタ移動
    pub fn on_pointer_move(&self, position: Point) {
        self.cursor.on_pointer_move(position);
    }

    /// スクロール（`window.scrollY` をそのまま渡す）
    pub fn on_scroll(&self, scroll_y: f64) {
        self.scroll.on_scroll(scroll_y);
    }

    /// 言語切り替えボタンのクリック
    pub fn toggle_language(&self) -> Locale {
        self.language.toggle()
    }

    /// ロケールを指定して切り替える
    pub fn set_language(&self, locale: Locale) -> usize {
        self.language.set_language(locale)
    }

    /// お問い合わせフォームの送信
    ///
    /// # Returns
    /// - `None`: ページにフォームが無い
    /// - `Some(result)`: 送信結果（表示はフォーム側で済んでいる）
    pub async fn submit(&self) -> Option<Result<(), SubmitError>> {
        let contact = self.contact.as_ref()?;
        Some(contact.submit(|| self.locale()).await)
    }
}
