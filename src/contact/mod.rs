//! お問い合わせフォームの送信
//!
//! 1 回の送信は「検証 → 送信中 → 成功 / 失敗」で完結する。再試行は行わない。

/// Submission errors
mod error;
/// HTTP transport
mod transport;

pub use error::{
    SubmitError,
    TransportError,
};
pub use transport::{
    HttpTransport,
    Transport,
};

use crate::dom::{
    Element,
    FormElement,
    Mutation,
};
use crate::i18n::{
    Locale,
    TranslationKey,
};

/// 必須フィールド名
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

/// ステータス要素の基本クラス
pub const STATUS_CLASS: &str = "form-status";

/// ステータス表示の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// 送信中
    Pending,
    /// 送信成功
    Success,
    /// 検証エラー・送信失敗
    Error,
}

impl StatusKind {
    /// ステータス要素の `className`
    #[must_use]
    pub fn class_name(self) -> String {
        match self {
            Self::Pending => STATUS_CLASS.to_string(),
            Self::Success => format!("{STATUS_CLASS} success"),
            Self::Error => format!("{STATUS_CLASS} error"),
        }
    }
}

/// 空または欠けている必須フィールド
///
/// 同名のフィールドが複数ある場合は最後の値で判定する。
#[must_use]
pub fn missing_fields(fields: &[(String, String)]) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .filter(|required| {
            !fields
                .iter()
                .rev()
                .find(|(name, _)| name.as_str() == *required)
                .is_some_and(|(_, value)| !value.is_empty())
        })
        .collect()
}

/// ステータス要素への書き込み
#[must_use]
pub fn status_mutations(locale: Locale, key: TranslationKey, kind: StatusKind) -> [Mutation; 2] {
    [Mutation::Text(key.text(locale).to_string()), Mutation::ClassName(kind.class_name())]
}

/// お問い合わせフォーム
#[derive(Debug)]
pub struct ContactForm<F, E, T> {
    /// フォーム
    form: F,
    /// ステータス表示要素
    status: E,
    /// 送信に使う通信実装
    transport: T,
}

impl<F: FormElement, E: Element, T: Transport> ContactForm<F, E, T> {
    #[must_use]
    pub const fn new(form: F, status: E, transport: T) -> Self {
        Self { form, status, transport }
    }

    /// ステータスを表示する
    fn show(&self, locale: Locale, key: TranslationKey, kind: StatusKind) {
        for mutation in status_mutations(locale, key, kind) {
            self.status.apply(&mutation);
        }
    }

    /// `submit` ハンドラー（ブラウザ既定の遷移はアダプター側で抑止する）
    ///
    /// # Arguments
    /// * `locale` - 表示時点のロケールを返す関数（送信中に言語が切り替わることがある）
    ///
    /// # Errors
    /// - 必須フィールドの欠落（通信は行わない）
    /// - 送信先が成功以外のステータスを返した
    /// - 通信そのものの失敗
    pub async fn submit(&self, locale: impl Fn() -> Locale) -> Result<(), SubmitError> {
        let fields = self.form.entries();

        let missing = missing_fields(&fields);
        if !missing.is_empty() {
            let error = SubmitError::MissingFields(missing);
            tracing::debug!("Contact form rejected locally: {error}");
            self.show(locale(), error.status_key(), StatusKind::Error);
            return Err(error);
        }

        self.show(locale(), TranslationKey::FormSending, StatusKind::Pending);

        let action = self.form.action();
        tracing::debug!("Submitting contact form to {action}");

        let result = match self.transport.post_form(&action, &fields).await {
            Ok(status) if (200..300).contains(&status) => Ok(()),
            Ok(status) => Err(SubmitError::Rejected { status }),
            Err(e) => Err(SubmitError::from(e)),
        };

        match &result {
            Ok(()) => {
                tracing::debug!("Contact form sent");
                self.show(locale(), TranslationKey::FormSuccess, StatusKind::Success);
                self.form.reset();
            }
            Err(e) => {
                tracing::warn!("Contact form submission failed: {e}");
                self.show(locale(), e.status_key(), StatusKind::Error);
            }
        }

        result
    }
}
