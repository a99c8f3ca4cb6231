//! フォーム送信先への HTTP 通信

use futures::FutureExt as _;
use futures::future::LocalBoxFuture;
use reqwest::header::ACCEPT;

use super::TransportError;

/// フォームデータの送信
///
/// ブラウザでは `fetch` 上の [`HttpTransport`]、テストではモックが使われる。
pub trait Transport {
    /// `url` へフィールドをフォームエンコードで POST し、HTTP ステータスを返す
    ///
    /// タイムアウトは設定しない（下位の実装の既定に従う）。
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        fields: &'a [(String, String)],
    ) -> LocalBoxFuture<'a, Result<u16, TransportError>>;
}

/// `reqwest` による [`Transport`] 実装
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP クライアント
    client: reqwest::Client,
}

impl HttpTransport {
    #[must_use]
    pub fn new() -> Self {
        Self { client: reqwest::Client::new() }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        fields: &'a [(String, String)],
    ) -> LocalBoxFuture<'a, Result<u16, TransportError>> {
        async move {
            let response = self
                .client
                .post(url)
                .header(ACCEPT, "application/json")
                .form(fields)
                .send()
                .await
                .map_err(|e| TransportError::Failed(e.to_string()))?;

            Ok(response.status().as_u16())
        }
        .boxed_local()
    }
}
