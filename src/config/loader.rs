//! 設定 JSON の読み込み関数

use super::{
    ConfigError,
    PageSettings,
};

/// ページに埋め込まれた設定 JSON を読み込む
///
/// `<script type="application/json" id="page-config">` の中身を想定する。
///
/// # Arguments
/// * `source` - 設定 JSON の文字列（要素が無い場合は `None`）
///
/// # Returns
/// - `Ok(Some(settings))`: 設定が見つかり、読み込みに成功
/// - `Ok(None)`: 設定が無い、または空
/// - `Err(ConfigError)`: パースエラー
///
/// # Errors
/// - JSON パースエラー
pub(super) fn load_from_source(source: Option<&str>) -> Result<Option<PageSettings>, ConfigError> {
    let Some(content) = source.map(str::trim).filter(|content| !content.is_empty()) else {
        tracing::debug!("Page configuration not found, using defaults");
        return Ok(None);
    };

    tracing::debug!("Loading page configuration ({} bytes)", content.len());

    let settings: PageSettings = serde_json::from_str(content)?;

    Ok(Some(settings))
}
