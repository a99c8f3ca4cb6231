//! 設定管理を行うモジュール

use super::{
    ConfigError,
    PageSettings,
    loader,
};

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: PageSettings,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: PageSettings::default() }
    }

    /// 設定を読み込む
    ///
    /// # Arguments
    /// * `source` - ページに埋め込まれた設定 JSON
    ///
    /// # Returns
    /// - `Ok(())`: 設定の読み込みとバリデーション成功
    /// - `Err(ConfigError)`: エラー（現在の設定は変更されない）
    ///
    /// # Errors
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, source: Option<&str>) -> Result<(), ConfigError> {
        let settings = loader::load_from_source(source)?.unwrap_or_default();

        // バリデーション
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        // 設定を保存
        self.current_settings = settings;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &PageSettings {
        &self.current_settings
    }

    /// 設定を取り出す
    #[must_use]
    pub fn into_settings(self) -> PageSettings {
        self.current_settings
    }
}
