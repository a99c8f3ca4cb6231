//! `localStorage` による言語設定の保存

use web_sys::Storage;

use super::js_error;
use crate::storage::{
    PreferenceStore,
    StorageError,
};

/// ブラウザの `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LocalPreferenceStore;

/// `localStorage`（無効化されている場合は `None`）
fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            message: js_error(&e),
        })
    }
}
