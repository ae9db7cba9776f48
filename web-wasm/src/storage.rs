//! localStorage への言語設定保存

use waste_sort_common::{Error, PreferenceStore, Result};

/// ブラウザの localStorage（値は生の文字列で保存）
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = Self::storage()
            .ok_or_else(|| Error::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}
