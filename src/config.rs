use crate::error::{Result, WasteSortError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use waste_sort_common::{Endpoints, PreferenceStore, LANGUAGE_STORAGE_KEY};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 最後に選択した言語コード
    #[serde(default)]
    pub language: Option<String>,
    pub analysis_url: String,
    pub geolocation_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let endpoints = Endpoints::default();
        Self {
            language: None,
            analysis_url: endpoints.analysis_url,
            geolocation_url: endpoints.geolocation_url,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| WasteSortError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("waste-sort").join("config.json"))
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            analysis_url: self.analysis_url.clone(),
            geolocation_url: self.geolocation_url.clone(),
        }
    }

    /// 解析URLを変更（位置情報URLも追従させる）
    pub fn set_analysis_url(&mut self, url: &str) {
        let endpoints = Endpoints::from_analysis_url(url);
        self.analysis_url = endpoints.analysis_url;
        self.geolocation_url = endpoints.geolocation_url;
    }
}

/// 言語設定はファイルの `language` に保存する（書き出しは `save` で行う）
impl PreferenceStore for Config {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            LANGUAGE_STORAGE_KEY => self.language.clone(),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: &str) -> waste_sort_common::Result<()> {
        match key {
            LANGUAGE_STORAGE_KEY => {
                self.language = Some(value.to_string());
                Ok(())
            }
            _ => Err(waste_sort_common::Error::Storage(format!("unknown key: {}", key))),
        }
    }
}

/// OSのロケール（LC_ALL → LC_MESSAGES → LANG）
pub fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.is_empty())
}
