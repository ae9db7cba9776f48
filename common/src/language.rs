//! 対応言語と言語設定コンテキスト
//!
//! 起動時: 保存済み設定 → ブラウザ/OSロケール → デフォルト(de) の順で決定。
//! 変更時: 現在値を更新してから永続化する。

use crate::error::Result;
use crate::i18n;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 言語設定の保存キー
pub const LANGUAGE_STORAGE_KEY: &str = "selectedLanguage";

/// 対応言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
    Tr,
    Ru,
    Pl,
    Ar,
    Ku,
    It,
    Bs,
    Hr,
    Sr,
    Ro,
    El,
    Es,
    Fr,
    Hi,
    Ur,
    Vi,
    Zh,
    Fa,
    Ps,
    Ta,
    Sq,
    Da,
    Uk,
}

impl Language {
    /// 言語選択メニューの表示順
    pub const ALL: [Language; 25] = [
        Language::De,
        Language::En,
        Language::Tr,
        Language::Ru,
        Language::Pl,
        Language::Ar,
        Language::Ku,
        Language::It,
        Language::Bs,
        Language::Hr,
        Language::Sr,
        Language::Ro,
        Language::El,
        Language::Es,
        Language::Fr,
        Language::Hi,
        Language::Ur,
        Language::Vi,
        Language::Zh,
        Language::Fa,
        Language::Ps,
        Language::Ta,
        Language::Sq,
        Language::Da,
        Language::Uk,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Tr => "tr",
            Language::Ru => "ru",
            Language::Pl => "pl",
            Language::Ar => "ar",
            Language::Ku => "ku",
            Language::It => "it",
            Language::Bs => "bs",
            Language::Hr => "hr",
            Language::Sr => "sr",
            Language::Ro => "ro",
            Language::El => "el",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Hi => "hi",
            Language::Ur => "ur",
            Language::Vi => "vi",
            Language::Zh => "zh",
            Language::Fa => "fa",
            Language::Ps => "ps",
            Language::Ta => "ta",
            Language::Sq => "sq",
            Language::Da => "da",
            Language::Uk => "uk",
        }
    }

    /// 自言語での名称
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::De => "Deutsch",
            Language::En => "English",
            Language::Tr => "Türkçe",
            Language::Ru => "Русский",
            Language::Pl => "Polski",
            Language::Ar => "العربية",
            Language::Ku => "Kurdî",
            Language::It => "Italiano",
            Language::Bs => "Bosanski",
            Language::Hr => "Hrvatski",
            Language::Sr => "Srpski",
            Language::Ro => "Română",
            Language::El => "Ελληνικά",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::Hi => "हिन्दी",
            Language::Ur => "اردو",
            Language::Vi => "Tiếng Việt",
            Language::Zh => "中文",
            Language::Fa => "فارسی",
            Language::Ps => "پښتو",
            Language::Ta => "தமிழ்",
            Language::Sq => "Shqip",
            Language::Da => "Dansk",
            Language::Uk => "Українська",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::De => "🇩🇪",
            Language::En => "🇬🇧",
            Language::Tr => "🇹🇷",
            Language::Ru => "🇷🇺",
            Language::Pl => "🇵🇱",
            Language::Ar => "🇸🇦",
            Language::Ku => "🏳️",
            Language::It => "🇮🇹",
            Language::Bs => "🇧🇦",
            Language::Hr => "🇭🇷",
            Language::Sr => "🇷🇸",
            Language::Ro => "🇷🇴",
            Language::El => "🇬🇷",
            Language::Es => "🇪🇸",
            Language::Fr => "🇫🇷",
            Language::Hi => "🇮🇳",
            Language::Ur => "🇵🇰",
            Language::Vi => "🇻🇳",
            Language::Zh => "🇨🇳",
            Language::Fa => "🇮🇷",
            Language::Ps => "🇦🇫",
            Language::Ta => "🇱🇰",
            Language::Sq => "🇦🇱",
            Language::Da => "🇩🇰",
            Language::Uk => "🇺🇦",
        }
    }

    /// 言語コードから取得（未対応なら None）
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|lang| lang.code() == code)
    }

    /// ロケール文字列（"de-DE", "en_US.UTF-8" 等）の主言語部分から判定
    pub fn from_locale(locale: &str) -> Option<Self> {
        let primary = locale
            .split(|c: char| c == '-' || c == '_' || c == '.')
            .next()?
            .to_ascii_lowercase();
        Self::from_code(&primary)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| crate::error::Error::Config(format!("未対応の言語コード: {}", s)))
    }
}

/// 言語設定の永続化先
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストア（テスト・一時利用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 現在の表示言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageContext {
    current: Language,
}

impl LanguageContext {
    /// 保存値 → ロケール → デフォルト の順で初期化
    pub fn init(store: &impl PreferenceStore, locale: Option<&str>) -> Self {
        let current = store
            .get(LANGUAGE_STORAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .or_else(|| locale.and_then(Language::from_locale))
            .unwrap_or_default();
        Self { current }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// 言語を切り替えて保存
    pub fn set(&mut self, language: Language, store: &mut impl PreferenceStore) -> Result<()> {
        self.current = language;
        store.set(LANGUAGE_STORAGE_KEY, language.code())
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(self.current, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_unique_and_roundtrip() {
        let mut codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), Language::ALL.len());
    }

    #[test]
    fn test_from_code_unsupported() {
        assert_eq!(Language::from_code("ja"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("DE"), None);
    }

    #[test]
    fn test_from_locale() {
        assert_eq!(Language::from_locale("de-DE"), Some(Language::De));
        assert_eq!(Language::from_locale("en_US.UTF-8"), Some(Language::En));
        assert_eq!(Language::from_locale("TR"), Some(Language::Tr));
        assert_eq!(Language::from_locale("ja-JP"), None);
        assert_eq!(Language::from_locale("C"), None);
    }

    #[test]
    fn test_serde_lowercase_code() {
        let json = serde_json::to_string(&Language::Uk).unwrap();
        assert_eq!(json, "\"uk\"");
        let lang: Language = serde_json::from_str("\"fa\"").unwrap();
        assert_eq!(lang, Language::Fa);
    }

    #[test]
    fn test_init_prefers_stored_value() {
        let mut store = MemoryStore::default();
        store.set(LANGUAGE_STORAGE_KEY, "pl").unwrap();
        let ctx = LanguageContext::init(&store, Some("en-GB"));
        assert_eq!(ctx.current(), Language::Pl);
    }

    #[test]
    fn test_init_ignores_unsupported_stored_value() {
        let mut store = MemoryStore::default();
        store.set(LANGUAGE_STORAGE_KEY, "xx").unwrap();
        let ctx = LanguageContext::init(&store, Some("fr-FR"));
        assert_eq!(ctx.current(), Language::Fr);
    }

    #[test]
    fn test_init_falls_back_to_default() {
        let store = MemoryStore::default();
        assert_eq!(LanguageContext::init(&store, Some("ja-JP")).current(), Language::De);
        assert_eq!(LanguageContext::init(&store, None).current(), Language::De);
    }

    #[test]
    fn test_set_persists() {
        let mut store = MemoryStore::default();
        let mut ctx = LanguageContext::init(&store, None);
        ctx.set(Language::Ar, &mut store).unwrap();

        assert_eq!(ctx.current(), Language::Ar);
        assert_eq!(store.get(LANGUAGE_STORAGE_KEY).as_deref(), Some("ar"));

        // 再起動後も復元される
        let restored = LanguageContext::init(&store, Some("en"));
        assert_eq!(restored.current(), Language::Ar);
    }

    #[test]
    fn test_context_translates_with_current_language() {
        let mut store = MemoryStore::default();
        let mut ctx = LanguageContext::init(&store, Some("en-US"));
        assert_eq!(ctx.t("title"), "Waste Sorting Helper");
        ctx.set(Language::De, &mut store).unwrap();
        assert_eq!(ctx.t("title"), "Müll-Sortierhilfe");
    }
}
