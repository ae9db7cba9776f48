//! 設定ファイルの保存・読み込みテスト

use tempfile::tempdir;
use waste_sort::config::Config;
use waste_sort_common::{Language, LanguageContext};

#[test]
fn test_missing_config_uses_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("none.json")).unwrap();
    assert_eq!(config.analysis_url, Config::default().analysis_url);
    assert!(config.language.is_none());
}

#[test]
fn test_config_roundtrip_with_language() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_analysis_url("http://localhost:8080");
    let mut ctx = LanguageContext::init(&config, None);
    ctx.set(Language::Pl, &mut config).unwrap();
    config.save_to(&path).expect("設定を保存できること");

    let loaded = Config::load_from(&path).expect("設定を読み込めること");
    assert_eq!(loaded.language.as_deref(), Some("pl"));
    assert_eq!(loaded.geolocation_url, "http://localhost:8080/geolocation");

    // 保存済みの言語はロケールより優先
    let ctx = LanguageContext::init(&loaded, Some("fr_FR.UTF-8"));
    assert_eq!(ctx.current(), Language::Pl);
}

#[test]
fn test_unknown_stored_language_falls_back_to_locale() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"language": "xx", "analysis_url": "http://a", "geolocation_url": "http://a/geolocation"}"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(LanguageContext::init(&config, Some("it_IT")).current(), Language::It);
    assert_eq!(LanguageContext::init(&config, None).current(), Language::De);
}
