//! エラーケーステスト
//!
//! 入力ファイル・設定ファイルの異常系を検証

use std::path::Path;
use tempfile::tempdir;
use waste_sort::config::Config;
use waste_sort::error::WasteSortError;
use waste_sort::image::load_image;

/// 存在しない画像を指定した場合
#[test]
fn test_load_missing_image() {
    let result = load_image(Path::new("/nonexistent/path/bottle.jpg"));
    assert!(matches!(result, Err(WasteSortError::FileNotFound(_))));
}

/// ディレクトリを画像として指定した場合
#[test]
fn test_load_directory_as_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = load_image(dir.path());
    assert!(matches!(result, Err(WasteSortError::FileNotFound(_))));
}

/// 拡張子のないファイル
#[test]
fn test_load_image_without_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("photo");
    std::fs::write(&path, [0u8; 4]).unwrap();

    let result = load_image(&path);
    assert!(matches!(result, Err(WasteSortError::UnsupportedImage(_))));
}

/// 壊れた設定ファイル
#[test]
fn test_load_broken_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(WasteSortError::JsonParse(_))));
}

/// エラーメッセージ
#[test]
fn test_error_messages() {
    let err = WasteSortError::InvalidPostalCode("1011".to_string());
    assert!(err.to_string().contains("1011"));

    let err = WasteSortError::MissingToken;
    assert!(err.to_string().contains("WASTE_SORT_TOKEN"));

    let err: WasteSortError = waste_sort_common::LocateError::Timeout.into();
    assert!(matches!(err, WasteSortError::Locate(_)));
}
