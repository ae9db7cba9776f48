//! 画像・解析結果・通信データの型定義
//!
//! Webアプリ(WASM)とCLIで共有される型:
//! - UploadedImage: 選択された画像
//! - AnalysisForm / AnalysisResponse: 解析エンドポイントの送受信
//! - GeolocationRequest / GeolocationResponse: 位置情報エンドポイントの送受信
//! - AnalysisResult: 表示用の解析結果

use crate::error::{Error, Result};
use crate::i18n;
use crate::language::Language;
use crate::postal_code::PostalCode;
use serde::{Deserialize, Serialize};

/// 選択された画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    /// `image/*` 以外は受け付けない
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let mime_type = mime_type.into();
        if !is_image_mime(&mime_type) {
            return Err(Error::UnsupportedImage(mime_type));
        }
        Ok(Self {
            file_name: file_name.into(),
            mime_type,
            bytes,
        })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// "1.25 MB" 形式のサイズ表示
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.bytes.len() as f64 / 1024.0 / 1024.0)
    }
}

pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// 拡張子からMIMEタイプを推定
pub fn mime_from_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}

/// 解析エンドポイントへ送るフォーム
///
/// multipart/form-data のフィールド: image, postal_code, recaptcha_code, language
#[derive(Debug, Clone)]
pub struct AnalysisForm {
    pub image: UploadedImage,
    pub postal_code: PostalCode,
    pub recaptcha_code: String,
    pub language: Language,
}

impl AnalysisForm {
    pub const IMAGE_FIELD: &'static str = "image";
    pub const POSTAL_CODE_FIELD: &'static str = "postal_code";
    pub const TOKEN_FIELD: &'static str = "recaptcha_code";
    pub const LANGUAGE_FIELD: &'static str = "language";

    /// 画像以外のテキストフィールド
    pub fn text_fields(&self) -> [(&'static str, &str); 3] {
        [
            (Self::POSTAL_CODE_FIELD, self.postal_code.as_str()),
            (Self::TOKEN_FIELD, self.recaptcha_code.as_str()),
            (Self::LANGUAGE_FIELD, self.language.code()),
        ]
    }
}

/// 解析エンドポイントのレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 表示用の結果に変換（エラー文言が無ければ汎用メッセージ）
    pub fn into_result(self, language: Language) -> AnalysisResult {
        if self.success {
            AnalysisResult::Success {
                html: self.html.unwrap_or_default(),
            }
        } else {
            AnalysisResult::Failure {
                error: self
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| i18n::translate(language, "genericError").to_string()),
            }
        }
    }
}

/// 解析結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisResult {
    Success { html: String },
    Failure { error: String },
}

impl AnalysisResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResult::Success { .. })
    }

    /// 通信・パース失敗時の結果
    pub fn network_failure(language: Language) -> Self {
        AnalysisResult::Failure {
            error: i18n::translate(language, "networkError").to_string(),
        }
    }
}

/// 位置情報エンドポイントへ送るJSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocationRequest {
    pub language: Language,
    pub lat: f64,
    pub lng: f64,
    pub captcha: String,
}

/// 位置情報エンドポイントのレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeolocationResponse {
    pub success: bool,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
