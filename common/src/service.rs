//! 外部サービスとの境界
//!
//! Bot検証ウィジェットとHTTPクライアントをトレイトで抽象化し、
//! ブラウザ実装・CLI実装・テスト用モックを差し替えられるようにする。

use crate::error::Result;
use crate::types::{AnalysisForm, AnalysisResponse, GeolocationRequest, GeolocationResponse};
use serde::{Deserialize, Serialize};

/// 本番の解析エンドポイント
pub const DEFAULT_ANALYSIS_URL: &str = "https://backend-service-7lnemd56tq-ey.a.run.app";

/// reCAPTCHA Enterprise サイトキー
pub const RECAPTCHA_SITE_KEY: &str = "6Le192grAAAAADPqfnpdXdiBBGSs45vG6h1pLL60";

/// 検証トークンのアクション種別（バックエンド側でしきい値を分ける）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyAction {
    AnalyzeWaste,
    DetectLocation,
}

impl VerifyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyAction::AnalyzeWaste => "analyze_waste",
            VerifyAction::DetectLocation => "detect_location",
        }
    }
}

/// Bot検証
///
/// 取得できなければ `None`（呼び出し側は操作を中止する）。エラーは返さない。
#[allow(async_fn_in_trait)]
pub trait BotVerifier {
    async fn execute(&self, action: VerifyAction) -> Option<String>;
}

/// 解析・位置情報サービスへのHTTPクライアント
#[allow(async_fn_in_trait)]
pub trait ServiceClient {
    async fn post_analysis(&self, form: &AnalysisForm) -> Result<AnalysisResponse>;
    async fn post_geolocation(&self, request: &GeolocationRequest) -> Result<GeolocationResponse>;
}

/// エンドポイント設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub analysis_url: String,
    pub geolocation_url: String,
}

impl Endpoints {
    /// 解析URLから位置情報URLを導出する
    pub fn from_analysis_url(analysis_url: &str) -> Self {
        let base = analysis_url.trim_end_matches('/');
        Self {
            analysis_url: base.to_string(),
            geolocation_url: format!("{}/geolocation", base),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_analysis_url(DEFAULT_ANALYSIS_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names() {
        assert_eq!(VerifyAction::AnalyzeWaste.as_str(), "analyze_waste");
        assert_eq!(VerifyAction::DetectLocation.as_str(), "detect_location");
    }

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.analysis_url, DEFAULT_ANALYSIS_URL);
        assert_eq!(endpoints.geolocation_url, format!("{}/geolocation", DEFAULT_ANALYSIS_URL));
    }

    #[test]
    fn test_endpoints_trailing_slash() {
        let endpoints = Endpoints::from_analysis_url("http://localhost:8080/");
        assert_eq!(endpoints.analysis_url, "http://localhost:8080");
        assert_eq!(endpoints.geolocation_url, "http://localhost:8080/geolocation");
    }
}
