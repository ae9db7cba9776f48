//! テスト用のクライアント・検証モック

use crate::error::{Error, Result};
use crate::service::{BotVerifier, ServiceClient, VerifyAction};
use crate::types::{AnalysisForm, AnalysisResponse, GeolocationRequest, GeolocationResponse};
use std::cell::RefCell;

/// 呼び出しを記録するクライアント
#[derive(Default)]
pub struct MockClient {
    pub analysis: Option<AnalysisResponse>,
    pub geolocation: Option<GeolocationResponse>,
    pub analysis_calls: RefCell<Vec<AnalysisForm>>,
    pub geolocation_calls: RefCell<Vec<GeolocationRequest>>,
}

impl MockClient {
    pub fn analysis_ok(response: AnalysisResponse) -> Self {
        Self {
            analysis: Some(response),
            ..Default::default()
        }
    }

    pub fn geolocation_ok(response: GeolocationResponse) -> Self {
        Self {
            geolocation: Some(response),
            ..Default::default()
        }
    }

    /// すべての呼び出しが通信エラーになる
    pub fn failing() -> Self {
        Self::default()
    }
}

impl ServiceClient for MockClient {
    async fn post_analysis(&self, form: &AnalysisForm) -> Result<AnalysisResponse> {
        self.analysis_calls.borrow_mut().push(form.clone());
        self.analysis
            .clone()
            .ok_or_else(|| Error::Http("connection refused".to_string()))
    }

    async fn post_geolocation(&self, request: &GeolocationRequest) -> Result<GeolocationResponse> {
        self.geolocation_calls.borrow_mut().push(request.clone());
        self.geolocation
            .clone()
            .ok_or_else(|| Error::Http("connection refused".to_string()))
    }
}

/// 固定トークンを返す検証
#[derive(Default)]
pub struct MockVerifier {
    pub token: Option<String>,
    pub actions: RefCell<Vec<VerifyAction>>,
}

impl MockVerifier {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            ..Default::default()
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl BotVerifier for MockVerifier {
    async fn execute(&self, action: VerifyAction) -> Option<String> {
        self.actions.borrow_mut().push(action);
        self.token.clone()
    }
}
