//! 現在地から郵便番号を解決する
//!
//! 1. 位置情報APIで座標を取得（ブラウザ側）
//! 2. Bot検証トークン（detect_location）を取得
//! 3. {language, lat, lng, captcha} を位置情報エンドポイントへ送信
//! 4. 返ってきた郵便番号を5桁ルールで検証
//!
//! 失敗はすべてその試行で終了（自動リトライなし）。

use crate::i18n;
use crate::language::Language;
use crate::postal_code::PostalCode;
use crate::service::{BotVerifier, ServiceClient, VerifyAction};
use crate::types::GeolocationRequest;
use thiserror::Error;

/// 位置取得のタイムアウト（ミリ秒）
pub const POSITION_TIMEOUT_MS: u32 = 10_000;
/// キャッシュ済み位置の許容期間（ミリ秒）
pub const POSITION_MAX_AGE_MS: u32 = 5 * 60 * 1000;
/// 高精度モードを要求する
pub const POSITION_HIGH_ACCURACY: bool = true;

/// 緯度経度
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// 位置情報まわりの失敗
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("geolocation is not supported")]
    Unsupported,

    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("position request timed out")]
    Timeout,

    #[error("location error: {0}")]
    Location(String),

    #[error("bot verification failed")]
    Verification,

    #[error("location service error: {0}")]
    Service(String),
}

impl LocateError {
    /// GeolocationPositionError.code からの変換（1: 拒否, 2: 取得不可, 3: タイムアウト）
    pub fn from_position_error_code(code: u16, message: &str) -> Self {
        match code {
            1 => LocateError::PermissionDenied,
            2 => LocateError::PositionUnavailable,
            3 => LocateError::Timeout,
            _ => LocateError::Location(message.to_string()),
        }
    }

    /// 表示用の翻訳キー
    pub fn message_key(&self) -> &'static str {
        match self {
            LocateError::Unsupported => "locationUnsupported",
            LocateError::PermissionDenied => "locationPermissionDenied",
            LocateError::PositionUnavailable => "locationUnavailable",
            LocateError::Timeout => "locationTimeout",
            LocateError::Location(_) => "locationError",
            LocateError::Verification => "verificationFailed",
            LocateError::Service(_) => "locationServiceError",
        }
    }

    pub fn message(&self, language: Language) -> &'static str {
        i18n::translate(language, self.message_key())
    }
}

/// 座標から郵便番号を解決する
pub async fn resolve_postal_code<C, V>(
    client: &C,
    verifier: &V,
    language: Language,
    coords: Coordinates,
) -> Result<PostalCode, LocateError>
where
    C: ServiceClient,
    V: BotVerifier,
{
    let captcha = verifier
        .execute(VerifyAction::DetectLocation)
        .await
        .ok_or(LocateError::Verification)?;

    let request = GeolocationRequest {
        language,
        lat: coords.latitude,
        lng: coords.longitude,
        captcha,
    };

    let response = client
        .post_geolocation(&request)
        .await
        .map_err(|e| LocateError::Service(e.to_string()))?;

    if !response.success {
        return Err(LocateError::Service(
            response.error.unwrap_or_else(|| "request rejected".to_string()),
        ));
    }

    let code = response.postal_code.unwrap_or_default();
    PostalCode::parse(&code).map_err(|e| LocateError::Service(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockClient, MockVerifier};
    use crate::types::GeolocationResponse;
    use futures::executor::block_on;

    const BERLIN: Coordinates = Coordinates {
        latitude: 52.5200,
        longitude: 13.4050,
    };

    fn response(success: bool, postal_code: Option<&str>, error: Option<&str>) -> GeolocationResponse {
        GeolocationResponse {
            success,
            postal_code: postal_code.map(str::to_string),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_resolve_success() {
        let client = MockClient::geolocation_ok(response(true, Some("10117"), None));
        let verifier = MockVerifier::with_token("geo-token");

        let code = block_on(resolve_postal_code(&client, &verifier, Language::En, BERLIN))
            .expect("解決できるはず");

        assert_eq!(code.as_str(), "10117");
        let calls = client.geolocation_calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].captcha, "geo-token");
        assert_eq!(calls[0].language, Language::En);
        assert_eq!(calls[0].lat, 52.5200);
        assert_eq!(calls[0].lng, 13.4050);
        assert_eq!(verifier.actions.borrow().as_slice(), &[VerifyAction::DetectLocation]);
    }

    #[test]
    fn test_resolve_verification_failure_skips_request() {
        let client = MockClient::geolocation_ok(response(true, Some("10117"), None));
        let verifier = MockVerifier::unavailable();

        let err = block_on(resolve_postal_code(&client, &verifier, Language::De, BERLIN)).unwrap_err();
        assert_eq!(err, LocateError::Verification);
        assert!(client.geolocation_calls.borrow().is_empty());
    }

    #[test]
    fn test_resolve_invalid_code_from_service() {
        let client = MockClient::geolocation_ok(response(true, Some("1011"), None));
        let verifier = MockVerifier::with_token("tok");

        let err = block_on(resolve_postal_code(&client, &verifier, Language::De, BERLIN)).unwrap_err();
        assert!(matches!(err, LocateError::Service(_)));
    }

    #[test]
    fn test_resolve_missing_code_from_service() {
        let client = MockClient::geolocation_ok(response(true, None, None));
        let verifier = MockVerifier::with_token("tok");

        let err = block_on(resolve_postal_code(&client, &verifier, Language::De, BERLIN)).unwrap_err();
        assert_eq!(err.message_key(), "locationServiceError");
    }

    #[test]
    fn test_resolve_service_reports_failure() {
        let client = MockClient::geolocation_ok(response(false, None, Some("outside Germany")));
        let verifier = MockVerifier::with_token("tok");

        let err = block_on(resolve_postal_code(&client, &verifier, Language::De, BERLIN)).unwrap_err();
        assert_eq!(err, LocateError::Service("outside Germany".to_string()));
    }

    #[test]
    fn test_resolve_network_failure() {
        let client = MockClient::failing();
        let verifier = MockVerifier::with_token("tok");

        let err = block_on(resolve_postal_code(&client, &verifier, Language::De, BERLIN)).unwrap_err();
        assert!(matches!(err, LocateError::Service(ref m) if m.contains("connection refused")));
    }

    #[test]
    fn test_position_error_codes() {
        assert_eq!(LocateError::from_position_error_code(1, ""), LocateError::PermissionDenied);
        assert_eq!(LocateError::from_position_error_code(2, ""), LocateError::PositionUnavailable);
        assert_eq!(LocateError::from_position_error_code(3, ""), LocateError::Timeout);
        assert_eq!(
            LocateError::from_position_error_code(0, "weird"),
            LocateError::Location("weird".to_string())
        );
    }

    #[test]
    fn test_each_failure_has_distinct_message() {
        let errors = [
            LocateError::Unsupported,
            LocateError::PermissionDenied,
            LocateError::PositionUnavailable,
            LocateError::Timeout,
            LocateError::Location(String::new()),
            LocateError::Verification,
            LocateError::Service(String::new()),
        ];
        let mut messages: Vec<&str> = errors.iter().map(|e| e.message(Language::En)).collect();
        for message in &messages {
            assert!(!message.is_empty());
            assert!(!message.starts_with("location"), "翻訳漏れ: {}", message);
        }
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), errors.len());
    }

    #[test]
    fn test_message_falls_back_to_german() {
        assert_eq!(
            LocateError::Timeout.message(Language::Pl),
            "Die Standortermittlung hat zu lange gedauert."
        );
    }
}
