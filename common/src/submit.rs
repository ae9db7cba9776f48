//! 解析送信ワークフロー
//!
//! 状態遷移: Idle → Verifying → Submitting → Idle
//! どの段階で失敗しても Idle に戻る。Idle 以外では新たな送信を受け付けない。

use crate::i18n;
use crate::language::Language;
use crate::postal_code::{FieldStatus, PostalCode, PostalCodeField};
use crate::service::{BotVerifier, ServiceClient, VerifyAction};
use crate::types::{AnalysisForm, AnalysisResult, UploadedImage};
use std::cell::Cell;

/// 送信ボタンの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Verifying,
    Submitting,
}

impl SubmitPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmitPhase::Idle)
    }
}

/// 送信の多重実行を防ぐガード
#[derive(Debug, Default)]
pub struct SubmitGuard {
    phase: Cell<SubmitPhase>,
}

impl SubmitGuard {
    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    /// Idle のときだけ Verifying に進める
    fn try_begin(&self) -> Option<PhaseReset<'_>> {
        if !self.phase.get().is_idle() {
            return None;
        }
        self.phase.set(SubmitPhase::Verifying);
        Some(PhaseReset { guard: self })
    }
}

/// スコープを抜けたら必ず Idle に戻す
struct PhaseReset<'a> {
    guard: &'a SubmitGuard,
}

impl PhaseReset<'_> {
    fn set(&self, phase: SubmitPhase) {
        self.guard.phase.set(phase);
    }
}

impl Drop for PhaseReset<'_> {
    fn drop(&mut self) {
        self.guard.phase.set(SubmitPhase::Idle);
    }
}

/// 送信の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 送信した（成功・失敗どちらも結果あり）
    Completed(AnalysisResult),
    /// 郵便番号か画像が未入力
    MissingInput,
    /// 検証トークンを取得できなかった
    VerificationUnavailable,
    /// 送信中
    Busy,
}

impl SubmitOutcome {
    /// 画面でブロッキング通知すべきメッセージ
    ///
    /// 検証失敗のときだけ Some。
    pub fn notice(&self, language: Language) -> Option<&'static str> {
        match self {
            SubmitOutcome::VerificationUnavailable => i18n::try_translate(language, "verificationFailed"),
            SubmitOutcome::Completed(_) | SubmitOutcome::MissingInput | SubmitOutcome::Busy => None,
        }
    }
}

/// 郵便番号・画像・検証トークンをそろえて解析を依頼する
///
/// 前提がそろわなければ通信せずに戻る。通信・パース失敗は
/// エラーを伝播させず、汎用メッセージの `Failure` に変換する。
/// `on_phase` には状態が変わるたびに通知する（最後は必ず Idle）。
pub async fn submit_analysis<C, V>(
    client: &C,
    verifier: &V,
    guard: &SubmitGuard,
    postal_code: Option<&PostalCode>,
    image: Option<&UploadedImage>,
    language: Language,
    on_phase: impl Fn(SubmitPhase),
) -> SubmitOutcome
where
    C: ServiceClient,
    V: BotVerifier,
{
    let (Some(postal_code), Some(image)) = (postal_code, image) else {
        return SubmitOutcome::MissingInput;
    };

    let Some(phase) = guard.try_begin() else {
        return SubmitOutcome::Busy;
    };
    on_phase(SubmitPhase::Verifying);

    let outcome = match verifier.execute(VerifyAction::AnalyzeWaste).await {
        None => SubmitOutcome::VerificationUnavailable,
        Some(token) => {
            phase.set(SubmitPhase::Submitting);
            on_phase(SubmitPhase::Submitting);

            let form = AnalysisForm {
                image: image.clone(),
                postal_code: postal_code.clone(),
                recaptcha_code: token,
                language,
            };
            let result = match client.post_analysis(&form).await {
                Ok(response) => response.into_result(language),
                Err(_) => AnalysisResult::network_failure(language),
            };
            SubmitOutcome::Completed(result)
        }
    };

    drop(phase);
    on_phase(SubmitPhase::Idle);
    outcome
}

/// 画面1枚分の入力状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisSession {
    field: PostalCodeField,
    postal_code: Option<PostalCode>,
    image: Option<UploadedImage>,
    result: Option<AnalysisResult>,
}

impl AnalysisSession {
    /// 郵便番号欄のキー入力
    pub fn input_postal_code(&mut self, raw: &str) -> FieldStatus {
        self.postal_code = self.field.on_input(raw);
        self.field.status()
    }

    /// 位置情報から解決した郵便番号を採用
    pub fn adopt_postal_code(&mut self, code: PostalCode) {
        self.field.adopt(&code);
        self.postal_code = Some(code);
    }

    /// 画像を選択（画像以外は無視して false）
    pub fn select_image(&mut self, file_name: &str, mime_type: &str, bytes: Vec<u8>) -> bool {
        match UploadedImage::new(file_name, mime_type, bytes) {
            Ok(image) => {
                self.image = Some(image);
                true
            }
            Err(_) => false,
        }
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn set_result(&mut self, result: AnalysisResult) {
        self.result = Some(result);
    }

    pub fn clear_result(&mut self) {
        self.result = None;
    }

    /// 新しい解析を始める（郵便番号・画像・結果をすべてリセット）
    pub fn new_analysis(&mut self) {
        *self = Self::default();
    }

    pub fn can_submit(&self) -> bool {
        self.postal_code.is_some() && self.image.is_some()
    }

    pub fn field(&self) -> &PostalCodeField {
        &self.field
    }

    pub fn postal_code(&self) -> Option<&PostalCode> {
        self.postal_code.as_ref()
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockClient, MockVerifier};
    use crate::types::AnalysisResponse;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn inputs() -> (PostalCode, UploadedImage) {
        (
            PostalCode::parse("10115").unwrap(),
            UploadedImage::new("can.jpg", "image/jpeg", vec![0xFF, 0xD8]).unwrap(),
        )
    }

    #[test]
    fn test_submit_success() {
        let client = MockClient::analysis_ok(AnalysisResponse {
            success: true,
            html: Some("<p>ok</p>".to_string()),
            error: None,
        });
        let verifier = MockVerifier::with_token("tok-123");
        let guard = SubmitGuard::default();
        let (code, image) = inputs();

        let outcome = block_on(submit_analysis(
            &client, &verifier, &guard, Some(&code), Some(&image), Language::En, |_| {},
        ));

        assert_eq!(
            outcome,
            SubmitOutcome::Completed(AnalysisResult::Success { html: "<p>ok</p>".to_string() })
        );
        let forms = client.analysis_calls.borrow();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].recaptcha_code, "tok-123");
        assert_eq!(forms[0].postal_code.as_str(), "10115");
        assert_eq!(forms[0].language, Language::En);
        assert_eq!(forms[0].image.file_name, "can.jpg");
        assert_eq!(verifier.actions.borrow().as_slice(), &[VerifyAction::AnalyzeWaste]);
        assert_eq!(guard.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_submit_service_error_message() {
        let client = MockClient::analysis_ok(AnalysisResponse {
            success: false,
            html: None,
            error: Some("bad image".to_string()),
        });
        let verifier = MockVerifier::with_token("tok");
        let guard = SubmitGuard::default();
        let (code, image) = inputs();

        let outcome = block_on(submit_analysis(
            &client, &verifier, &guard, Some(&code), Some(&image), Language::De, |_| {},
        ));
        assert_eq!(
            outcome,
            SubmitOutcome::Completed(AnalysisResult::Failure { error: "bad image".to_string() })
        );
    }

    #[test]
    fn test_submit_network_failure_becomes_generic_failure() {
        let client = MockClient::failing();
        let verifier = MockVerifier::with_token("tok");
        let guard = SubmitGuard::default();
        let (code, image) = inputs();

        let outcome = block_on(submit_analysis(
            &client, &verifier, &guard, Some(&code), Some(&image), Language::En, |_| {},
        ));
        assert_eq!(
            outcome,
            SubmitOutcome::Completed(AnalysisResult::Failure {
                error: "Network error occurred. Please try again.".to_string()
            })
        );
        assert_eq!(guard.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_submit_missing_input_is_noop() {
        let client = MockClient::failing();
        let verifier = MockVerifier::with_token("tok");
        let guard = SubmitGuard::default();
        let (code, image) = inputs();

        let no_code = block_on(submit_analysis(
            &client, &verifier, &guard, None, Some(&image), Language::De, |_| {},
        ));
        let no_image = block_on(submit_analysis(
            &client, &verifier, &guard, Some(&code), None, Language::De, |_| {},
        ));

        assert_eq!(no_code, SubmitOutcome::MissingInput);
        assert_eq!(no_image, SubmitOutcome::MissingInput);
        assert!(client.analysis_calls.borrow().is_empty());
        // 前提が欠けていれば検証にも進まない
        assert!(verifier.actions.borrow().is_empty());
    }

    #[test]
    fn test_submit_without_token_is_noop() {
        let client = MockClient::failing();
        let verifier = MockVerifier::unavailable();
        let guard = SubmitGuard::default();
        let (code, image) = inputs();
        let phases = RefCell::new(Vec::new());

        let outcome = block_on(submit_analysis(
            &client,
            &verifier,
            &guard,
            Some(&code),
            Some(&image),
            Language::De,
            |p| phases.borrow_mut().push(p),
        ));

        assert_eq!(outcome, SubmitOutcome::VerificationUnavailable);
        assert!(client.analysis_calls.borrow().is_empty());
        assert_eq!(phases.into_inner(), vec![SubmitPhase::Verifying, SubmitPhase::Idle]);
        assert_eq!(guard.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_verification_failure_has_notice() {
        let client = MockClient::failing();
        let verifier = MockVerifier::unavailable();
        let guard = SubmitGuard::default();
        let (code, image) = inputs();

        let outcome = block_on(submit_analysis(
            &client, &verifier, &guard, Some(&code), Some(&image), Language::En, |_| {},
        ));

        assert_eq!(
            outcome.notice(Language::En),
            Some("Security verification failed. Please reload the page.")
        );
        // 未翻訳の言語はドイツ語で通知
        assert_eq!(
            outcome.notice(Language::Vi),
            Some("Die Sicherheitsprüfung ist fehlgeschlagen. Bitte laden Sie die Seite neu.")
        );
    }

    #[test]
    fn test_other_outcomes_have_no_notice() {
        let completed = SubmitOutcome::Completed(AnalysisResult::network_failure(Language::De));
        assert_eq!(completed.notice(Language::De), None);
        assert_eq!(SubmitOutcome::MissingInput.notice(Language::De), None);
        assert_eq!(SubmitOutcome::Busy.notice(Language::De), None);
    }

    #[test]
    fn test_submit_phase_sequence() {
        let client = MockClient::analysis_ok(AnalysisResponse {
            success: true,
            html: Some(String::new()),
            error: None,
        });
        let verifier = MockVerifier::with_token("tok");
        let guard = SubmitGuard::default();
        let (code, image) = inputs();
        let phases = RefCell::new(Vec::new());

        block_on(submit_analysis(
            &client,
            &verifier,
            &guard,
            Some(&code),
            Some(&image),
            Language::De,
            |p| phases.borrow_mut().push(p),
        ));

        assert_eq!(
            phases.into_inner(),
            vec![SubmitPhase::Verifying, SubmitPhase::Submitting, SubmitPhase::Idle]
        );
    }

    #[test]
    fn test_guard_rejects_reentry() {
        let guard = SubmitGuard::default();
        let first = guard.try_begin().expect("最初は開始できる");
        assert_eq!(guard.phase(), SubmitPhase::Verifying);
        assert!(guard.try_begin().is_none());

        let client = MockClient::failing();
        let verifier = MockVerifier::with_token("tok");
        let (code, image) = inputs();
        let outcome = block_on(submit_analysis(
            &client, &verifier, &guard, Some(&code), Some(&image), Language::De, |_| {},
        ));
        assert_eq!(outcome, SubmitOutcome::Busy);
        assert!(verifier.actions.borrow().is_empty());

        drop(first);
        assert_eq!(guard.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_session_select_image_rejects_non_image() {
        let mut session = AnalysisSession::default();
        assert!(!session.select_image("doc.pdf", "application/pdf", vec![1]));
        assert!(session.image().is_none());

        assert!(session.select_image("a.png", "image/png", vec![1]));
        assert!(!session.select_image("b.txt", "text/plain", vec![2]));
        // 既存の画像は残る
        assert_eq!(session.image().map(|i| i.file_name.as_str()), Some("a.png"));
    }

    #[test]
    fn test_session_replace_and_clear_image() {
        let mut session = AnalysisSession::default();
        session.select_image("a.png", "image/png", vec![1]);
        session.select_image("b.webp", "image/webp", vec![2]);
        assert_eq!(session.image().map(|i| i.file_name.as_str()), Some("b.webp"));

        session.clear_image();
        assert!(session.image().is_none());
    }

    #[test]
    fn test_session_can_submit() {
        let mut session = AnalysisSession::default();
        assert!(!session.can_submit());

        assert_eq!(session.input_postal_code("1011"), FieldStatus::Typing);
        session.select_image("a.png", "image/png", vec![1]);
        assert!(!session.can_submit());

        assert_eq!(session.input_postal_code("10115"), FieldStatus::Valid);
        assert!(session.can_submit());

        session.input_postal_code("101");
        assert!(!session.can_submit());
    }

    #[test]
    fn test_session_new_analysis_resets_everything() {
        let mut session = AnalysisSession::default();
        session.input_postal_code("10115");
        session.select_image("a.png", "image/png", vec![1]);
        session.set_result(AnalysisResult::Success { html: "<p>ok</p>".to_string() });

        session.new_analysis();

        assert!(session.postal_code().is_none());
        assert_eq!(session.field().value(), "");
        assert!(session.image().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_session_adopt_postal_code() {
        let mut session = AnalysisSession::default();
        session.adopt_postal_code(PostalCode::parse("80331").unwrap());
        assert_eq!(session.field().value(), "80331");
        assert_eq!(session.postal_code().map(|c| c.as_str()), Some("80331"));
    }
}
