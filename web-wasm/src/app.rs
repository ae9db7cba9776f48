//! メインアプリケーションコンポーネント

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use std::time::Duration;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use waste_sort_common::{
    resolve_postal_code, submit_analysis, AnalysisSession, Endpoints, SubmitGuard, SubmitOutcome,
    SubmitPhase,
};
use crate::api::{client::FetchClient, location::current_position, recaptcha::RecaptchaVerifier};
use crate::components::{
    analyze_button::AnalyzeButton,
    header::Header,
    info_section::InfoSection,
    postal_code_input::PostalCodeInput,
    results_section::{ResultsSection, RESULTS_SECTION_ID},
    upload_area::UploadArea,
};
use crate::i18n::I18n;

/// 結果表示後にスクロールするまでの待ち時間
const SCROLL_DELAY: Duration = Duration::from_millis(100);

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let i18n = I18n::provide();

    // アプリケーション状態
    let session = RwSignal::new(AnalysisSession::default());
    let (phase, set_phase) = signal(SubmitPhase::Idle);
    let (is_locating, set_is_locating) = signal(false);
    let guard = StoredValue::new_local(Rc::new(SubmitGuard::default()));

    let client = FetchClient::new(Endpoints::default());
    let verifier = RecaptchaVerifier::default();

    // 解析開始ハンドラ
    let on_analyze = {
        let client = client.clone();
        let verifier = verifier.clone();
        move |_| {
            let guard = guard.get_value();
            let client = client.clone();
            let verifier = verifier.clone();
            let (postal_code, image) =
                session.with_untracked(|s| (s.postal_code().cloned(), s.image().cloned()));
            let language = i18n.language_untracked();

            spawn_local(async move {
                let outcome = submit_analysis(
                    &client,
                    &verifier,
                    &guard,
                    postal_code.as_ref(),
                    image.as_ref(),
                    language,
                    move |p| {
                        if p == SubmitPhase::Submitting {
                            session.update(|s| s.clear_result());
                        }
                        set_phase.set(p);
                    },
                )
                .await;

                if let Some(message) = outcome.notice(language) {
                    notify(message);
                }

                match outcome {
                    SubmitOutcome::Completed(result) => {
                        if !result.is_success() {
                            console::warn!("解析結果がエラーでした");
                        }
                        session.update(|s| s.set_result(result));
                        set_timeout(scroll_to_results, SCROLL_DELAY);
                    }
                    SubmitOutcome::MissingInput => console::error!("郵便番号または画像が未入力です"),
                    SubmitOutcome::VerificationUnavailable => console::warn!("reCAPTCHAトークンを取得できません"),
                    SubmitOutcome::Busy => {}
                }
            });
        }
    };

    // 現在地から郵便番号を取得
    let on_detect_location = move |_| {
        if is_locating.get_untracked() {
            return;
        }
        set_is_locating.set(true);

        let client = client.clone();
        let verifier = verifier.clone();
        let language = i18n.language_untracked();

        spawn_local(async move {
            let resolved = match current_position().await {
                Ok(coords) => resolve_postal_code(&client, &verifier, language, coords).await,
                Err(e) => Err(e),
            };

            match resolved {
                Ok(code) => session.update(|s| s.adopt_postal_code(code)),
                Err(e) => {
                    console::warn!(format!("位置情報から郵便番号を取得できません: {}", e));
                    notify(e.message(language));
                }
            }
            set_is_locating.set(false);
        });
    };

    let on_new_analysis = move |_| session.update(|s| s.new_analysis());

    view! {
        <div class="container">
            <Header />

            <main class="main-card">
                <div class="form-group">
                    <label>{move || i18n.t("postalCodeLabel")}</label>
                    <PostalCodeInput
                        session=session
                        is_locating=is_locating
                        on_detect_location=on_detect_location
                    />
                </div>

                <div class="form-group">
                    <label>{move || i18n.t("uploadPhotoLabel")}</label>
                    <UploadArea session=session />
                </div>

                <AnalyzeButton session=session phase=phase on_analyze=on_analyze />
            </main>

            {move || session.with(|s| s.result().cloned()).map(|result| view! {
                <ResultsSection result=result on_new_analysis=on_new_analysis />
            })}

            <InfoSection />

            <footer class="footer">
                <p>"© 2025 Waste Sorting Helper. Made with 💚 for a greener Germany."</p>
            </footer>
        </div>
    }
}

fn scroll_to_results() {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(RESULTS_SECTION_ID));

    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// ブロッキング通知
fn notify(message: &str) {
    let Some(window) = web_sys::window() else {
        console::error!(format!("通知できません: {}", message));
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        console::error!(format!("alertの表示に失敗しました: {:?}", e));
    }
}
