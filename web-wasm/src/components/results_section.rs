//! 解析結果セクション

use leptos::prelude::*;
use waste_sort_common::AnalysisResult;
use crate::i18n::use_i18n;

/// 結果表示エリアのID（送信後にスクロールする）
pub const RESULTS_SECTION_ID: &str = "results-section";

#[component]
pub fn ResultsSection<FN>(result: AnalysisResult, on_new_analysis: FN) -> impl IntoView
where
    FN: Fn(()) + 'static + Clone,
{
    let i18n = use_i18n();

    let body = match result {
        AnalysisResult::Success { html } => view! {
            <div class="result-header success">
                <span class="result-icon">"✅"</span>
                <div>
                    <h2>{move || i18n.t("analysisComplete")}</h2>
                    <p>{move || i18n.t("analysisCompleteDescription")}</p>
                </div>
            </div>
            <div class="result-content" inner_html=html />
        }
        .into_any(),
        AnalysisResult::Failure { error } => view! {
            <div class="result-header failure">
                <span class="result-icon">"❌"</span>
                <div>
                    <h2>{move || i18n.t("analysisError")}</h2>
                    <p>{move || i18n.t("analysisErrorDescription")}</p>
                </div>
            </div>
            <div class="result-error">
                <span>"⚠️"</span>
                <p>{error}</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <section id=RESULTS_SECTION_ID class="results-section">
            {body}
            <div class="result-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_new_analysis = on_new_analysis.clone();
                        move |_| on_new_analysis(())
                    }
                >
                    "↺ "{move || i18n.t("newAnalysis")}
                </button>
            </div>
        </section>
    }
}
