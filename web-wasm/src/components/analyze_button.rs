//! 解析ボタンコンポーネント

use leptos::prelude::*;
use waste_sort_common::{AnalysisSession, SubmitPhase};
use crate::i18n::use_i18n;

#[component]
pub fn AnalyzeButton<FA>(
    session: RwSignal<AnalysisSession>,
    phase: ReadSignal<SubmitPhase>,
    on_analyze: FA,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
{
    let i18n = use_i18n();
    let is_busy = move || !phase.get().is_idle();
    let is_disabled = move || !session.with(|s| s.can_submit()) || is_busy();

    view! {
        <div class="analyze-button">
            <button
                class="btn btn-primary"
                class:loading=is_busy
                disabled=is_disabled
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || if is_busy() {
                    format!("⏳ {}", i18n.t("analyzing"))
                } else {
                    format!("{} 🛡", i18n.t("analyzeButton"))
                }}
            </button>
        </div>
    }
}
