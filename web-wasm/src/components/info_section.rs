//! 分別の重要性セクション

use leptos::prelude::*;
use crate::i18n::use_i18n;

const REASONS: [(&str, &str); 4] = [
    ("reason1", "♻️"),
    ("reason2", "🌿"),
    ("reason3", "⚖️"),
    ("reason4", "🐷"),
];

#[component]
pub fn InfoSection() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="info-section">
            <h2>{move || i18n.t("whyImportant")}</h2>
            <div class="reason-grid">
                {REASONS
                    .into_iter()
                    .map(|(key, icon)| {
                        view! {
                            <div class="reason-card">
                                <span class="reason-icon">{icon}</span>
                                <p>{move || i18n.t(key)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
