//! ヘッダーコンポーネント

use leptos::prelude::*;
use crate::components::language_selector::LanguageSelector;
use crate::i18n::use_i18n;

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <header class="header">
            <div class="header-top">
                <div class="brand">
                    <div class="brand-icon">"♻️"</div>
                    <div>
                        <h1>{move || i18n.t("title")}</h1>
                        <p class="subtitle">{move || i18n.t("subtitle")}</p>
                    </div>
                </div>
                <LanguageSelector />
            </div>
            <p class="description">{move || i18n.t("description")}</p>
        </header>
    }
}
