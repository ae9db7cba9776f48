//! 言語選択ドロップダウン

use leptos::prelude::*;
use waste_sort_common::Language;
use crate::i18n::use_i18n;

#[component]
pub fn LanguageSelector() -> impl IntoView {
    let i18n = use_i18n();
    let (is_open, set_is_open) = signal(false);

    view! {
        <div class="language-selector">
            <button
                class="language-toggle"
                aria-label=move || i18n.t("languageSelector")
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <span class="flag">{move || i18n.language().flag()}</span>
                <span class="language-name">{move || i18n.language().native_name()}</span>
                <span class="chevron" class:open=move || is_open.get()>"▾"</span>
            </button>

            <Show when=move || is_open.get()>
                <div class="language-menu">
                    <div class="language-menu-title">{move || i18n.t("languageSelector")}</div>
                    {Language::ALL
                        .into_iter()
                        .map(|language| {
                            view! {
                                <button
                                    class="language-option"
                                    class:active=move || i18n.language() == language
                                    on:click=move |_| {
                                        i18n.set_language(language);
                                        set_is_open.set(false);
                                    }
                                >
                                    <span class="flag">{language.flag()}</span>
                                    <span>{language.native_name()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="language-backdrop" on:click=move |_| set_is_open.set(false) />
            </Show>
        </div>
    }
}
