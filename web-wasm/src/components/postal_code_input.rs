//! 郵便番号入力コンポーネント

use leptos::prelude::*;
use waste_sort_common::{AnalysisSession, FieldStatus};
use crate::i18n::use_i18n;

#[component]
pub fn PostalCodeInput<F>(
    session: RwSignal<AnalysisSession>,
    is_locating: ReadSignal<bool>,
    on_detect_location: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let i18n = use_i18n();
    let status = move || session.with(|s| s.field().status());

    view! {
        <div class="postal-code-input">
            <div class="input-row">
                <span class="input-icon" class:invalid=move || status() == FieldStatus::Invalid>"📍"</span>
                <input
                    type="text"
                    inputmode="numeric"
                    autocomplete="off"
                    maxlength="5"
                    placeholder=move || i18n.t("postalCodePlaceholder")
                    class:invalid=move || status() == FieldStatus::Invalid
                    prop:value=move || session.with(|s| s.field().value().to_string())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        session.update(|s| {
                            s.input_postal_code(&raw);
                        });
                    }
                />
                <button
                    class="btn btn-secondary btn-small"
                    disabled=move || is_locating.get()
                    on:click={
                        let on_detect_location = on_detect_location.clone();
                        move |_| on_detect_location(())
                    }
                >
                    {move || {
                        if is_locating.get() {
                            i18n.t("detectingLocation")
                        } else {
                            i18n.t("detectLocation")
                        }
                    }}
                </button>
            </div>

            {move || match status() {
                FieldStatus::Valid => Some(view! {
                    <div class="field-hint valid">"✓ "{i18n.t("validPostalCode")}</div>
                }.into_any()),
                FieldStatus::Invalid => Some(view! {
                    <div class="field-hint invalid">{i18n.t("invalidPostalCode")}</div>
                }.into_any()),
                FieldStatus::Typing => None,
            }}
        </div>
    }
}
