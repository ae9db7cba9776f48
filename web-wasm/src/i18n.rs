//! 言語コンテキスト（Leptos context として提供）

use crate::storage::BrowserStore;
use gloo::console;
use leptos::prelude::*;
use waste_sort_common::{Language, LanguageContext};

/// 画面全体で共有する表示言語
///
/// すべての翻訳は同じシグナルから読むため、切り替え時に言語が混在しない。
#[derive(Clone, Copy)]
pub struct I18n {
    ctx: RwSignal<LanguageContext>,
}

impl I18n {
    /// 保存値 → ブラウザ言語 → de で初期化して context に登録
    pub fn provide() -> Self {
        let locale = web_sys::window().and_then(|w| w.navigator().language());
        let ctx = LanguageContext::init(&BrowserStore, locale.as_deref());
        let i18n = Self {
            ctx: RwSignal::new(ctx),
        };
        provide_context(i18n);
        i18n
    }

    pub fn t(&self, key: &'static str) -> &'static str {
        self.ctx.with(|ctx| ctx.t(key))
    }

    pub fn language(&self) -> Language {
        self.ctx.with(|ctx| ctx.current())
    }

    pub fn language_untracked(&self) -> Language {
        self.ctx.with_untracked(|ctx| ctx.current())
    }

    pub fn set_language(&self, language: Language) {
        self.ctx.update(|ctx| {
            if let Err(e) = ctx.set(language, &mut BrowserStore) {
                console::warn!(format!("言語設定を保存できません: {}", e));
            }
        });
    }
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}
