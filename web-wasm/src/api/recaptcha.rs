//! reCAPTCHA Enterprise 連携
//!
//! `grecaptcha.enterprise` はページの <script> で読み込まれる前提。
//! 未読込・失敗時は None を返し、呼び出し側で操作を止める。

use gloo::console;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use waste_sort_common::service::RECAPTCHA_SITE_KEY;
use waste_sort_common::{BotVerifier, VerifyAction};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["grecaptcha", "enterprise"], js_name = ready)]
    fn recaptcha_ready(callback: &JsValue);

    #[wasm_bindgen(js_namespace = ["grecaptcha", "enterprise"], js_name = execute, catch)]
    fn recaptcha_execute(site_key: &str, options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Serialize)]
struct ExecuteOptions<'a> {
    action: &'a str,
}

/// reCAPTCHA Enterprise 検証
#[derive(Clone)]
pub struct RecaptchaVerifier {
    site_key: String,
}

impl Default for RecaptchaVerifier {
    fn default() -> Self {
        Self {
            site_key: RECAPTCHA_SITE_KEY.to_string(),
        }
    }
}

/// window.grecaptcha.enterprise が存在するか
fn is_loaded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("grecaptcha"))
        .ok()
        .filter(|g| g.is_object())
        .and_then(|g| js_sys::Reflect::get(&g, &JsValue::from_str("enterprise")).ok())
        .is_some_and(|e| e.is_object())
}

/// ready コールバックを Promise として待つ
async fn wait_ready() -> Result<JsValue, JsValue> {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let callback = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        recaptcha_ready(&callback);
    });
    JsFuture::from(promise).await
}

impl RecaptchaVerifier {
    async fn request_token(&self, action: VerifyAction) -> Result<String, JsValue> {
        wait_ready().await?;
        let options = serde_wasm_bindgen::to_value(&ExecuteOptions {
            action: action.as_str(),
        })?;
        let token = JsFuture::from(recaptcha_execute(&self.site_key, &options)?).await?;
        token
            .as_string()
            .ok_or_else(|| JsValue::from_str("token is not a string"))
    }
}

impl BotVerifier for RecaptchaVerifier {
    async fn execute(&self, action: VerifyAction) -> Option<String> {
        if !is_loaded() {
            console::warn!("reCAPTCHA Enterprise が読み込まれていません");
            return None;
        }

        match self.request_token(action).await {
            Ok(token) => {
                let prefix: String = token.chars().take(20).collect();
                console::log!(format!("reCAPTCHAトークン取得 ({}): {}...", action.as_str(), prefix));
                Some(token)
            }
            Err(e) => {
                console::error!(format!("reCAPTCHAの実行に失敗: {:?}", e));
                None
            }
        }
    }
}
