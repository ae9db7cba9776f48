//! fetch による解析・位置情報エンドポイント呼び出し

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};
use waste_sort_common::{
    AnalysisForm, AnalysisResponse, Endpoints, Error, GeolocationRequest, GeolocationResponse,
    Result, ServiceClient,
};

/// ブラウザの fetch を使うクライアント
#[derive(Clone, Default)]
pub struct FetchClient {
    endpoints: Endpoints,
}

impl FetchClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

fn js_error(e: JsValue) -> Error {
    Error::Http(format!("{:?}", e))
}

/// multipart/form-data を組み立てる
fn build_form_data(form: &AnalysisForm) -> std::result::Result<FormData, JsValue> {
    let data = FormData::new()?;

    let bytes = js_sys::Uint8Array::from(form.image.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&form.image.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    data.append_with_blob_and_filename(AnalysisForm::IMAGE_FIELD, &blob, &form.image.file_name)?;

    for (name, value) in form.text_fields() {
        data.append_with_str(name, value)?;
    }
    Ok(data)
}

/// リクエストを送信してJSONボディを取得
async fn fetch_json(request: &Request) -> std::result::Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    JsFuture::from(resp.json()?).await
}

impl ServiceClient for FetchClient {
    async fn post_analysis(&self, form: &AnalysisForm) -> Result<AnalysisResponse> {
        let body = build_form_data(form).map_err(js_error)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&body);

        // Content-Type はブラウザが boundary 付きで設定する
        let request = Request::new_with_str_and_init(&self.endpoints.analysis_url, &opts)
            .map_err(js_error)?;

        // エラー時もサービスは {success: false, error} を返すのでステータスは見ない
        let json = fetch_json(&request).await.map_err(js_error)?;
        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Http(e.to_string()))
    }

    async fn post_geolocation(&self, request: &GeolocationRequest) -> Result<GeolocationResponse> {
        let body = serde_json::to_string(request)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.endpoints.geolocation_url, &opts)
            .map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let json = fetch_json(&request).await.map_err(js_error)?;
        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Http(e.to_string()))
    }
}
