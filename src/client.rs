use crate::error::Result;
use reqwest::multipart::{Form, Part};
use tracing::debug;
use waste_sort_common::{
    AnalysisForm, AnalysisResponse, Endpoints, Error, GeolocationRequest, GeolocationResponse,
    ServiceClient,
};

/// reqwest による解析・位置情報エンドポイント呼び出し
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpClient {
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("waste-sort/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoints })
    }
}

fn http_error(e: reqwest::Error) -> Error {
    Error::Http(e.to_string())
}

fn build_form(form: &AnalysisForm) -> waste_sort_common::Result<Form> {
    let image = Part::bytes(form.image.bytes.clone())
        .file_name(form.image.file_name.clone())
        .mime_str(&form.image.mime_type)
        .map_err(http_error)?;

    let mut multipart = Form::new().part(AnalysisForm::IMAGE_FIELD, image);
    for (name, value) in form.text_fields() {
        multipart = multipart.text(name, value.to_string());
    }
    Ok(multipart)
}

impl ServiceClient for HttpClient {
    async fn post_analysis(&self, form: &AnalysisForm) -> waste_sort_common::Result<AnalysisResponse> {
        debug!(
            url = %self.endpoints.analysis_url,
            postal_code = %form.postal_code,
            language = %form.language,
            bytes = form.image.size(),
            "posting analysis"
        );

        let response = self
            .client
            .post(&self.endpoints.analysis_url)
            .multipart(build_form(form)?)
            .send()
            .await
            .map_err(http_error)?;

        // エラー時もサービスは {success: false, error} を返すのでステータスは見ない
        debug!(status = %response.status(), "analysis response");
        let body = response.text().await.map_err(http_error)?;
        AnalysisResponse::from_json(&body)
    }

    async fn post_geolocation(
        &self,
        request: &GeolocationRequest,
    ) -> waste_sort_common::Result<GeolocationResponse> {
        debug!(url = %self.endpoints.geolocation_url, lat = request.lat, lng = request.lng, "posting geolocation");

        let response = self
            .client
            .post(&self.endpoints.geolocation_url)
            .json(request)
            .send()
            .await
            .map_err(http_error)?;

        debug!(status = %response.status(), "geolocation response");
        let body = response.text().await.map_err(http_error)?;
        Ok(serde_json::from_str(&body)?)
    }
}
