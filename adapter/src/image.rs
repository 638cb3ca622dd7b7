use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::Deserialize;
use shared::{
    config::ImageHostConfig,
    error::{AppError, AppResult},
};

#[derive(Deserialize)]
struct UploadResponse {
    data: UploadedImage,
}

#[derive(Deserialize)]
struct UploadedImage {
    url: String,
}

/// Client for the external image-hosting API. Uploads are best effort:
/// callers fall back to a per-category default image when this errors.
pub struct ImageHostClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ImageHostClient {
    pub fn new(config: &ImageHostConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Pushes a base64-encoded image and returns its public URL.
    pub async fn upload(&self, image_base64: &str) -> AppResult<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AppError::ExternalServiceError(
                "image host api key is not configured".into(),
            ));
        };

        // reject broken payloads before going over the wire
        general_purpose::STANDARD
            .decode(image_base64)
            .map_err(|e| {
                AppError::ExternalServiceError(format!("invalid base64 image payload: {e}"))
            })?;

        let res = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .form(&[("image", image_base64)])
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("image host request failed: {e}")))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "image host returned {status}: {body}"
            )));
        }

        let uploaded: UploadResponse = res.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("image host response was malformed: {e}"))
        })?;

        Ok(uploaded.data.url)
    }
}
