use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::settings;
use ::common::{DiseaseEntry, ErrorResponse, PredictionReport};

// API base is retrieved from settings
fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// API Response wrapper used by the catalogue endpoints
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
    pub success: bool,
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(api_response.data)
}

/// Upload a leaf image and get a prediction back.
///
/// The file goes out as the `image` part of a multipart form, matching the
/// backend's `/api/predict` contract.
pub async fn predict(file: web_sys::File) -> Result<PredictionReport, String> {
    let endpoint = "/api/predict";
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {} ({})", url, file.name());

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("image", &file, &file.name())
        .map_err(js_error)?;

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| {
            let error_msg = format!("Failed to build request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        let error_response: Result<ErrorResponse, _> = response.json().await;
        return Err(match error_response {
            Ok(err) => {
                log::error!("POST {} - API error: {}", endpoint, err.error);
                err.error
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", response.status());
                log::error!("POST {} - {}", endpoint, error_msg);
                error_msg
            }
        });
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let report: PredictionReport = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!(
        "POST {} - Success: {} ({:.2})",
        endpoint,
        report.prediction.prediction,
        report.prediction.confidence
    );
    Ok(report)
}

/// Fetch the full disease reference catalogue.
pub async fn fetch_diseases() -> Result<Vec<DiseaseEntry>, String> {
    get("/api/diseases").await
}

/// Search the disease catalogue by name, crop, or description.
pub async fn search_diseases(query: &str) -> Result<Vec<DiseaseEntry>, String> {
    get(&format!("/api/diseases/search?q={}", query)).await
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| "Browser API error".to_string())
}
