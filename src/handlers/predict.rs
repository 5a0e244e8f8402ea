use axum::{
    extract::{Multipart, State},
    response::Json,
};
use chrono::Utc;
use common::{ImageInfo, PredictionOutcome, PredictionReport, Severity};
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::inference::validate_image;
use crate::schemas::AppState;

/// Classify an uploaded leaf image
#[utoipa::path(
    post,
    path = "/api/predict",
    tag = "predict",
    responses(
        (status = 200, description = "Prediction produced successfully", body = PredictionReport),
        (status = 400, description = "Missing or invalid image upload", body = crate::schemas::ErrorResponse),
        (status = 502, description = "Model service unavailable", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state, multipart))]
pub async fn predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PredictionReport>, ApiError> {
    trace!("Entering predict handler");
    let started = Instant::now();

    let mut upload: Option<(Vec<u8>, String, String)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            trace!("Skipping unexpected multipart field: {:?}", field.name());
            continue;
        }
        let filename = field
            .file_name()
            .unwrap_or("upload")
            .to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await?;
        upload = Some((bytes.to_vec(), filename, content_type));
        break;
    }

    let (image_bytes, filename, content_type) = upload.ok_or(ApiError::MissingImage)?;
    debug!(
        "Received upload '{}' ({} bytes, {})",
        filename,
        image_bytes.len(),
        content_type
    );

    validate_image(&image_bytes)?;

    let verdict = state
        .classifier
        .classify(&image_bytes, &filename, &content_type)
        .await?;

    let severity = Severity::grade(verdict.is_healthy(), verdict.confidence);
    let processing_time_ms = started.elapsed().as_millis() as u64;
    info!(
        "Prediction for '{}': {} ({:.2}) severity {} in {}ms",
        filename, verdict.label, verdict.confidence, severity, processing_time_ms
    );

    Ok(Json(PredictionReport {
        success: true,
        prediction: PredictionOutcome {
            prediction: verdict.label,
            confidence: verdict.confidence,
            severity,
            crop: verdict.crop,
            source: state.classifier.source().to_string(),
            processing_time_ms,
        },
        image_info: ImageInfo {
            filename,
            size: image_bytes.len() as u64,
            content_type,
        },
        timestamp: Utc::now().to_rfc3339(),
    }))
}
