//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' response payloads so the
//! frontend can deserialize API responses without duplicating shapes.

pub mod formatting;
mod severity;

pub use severity::{SEVERITY_FALLBACK_COLOR, Severity, severity_color, severity_label};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend for catalogue endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error body returned by the backend on failed requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

// ===================== Prediction =====================

/// The model's verdict for one uploaded image.
///
/// Confidence lives in [0, 1]; severity is derived from the label and the
/// confidence on the backend so both sides agree on the classification.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionOutcome {
    /// Disease label (or a healthy-leaf diagnosis)
    pub prediction: String,
    /// Model certainty in [0, 1]
    pub confidence: f64,
    /// Derived severity classification
    pub severity: Severity,
    /// Crop the disease is associated with, when known
    pub crop: Option<String>,
    /// Which classifier produced the verdict ("remote" or "demo")
    pub source: String,
    /// Wall-clock time the backend spent on the request
    pub processing_time_ms: u64,
}

/// Metadata about the uploaded image, echoed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ImageInfo {
    pub filename: String,
    /// Upload size in bytes
    pub size: u64,
    pub content_type: String,
}

/// Success body of `POST /api/predict`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionReport {
    pub success: bool,
    pub prediction: PredictionOutcome,
    pub image_info: ImageInfo,
    /// RFC3339 timestamp of when the prediction was made
    pub timestamp: String,
}

// ===================== Disease catalogue =====================

/// One entry of the static disease reference catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DiseaseEntry {
    pub name: String,
    pub crop: String,
    /// Severity this disease typically reaches when untreated
    pub typical_severity: Severity,
    pub description: String,
    pub treatment: String,
}

// ===================== History =====================

/// One past prediction, as stored in the browser's localStorage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryItem {
    pub id: u64,
    pub timestamp: String,
    pub crop: String,
    pub disease: String,
    pub confidence: f64,
    pub severity: String,
    pub image_filename: String,
    pub image_size: u64,
}

impl HistoryItem {
    /// Build a history entry from a freshly received prediction report.
    pub fn from_report(id: u64, report: &PredictionReport) -> Self {
        Self {
            id,
            timestamp: report.timestamp.clone(),
            crop: report
                .prediction
                .crop
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            disease: report.prediction.prediction.clone(),
            confidence: report.prediction.confidence,
            severity: report.prediction.severity.as_str().to_string(),
            image_filename: report.image_info.filename.clone(),
            image_size: report.image_info.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> PredictionReport {
        PredictionReport {
            success: true,
            prediction: PredictionOutcome {
                prediction: "Early Blight".to_string(),
                confidence: 0.92,
                severity: Severity::Critical,
                crop: Some("Tomato".to_string()),
                source: "demo".to_string(),
                processing_time_ms: 12,
            },
            image_info: ImageInfo {
                filename: "leaf.jpg".to_string(),
                size: 245_000,
                content_type: "image/jpeg".to_string(),
            },
            timestamp: "2025-03-09T14:05:00Z".to_string(),
        }
    }

    #[test]
    fn test_report_serializes_with_prediction_field() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["prediction"]["prediction"], "Early Blight");
        assert_eq!(json["prediction"]["confidence"], 0.92);
        assert_eq!(json["prediction"]["severity"], "Critical");
        assert_eq!(json["image_info"]["size"], 245_000);
    }

    #[test]
    fn test_history_item_from_report() {
        let item = HistoryItem::from_report(7, &sample_report());
        assert_eq!(item.id, 7);
        assert_eq!(item.crop, "Tomato");
        assert_eq!(item.disease, "Early Blight");
        assert_eq!(item.severity, "Critical");
        assert_eq!(item.image_size, 245_000);
    }

    #[test]
    fn test_history_item_unknown_crop() {
        let mut report = sample_report();
        report.prediction.crop = None;
        let item = HistoryItem::from_report(1, &report);
        assert_eq!(item.crop, "Unknown");
    }
}
