use serde::Deserialize;
use tracing::{debug, trace, warn};

use crate::error::ApiError;

/// Maximum accepted upload size in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A raw model verdict before severity grading.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelVerdict {
    pub label: String,
    pub confidence: f64,
    pub crop: Option<String>,
}

impl ModelVerdict {
    /// A verdict counts as healthy when the label says so. Severity grading
    /// treats healthy diagnoses specially regardless of confidence.
    pub fn is_healthy(&self) -> bool {
        self.label.to_lowercase().contains("healthy")
    }
}

/// Response body of the remote model service.
#[derive(Debug, Deserialize)]
struct RemoteVerdict {
    prediction: String,
    confidence: f64,
    #[serde(default)]
    crop: Option<String>,
}

/// The classifier backing `/api/predict`.
///
/// `Remote` forwards the upload to an external model service over HTTP.
/// `Demo` answers deterministically from a built-in catalogue so the service
/// is fully usable without a model deployment.
#[derive(Clone, Debug)]
pub enum Classifier {
    Demo,
    Remote {
        client: reqwest::Client,
        endpoint: String,
    },
}

/// Built-in outcomes for demo mode: (label, confidence, crop).
const DEMO_OUTCOMES: [(&str, f64, Option<&str>); 4] = [
    ("Tomato Early Blight", 0.92, Some("Tomato")),
    ("Coffee Leaf Rust", 0.88, Some("Coffee")),
    ("Durian Fruit Rot", 0.85, Some("Durian")),
    ("Healthy Leaf", 0.95, None),
];

impl Classifier {
    pub fn source(&self) -> &'static str {
        match self {
            Classifier::Demo => "demo",
            Classifier::Remote { .. } => "remote",
        }
    }

    /// Classify an uploaded image that already passed validation.
    pub async fn classify(
        &self,
        image_bytes: &[u8],
        filename: &str,
        content_type: &str,
    ) -> Result<ModelVerdict, ApiError> {
        match self {
            Classifier::Demo => Ok(demo_verdict(image_bytes)),
            Classifier::Remote { client, endpoint } => {
                remote_verdict(client, endpoint, image_bytes, filename, content_type).await
            }
        }
    }
}

/// Pick a demo outcome deterministically from the image content, so the same
/// upload always yields the same diagnosis.
fn demo_verdict(image_bytes: &[u8]) -> ModelVerdict {
    let hash: u64 = image_bytes
        .iter()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(*b as u64));
    let (label, confidence, crop) = DEMO_OUTCOMES[(hash % DEMO_OUTCOMES.len() as u64) as usize];
    trace!("Demo classifier picked outcome: {}", label);
    ModelVerdict {
        label: label.to_string(),
        confidence,
        crop: crop.map(str::to_string),
    }
}

async fn remote_verdict(
    client: &reqwest::Client,
    endpoint: &str,
    image_bytes: &[u8],
    filename: &str,
    content_type: &str,
) -> Result<ModelVerdict, ApiError> {
    debug!("Forwarding {} bytes to model service at {}", image_bytes.len(), endpoint);

    let part = reqwest::multipart::Part::bytes(image_bytes.to_vec())
        .file_name(filename.to_string())
        .mime_str(content_type)
        .map_err(|e| ApiError::Upstream(format!("invalid content type: {}", e)))?;
    let form = reqwest::multipart::Form::new().part("image", part);

    let response = client
        .post(endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|e| {
            warn!("Model service unreachable: {}", e);
            ApiError::Upstream(e.to_string())
        })?;

    if !response.status().is_success() {
        warn!("Model service returned status {}", response.status());
        return Err(ApiError::Upstream(format!(
            "model service returned status {}",
            response.status()
        )));
    }

    let verdict: RemoteVerdict = response
        .json()
        .await
        .map_err(|e| ApiError::Upstream(format!("invalid model response: {}", e)))?;

    Ok(ModelVerdict {
        label: verdict.prediction,
        confidence: verdict.confidence,
        crop: verdict.crop,
    })
}

/// Validate an upload before classification: size cap first, then a decode
/// check so arbitrary files cannot reach the model.
pub fn validate_image(image_bytes: &[u8]) -> Result<(), ApiError> {
    if image_bytes.is_empty() {
        return Err(ApiError::InvalidImage("file is empty".to_string()));
    }
    if image_bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ApiError::PayloadTooLarge {
            size: image_bytes.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }
    image::load_from_memory(image_bytes)
        .map_err(|e| ApiError::InvalidImage(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_verdict_is_deterministic() {
        let bytes = b"leaf image payload";
        let first = demo_verdict(bytes);
        let second = demo_verdict(bytes);
        assert_eq!(first, second);
    }

    #[test]
    fn test_demo_verdict_varies_with_content() {
        // Different payloads land on different catalogue slots for these inputs.
        let a = demo_verdict(b"payload a");
        let b = demo_verdict(b"payload b");
        let c = demo_verdict(b"payload ccc");
        let labels: std::collections::HashSet<_> =
            [a.label, b.label, c.label].into_iter().collect();
        assert!(labels.len() > 1);
    }

    #[test]
    fn test_healthy_detection() {
        let verdict = ModelVerdict {
            label: "Healthy Leaf".to_string(),
            confidence: 0.95,
            crop: None,
        };
        assert!(verdict.is_healthy());

        let verdict = ModelVerdict {
            label: "Tomato Early Blight".to_string(),
            confidence: 0.92,
            crop: Some("Tomato".to_string()),
        };
        assert!(!verdict.is_healthy());
    }

    #[test]
    fn test_validate_rejects_empty_and_garbage() {
        assert!(matches!(
            validate_image(b""),
            Err(ApiError::InvalidImage(_))
        ));
        assert!(matches!(
            validate_image(b"definitely not an image"),
            Err(ApiError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized() {
        let big = vec![0u8; MAX_UPLOAD_BYTES + 1];
        assert!(matches!(
            validate_image(&big),
            Err(ApiError::PayloadTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_png() {
        let mut buf = std::io::Cursor::new(Vec::new());
        image::RgbImage::new(4, 4)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        assert!(validate_image(buf.get_ref()).is_ok());
    }
}
