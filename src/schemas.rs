use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::inference::Classifier;
use common::{DiseaseEntry, ImageInfo, PredictionOutcome, PredictionReport, Severity};

pub use common::{ApiResponse, ErrorResponse};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Classifier serving `/api/predict`
    pub classifier: Classifier,
    /// Static disease reference catalogue
    pub diseases: Vec<DiseaseEntry>,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Which classifier is active ("demo" or "remote")
    pub model: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::predict::predict,
        crate::handlers::diseases::get_diseases,
        crate::handlers::diseases::search_diseases,
    ),
    components(
        schemas(
            ApiResponse<Vec<DiseaseEntry>>,
            ErrorResponse,
            HealthResponse,
            PredictionReport,
            PredictionOutcome,
            ImageInfo,
            DiseaseEntry,
            Severity,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "predict", description = "Leaf disease prediction endpoints"),
        (name = "diseases", description = "Disease reference catalogue endpoints"),
    ),
    info(
        title = "LeafScan API",
        description = "Leaf disease detection service - upload a leaf photo and get a diagnosis with severity grading",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
