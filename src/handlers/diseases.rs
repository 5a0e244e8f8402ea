use axum::{
    extract::{Query, State},
    response::Json,
};
use common::DiseaseEntry;
use serde::Deserialize;
use tracing::{debug, instrument, trace};
use utoipa::IntoParams;

use crate::diseases::search;
use crate::schemas::{ApiResponse, AppState};

/// Query parameters for disease search
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Substring matched against disease names and crops
    pub q: String,
}

/// Get the full disease reference catalogue
#[utoipa::path(
    get,
    path = "/api/diseases",
    tag = "diseases",
    responses(
        (status = 200, description = "Disease catalogue retrieved successfully", body = ApiResponse<Vec<DiseaseEntry>>)
    )
)]
#[instrument(skip(state))]
pub async fn get_diseases(State(state): State<AppState>) -> Json<ApiResponse<Vec<DiseaseEntry>>> {
    trace!("Entering get_diseases handler");
    debug!("Returning {} catalogue entries", state.diseases.len());

    Json(ApiResponse {
        data: state.diseases.clone(),
        message: "Disease catalogue retrieved successfully".to_string(),
        success: true,
    })
}

/// Search the disease catalogue by name or crop
#[utoipa::path(
    get,
    path = "/api/diseases/search",
    tag = "diseases",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching diseases retrieved successfully", body = ApiResponse<Vec<DiseaseEntry>>)
    )
)]
#[instrument(skip(state))]
pub async fn search_diseases(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<ApiResponse<Vec<DiseaseEntry>>> {
    trace!("Entering search_diseases handler");
    let hits = search(&state.diseases, &query.q);
    debug!("Search '{}' matched {} entries", query.q, hits.len());

    Json(ApiResponse {
        data: hits,
        message: "Matching diseases retrieved successfully".to_string(),
        success: true,
    })
}
