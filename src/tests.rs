#[cfg(test)]
mod integration_tests {
    use crate::test_utils::test_utils::{sample_png, setup_test_app};
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use common::{DiseaseEntry, ErrorResponse, PredictionReport, Severity};
    use serde_json::Value;

    fn image_form(bytes: Vec<u8>, filename: &str, mime: &str) -> MultipartForm {
        MultipartForm::new().add_part(
            "image",
            Part::bytes(bytes).file_name(filename).mime_type(mime),
        )
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["model"], "demo");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_predict_returns_prediction() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let png = sample_png(42);
        let size = png.len() as u64;
        let response = server
            .post("/api/predict")
            .multipart(image_form(png, "leaf.png", "image/png"))
            .await;

        response.assert_status(StatusCode::OK);
        let report: PredictionReport = response.json();
        assert!(report.success);
        assert!(!report.prediction.prediction.is_empty());
        assert!(report.prediction.confidence > 0.0 && report.prediction.confidence <= 1.0);
        assert_eq!(report.prediction.source, "demo");
        assert_eq!(report.image_info.filename, "leaf.png");
        assert_eq!(report.image_info.size, size);
        assert_eq!(report.image_info.content_type, "image/png");
    }

    #[tokio::test]
    async fn test_predict_is_deterministic() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let first: PredictionReport = server
            .post("/api/predict")
            .multipart(image_form(sample_png(7), "a.png", "image/png"))
            .await
            .json();
        let second: PredictionReport = server
            .post("/api/predict")
            .multipart(image_form(sample_png(7), "a.png", "image/png"))
            .await
            .json();

        assert_eq!(first.prediction.prediction, second.prediction.prediction);
        assert_eq!(first.prediction.confidence, second.prediction.confidence);
        assert_eq!(first.prediction.severity, second.prediction.severity);
    }

    #[tokio::test]
    async fn test_predict_severity_matches_verdict() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let report: PredictionReport = server
            .post("/api/predict")
            .multipart(image_form(sample_png(42), "leaf.png", "image/png"))
            .await
            .json();

        let is_healthy = report
            .prediction
            .prediction
            .to_lowercase()
            .contains("healthy");
        let expected = Severity::grade(is_healthy, report.prediction.confidence);
        assert_eq!(report.prediction.severity, expected);
    }

    #[tokio::test]
    async fn test_predict_rejects_non_image() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/predict")
            .multipart(image_form(
                b"definitely not an image".to_vec(),
                "payload.txt",
                "text/plain",
            ))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "INVALID_IMAGE");
        assert!(!body.error.is_empty());
    }

    #[tokio::test]
    async fn test_predict_requires_image_field() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let form = MultipartForm::new().add_part(
            "attachment",
            Part::bytes(sample_png(1))
                .file_name("leaf.png")
                .mime_type("image/png"),
        );
        let response = server.post("/api/predict").multipart(form).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "NO_IMAGE");
    }

    #[tokio::test]
    async fn test_predict_rejects_empty_upload() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/predict")
            .multipart(image_form(Vec::new(), "empty.png", "image/png"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "INVALID_IMAGE");
    }

    #[tokio::test]
    async fn test_get_diseases() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/diseases").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        let entries: Vec<DiseaseEntry> = serde_json::from_value(body["data"].clone()).unwrap();
        assert!(entries.len() >= 4);
    }

    #[tokio::test]
    async fn test_search_diseases_filters_by_crop() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/diseases/search")
            .add_query_param("q", "coffee")
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        let entries: Vec<DiseaseEntry> = serde_json::from_value(body["data"].clone()).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.crop == "Coffee"));
    }

    #[tokio::test]
    async fn test_search_diseases_no_match() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/diseases/search")
            .add_query_param("q", "wheat")
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api-docs/openapi.json").await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert!(body["paths"].get("/api/predict").is_some());
        assert!(body["paths"].get("/api/diseases").is_some());
    }
}
