#[cfg(test)]
pub mod test_utils {
    use crate::diseases;
    use crate::inference::Classifier;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create AppState for testing, always backed by the demo classifier so
    /// tests never need a model service.
    pub fn setup_test_app_state() -> AppState {
        AppState {
            classifier: Classifier::Demo,
            diseases: diseases::catalogue(),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        let _ = init_test_tracing();
        let state = setup_test_app_state();
        create_router(state)
    }

    /// Encode a small valid PNG for upload tests. The pixel fill seeds the
    /// demo classifier, so distinct fills exercise distinct outcomes.
    pub fn sample_png(fill: u8) -> Vec<u8> {
        let mut buf = std::io::Cursor::new(Vec::new());
        image::RgbImage::from_pixel(8, 8, image::Rgb([fill, fill, fill]))
            .write_to(&mut buf, image::ImageFormat::Png)
            .expect("Failed to encode test PNG");
        buf.into_inner()
    }
}
