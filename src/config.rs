use anyhow::Result;
use std::time::Duration;
use tracing::info;

use crate::diseases;
use crate::inference::Classifier;
use crate::schemas::AppState;

/// Initialize application state from the environment.
///
/// When `MODEL_ENDPOINT` is set the service forwards uploads to that URL;
/// otherwise it answers from the built-in demo classifier.
pub fn initialize_app_state() -> Result<AppState> {
    dotenvy::dotenv().ok();

    let classifier = match std::env::var("MODEL_ENDPOINT") {
        Ok(endpoint) if !endpoint.trim().is_empty() => {
            info!("Using remote model service at {}", endpoint);
            Classifier::Remote {
                client: reqwest::Client::builder()
                    .timeout(Duration::from_secs(30))
                    .build()?,
                endpoint,
            }
        }
        _ => {
            info!("MODEL_ENDPOINT not set, using the built-in demo classifier");
            Classifier::Demo
        }
    };

    Ok(AppState {
        classifier,
        diseases: diseases::catalogue(),
    })
}

/// Get bind address from environment or use default
pub fn get_bind_address() -> String {
    std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
