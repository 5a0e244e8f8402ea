//! Minimal Cloudflare REST client for publishing the tunnel Worker.
//!
//! Covers exactly the two calls the CLI needs: listing accounts for the
//! authenticated token and uploading a Worker script.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Standard Cloudflare response envelope.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    pub result: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    pub code: i64,
    pub message: String,
}

/// One Cloudflare account visible to the API token.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
}

/// A Worker script as returned after upload.
#[derive(Debug, Deserialize)]
pub struct WorkerScript {
    pub id: String,
    #[serde(default)]
    pub modified_on: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CloudflareClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl CloudflareClient {
    pub fn new(api_token: String) -> Self {
        Self::with_base_url(api_token, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_token: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_token,
        }
    }

    /// List the accounts the token can access.
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        let url = format!("{}/accounts", self.base_url);
        debug!("Fetching Cloudflare accounts from {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .context("failed to reach the Cloudflare API")?;

        let envelope: ApiEnvelope<Vec<Account>> = response
            .json()
            .await
            .context("failed to parse Cloudflare accounts response")?;

        unwrap_envelope(envelope)
    }

    /// Upload a Worker script under the given name, creating or replacing it.
    pub async fn deploy_worker(
        &self,
        account_id: &str,
        worker_name: &str,
        script_body: String,
    ) -> Result<WorkerScript> {
        let url = format!(
            "{}/accounts/{}/workers/scripts/{}",
            self.base_url, account_id, worker_name
        );
        info!("Uploading Worker '{}' to account {}", worker_name, account_id);

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.api_token)
            .header("Content-Type", "application/javascript")
            .body(script_body)
            .send()
            .await
            .context("failed to reach the Cloudflare API")?;

        let envelope: ApiEnvelope<WorkerScript> = response
            .json()
            .await
            .context("failed to parse Worker upload response")?;

        unwrap_envelope(envelope)
    }
}

fn unwrap_envelope<T>(envelope: ApiEnvelope<T>) -> Result<T> {
    if !envelope.success {
        let details = envelope
            .errors
            .iter()
            .map(|e| format!("{} (code {})", e.message, e.code))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(anyhow!("Cloudflare API error: {}", details));
    }
    envelope
        .result
        .ok_or_else(|| anyhow!("Cloudflare API returned success without a result"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_envelope_deserializes() {
        let json = r#"{
            "success": true,
            "errors": [],
            "result": [
                {"id": "abc123", "name": "My Account"},
                {"id": "def456", "name": "Other Account"}
            ]
        }"#;
        let envelope: ApiEnvelope<Vec<Account>> = serde_json::from_str(json).unwrap();
        let accounts = unwrap_envelope(envelope).unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].id, "abc123");
        assert_eq!(accounts[1].name, "Other Account");
    }

    #[test]
    fn test_error_envelope_surfaces_messages() {
        let json = r#"{
            "success": false,
            "errors": [{"code": 10000, "message": "Authentication error"}],
            "result": null
        }"#;
        let envelope: ApiEnvelope<Vec<Account>> = serde_json::from_str(json).unwrap();
        let err = unwrap_envelope(envelope).unwrap_err();
        assert!(err.to_string().contains("Authentication error"));
        assert!(err.to_string().contains("10000"));
    }

    #[test]
    fn test_worker_script_envelope_deserializes() {
        let json = r#"{
            "success": true,
            "errors": [],
            "result": {"id": "leafscan-tunnel", "modified_on": "2025-03-09T14:05:00Z"}
        }"#;
        let envelope: ApiEnvelope<WorkerScript> = serde_json::from_str(json).unwrap();
        let script = unwrap_envelope(envelope).unwrap();
        assert_eq!(script.id, "leafscan-tunnel");
        assert!(script.modified_on.is_some());
    }

    #[test]
    fn test_success_without_result_is_an_error() {
        let json = r#"{"success": true, "errors": [], "result": null}"#;
        let envelope: ApiEnvelope<WorkerScript> = serde_json::from_str(json).unwrap();
        assert!(unwrap_envelope(envelope).is_err());
    }
}
