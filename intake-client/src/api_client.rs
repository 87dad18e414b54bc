//! HTTP client for the intake acceptance API.
//!
//! Thin reqwest wrapper over the four endpoints the pipeline touches:
//! key distribution, asset lookup, intake submission, and the plain
//! contact form. Failure bodies carry `{ error, message }`; the message
//! is surfaced to the caller verbatim when present.

use crate::config::IntakeConfig;
use crate::error::{IntakeError, IntakeResult};
use crate::types::{AssetRecord, ContactReceipt, ContactRequest, SubmissionPayload, SubmissionReceipt};
use intake_crypto::ClientId;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

/// HTTP client for the intake acceptance API.
pub struct IntakeApiClient {
    client: Client,
    config: IntakeConfig,
}

/// Error body shape returned by the acceptance API.
#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl IntakeApiClient {
    pub fn new(config: IntakeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self { client, config }
    }

    /// Fetches the ASCII-armored public encryption key.
    pub async fn fetch_public_key(&self) -> IntakeResult<String> {
        let resp = self
            .client
            .get(&self.config.public_key_url)
            .send()
            .await
            .map_err(|e| IntakeError::KeyUnavailable(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(IntakeError::KeyUnavailable(format!(
                "key endpoint returned {}",
                resp.status()
            )));
        }

        resp.text()
            .await
            .map_err(|e| IntakeError::KeyUnavailable(e.to_string()))
    }

    /// Fetches asset positions for a client; `None` when the acceptor
    /// has no data for the identifier.
    pub async fn fetch_assets(&self, id: &ClientId) -> IntakeResult<Option<Vec<AssetRecord>>> {
        let url = format!("{}/api/intake/assets/{id}", self.config.api_base_url);
        let resp = self.client.get(&url).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            debug!("no asset data for {id}");
            return Ok(None);
        }

        let resp = Self::check_status(resp).await?;

        #[derive(Deserialize)]
        struct Resp {
            records: Vec<AssetRecord>,
        }
        let data: Resp = resp.json().await?;
        Ok(Some(data.records))
    }

    /// Submits a sealed intake payload.
    pub async fn submit_intake(&self, payload: &SubmissionPayload) -> IntakeResult<SubmissionReceipt> {
        let url = format!("{}/api/intake/submissions", self.config.api_base_url);
        let resp = self.client.post(&url).json(payload).send().await?;
        let resp = Self::check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// Submits the plain contact form.
    pub async fn submit_contact(&self, request: &ContactRequest) -> IntakeResult<ContactReceipt> {
        let url = format!("{}/api/contact", self.config.api_base_url);
        let resp = self.client.post(&url).json(request).send().await?;
        let resp = Self::check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// Maps non-success responses to `IntakeError::Api`, preferring the
    /// acceptor's own message over a generic one.
    async fn check_status(resp: Response) -> IntakeResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or_else(|| format!("request failed with status {status}"));

        Err(IntakeError::Api(message))
    }
}
