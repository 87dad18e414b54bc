//! Submission pipeline.
//!
//! Composes the sequential steps of one intake submission: signature
//! guard, identifier derivation, asset lookup, key load, record sealing,
//! signature rendering, and the final POST. Every failure is terminal
//! for the attempt; retry means resubmitting.

use crate::api_client::IntakeApiClient;
use crate::error::{IntakeError, IntakeResult};
use crate::fees::{calculate_fees, FeeBreakdown};
use crate::keystore::KeyStore;
use crate::types::{ContactReceipt, ContactRequest, SubmissionPayload, SubmissionReceipt};
use intake_crypto::{derive_client_id, encrypt_record, ClientId, SubmissionRecord};
use intake_signature::{render_normalized, SignatureCapture};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// The three personal fields the identifier is derived from.
///
/// These are ordinary record content too: the record map still carries
/// whatever the form collected.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersonalIdentity {
    pub last_name: String,
    pub first_name: String,
    pub date_of_birth: String,
}

impl PersonalIdentity {
    /// Derives the deterministic client identifier.
    pub fn client_id(&self) -> ClientId {
        derive_client_id(&self.last_name, &self.first_name, &self.date_of_birth)
    }
}

/// Drives intake submissions end to end.
pub struct SubmissionClient {
    api: Arc<IntakeApiClient>,
    keys: KeyStore,
}

impl SubmissionClient {
    pub fn new(api: Arc<IntakeApiClient>) -> Self {
        let keys = KeyStore::new(Arc::clone(&api));
        Self { api, keys }
    }

    /// Access to the key cache (for pre-warming or invalidation).
    pub fn keystore(&self) -> &KeyStore {
        &self.keys
    }

    /// Submits one intake form.
    ///
    /// The record exists in cleartext only in this process; on the wire
    /// it lives solely inside the armored envelope. The identifier and
    /// the signature image travel in cleartext by design.
    pub async fn submit(
        &self,
        identity: &PersonalIdentity,
        record: SubmissionRecord,
        signature: &SignatureCapture,
    ) -> IntakeResult<SubmissionReceipt> {
        // User-correctable failure, checked before any key load or I/O
        if signature.is_empty() {
            return Err(IntakeError::EmptySignature);
        }

        let identifier = identity.client_id();
        debug!("submitting intake for {identifier}");

        let amounts = self.lookup_amounts(&identifier).await?;

        let key = self.keys.ensure_loaded().await?;
        let encrypted_data = encrypt_record(&record, key.key())?;

        let signature_data_url = render_normalized(signature)?.to_png_data_url()?;

        let payload = SubmissionPayload {
            identifier,
            encrypted_data,
            signature: signature_data_url,
            amounts,
        };

        let receipt = self.api.submit_intake(&payload).await?;
        info!("intake {identifier} accepted");
        Ok(receipt)
    }

    /// Submits the plain contact form.
    pub async fn submit_contact(&self, request: &ContactRequest) -> IntakeResult<ContactReceipt> {
        self.api.submit_contact(request).await
    }

    /// Computes the advisory amounts block when asset data exists.
    async fn lookup_amounts(&self, id: &ClientId) -> IntakeResult<Option<FeeBreakdown>> {
        let Some(records) = self.api.fetch_assets(id).await? else {
            return Ok(None);
        };

        let breakdown = calculate_fees(records.iter().map(|r| r.value.unwrap_or(0.0)));
        debug!(
            "asset lookup for {id}: {} positions, total {}",
            records.len(),
            breakdown.total_assets
        );
        Ok(Some(breakdown))
    }
}
