//! Wire types for the acceptance API.

use crate::fees::FeeBreakdown;
use intake_crypto::ClientId;
use serde::{Deserialize, Serialize};

/// Payload POSTed to the submission endpoint.
///
/// The record travels only inside `encrypted_data`; the identifier and
/// the signature image are deliberately cleartext.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub identifier: ClientId,
    /// ASCII-armored sealed record.
    pub encrypted_data: String,
    /// PNG data URL of the normalized signature.
    pub signature: String,
    /// Advisory fee breakdown; present only when the asset lookup
    /// returned data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amounts: Option<FeeBreakdown>,
}

/// Success response from the submission endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub message: String,
    pub identifier: ClientId,
}

/// One asset position returned by the asset lookup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssetRecord {
    #[serde(default)]
    pub label: Option<String>,
    /// Monetary value; missing or non-numeric upstream data arrives as
    /// `None` and counts as zero.
    #[serde(default)]
    pub value: Option<f64>,
}

/// Plain contact form request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Success response from the contact endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub success: bool,
    pub message: String,
}
