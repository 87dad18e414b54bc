//! Client-side intake submission pipeline.
//!
//! Drives the full intake flow against the firm's acceptance API:
//! - deterministic client identifiers (intake-crypto)
//! - record sealing under the firm's public key, ASCII-armored
//! - signature normalization to a transparent PNG (intake-signature)
//! - advisory fee computation from asset positions
//! - lazily loaded, process-wide cached public key
//!
//! A submission either completes or fails; there is no automatic retry
//! and no partial state. The plain contact flow shares the same API
//! client.

pub mod api_client;
pub mod config;
pub mod error;
pub mod fees;
pub mod keystore;
pub mod submission;
pub mod types;

pub use config::IntakeConfig;
pub use error::{IntakeError, IntakeResult};
pub use fees::{calculate_fees, parse_asset_value, FeeBreakdown};
pub use keystore::KeyStore;
pub use submission::{PersonalIdentity, SubmissionClient};
pub use types::*;
