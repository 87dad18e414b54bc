//! Deterministic client identifiers.
//!
//! A client is identified by hashing a normalized `last_first_dob`
//! string and rendering the first 128 bits of the digest in hyphenated
//! UUID form. Derivation is pure and total: any input triple, including
//! empty or malformed dates, yields a well-formed identifier.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

/// Content-derived client identifier, rendered 8-4-4-4-12 lowercase hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(Uuid);

impl ClientId {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; 16] {
        self.0.into_bytes()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Derives the deterministic identifier for a client.
///
/// Name fields are trimmed and lowercased before hashing so casing and
/// surrounding whitespace never change the identifier; the date of birth
/// is used verbatim. The identifier is the first 16 bytes of
/// `SHA-256(last + "_" + first + "_" + dob)`.
pub fn derive_client_id(last_name: &str, first_name: &str, date_of_birth: &str) -> ClientId {
    let normalized = format!(
        "{}_{}_{}",
        last_name.trim().to_lowercase(),
        first_name.trim().to_lowercase(),
        date_of_birth
    );

    let digest = Sha256::digest(normalized.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    ClientId(Uuid::from_bytes(bytes))
}
