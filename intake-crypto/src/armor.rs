//! ASCII armor for key distribution and sealed records.
//!
//! Format:
//! ```text
//! ----- BEGIN INTAKE PUBLIC KEY -----
//! Version: 1
//! Fingerprint: 9f2c4a...
//!
//! mDMEXh5Qw... (base64, wrapped at 64 columns)
//! ----- END INTAKE PUBLIC KEY -----
//! ```

use crate::error::{CryptoError, CryptoResult};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use crypto_box::PublicKey;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Types of armored content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmorKind {
    PublicKey,
    EncryptedRecord,
}

impl ArmorKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PublicKey => "PUBLIC KEY",
            Self::EncryptedRecord => "ENCRYPTED RECORD",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "PUBLIC KEY" => Some(Self::PublicKey),
            "ENCRYPTED RECORD" => Some(Self::EncryptedRecord),
            _ => None,
        }
    }
}

/// Parsed armor block.
#[derive(Debug)]
pub struct ArmorBlock {
    pub kind: ArmorKind,
    pub headers: HashMap<String, String>,
    pub payload: Vec<u8>,
}

/// Parsed recipient key material.
#[derive(Clone, Debug)]
pub struct PublicKeyMaterial {
    key: PublicKey,
    fingerprint: String,
}

impl PublicKeyMaterial {
    pub fn key(&self) -> &PublicKey {
        &self.key
    }

    /// Hex SHA-256 of the raw 32-byte key.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

/// Encodes data as ASCII armor.
pub fn armor_encode(kind: ArmorKind, headers: &[(&str, &str)], payload: &[u8]) -> String {
    let mut out = String::new();

    out.push_str(&format!("----- BEGIN INTAKE {} -----\n", kind.label()));

    for (key, value) in headers {
        out.push_str(&format!("{key}: {value}\n"));
    }

    // Blank line separates headers from payload
    out.push('\n');

    // Base64 payload, wrapped at 64 columns
    let b64 = BASE64.encode(payload);
    let mut rest = b64.as_str();
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(64));
        out.push_str(line);
        out.push('\n');
        rest = tail;
    }

    out.push_str(&format!("----- END INTAKE {} -----\n", kind.label()));

    out
}

/// Decodes ASCII armor back to its payload bytes.
pub fn armor_decode(s: &str) -> CryptoResult<ArmorBlock> {
    let lines: Vec<&str> = s.lines().collect();

    let begin_idx = lines
        .iter()
        .position(|l| l.starts_with("----- BEGIN INTAKE"))
        .ok_or_else(|| CryptoError::ArmorParse("missing BEGIN line".into()))?;

    let kind_str = lines[begin_idx]
        .strip_prefix("----- BEGIN INTAKE ")
        .and_then(|l| l.strip_suffix(" -----"))
        .ok_or_else(|| CryptoError::ArmorParse("invalid BEGIN format".into()))?;

    let kind = ArmorKind::from_label(kind_str)
        .ok_or_else(|| CryptoError::ArmorParse(format!("unknown armor kind: {kind_str}")))?;

    let end_marker = format!("----- END INTAKE {} -----", kind.label());
    let end_idx = lines
        .iter()
        .position(|l| *l == end_marker)
        .ok_or_else(|| CryptoError::ArmorParse("missing END line".into()))?;

    // Headers run until the first blank line; everything after is payload.
    let mut headers = HashMap::new();
    let mut payload_start = begin_idx + 1;

    for (i, line) in lines[begin_idx + 1..end_idx].iter().enumerate() {
        if line.is_empty() {
            payload_start = begin_idx + 1 + i + 1;
            break;
        }
        if let Some((key, value)) = line.split_once(": ") {
            headers.insert(key.to_string(), value.to_string());
        }
    }

    let payload_b64: String = lines[payload_start..end_idx]
        .iter()
        .flat_map(|l| l.chars())
        .filter(|c| !c.is_whitespace())
        .collect();

    let payload = BASE64
        .decode(&payload_b64)
        .map_err(|e| CryptoError::ArmorParse(format!("invalid base64 payload: {e}")))?;

    Ok(ArmorBlock {
        kind,
        headers,
        payload,
    })
}

/// Parses an armored public key, validating kind and length.
pub fn parse_public_key(armored: &str) -> CryptoResult<PublicKeyMaterial> {
    let block = armor_decode(armored)?;

    if block.kind != ArmorKind::PublicKey {
        return Err(CryptoError::InvalidKey(format!(
            "expected PUBLIC KEY armor, got {}",
            block.kind.label()
        )));
    }

    if block.payload.len() != 32 {
        return Err(CryptoError::InvalidKey(format!(
            "invalid public key length: expected 32, got {}",
            block.payload.len()
        )));
    }

    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&block.payload);

    Ok(PublicKeyMaterial {
        key: PublicKey::from(bytes),
        fingerprint: hex::encode(Sha256::digest(bytes)),
    })
}

/// Armors a public key for distribution, embedding its fingerprint.
pub fn export_public_key(key: &PublicKey) -> String {
    let fingerprint = hex::encode(Sha256::digest(key.as_bytes()));
    armor_encode(
        ArmorKind::PublicKey,
        &[("Version", "1"), ("Fingerprint", &fingerprint)],
        key.as_bytes(),
    )
}
