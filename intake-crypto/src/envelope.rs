//! Envelope encryption for intake submissions.
//!
//! Uses X25519 key exchange + XSalsa20-Poly1305 to seal a submission
//! record under the firm's public key. Each seal generates a fresh
//! ephemeral keypair and nonce: two seals of the same record share no
//! bytes, and both open to the same plaintext.

use crate::armor::{self, ArmorKind};
use crate::error::{CryptoError, CryptoResult};
use crate::record::SubmissionRecord;
use crypto_box::aead::Aead;
use crypto_box::{PublicKey, SalsaBox, SecretKey};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// X25519 keypair for the receiving side (operator tooling and tests).
///
/// The secret key implements `ZeroizeOnDrop` automatically (from
/// crypto_box). The submitting client never constructs one.
pub struct IntakeKeyPair {
    pub secret: SecretKey,
    pub public: PublicKey,
}

impl IntakeKeyPair {
    pub fn generate() -> Self {
        let secret = SecretKey::generate(&mut rand::rngs::OsRng);
        let public = secret.public_key();
        Self { secret, public }
    }

    /// Returns the public key as raw 32-byte array.
    pub fn public_bytes(&self) -> [u8; 32] {
        *self.public.as_bytes()
    }

    /// Returns the secret key as raw 32-byte array.
    pub fn secret_bytes(&self) -> [u8; 32] {
        self.secret.to_bytes()
    }

    /// Reconstructs a keypair from raw secret key bytes.
    pub fn from_secret_bytes(bytes: [u8; 32]) -> Self {
        let secret = SecretKey::from(bytes);
        let public = secret.public_key();
        Self { secret, public }
    }
}

/// A submission record sealed with the recipient's X25519 public key.
///
/// The ephemeral public key is included so the recipient can reconstruct
/// the shared secret.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SealedRecord {
    /// Ephemeral X25519 public key (sender side of DH).
    pub ephemeral_public_key: [u8; 32],
    /// XSalsa20 nonce (24 bytes).
    pub nonce: [u8; 24],
    /// XSalsa20-Poly1305 ciphertext + tag over the canonical record JSON.
    pub ciphertext: Vec<u8>,
}

/// Seals a record under the recipient's public key.
pub fn seal_record(record: &SubmissionRecord, recipient: &PublicKey) -> CryptoResult<SealedRecord> {
    let plaintext = serde_json::to_vec(record)?;

    let ephemeral = SecretKey::generate(&mut rand::rngs::OsRng);
    let ephemeral_pk = ephemeral.public_key();

    let salsa_box = SalsaBox::new(recipient, &ephemeral);

    let mut nonce_bytes = [0u8; 24];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);

    let ciphertext = salsa_box
        .encrypt(crypto_box::Nonce::from_slice(&nonce_bytes), plaintext.as_slice())
        .map_err(|e| CryptoError::Encryption(format!("record seal failed: {e}")))?;

    Ok(SealedRecord {
        ephemeral_public_key: *ephemeral_pk.as_bytes(),
        nonce: nonce_bytes,
        ciphertext,
    })
}

/// Opens a sealed record using the recipient's secret key.
pub fn open_record(
    sealed: &SealedRecord,
    recipient_secret: &SecretKey,
) -> CryptoResult<SubmissionRecord> {
    let ephemeral_pk = PublicKey::from(sealed.ephemeral_public_key);
    let salsa_box = SalsaBox::new(&ephemeral_pk, recipient_secret);

    let plaintext = salsa_box
        .decrypt(
            crypto_box::Nonce::from_slice(&sealed.nonce),
            sealed.ciphertext.as_ref(),
        )
        .map_err(|_| {
            CryptoError::Decryption("record open failed (wrong key or tampered data)".to_string())
        })?;

    Ok(serde_json::from_slice(&plaintext)?)
}

/// Seals a record and armors the result for wire transport.
///
/// The armored text is the `encryptedData` field of the submission
/// payload.
pub fn encrypt_record(record: &SubmissionRecord, recipient: &PublicKey) -> CryptoResult<String> {
    let sealed = seal_record(record, recipient)?;
    let payload = serde_json::to_vec(&sealed)?;
    Ok(armor::armor_encode(
        ArmorKind::EncryptedRecord,
        &[("Version", "1")],
        &payload,
    ))
}

/// Operator-side inverse of `encrypt_record`.
pub fn decrypt_record(armored: &str, recipient_secret: &SecretKey) -> CryptoResult<SubmissionRecord> {
    let block = armor::armor_decode(armored)?;

    if block.kind != ArmorKind::EncryptedRecord {
        return Err(CryptoError::ArmorParse(format!(
            "expected ENCRYPTED RECORD armor, got {}",
            block.kind.label()
        )));
    }

    let sealed: SealedRecord = serde_json::from_slice(&block.payload)?;
    open_record(&sealed, recipient_secret)
}
