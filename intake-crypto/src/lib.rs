//! Cryptographic core for the client-intake pipeline.
//!
//! Provides the two operations every intake submission depends on:
//!
//! 1. **Identity derivation**: a stable, content-derived identifier from
//!    the client's last name, first name and date of birth. Pure hashing,
//!    no I/O. The same person always maps to the same identifier, so
//!    resubmissions correlate without any server-side lookup.
//!
//! 2. **Envelope encryption**: the intake record is serialized to
//!    canonical JSON and sealed under the firm's X25519 public key with an
//!    ephemeral keypair (XSalsa20-Poly1305 payload encryption). The
//!    submitting client holds no secret material: this crate is write-only
//!    with respect to confidentiality, and only the private-key holder can
//!    open an envelope.
//!
//! Key distribution and ciphertext transport use ASCII armor so both
//! travel as plain text.

pub mod armor;
pub mod envelope;
mod error;
mod identity;
mod record;

pub use armor::{
    armor_decode, armor_encode, export_public_key, parse_public_key, ArmorBlock, ArmorKind,
    PublicKeyMaterial,
};
pub use envelope::{
    decrypt_record, encrypt_record, open_record, seal_record, IntakeKeyPair, SealedRecord,
};
pub use error::{CryptoError, CryptoResult};
pub use identity::{derive_client_id, ClientId};
pub use record::SubmissionRecord;

pub use crypto_box::{PublicKey, SecretKey};
