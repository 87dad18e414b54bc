//! Public-key cache with lazy, single-flight loading.
//!
//! The encryption key is a static resource: every fetch returns the same
//! material, so the first successful load is cached for the life of the
//! process (until `invalidate`). Concurrent first submissions fetch at
//! most once.

use crate::api_client::IntakeApiClient;
use crate::error::{IntakeError, IntakeResult};
use intake_crypto::{parse_public_key, PublicKeyMaterial};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Caches the recipient public key across submissions.
pub struct KeyStore {
    api: Arc<IntakeApiClient>,
    material: Arc<RwLock<Option<PublicKeyMaterial>>>,
    /// Serializes loads so concurrent cache misses fetch at most once.
    load_lock: Arc<Mutex<()>>,
}

impl KeyStore {
    pub fn new(api: Arc<IntakeApiClient>) -> Self {
        Self {
            api,
            material: Arc::new(RwLock::new(None)),
            load_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the cached key, fetching and parsing it on first use.
    pub async fn ensure_loaded(&self) -> IntakeResult<PublicKeyMaterial> {
        // Fast path: already loaded
        {
            let material = self.material.read().await;
            if let Some(ref m) = *material {
                return Ok(m.clone());
            }
        }

        // Slow path: single-flight load
        let _guard = self.load_lock.lock().await;

        // Double-check: a concurrent load may have completed while we
        // waited for the lock
        {
            let material = self.material.read().await;
            if let Some(ref m) = *material {
                return Ok(m.clone());
            }
        }

        let armored = self.api.fetch_public_key().await.map_err(|e| {
            warn!("public key fetch failed: {e}");
            e
        })?;

        let parsed = parse_public_key(&armored)
            .map_err(|e| IntakeError::KeyUnavailable(e.to_string()))?;
        debug!("loaded intake public key, fingerprint {}", parsed.fingerprint());

        let mut material = self.material.write().await;
        *material = Some(parsed.clone());

        Ok(parsed)
    }

    /// Clears the cached key; the next `ensure_loaded` refetches.
    pub async fn invalidate(&self) {
        let mut material = self.material.write().await;
        *material = None;
    }

    /// True when a key is currently cached.
    pub async fn is_loaded(&self) -> bool {
        self.material.read().await.is_some()
    }
}
