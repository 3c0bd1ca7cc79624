//! Ed25519 verification of inbound interaction requests.
//!
//! Discord signs `timestamp || body` with the application's key pair and
//! sends the detached signature in `X-Signature-Ed25519`. Requests that
//! fail verification are rejected with 401 before any parsing happens.

use anyhow::{anyhow, Context, Result};
use ed25519_dalek::{Signature, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

/// Verifies interaction signatures against the pinned application key.
///
/// The key is fixed configuration, loaded once at startup; rotating it
/// requires a restart.
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    /// Build a verifier from a hex-encoded public key.
    pub fn from_hex(public_key_hex: &str) -> Result<Self> {
        let bytes = hex::decode(public_key_hex).context("BOT_PUBLIC_KEY is not valid hex")?;
        let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| anyhow!("BOT_PUBLIC_KEY must be {} bytes", PUBLIC_KEY_LENGTH))?;
        let key = VerifyingKey::from_bytes(&bytes)
            .context("BOT_PUBLIC_KEY is not a valid Ed25519 key")?;
        Ok(Self { key })
    }

    /// Check a detached signature over `timestamp || body`.
    ///
    /// Any decode or verification failure yields `false`.
    pub fn verify(&self, timestamp: &str, body: &[u8], signature_hex: &str) -> bool {
        let Ok(sig_bytes) = hex::decode(signature_hex) else {
            return false;
        };
        let Ok(sig_bytes) = <[u8; SIGNATURE_LENGTH]>::try_from(sig_bytes) else {
            return false;
        };
        let signature = Signature::from_bytes(&sig_bytes);

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key.verify(&message, &signature).is_ok()
    }
}
