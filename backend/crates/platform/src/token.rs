//! Signed Credential Codec
//!
//! Compact, tamper-evident bearer tokens: a serde-serialized claim payload
//! signed with HMAC-SHA256 and encoded as two URL-safe base64 parts joined
//! by `.`. Stateless by construction - verification needs only the process
//! secret, so rotating the secret invalidates every outstanding token.
//!
//! The codec carries no expiry of its own; claims live as long as the secret.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Credential verification/issuance errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token shape or encoding is not a valid credential
    #[error("Credential is malformed")]
    Malformed,

    /// Signature does not match the payload
    #[error("Credential signature mismatch")]
    SignatureMismatch,

    /// Claim payload could not be serialized
    #[error("Claim encoding failed: {0}")]
    Encoding(String),
}

/// Signs and verifies credential tokens with a process-wide secret
///
/// Pure function pair: `issue` and `verify` share no state beyond the key,
/// so the codec is cheap to clone into middleware and handlers.
#[derive(Clone)]
pub struct TokenCodec {
    secret: [u8; 32],
}

impl TokenCodec {
    /// Create a codec keyed by the process-wide signing secret
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Issue a signed token over the given claims
    pub fn issue<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        let payload = serde_json::to_vec(claims).map_err(|e| TokenError::Encoding(e.to_string()))?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(&payload);
        let signature = mac.finalize().into_bytes();

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Verify a token and decode its claims
    ///
    /// Fails with [`TokenError::Malformed`] when the token does not have the
    /// `payload.signature` shape or either part is not valid base64/JSON,
    /// and with [`TokenError::SignatureMismatch`] when the payload was not
    /// signed by this codec's secret. The signature check runs before the
    /// payload is deserialized.
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        let (payload_b64, signature_b64) =
            token.split_once('.').ok_or(TokenError::Malformed)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::Malformed)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::Malformed)?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(&payload);

        // Constant-time comparison
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::SignatureMismatch)?;

        serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)
    }
}
