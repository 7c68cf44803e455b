//! Application Configuration
//!
//! Configuration for the Auth application layer. Passed explicitly into
//! constructors at startup; never read from ambient global state.

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Credential signing secret for HMAC (32 bytes).
    /// Rotating it invalidates every previously issued credential.
    pub token_secret: [u8; 32],
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
