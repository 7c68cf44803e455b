//! Platform - Technical capabilities shared across domains
//!
//! No domain knowledge lives here; only cryptographic and encoding
//! primitives with stated contracts:
//! - `password`: Argon2id hashing and verification
//! - `token`: HMAC-signed, tamper-evident credential codec

pub mod password;
pub mod token;
