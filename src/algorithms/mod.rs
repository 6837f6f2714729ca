//! JSON Web Algorithms (RFC 7518)
//!
//! This module implements the subset of JWA used to sign tokens: HMAC with
//! SHA-2 (`HS256`, `HS384`, `HS512`) and RSASSA-PKCS1-v1_5 with SHA-256 (`RS256`).

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod hmac;
pub mod rsa;
mod sig;

pub use self::sig::SignatureBytes;

/// The identifiers used in JWA to indicate how a JWS is signed.
///
/// Only the identifiers this tool can sign with are listed. Anything else is
/// rejected while the command line is parsed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, clap::ValueEnum,
)]
pub enum AlgorithmIdentifier {
    /// HMAC using SHA-256
    #[value(name = "HS256")]
    HS256,
    /// HMAC using SHA-384
    #[value(name = "HS384")]
    HS384,
    /// HMAC using SHA-512
    #[value(name = "HS512")]
    HS512,
    /// RSASSA-PKCS1-v1_5 using SHA-256
    #[value(name = "RS256")]
    RS256,
}

impl AlgorithmIdentifier {
    /// The identifier as it appears in the `alg` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmIdentifier::HS256 => "HS256",
            AlgorithmIdentifier::HS384 => "HS384",
            AlgorithmIdentifier::HS512 => "HS512",
            AlgorithmIdentifier::RS256 => "RS256",
        }
    }

    /// Whether this algorithm is keyed by a shared secret.
    pub fn is_hmac(&self) -> bool {
        !matches!(self, AlgorithmIdentifier::RS256)
    }
}

impl fmt::Display for AlgorithmIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trait to associate an alogritm identifier with an algorithm.
///
/// The identifier is written into the `alg` header of every token signed
/// with the algorithm.
pub trait Algorithm {
    /// Identifier for this algorithm.
    const IDENTIFIER: AlgorithmIdentifier;

    /// Signature type returned upon sucess. This is the JWS Signature value.
    type Signature: AsRef<[u8]>;
}

/// A trait to represent an algorithm which can sign a JWT.
pub trait SigningAlgorithm: Algorithm {
    /// Error type returned when signing fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sign the contents of the JWT, when provided with the base64url-encoded header
    /// and payload. This is the JWS Signature value, and will be base64url-encoded
    /// and appended to the compact representation of the JWT.
    fn sign(&self, header: &str, payload: &str) -> Result<Self::Signature, Self::Error>;
}
