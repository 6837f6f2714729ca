//! Errors raised while building a token.
//!
//! Every error is terminal: the command line tool reports it and exits
//! without printing a token.

use std::fmt;

use crate::algorithms::AlgorithmIdentifier;
use crate::token::TokenParseError;

/// Which map an override entry was destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A payload claim (`-c` / `--claims`).
    Claim,
    /// A JOSE header (`-h` / `--headers`).
    Header,
}

impl EntryKind {
    fn plural(&self) -> &'static str {
        match self {
            EntryKind::Claim => "claims",
            EntryKind::Header => "headers",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Claim => f.write_str("claim"),
            EntryKind::Header => f.write_str("header"),
        }
    }
}

/// Error returned when a token cannot be generated.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `key=value` entry did not contain exactly one `=`.
    #[error("invalid {kind}: {raw}")]
    InvalidEntry {
        /// Claim or header.
        kind: EntryKind,
        /// The entry as it was supplied.
        raw: String,
    },

    /// The whole-object override was not valid JSON.
    #[error("invalid {} JSON: {source}", kind.plural())]
    InvalidJson {
        /// Claims or headers.
        kind: EntryKind,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// The whole-object override was valid JSON, but not an object.
    #[error("{} must be a JSON object", kind.plural())]
    NotAnObject {
        /// Claims or headers.
        kind: EntryKind,
    },

    /// An HMAC algorithm was chosen without a secret.
    #[error("secret value missing")]
    MissingSecret,

    /// RS256 was chosen without a readable private key file.
    #[error("private key missing")]
    MissingPrivateKey,

    /// The private key file could not be parsed as an RSA key.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// The `alg` header disagrees with the algorithm used to sign.
    #[error("header alg {header} does not match algorithm {algorithm}")]
    AlgorithmMismatch {
        /// The `alg` value supplied as a header.
        header: serde_json::Value,
        /// The signing algorithm.
        algorithm: AlgorithmIdentifier,
    },

    /// The signing material does not belong to the chosen algorithm.
    #[error("{algorithm} cannot sign with a {key_type} key")]
    MaterialMismatch {
        /// The signing algorithm.
        algorithm: AlgorithmIdentifier,
        /// Key type of the material supplied.
        key_type: &'static str,
    },

    /// A timestamp option was NaN or infinite.
    #[error("invalid {name}: {value}")]
    InvalidTimestamp {
        /// Name of the option.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The cryptographic signing step failed.
    #[error("signing: {0}")]
    Signing(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The header or claims could not be serialized.
    #[error("serializing: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A produced token could not be decoded again.
    #[error("decoding token: {0}")]
    Parse(#[from] TokenParseError),

    /// Decoding a produced token did not give back what was signed.
    #[error("{segment} did not survive encoding")]
    RoundTrip {
        /// The segment which differed.
        segment: &'static str,
    },

    /// Writing output failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
