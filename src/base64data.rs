//! Base64url JSON segments, as used for the header and payload of a
//! compact JWT.

use base64ct::Encoding;
use serde::{de::DeserializeOwned, Serialize};

/// Error returned when a segment cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The segment was not unpadded base64url.
    #[error("invalid base64url encoding: {0}")]
    Base64(#[from] base64ct::Error),

    /// The decoded bytes were not the expected JSON document.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wrapper type to indicate that the inner type should be serialized
/// as JSON and then Base64 URL-safe encoded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base64JSON<T>(pub T);

impl<T> Base64JSON<T>
where
    T: Serialize,
{
    /// The compact JSON serialization of the inner value.
    pub fn serialized_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.0)
    }

    /// The unpadded base64url encoding of the compact JSON serialization.
    pub fn serialized_value(&self) -> Result<String, serde_json::Error> {
        let inner = self.serialized_bytes()?;
        Ok(base64ct::Base64UrlUnpadded::encode_string(&inner))
    }
}

impl<T> Base64JSON<T>
where
    T: DeserializeOwned,
{
    /// Decode a base64url segment and parse the JSON inside it.
    pub fn parse(segment: &str) -> Result<Self, DecodeError> {
        let data = decode_segment(segment)?;
        Ok(Base64JSON(serde_json::from_slice(&data)?))
    }
}

impl<T> AsRef<T> for Base64JSON<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Base64JSON<T> {
    fn from(value: T) -> Self {
        Base64JSON(value)
    }
}

/// Decode an unpadded base64url segment to raw bytes.
pub fn decode_segment(segment: &str) -> Result<Vec<u8>, base64ct::Error> {
    base64ct::Base64UrlUnpadded::decode_vec(segment)
}
