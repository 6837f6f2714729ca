use std::fmt;

use base64ct::Encoding;
use bytes::Bytes;

/// A signature which has been detached from the algorithm that produced it.
///
/// Each algorithm returns its own signature type. Once the signature is
/// attached to a token only its bytes matter, so they are stored here.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SignatureBytes(Bytes);

impl SignatureBytes {
    /// Create a new signature from a base64url-encoded string.
    pub fn from_b64url(data: &str) -> std::result::Result<Self, base64ct::Error> {
        Ok(Self(Bytes::from(base64ct::Base64UrlUnpadded::decode_vec(
            data,
        )?)))
    }

    /// The signature as an unpadded base64url string, as it appears in a
    /// compact token.
    pub fn to_b64url(&self) -> String {
        base64ct::Base64UrlUnpadded::encode_string(self.0.as_ref())
    }

    /// Number of raw signature bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SignatureBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SignatureBytes")
            .field(&self.to_b64url())
            .finish()
    }
}

impl AsRef<[u8]> for SignatureBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for SignatureBytes {
    fn from(bytes: &[u8]) -> Self {
        SignatureBytes(Bytes::copy_from_slice(bytes))
    }
}

impl From<Vec<u8>> for SignatureBytes {
    fn from(bytes: Vec<u8>) -> Self {
        SignatureBytes(bytes.into())
    }
}
