//! HMAC Signing algorithms for use with JWS
//!
//! Based on the [hmac](https://crates.io/crates/hmac) crate.

use std::marker::PhantomData;

use digest::Mac;
use hmac::SimpleHmac;

use crate::key::HmacKey;

/// The HMAC algorithm as used when signing a JWS.
///
/// This type exists to associate the shared secret with the digest.
#[derive(Debug, Clone)]
pub struct Hmac<D>
where
    D: digest::Digest + digest::core_api::BlockSizeUser,
{
    key: HmacKey,
    _digest: PhantomData<D>,
}

impl<D> Hmac<D>
where
    D: digest::Digest + digest::core_api::BlockSizeUser,
    hmac::SimpleHmac<D>: Mac,
{
    /// Create a new HMAC digest wrapper with a given signing key.
    ///
    /// Signing keys are arbitrary bytes.
    pub fn new(key: HmacKey) -> Self {
        Self {
            key,
            _digest: PhantomData,
        }
    }
}

impl super::Algorithm for Hmac<sha2::Sha256> {
    const IDENTIFIER: super::AlgorithmIdentifier = super::AlgorithmIdentifier::HS256;
    type Signature = digest::Output<SimpleHmac<sha2::Sha256>>;
}

impl super::Algorithm for Hmac<sha2::Sha384> {
    const IDENTIFIER: super::AlgorithmIdentifier = super::AlgorithmIdentifier::HS384;
    type Signature = digest::Output<SimpleHmac<sha2::Sha384>>;
}

impl super::Algorithm for Hmac<sha2::Sha512> {
    const IDENTIFIER: super::AlgorithmIdentifier = super::AlgorithmIdentifier::HS512;
    type Signature = digest::Output<SimpleHmac<sha2::Sha512>>;
}

impl<D> super::SigningAlgorithm for Hmac<D>
where
    D: digest::Digest
        + digest::Reset
        + digest::core_api::BlockSizeUser
        + digest::FixedOutput
        + digest::core_api::CoreProxy
        + Clone,
    Hmac<D>: super::Algorithm<Signature = digest::Output<SimpleHmac<D>>>,
{
    type Error = digest::InvalidLength;

    fn sign(&self, header: &str, payload: &str) -> Result<Self::Signature, Self::Error> {
        // Create a new, one-shot digest for this signature.
        let mut digest: SimpleHmac<D> = SimpleHmac::new_from_slice(self.key.as_ref())?;
        digest.update(header.as_bytes());
        digest.update(b".");
        digest.update(payload.as_bytes());
        Ok(digest.finalize().into_bytes())
    }
}

#[cfg(test)]
mod test {
    use crate::algorithms::SigningAlgorithm;

    use super::*;

    use base64ct::Encoding;
    use serde_json::json;
    use sha2::{Sha256, Sha384, Sha512};

    fn strip_whitespace(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    fn b64(signature: impl AsRef<[u8]>) -> String {
        base64ct::Base64UrlUnpadded::encode_string(signature.as_ref())
    }

    #[test]
    fn rfc7515_example_a1_signature() {
        let pkey = &json!({
            "kty":"oct",
            "k":"AyM1SysPpbyDfgZld3umj1qzKObwVMkoqQ-EstJQLr_T-1qS0gZH75
                aKtMN3Yj0iPS4hcgUuTwjAzZr1Z9CAow"
        }
        );

        let key_data = strip_whitespace(pkey["k"].as_str().unwrap());
        let key = HmacKey::from(base64ct::Base64UrlUnpadded::decode_vec(&key_data).unwrap());

        let payload = strip_whitespace(
            "eyJpc3MiOiJqb2UiLA0KICJleHAiOjEzMDA4MTkzODAsDQogImh0dHA6Ly9leGFt
        cGxlLmNvbS9pc19yb290Ijp0cnVlfQ",
        );

        let header = strip_whitespace("eyJ0eXAiOiJKV1QiLA0KICJhbGciOiJIUzI1NiJ9");

        let algorithm: Hmac<Sha256> = Hmac::new(key);

        let signature = algorithm.sign(&header, &payload).unwrap();

        assert_eq!(
            b64(signature),
            strip_whitespace("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk")
        );
    }

    const PAYLOAD: &str = "eyJpYXQiOjE0Nzk0MjAyNjh9";

    #[test]
    fn hs256_signature() {
        let algorithm: Hmac<Sha256> = Hmac::new("my-secret".into());
        let signature = algorithm
            .sign("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9", PAYLOAD)
            .unwrap();
        assert_eq!(signature.len(), 32);
        assert_eq!(b64(signature), "gPEy-5SoZ4vX9Iiir5pSvw2bvLI0EkYVxuph3z3f7uA");
    }

    #[test]
    fn hs384_signature() {
        let algorithm: Hmac<Sha384> = Hmac::new("my-secret".into());
        let signature = algorithm
            .sign("eyJhbGciOiJIUzM4NCIsInR5cCI6IkpXVCJ9", PAYLOAD)
            .unwrap();
        assert_eq!(signature.len(), 48);
        assert_eq!(
            b64(signature),
            "yrbDaGlGk1KCOcC1BGN4EoD9Jx0XoxEqT_UqIt26qX_gRFSDHbtUyYmJvKU6FiDJ"
        );
    }

    #[test]
    fn hs512_signature() {
        let algorithm: Hmac<Sha512> = Hmac::new("my-secret".into());
        let signature = algorithm
            .sign("eyJhbGciOiJIUzUxMiIsInR5cCI6IkpXVCJ9", PAYLOAD)
            .unwrap();
        assert_eq!(signature.len(), 64);
        assert_eq!(
            b64(signature),
            "cG5bXaTvwHj9GRg71CZUqW21TTGeXl7Pv7S716DortQbB4ygRvzAJ72UXAYEHdWYXZex7NrVKEHUkuPE7QJcZQ"
        );
    }
}
