//! RSA algorithms
//!
//! # PKCS#1 v1.5 (RS256)
//! This algorithm is used to sign JSON Web Tokens using the RSASSA-PKCS1-v1_5.
//! A [rsa::pkcs1v15::SigningKey] signing key is used to provide the underlying signature
//! algorithm.
//!
//! A key of size 2048 bits or larger MUST be used with these algorithms.
//!
//! The RSASSA-PKCS1-v1_5 SHA-256 digital signature is generated as
//! follows: generate a digital signature of the JWS Signing Input using
//! RSASSA-PKCS1-v1_5-SIGN and the SHA-256 hash function with the desired
//! private key.  This is the JWS Signature value.

use rsa::pkcs1v15::SigningKey;
use signature::SignatureEncoding;

/// Alogrithm wrapper for the Digital Signature with RSASSA-PKCS1-v1_5 algorithm.
pub type RsaPkcs1v15<D> = SigningKey<D>;

impl super::Algorithm for RsaPkcs1v15<sha2::Sha256> {
    const IDENTIFIER: super::AlgorithmIdentifier = super::AlgorithmIdentifier::RS256;
    type Signature = Box<[u8]>;
}

impl<D> super::SigningAlgorithm for RsaPkcs1v15<D>
where
    D: digest::Digest,
    RsaPkcs1v15<D>: super::Algorithm<Signature = Box<[u8]>>,
{
    type Error = signature::Error;

    fn sign(&self, header: &str, payload: &str) -> Result<Self::Signature, Self::Error> {
        let message = format!("{}.{}", header, payload);
        let signature: rsa::pkcs1v15::Signature =
            signature::Signer::try_sign(self, message.as_bytes())?;
        Ok(signature.to_bytes())
    }
}
