//! JSON Web Tokens ([RFC 7519][RFC7519]) in the compact serialization.
//!
//! A token is three base64url segments joined by `.`: the JOSE header, the
//! claims payload and the signature over `header.payload`.
//!
//! [RFC7519]: https://tools.ietf.org/html/rfc7519

use std::fmt;
use std::str::FromStr;

use sha2::{Sha256, Sha384, Sha512};

use crate::algorithms::hmac::Hmac;
use crate::algorithms::rsa::RsaPkcs1v15;
use crate::algorithms::{AlgorithmIdentifier, SignatureBytes, SigningAlgorithm};
use crate::base64data::{Base64JSON, DecodeError};
use crate::claims::ClaimSet;
use crate::error::Error;
use crate::jose::HeaderSet;
use crate::key::SigningMaterial;

/// A signed token in the compact format.
///
/// Tokens are immutable once produced. Use [`Token::sign`] to create one,
/// and [`std::fmt::Display`] (or [`Token::compact`]) to render it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    header: String,
    payload: String,
    signature: SignatureBytes,
}

impl Token {
    /// Sign the header and claims with the given algorithm and material.
    ///
    /// The header should carry `algorithm` as its `alg` value; the token
    /// would otherwise misreport how it was signed.
    pub fn sign(
        header: &HeaderSet,
        claims: &ClaimSet,
        algorithm: AlgorithmIdentifier,
        material: &SigningMaterial,
    ) -> Result<Token, Error> {
        if let Some(alg) = header.get("alg") {
            if alg.as_str() != Some(algorithm.as_str()) {
                return Err(Error::AlgorithmMismatch {
                    header: alg.clone(),
                    algorithm,
                });
            }
        }

        let header = Base64JSON(header).serialized_value()?;
        let payload = Base64JSON(claims).serialized_value()?;

        let signature = match (algorithm, material) {
            (AlgorithmIdentifier::HS256, SigningMaterial::Secret(key)) => {
                compute_signature(&Hmac::<Sha256>::new(key.clone()), &header, &payload)?
            }
            (AlgorithmIdentifier::HS384, SigningMaterial::Secret(key)) => {
                compute_signature(&Hmac::<Sha384>::new(key.clone()), &header, &payload)?
            }
            (AlgorithmIdentifier::HS512, SigningMaterial::Secret(key)) => {
                compute_signature(&Hmac::<Sha512>::new(key.clone()), &header, &payload)?
            }
            (AlgorithmIdentifier::RS256, SigningMaterial::PrivateKey(key)) => compute_signature(
                &RsaPkcs1v15::<Sha256>::new((**key).clone()),
                &header,
                &payload,
            )?,
            (algorithm, material) => {
                return Err(Error::MaterialMismatch {
                    algorithm,
                    key_type: material.key_type(),
                })
            }
        };

        tracing::debug!(%algorithm, signature = signature.len(), "signed token");
        Ok(Token {
            header,
            payload,
            signature,
        })
    }

    /// The base64url encoded header segment.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The base64url encoded payload segment.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The raw signature.
    pub fn signature(&self) -> &SignatureBytes {
        &self.signature
    }

    /// The JWS signing input, `header.payload`.
    pub fn message(&self) -> String {
        format!("{}.{}", self.header, self.payload)
    }

    /// The token in compact form, `header.payload.signature`.
    pub fn compact(&self) -> String {
        self.to_string()
    }
}

fn compute_signature<A>(
    algorithm: &A,
    header: &str,
    payload: &str,
) -> Result<SignatureBytes, Error>
where
    A: SigningAlgorithm,
{
    tracing::trace!(alg = %A::IDENTIFIER, "computing signature");
    let signature = algorithm
        .sign(header, payload)
        .map_err(|err| Error::Signing(Box::new(err)))?;
    Ok(SignatureBytes::from(signature.as_ref()))
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.header,
            self.payload,
            self.signature.to_b64url()
        )
    }
}

/// Error returned when a token cannot be parsed from a string.
#[derive(Debug, thiserror::Error)]
pub enum TokenParseError {
    /// Unable to find the header in the raw data.
    #[error("missing header")]
    MissingHeader,

    /// Unable to find the payload in the raw data.
    #[error("missing payload")]
    MissingPayload,

    /// Unable to find the signature in the raw data.
    #[error("missing signature")]
    MissingSignature,

    /// More than three segments.
    #[error("unexpected trailing segment")]
    TrailingSegment,

    /// A segment was not valid base64url.
    #[error("{0}: invalid base64url encoding: {1}")]
    Base64(&'static str, base64ct::Error),

    /// A segment was not a JSON object.
    #[error("{0}: {1}")]
    Decode(&'static str, DecodeError),
}

impl FromStr for Token {
    type Err = TokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.split('.');
        let header = segments
            .next()
            .filter(|segment| !segment.is_empty())
            .ok_or(TokenParseError::MissingHeader)?;
        let payload = segments
            .next()
            .filter(|segment| !segment.is_empty())
            .ok_or(TokenParseError::MissingPayload)?;
        let signature = segments
            .next()
            .filter(|segment| !segment.is_empty())
            .ok_or(TokenParseError::MissingSignature)?;
        if segments.next().is_some() {
            return Err(TokenParseError::TrailingSegment);
        }

        let signature = SignatureBytes::from_b64url(signature)
            .map_err(|err| TokenParseError::Base64("signature", err))?;

        Ok(Token {
            header: header.to_owned(),
            payload: payload.to_owned(),
            signature,
        })
    }
}
