//! Decoding of a finished token for display.
//!
//! The header and claims shown in verbose mode are read back out of the
//! compact token rather than taken from the values that were signed, so
//! what is printed is what a consumer of the token would see.

use std::fmt::Write;

use crate::algorithms::AlgorithmIdentifier;
use crate::base64data::Base64JSON;
use crate::claims::ClaimSet;
use crate::fmt::{self, JWTFormat};
use crate::jose::HeaderSet;
use crate::token::{Token, TokenParseError};

/// The structured contents of a compact token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    /// The decoded JOSE header.
    pub header: HeaderSet,
    /// The decoded claims.
    pub claims: ClaimSet,
}

impl DecodedToken {
    /// Split a compact token and decode its header and payload.
    pub fn decode(compact: &str) -> Result<Self, TokenParseError> {
        let token: Token = compact.parse()?;
        Self::from_token(&token)
    }

    /// Decode the header and payload segments of a token.
    pub fn from_token(token: &Token) -> Result<Self, TokenParseError> {
        let header = Base64JSON::<HeaderSet>::parse(token.header())
            .map_err(|err| TokenParseError::Decode("header", err))?;
        let claims = Base64JSON::<ClaimSet>::parse(token.payload())
            .map_err(|err| TokenParseError::Decode("payload", err))?;

        Ok(DecodedToken {
            header: header.0,
            claims: claims.0,
        })
    }
}

/// Each part is printed under its own heading, indented one level.
impl JWTFormat for DecodedToken {
    fn fmt<W: fmt::Write>(&self, f: &mut fmt::IndentWriter<'_, W>) -> fmt::Result {
        writeln!(f, "header:")?;
        f.indent().write_json(&self.header)?;
        writeln!(f)?;
        writeln!(f, "claims:")?;
        f.indent().write_json(&self.claims)
    }
}

/// The verbose report printed before a token.
#[derive(Debug, Clone)]
pub struct Report<'t> {
    algorithm: AlgorithmIdentifier,
    decoded: DecodedToken,
    token: &'t Token,
}

impl<'t> Report<'t> {
    /// Build a report for `token` by decoding it.
    pub fn new(
        algorithm: AlgorithmIdentifier,
        token: &'t Token,
    ) -> Result<Self, TokenParseError> {
        Ok(Report {
            algorithm,
            decoded: DecodedToken::from_token(token)?,
            token,
        })
    }
}

impl JWTFormat for Report<'_> {
    fn fmt<W: fmt::Write>(&self, f: &mut fmt::IndentWriter<'_, W>) -> fmt::Result {
        writeln!(f, "algorithm: {}", self.algorithm)?;
        writeln!(f)?;
        writeln!(f, "claims:")?;
        JWTFormat::fmt(&self.decoded.claims, f)?;
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "headers:")?;
        JWTFormat::fmt(&self.decoded.header, f)?;
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "token:")?;
        write!(f, "{}", self.token)
    }
}
