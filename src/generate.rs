//! The token generation pipeline.
//!
//! Resolve the timestamps, build the claims and header, sign, then decode
//! the finished token and check that it carries exactly what was signed.

use std::io;

use chrono::{DateTime, Utc};

use crate::base64data::Base64JSON;
use crate::claims::ClaimSet;
use crate::config::Config;
use crate::error::Error;
use crate::fmt::JWTFormat;
use crate::jose::HeaderSet;
use crate::numeric_date::Timestamps;
use crate::report::{DecodedToken, Report};
use crate::token::Token;

/// A generated token along with its decoded contents.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The signed token.
    pub token: Token,

    /// Header and claims as decoded from `token`.
    pub decoded: DecodedToken,
}

/// Generate a token from `config`, treating `now` as the current time.
pub fn generate(config: &Config, now: DateTime<Utc>) -> Result<Generated, Error> {
    let timestamps = Timestamps::resolve(config.iat, config.exp, now)?;
    let claims = ClaimSet::build(timestamps, &config.claims)?;
    let header = HeaderSet::build(config.algorithm, &config.headers)?;

    let token = Token::sign(&header, &claims, config.algorithm, &config.material)?;
    let decoded = DecodedToken::from_token(&token)?;
    check_round_trip(&token, &decoded, &header, &claims)?;

    tracing::debug!(length = token.compact().len(), "generated token");
    Ok(Generated { token, decoded })
}

fn check_round_trip(
    token: &Token,
    decoded: &DecodedToken,
    header: &HeaderSet,
    claims: &ClaimSet,
) -> Result<(), Error> {
    if &decoded.header != header
        || Base64JSON(&decoded.header).serialized_value()? != token.header()
    {
        return Err(Error::RoundTrip { segment: "header" });
    }
    if &decoded.claims != claims
        || Base64JSON(&decoded.claims).serialized_value()? != token.payload()
    {
        return Err(Error::RoundTrip { segment: "payload" });
    }
    Ok(())
}

/// Generate a token and write it to `out`, preceded by the verbose report
/// when `config.verbose` is set.
///
/// Nothing is written unless generation succeeds.
pub fn run<W: io::Write>(config: &Config, out: &mut W) -> Result<Token, Error> {
    let generated = generate(config, Utc::now())?;

    if config.verbose {
        let report = Report::new(config.algorithm, &generated.token)?;
        writeln!(out, "{}", report.formatted())?;
    } else {
        writeln!(out, "{}", generated.token)?;
    }
    out.flush()?;

    Ok(generated.token)
}
