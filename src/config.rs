//! Validated configuration for a single invocation.
//!
//! A [`Config`] is built once from the parsed command line. Building it
//! checks that the signing material matches the algorithm and loads the
//! private key file, so everything downstream works from plain values.

use crate::algorithms::AlgorithmIdentifier;
use crate::claims::Overrides;
use crate::cli::Cli;
use crate::error::Error;
use crate::key::SigningMaterial;

/// Everything needed to generate one token.
#[derive(Debug, Clone)]
pub struct Config {
    /// Signing algorithm.
    pub algorithm: AlgorithmIdentifier,

    /// Secret or private key, matching `algorithm`.
    pub material: SigningMaterial,

    /// User supplied claims.
    pub claims: Overrides,

    /// User supplied headers.
    pub headers: Overrides,

    /// Raw `iat` option.
    pub iat: Option<f64>,

    /// Raw `exp` offset.
    pub exp: Option<f64>,

    /// Print the verbose report before the token.
    pub verbose: bool,
}

impl Config {
    /// Configuration with no overrides, signing with `material`.
    pub fn new(algorithm: AlgorithmIdentifier, material: SigningMaterial) -> Self {
        Config {
            algorithm,
            material,
            claims: Overrides::Empty,
            headers: Overrides::Empty,
            iat: None,
            exp: None,
            verbose: false,
        }
    }
}

impl TryFrom<Cli> for Config {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let algorithm = cli.algorithm;
        tracing::debug!(%algorithm, "validating algorithm inputs");

        let material = if algorithm.is_hmac() {
            SigningMaterial::secret(cli.secret.as_deref())?
        } else {
            SigningMaterial::private_key(cli.private.as_deref())?
        };

        Ok(Config {
            algorithm,
            material,
            claims: Overrides::new(cli.claim, cli.claims),
            headers: Overrides::new(cli.header, cli.headers),
            iat: cli.iat,
            exp: cli.exp,
            verbose: cli.verbose,
        })
    }
}
