//! Command line interface.
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::algorithms::AlgorithmIdentifier;

/// Generate a signed JSON Web Token from claims, headers and a key.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "jwtgen", version, about, long_about = None, disable_help_flag = true)]
pub struct Cli {
    /// algorithm
    #[arg(short = 'a', long = "algorithm", value_enum)]
    pub algorithm: AlgorithmIdentifier,

    /// secret value for HMAC algorithm
    #[arg(short = 's', long = "secret", env = "JWTGEN_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// private key file (required for RS256 algorithm)
    #[arg(short = 'p', long = "private", value_name = "FILE")]
    pub private: Option<PathBuf>,

    /// claim in the form [key=value]
    #[arg(short = 'c', long = "claim", value_name = "KEY=VALUE", allow_hyphen_values = true)]
    pub claim: Vec<String>,

    /// JSON string containing claims
    #[arg(long = "claims", value_name = "JSON")]
    pub claims: Option<String>,

    /// header in the form [key=value]
    #[arg(short = 'h', long = "header", value_name = "KEY=VALUE", allow_hyphen_values = true)]
    pub header: Vec<String>,

    /// JSON string containing additional headers
    #[arg(long = "headers", value_name = "JSON")]
    pub headers: Option<String>,

    /// issued at (iat) in seconds from the UNIX epoch, negative values are relative to now [default: now]
    #[arg(short = 'i', long = "iat", allow_negative_numbers = true)]
    pub iat: Option<f64>,

    /// expiry date in seconds from issued at (iat) time, 0 expires at issue
    #[arg(short = 'e', long = "exp", allow_negative_numbers = true)]
    pub exp: Option<f64>,

    /// verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,
}
