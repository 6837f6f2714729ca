//! JOSE Header ([RFC 7515][rfc7515])
//!
//! The header of a generated token is a JSON object built from the defaults
//! `{"typ": "JWT", "alg": <algorithm>}` with user supplied headers merged on
//! top. User headers may replace `typ` and add any other field, but may not
//! make `alg` disagree with the algorithm actually used to sign the token.
//!
//! [rfc7515]: https://tools.ietf.org/html/rfc7515

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::algorithms::AlgorithmIdentifier;
use crate::claims::Overrides;
use crate::error::{EntryKind, Error};
use crate::fmt;

/// The default value of the `typ` header.
pub const JWT_TYPE: &str = "JWT";

/// The JOSE header of a token.
///
/// Serializes as a plain JSON object with keys in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderSet(Map<String, Value>);

impl HeaderSet {
    /// The default header for a token signed with `algorithm`.
    pub fn new(algorithm: AlgorithmIdentifier) -> Self {
        let mut header = Map::new();
        header.insert("typ".to_owned(), Value::String(JWT_TYPE.to_owned()));
        header.insert("alg".to_owned(), Value::String(algorithm.to_string()));
        HeaderSet(header)
    }

    /// Build the header for `algorithm` from the defaults and user overrides.
    pub fn build(algorithm: AlgorithmIdentifier, overrides: &Overrides) -> Result<Self, Error> {
        let user = overrides.parse(EntryKind::Header)?;

        if let Some(alg) = user.get("alg") {
            if alg.as_str() != Some(algorithm.as_str()) {
                return Err(Error::AlgorithmMismatch {
                    header: alg.clone(),
                    algorithm,
                });
            }
        }

        let mut header = HeaderSet::new(algorithm);
        header.0.extend(user);

        tracing::debug!(headers = header.0.len(), "built header set");
        Ok(header)
    }

    /// The `alg` value of this header, if it names a supported algorithm.
    pub fn algorithm(&self) -> Option<AlgorithmIdentifier> {
        self.0
            .get("alg")
            .and_then(|alg| serde_json::from_value(alg.clone()).ok())
    }

    /// Look up a header value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for HeaderSet {
    fn from(value: Map<String, Value>) -> Self {
        HeaderSet(value)
    }
}

impl fmt::JWTFormat for HeaderSet {
    fn fmt<W: fmt::Write>(&self, f: &mut fmt::IndentWriter<'_, W>) -> fmt::Result {
        f.write_json(&self.0)
    }
}
