//! Resolution of the `iat` and `exp` claims as JWT NumericDate values.
//!
//! A NumericDate is a whole number of seconds since the UNIX epoch.
use chrono::{DateTime, Utc};

use crate::error::Error;

/// The registered time claims of a token, in seconds since the UNIX epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamps {
    /// Value of the `iat` claim.
    pub issued_at: i64,

    /// Value of the `exp` claim, if the token expires.
    pub expiration: Option<i64>,
}

impl Timestamps {
    /// Resolve `iat` and `exp` against the given current time.
    ///
    /// A negative `iat` is an offset from `now`, anything else is an absolute
    /// timestamp. `exp` is an offset from the resolved `iat`. Both are floored.
    pub fn resolve(
        iat: Option<f64>,
        exp: Option<f64>,
        now: DateTime<Utc>,
    ) -> Result<Self, Error> {
        let issued_at = resolve_issued_at(iat, now)?;
        let expiration = resolve_expiration(issued_at, exp)?;
        Ok(Timestamps {
            issued_at,
            expiration,
        })
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidTimestamp { name, value })
    }
}

// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
fn whole_seconds(name: &'static str, value: f64) -> Result<i64, Error> {
    let seconds = value.floor();
    if seconds >= i64::MIN as f64 && seconds < i64::MAX as f64 {
        Ok(seconds as i64)
    } else {
        Err(Error::InvalidTimestamp { name, value })
    }
}

fn epoch_seconds(now: DateTime<Utc>) -> f64 {
    now.timestamp_millis() as f64 / 1000.0
}

/// Compute the `iat` claim. `None` means "now".
pub fn resolve_issued_at(iat: Option<f64>, now: DateTime<Utc>) -> Result<i64, Error> {
    match iat {
        None => Ok(now.timestamp()),
        Some(value) if finite("iat", value)? < 0.0 => {
            whole_seconds("iat", epoch_seconds(now) + value)
        }
        Some(value) => whole_seconds("iat", value),
    }
}

/// Compute the `exp` claim from the resolved `iat`. No offset means no expiry.
pub fn resolve_expiration(issued_at: i64, offset: Option<f64>) -> Result<Option<i64>, Error> {
    match offset {
        None => Ok(None),
        Some(value) => {
            let offset = whole_seconds("exp", finite("exp", value)?)?;
            issued_at
                .checked_add(offset)
                .map(Some)
                .ok_or(Error::InvalidTimestamp { name: "exp", value })
        }
    }
}
