//! Claims for a JWT.
//!
//! The claim set is a JSON object. It starts from the registered time
//! claims (`iat` and optionally `exp`, see [crate::numeric_date]) and is
//! extended with user supplied claims, which win on collision.
//!
//! User claims arrive either as a list of `key=value` entries, each value
//! typed by trying to parse it as JSON, or as one JSON object which replaces
//! the entry list entirely. The same rules apply to headers, see [crate::jose].
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{EntryKind, Error};
use crate::numeric_date::Timestamps;

use crate::fmt;

/// User supplied entries for a claim set or header set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overrides {
    /// No user entries at all.
    #[default]
    Empty,

    /// A list of `key=value` strings.
    Entries(Vec<String>),

    /// A raw JSON object which is the complete set of user entries.
    Object(String),
}

impl Overrides {
    /// Choose between an entry list and a whole-object override.
    ///
    /// A non-empty object takes total precedence, and the entries are ignored.
    pub fn new(entries: Vec<String>, object: Option<String>) -> Self {
        match object {
            Some(object) if !object.trim().is_empty() => Overrides::Object(object),
            _ if entries.is_empty() => Overrides::Empty,
            _ => Overrides::Entries(entries),
        }
    }

    /// Parse the overrides into a JSON map.
    pub fn parse(&self, kind: EntryKind) -> Result<Map<String, Value>, Error> {
        match self {
            Overrides::Empty => Ok(Map::new()),
            Overrides::Entries(entries) => entries
                .iter()
                .map(|raw| parse_entry(kind, raw))
                .collect(),
            Overrides::Object(json) => parse_object(kind, json),
        }
    }
}

/// Parse a single `key=value` entry.
///
/// The entry must contain exactly one `=`. Key and value are trimmed. The
/// value is parsed as JSON when possible (`n=1`, `ok=true`, `roles=["a"]`),
/// otherwise it is kept as a string.
pub fn parse_entry(kind: EntryKind, raw: &str) -> Result<(String, Value), Error> {
    let invalid = || Error::InvalidEntry {
        kind,
        raw: raw.to_owned(),
    };

    let (key, value) = raw.split_once('=').ok_or_else(invalid)?;
    if value.contains('=') {
        return Err(invalid());
    }

    let key = key.trim();
    if key.is_empty() {
        return Err(invalid());
    }

    let value = value.trim();
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));

    Ok((key.to_owned(), value))
}

/// Parse a whole-object override.
pub fn parse_object(kind: EntryKind, json: &str) -> Result<Map<String, Value>, Error> {
    match serde_json::from_str(json) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(Error::NotAnObject { kind }),
        Err(source) => Err(Error::InvalidJson { kind, source }),
    }
}

/// The claims for the JWS.
///
/// Serializes as a plain JSON object with keys in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(Map<String, Value>);

impl ClaimSet {
    /// Build the claim set from the resolved timestamps and user overrides.
    pub fn build(timestamps: Timestamps, overrides: &Overrides) -> Result<Self, Error> {
        let user = overrides.parse(EntryKind::Claim)?;

        let mut claims = ClaimSet::default();
        claims.insert("iat", timestamps.issued_at.into());
        if let Some(expiration) = timestamps.expiration {
            claims.insert("exp", expiration.into());
        }
        claims.0.extend(user);

        tracing::debug!(claims = claims.len(), "built claim set");
        Ok(claims)
    }

    /// Set a claim, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Look up a claim.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of claims.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no claims.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(value: Map<String, Value>) -> Self {
        ClaimSet(value)
    }
}

impl fmt::JWTFormat for ClaimSet {
    fn fmt<W: fmt::Write>(&self, f: &mut fmt::IndentWriter<'_, W>) -> fmt::Result {
        f.write_json(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn timestamps() -> Timestamps {
        Timestamps {
            issued_at: 1_479_420_268,
            expiration: None,
        }
    }

    #[test]
    fn entry_values_are_json_typed() {
        let cases = [
            ("n=1", json!(1)),
            ("ok=true", json!(true)),
            ("roles=[\"A\",\"B\"]", json!(["A", "B"])),
            ("obj={\"a\":1}", json!({"a": 1})),
            ("nothing=null", json!(null)),
            ("name=joe", json!("joe")),
            ("quoted=\"42\"", json!("42")),
            ("empty=", json!("")),
        ];

        for (raw, expected) in cases {
            let (_, value) = parse_entry(EntryKind::Claim, raw).unwrap();
            assert_eq!(value, expected, "entry {raw}");
        }
    }

    #[test]
    fn entries_are_trimmed() {
        let (key, value) = parse_entry(EntryKind::Claim, "  iss =  some issuer  ").unwrap();
        assert_eq!(key, "iss");
        assert_eq!(value, json!("some issuer"));
    }

    #[test]
    fn entry_needs_exactly_one_equals() {
        for raw in ["noEqualsSign", "a=b=c", "=value", "  =x"] {
            let err = parse_entry(EntryKind::Claim, raw).unwrap_err();
            assert_eq!(err.to_string(), format!("invalid claim: {raw}"));
        }
    }

    #[test]
    fn object_replaces_entries() {
        let overrides = Overrides::new(
            vec!["sub=ignored".into()],
            Some(r#"{"iss":"user123"}"#.into()),
        );
        let claims = ClaimSet::build(timestamps(), &overrides).unwrap();
        assert_eq!(
            serde_json::to_value(&claims).unwrap(),
            json!({"iat": 1_479_420_268, "iss": "user123"})
        );
    }

    #[test]
    fn blank_object_falls_back_to_entries() {
        let overrides = Overrides::new(vec!["sub=me".into()], Some("  ".into()));
        assert_eq!(overrides, Overrides::Entries(vec!["sub=me".into()]));
        assert_eq!(Overrides::new(vec![], None), Overrides::Empty);
    }

    #[test]
    fn object_must_be_an_object() {
        let overrides = Overrides::Object("[1, 2]".into());
        assert!(matches!(
            overrides.parse(EntryKind::Claim),
            Err(Error::NotAnObject {
                kind: EntryKind::Claim
            })
        ));

        let overrides = Overrides::Object("{nope".into());
        let err = overrides.parse(EntryKind::Claim).unwrap_err();
        assert!(err.to_string().starts_with("invalid claims JSON"));
    }

    #[test]
    fn timestamps_are_defaults() {
        let claims = ClaimSet::build(
            Timestamps {
                issued_at: 100,
                expiration: Some(160),
            },
            &Overrides::Entries(vec!["sub=me".into()]),
        )
        .unwrap();
        assert_eq!(claims.get("iat"), Some(&json!(100)));
        assert_eq!(claims.get("exp"), Some(&json!(160)));
        assert_eq!(claims.get("sub"), Some(&json!("me")));
        assert_eq!(claims.len(), 3);
    }

    #[test]
    fn user_claims_win_on_collision() {
        let claims = ClaimSet::build(
            timestamps(),
            &Overrides::Entries(vec!["iat=5".into()]),
        )
        .unwrap();
        assert_eq!(claims.get("iat"), Some(&json!(5)));
    }

    #[test]
    fn later_entries_replace_earlier_ones() {
        let claims = ClaimSet::build(
            timestamps(),
            &Overrides::Entries(vec!["sub=a".into(), "sub=b".into()]),
        )
        .unwrap();
        assert_eq!(claims.get("sub"), Some(&json!("b")));
    }

    #[test]
    fn serializes_with_sorted_keys() {
        let claims = ClaimSet::build(
            timestamps(),
            &Overrides::Entries(vec!["z=1".into(), "a=2".into()]),
        )
        .unwrap();
        assert_eq!(
            serde_json::to_string(&claims).unwrap(),
            r#"{"a":2,"iat":1479420268,"z":1}"#
        );
    }
}
