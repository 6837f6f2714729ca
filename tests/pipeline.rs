use chrono::{TimeZone, Utc};
use rsa::pkcs1v15::{Signature, VerifyingKey};
use serde_json::json;
use sha2::Sha256;
use signature::Verifier;

use jwtgen::base64data::{decode_segment, Base64JSON};
use jwtgen::key::parse_private_key;
use jwtgen::{generate, AlgorithmIdentifier, Config, DecodedToken, Overrides, SigningMaterial};

const PKCS8: &str = include_str!("fixtures/rsa2048-pkcs8.pem");

fn rs256() -> (Config, VerifyingKey<Sha256>) {
    let key = parse_private_key(PKCS8).unwrap();
    let verifier = VerifyingKey::new(key.to_public_key());
    let config = Config::new(
        AlgorithmIdentifier::RS256,
        SigningMaterial::PrivateKey(Box::new(key)),
    );
    (config, verifier)
}

#[test]
fn rs256_signature_verifies_against_public_key() {
    let (mut config, verifier) = rs256();
    config.claims = Overrides::Entries(vec!["sub=alice".into(), "admin=true".into()]);
    config.exp = Some(600.0);

    let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let generated = generate(&config, now).unwrap();
    let token = generated.token;

    let signature = Signature::try_from(token.signature().as_ref()).unwrap();
    verifier
        .verify(token.message().as_bytes(), &signature)
        .unwrap();

    assert_eq!(
        serde_json::to_value(&generated.decoded.claims).unwrap(),
        json!({"admin": true, "exp": 1_700_000_600, "iat": 1_700_000_000, "sub": "alice"})
    );
}

#[test]
fn rs256_is_deterministic() {
    let (config, _) = rs256();
    let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let first = generate(&config, now).unwrap();
    let second = generate(&config, now).unwrap();
    assert_eq!(first.token, second.token);
}

#[test]
fn decoding_reproduces_encoded_bytes() {
    let mut config = Config::new(
        AlgorithmIdentifier::HS512,
        SigningMaterial::secret(Some("s3cr3t")).unwrap(),
    );
    config.claims = Overrides::Entries(vec![
        "ratio=0.25".into(),
        "nested={\"b\":[1,2,{\"c\":null}],\"a\":\"x\"}".into(),
        "unicode=héllo wörld".into(),
        "big=18446744073709551615".into(),
        "neg=-17".into(),
    ]);
    config.headers = Overrides::Entries(vec!["kid=2024-01".into()]);

    let now = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
    let generated = generate(&config, now).unwrap();
    let compact = generated.token.to_string();

    let decoded = DecodedToken::decode(&compact).unwrap();
    assert_eq!(decoded, generated.decoded);

    let mut segments = compact.split('.');
    let header = segments.next().unwrap();
    let payload = segments.next().unwrap();

    assert_eq!(
        Base64JSON(&decoded.header).serialized_value().unwrap(),
        header
    );
    assert_eq!(
        Base64JSON(&decoded.claims).serialized_value().unwrap(),
        payload
    );
    assert_eq!(
        Base64JSON(&decoded.claims).serialized_bytes().unwrap(),
        decode_segment(payload).unwrap()
    );

    assert_eq!(decoded.claims.get("nested"), Some(&json!({"a": "x", "b": [1, 2, {"c": null}]})));
    assert_eq!(decoded.claims.get("unicode"), Some(&json!("héllo wörld")));
    assert_eq!(decoded.claims.get("big"), Some(&json!(18_446_744_073_709_551_615u64)));
}

#[test]
fn hmac_variants_produce_expected_signature_lengths() {
    let now = Utc.timestamp_opt(1_479_420_268, 0).unwrap();
    for (algorithm, length) in [
        (AlgorithmIdentifier::HS256, 32),
        (AlgorithmIdentifier::HS384, 48),
        (AlgorithmIdentifier::HS512, 64),
    ] {
        let config = Config::new(algorithm, SigningMaterial::secret(Some("k")).unwrap());
        let generated = generate(&config, now).unwrap();
        assert_eq!(generated.token.signature().len(), length);
        assert_eq!(generated.decoded.header.algorithm(), Some(algorithm));
    }
}

#[test]
fn material_must_match_algorithm() {
    let config = Config::new(
        AlgorithmIdentifier::HS256,
        SigningMaterial::PrivateKey(Box::new(parse_private_key(PKCS8).unwrap())),
    );
    let err = generate(&config, Utc::now()).unwrap_err();
    assert_eq!(err.to_string(), "HS256 cannot sign with a RSA key");
}
