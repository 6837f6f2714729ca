// Generate a token the way the command line tool does, without going
// through the command line.
use jwtgen::{AlgorithmIdentifier, Config, JWTFormat, Overrides, SigningMaterial};

// The token is printed along with the verbose report.
use jwtgen::report::Report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Any RSA private key in PKCS#8 or PKCS#1 PEM format will do. This one
    // is the test fixture. Provide your own key instead!
    let key = jwtgen::key::parse_private_key(include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/rsa2048-pkcs8.pem"
    )))?;

    // We will sign the JWT with the RS256 algorithm: RSA with SHA-256.
    let mut config = Config::new(
        AlgorithmIdentifier::RS256,
        SigningMaterial::PrivateKey(Box::new(key)),
    );

    // Claim values are parsed as JSON where possible, so `admin` is a
    // boolean and `roles` is an array. Anything else stays a string.
    config.claims = Overrides::Entries(vec![
        "sub=1234567890".into(),
        "name=John Doe".into(),
        "admin=true".into(),
        r#"roles=["reader","writer"]"#.into(),
    ]);
    config.headers = Overrides::Entries(vec!["kid=fixture".into()]);

    // Expire one hour after the token was issued.
    config.exp = Some(3600.0);

    let generated = jwtgen::generate(&config, chrono::Utc::now())?;
    println!("{}", generated.token.compact());
    println!();

    let report = Report::new(config.algorithm, &generated.token)?;
    println!("{}", report.formatted());

    Ok(())
}
