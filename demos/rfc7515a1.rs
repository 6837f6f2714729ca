//! Reproduce the HS256 signature from RFC 7515, Appendix A.1.
use base64ct::{Base64UrlUnpadded, Encoding};
use sha2::Sha256;

use jwtgen::algorithms::hmac::Hmac;
use jwtgen::algorithms::SigningAlgorithm;
use jwtgen::key::HmacKey;
use jwtgen::report::DecodedToken;
use jwtgen::{JWTFormat, SignatureBytes, Token};

// The symmetric key, as the `k` member of the JWK in the RFC.
const KEY: &str = "AyM1SysPpbyDfgZld3umj1qzKObwVMkoqQ-EstJQLr_T-1qS0gZH75aKtMN3Yj0iPS4hcgUuTwjAzZr1Z9CAow";

// The header and payload are not canonical JSON (they contain CRLF line
// breaks), so the RFC's own encoded segments are signed as they are.
const HEADER: &str = "eyJ0eXAiOiJKV1QiLA0KICJhbGciOiJIUzI1NiJ9";
const PAYLOAD: &str =
    "eyJpc3MiOiJqb2UiLA0KICJleHAiOjEzMDA4MTkzODAsDQogImh0dHA6Ly9leGFtcGxlLmNvbS9pc19yb290Ijp0cnVlfQ";

const EXPECTED: &str = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = HmacKey::from(Base64UrlUnpadded::decode_vec(KEY)?);
    let algorithm: Hmac<Sha256> = Hmac::new(key);

    let signature = SignatureBytes::from(algorithm.sign(HEADER, PAYLOAD)?.as_slice());
    assert_eq!(signature.to_b64url(), EXPECTED);

    let token: Token = format!("{HEADER}.{PAYLOAD}.{}", signature.to_b64url()).parse()?;
    println!("{token}");

    let decoded = DecodedToken::from_token(&token)?;
    println!("{}", decoded.formatted());

    Ok(())
}
