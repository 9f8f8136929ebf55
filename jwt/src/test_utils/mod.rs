pub use rstest::*;
pub use rstest_reuse::{self, *};

pub use signer::*;
pub use utils::*;

use crate::prelude::*;

pub mod signer;
pub mod utils;

/// RSA 2048 private key of the test certificate, PKCS#8
pub const CERT_SK_PEM: &str = include_str!("../../tests/resources/rsa-2048-sk.pem");
/// RSA 2048 public key of the test certificate
pub const CERT_PK_PEM: &str = include_str!("../../tests/resources/rsa-2048-pk.pem");
/// `openssl x509 -noout -fingerprint -sha1` of the self-signed certificate issued for [CERT_SK_PEM]
/// (`openssl req -new -x509 -key rsa-2048-sk.pem`), only its fingerprints are kept
pub const CERT_SHA1_FINGERPRINT: &str = "BD:D9:AC:87:50:D2:2F:1A:B4:33:EB:F5:58:D0:47:53:A5:CF:5B:A3";
/// `openssl x509 -noout -fingerprint -md5` of the same certificate
pub const CERT_MD5_FINGERPRINT: &str = "A4:9D:D4:8A:B2:C2:3D:10:E7:25:4B:D4:77:04:87:0A";
/// [CERT_SHA1_FINGERPRINT] digest bytes, base64url without padding
pub const CERT_SHA1_X5T: &str = "vdmsh1DSLxq0M-v1WNBHU6XPW6M";
/// [CERT_MD5_FINGERPRINT] digest bytes, base64url without padding
pub const CERT_MD5_X5T: &str = "pJ3UirLCPRDnJUvUdwSHCg";

pub const CLIENT_ID: &str = "d6835713-b745-48d1-bb62-7a8248477d35";
pub const AUTHORITY: &str = "https://login.example.com/naturalcauses.com";
pub const TOKEN_ENDPOINT: &str = "https://login.example.com/naturalcauses.com/oauth2/token";

#[template]
#[export]
#[rstest]
#[case::sha1_colons("BD:D9:AC:87:50:D2:2F:1A:B4:33:EB:F5:58:D0:47:53:A5:CF:5B:A3")]
#[case::sha1_lower("bdd9ac8750d22f1ab433ebf558d04753a5cf5ba3")]
#[case::sha1_upper("BDD9AC8750D22F1AB433EBF558D04753A5CF5BA3")]
#[case::sha1_spaces("bd d9 ac 87 50 d2 2f 1a b4 33 eb f5 58 d0 47 53 a5 cf 5b a3")]
#[case::md5_colons("A4:9D:D4:8A:B2:C2:3D:10:E7:25:4B:D4:77:04:87:0A")]
#[case::md5_lower("a49dd48ab2c23d10e7254bd47704870a")]
#[case::md5_mixed_separators("a4:9d d4:8a b2:c2 3d:10 e7:25 4b:d4 77:04 87:0a")]
#[allow(non_snake_case)]
pub fn valid_thumbprints(#[case] raw: &str) {}

#[template]
#[export]
#[rstest]
#[case::empty("")]
#[case::only_separators(": : :")]
#[case::too_short("bdd9ac8750d22f1ab433ebf558d04753a5cf5b")]
#[case::too_long("bdd9ac8750d22f1ab433ebf558d04753a5cf5ba3a3")]
#[case::between_lengths("a49dd48ab2c23d10e7254bd47704870aff")]
#[case::sha256("9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08")]
#[case::non_hex_sha1("zdd9ac8750d22f1ab433ebf558d04753a5cf5ba3")]
#[case::non_hex_md5("a49dd48ab2c23d10e7254bd47704870x")]
#[case::dash_separators("a4-9d-d4-8a-b2-c2-3d-10-e7-25-4b-d4-77-04-87-0a")]
#[case::tab_separators("a49dd48a\tb2c23d10e7254bd47704870a")]
#[case::unicode_digits("a49dd48ab2c23d10e7254bd47704870١")]
#[allow(non_snake_case)]
pub fn invalid_thumbprints(#[case] raw: &str) {}

pub fn authority() -> Authority {
    Authority::try_new(AUTHORITY).unwrap()
}

pub fn certificate() -> Pem {
    CERT_SK_PEM.into()
}

pub fn builder() -> SelfSignedJwt {
    SelfSignedJwt::new(LogContext::default(), &authority(), CLIENT_ID)
}
