use jwt_simple::prelude::*;

use crate::prelude::*;

/// Signing capability turning a header and claims into a JWS Compact Serialization
/// (`header.claims.signature`, each part base64url encoded).
pub trait JwtSigner: Send + Sync {
    /// Signs `claims` under `header` with the private key of `certificate`
    fn sign(&self, header: JWTHeader, claims: JWTClaims<NoCustomClaims>, certificate: &Pem)
    -> RustyAssertionResult<String>;
}

/// RSASSA-PKCS1-v1_5 using SHA-256
///
/// Specified in [RFC 7518 Section 3.3: Digital Signature with RSASSA-PKCS1-v1_5][1]
///
/// [1]: https://www.rfc-editor.org/rfc/rfc7518#section-3.3
#[derive(Debug, Default, Copy, Clone)]
pub struct Rs256Signer;

impl Rs256Signer {
    /// JWT header 'alg'
    pub const ALG: &'static str = "RS256";
}

impl JwtSigner for Rs256Signer {
    fn sign(
        &self,
        header: JWTHeader,
        claims: JWTClaims<NoCustomClaims>,
        certificate: &Pem,
    ) -> RustyAssertionResult<String> {
        let kp = RS256KeyPair::from_pem(certificate.as_str())
            .map_err(|_| RustyAssertionError::InvalidCertificate("it is not an RSA private key in PEM format"))?;
        Ok(kp.sign_with_header(Some(claims), header)?)
    }
}
