use jwt_simple::prelude::*;

use crate::prelude::*;

/// Signer returning a canned token whatever it is asked to sign
pub struct FixedSigner(pub &'static str);

impl JwtSigner for FixedSigner {
    fn sign(&self, _: JWTHeader, _: JWTClaims<NoCustomClaims>, _: &Pem) -> RustyAssertionResult<String> {
        Ok(self.0.to_string())
    }
}

/// Signer which must never be reached
pub struct UnreachableSigner;

impl JwtSigner for UnreachableSigner {
    fn sign(&self, _: JWTHeader, _: JWTClaims<NoCustomClaims>, _: &Pem) -> RustyAssertionResult<String> {
        panic!("signing should not have been attempted")
    }
}
