//! Builds self-signed JWT client assertions which let a confidential client authenticate to a
//! token endpoint with a certificate rather than a shared secret.
//!
//! See [RFC 7523 Section 2.2: Using JWTs for Client Authentication][1]
//!
//! [1]: https://www.rfc-editor.org/rfc/rfc7523#section-2.2
#![deny(missing_docs)]
#![allow(clippy::single_component_path_imports)]

#[cfg(test)]
use rstest_reuse;

#[cfg(test)]
#[macro_use]
pub mod test_utils;
// both imports above have to be defined at the beginning of the crate for rstest to work

mod assertion;
mod authority;
mod config;
mod error;
mod log;
mod pem;
mod self_signed;
mod signer;
mod thumbprint;

/// Prelude
pub mod prelude {
    pub use super::assertion::ClientAssertion;
    pub use super::authority::Authority;
    pub use super::config::SelfSignedJwtConfig;
    pub use super::error::{RustyAssertionError, RustyAssertionResult};
    pub use super::log::LogContext;
    pub use super::pem::Pem;
    pub use super::self_signed::SelfSignedJwt;
    pub use super::signer::{JwtSigner, Rs256Signer};
    pub use super::thumbprint::Thumbprint;
}

/// Generates a new jti
pub fn new_jti() -> String {
    uuid::Uuid::new_v4().to_string()
}
