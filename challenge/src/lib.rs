//! Discovers where to authenticate from the `401 Unauthorized` challenge of a protected resource.
//!
//! See [RFC 6750 Section 3: The WWW-Authenticate Response Header Field][1]
//!
//! [1]: https://www.rfc-editor.org/rfc/rfc6750#section-3
#![deny(missing_docs)]

mod error;
mod fetch;
mod parameters;
mod parser;
mod request;
mod response;

/// Prelude
pub mod prelude {
    pub use super::error::{RustyChallengeError, RustyChallengeResult};
    pub use super::fetch::{ChallengeUrl, fetch_authentication_parameters};
    pub use super::parameters::AuthenticationParameters;
    pub use super::parser::parse_challenge;
    pub use super::request::ClientRequestHeaders;
    pub use super::response::ChallengeResponse;
    pub use rusty_adal_jwt::prelude::LogContext;
}
