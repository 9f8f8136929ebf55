/// Wrapper over a [Result] with a [RustyAssertionError] error
pub type RustyAssertionResult<T> = Result<T, RustyAssertionError>;

/// All errors which [crate::prelude::SelfSignedJwt] might throw
#[derive(Debug, thiserror::Error)]
pub enum RustyAssertionError {
    /// JWT error from `jwt-simple` crate
    #[error(transparent)]
    JwtSimpleError(#[from] jwt_simple::Error),
    /// Invalid URL
    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),
    /// Hex decoding error
    #[error(transparent)]
    HexError(#[from] hex::FromHexError),
    /// Certificate thumbprint is neither a 128-bit nor a 160-bit hex digest
    #[error("The thumbprint does not match a known format")]
    InvalidThumbprint,
    /// Signing produced a token without a signature segment
    #[error("Failed to sign JWT. This is most likely due to an invalid certificate")]
    InvalidSignature,
    /// The supplied private key could not be loaded for signing
    #[error("The certificate private key could not be loaded because {0}")]
    InvalidCertificate(&'static str),
    /// Assertion lifetime would not leave 'exp' after 'nbf', or either falls outside NumericDate range
    #[error("The assertion lifetime must be at least one minute and end within the supported time range")]
    InvalidLifetime,
    /// The authority URL cannot carry a token endpoint
    #[error("Invalid authority '{0}' because {1}")]
    InvalidAuthority(url::Url, &'static str),
}
