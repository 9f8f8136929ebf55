/// Wrapper over a [Result] with a [RustyChallengeError] error
pub type RustyChallengeResult<T> = Result<T, RustyChallengeError>;

/// All errors which may occur while deriving
/// [crate::prelude::AuthenticationParameters] from a challenge
#[derive(Debug, thiserror::Error)]
pub enum RustyChallengeError {
    /// This library has been used the wrong way by users
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The header does not follow the RFC 6750 Bearer challenge grammar
    #[error("The challenge is not parseable as an RFC6750 OAuth2 challenge")]
    NotParseable,
    /// Only a '401 Unauthorized' carries a challenge
    #[error(
        "The response status code does not correspond to an OAuth challenge. \
        The statusCode is expected to be 401 but is: {0}"
    )]
    UnexpectedStatus(u16),
    /// A '401 Unauthorized' without any usable challenge
    #[error(
        "The response does not contain a WWW-Authenticate header that can be used to determine \
        the authority_uri and resource"
    )]
    MissingChallengeHeader,
    /// The challenge header is present but its value is not UTF-8 text
    #[error("The WWW-Authenticate header of the response is not valid UTF-8 text")]
    UnreadableChallengeHeader,
    /// The challenge does not say where to authenticate
    #[error("Could not find 'authorization_uri' in challenge header")]
    MissingAuthorizationUri,
    /// Invalid URL
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
    /// HTTP transport error
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
