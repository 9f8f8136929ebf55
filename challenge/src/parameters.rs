use serde::Serialize;

use crate::prelude::*;

/// Where to authenticate in order to access a protected resource, as advertised by the
/// resource's challenge.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct AuthenticationParameters {
    authorization_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<String>,
}

impl AuthenticationParameters {
    /// auth-param holding the authorization endpoint
    pub const AUTHORIZATION_URI: &'static str = "authorization_uri";
    /// auth-param holding the resource identifier
    pub const RESOURCE: &'static str = "resource";

    /// Authorization endpoint to redirect to for the next OAuth2 step
    pub fn authorization_uri(&self) -> &str {
        &self.authorization_uri
    }

    /// Identifier of the resource the challenge protects, when advertised
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Builds parameters from the value of a `WWW-Authenticate` header
    /// e.g. `Bearer authorization_uri="https://login.example.com/common/oauth2/authorize", resource="00000002-0000-0000-c000-000000000000"`
    pub fn try_from_header(challenge: &str, ctx: &LogContext) -> RustyChallengeResult<Self> {
        let span = ctx.span("AuthenticationParameters");
        let _enter = span.enter();

        if challenge.is_empty() {
            return Err(RustyChallengeError::InvalidArgument("Missing required parameter: challenge"));
        }
        let mut parameters = parse_challenge(challenge)?;

        let authorization_uri = parameters
            .remove(Self::AUTHORIZATION_URI)
            .filter(|uri| !uri.is_empty())
            .ok_or(RustyChallengeError::MissingAuthorizationUri)?;
        let resource = parameters.remove(Self::RESOURCE).filter(|r| !r.is_empty());

        tracing::debug!(%authorization_uri, ?resource, "Parsed authentication parameters from challenge");
        Ok(Self {
            authorization_uri,
            resource,
        })
    }

    /// Builds parameters from the `401 Unauthorized` response of a protected resource
    pub fn try_from_response(response: &impl ChallengeResponse, ctx: &LogContext) -> RustyChallengeResult<Self> {
        let status = response.status_code().ok_or(RustyChallengeError::InvalidArgument(
            "The response parameter does not have the expected HTTP status_code field",
        ))?;
        let headers = response
            .headers()
            .filter(|h| !h.is_empty())
            .ok_or(RustyChallengeError::InvalidArgument(
                "There were no headers found in the response",
            ))?;

        if status != http::StatusCode::UNAUTHORIZED.as_u16() {
            return Err(RustyChallengeError::UnexpectedStatus(status));
        }

        let challenge = headers
            .get(http::header::WWW_AUTHENTICATE)
            .filter(|v| !v.is_empty())
            .ok_or(RustyChallengeError::MissingChallengeHeader)?;
        let challenge =
            std::str::from_utf8(challenge.as_bytes()).map_err(|_| RustyChallengeError::UnreadableChallengeHeader)?;
        Self::try_from_header(challenge, ctx)
    }
}
