use tracing::Instrument;

use crate::prelude::*;

/// Anything which can designate the protected resource to challenge
pub trait ChallengeUrl {
    /// Absolute http(s) URL of the resource
    fn challenge_url(self) -> RustyChallengeResult<url::Url>;
}

impl ChallengeUrl for url::Url {
    fn challenge_url(self) -> RustyChallengeResult<url::Url> {
        match self.scheme() {
            "http" | "https" => Ok(self),
            _ => Err(RustyChallengeError::InvalidArgument(
                "The challenge url must use the http or https scheme",
            )),
        }
    }
}

impl ChallengeUrl for &url::Url {
    fn challenge_url(self) -> RustyChallengeResult<url::Url> {
        self.clone().challenge_url()
    }
}

impl ChallengeUrl for &str {
    fn challenge_url(self) -> RustyChallengeResult<url::Url> {
        url::Url::parse(self)?.challenge_url()
    }
}

impl ChallengeUrl for String {
    fn challenge_url(self) -> RustyChallengeResult<url::Url> {
        self.as_str().challenge_url()
    }
}

/// Sends an unauthenticated `GET` to a protected resource and reads the
/// [AuthenticationParameters] out of its `401 Unauthorized` challenge.
///
/// Resolves exactly once, either with the parameters or with the first error met. Timeouts
/// are those of `client`, nothing is retried.
///
/// # Arguments
/// * `client` - HTTP client used to reach the resource
/// * `url` - the protected resource ex: `https://graph.example.com/v1/me`
/// * `ctx` - correlation context, sent as `client-request-id`
pub async fn fetch_authentication_parameters(
    client: &reqwest::Client,
    url: impl ChallengeUrl,
    ctx: &LogContext,
) -> RustyChallengeResult<AuthenticationParameters> {
    let span = ctx.span("AuthenticationParameters");
    async move {
        let url = url.challenge_url()?;
        tracing::debug!(%url, "Attempting to retrieve authentication parameters");

        let response = client
            .get(url)
            .headers(ClientRequestHeaders::new(ctx).into())
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Authentication parameters http get failed"))?;

        AuthenticationParameters::try_from_response(&response, ctx)
            .inspect_err(|e| tracing::error!(error = %e, "Unable to parse response in to authentication parameters"))
    }
    .instrument(span)
    .await
}
