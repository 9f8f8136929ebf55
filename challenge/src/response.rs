/// What is needed from an HTTP response to read a challenge out of it
pub trait ChallengeResponse {
    /// HTTP status code, if known
    fn status_code(&self) -> Option<u16>;

    /// Response headers, if any were received
    fn headers(&self) -> Option<&http::HeaderMap>;
}

impl<B> ChallengeResponse for http::Response<B> {
    fn status_code(&self) -> Option<u16> {
        Some(self.status().as_u16())
    }

    fn headers(&self) -> Option<&http::HeaderMap> {
        Some(http::Response::headers(self))
    }
}

impl ChallengeResponse for reqwest::Response {
    fn status_code(&self) -> Option<u16> {
        Some(self.status().as_u16())
    }

    fn headers(&self) -> Option<&http::HeaderMap> {
        Some(reqwest::Response::headers(self))
    }
}
