use http::{HeaderMap, HeaderName, HeaderValue};

use crate::prelude::*;

/// Headers identifying this client and correlating a request with its [LogContext]
#[derive(Debug, Clone)]
pub struct ClientRequestHeaders(HeaderMap);

impl ClientRequestHeaders {
    /// Correlation id of the request
    pub const CLIENT_REQUEST_ID: &'static str = "client-request-id";
    /// Asks the server to echo [Self::CLIENT_REQUEST_ID] back
    pub const RETURN_CLIENT_REQUEST_ID: &'static str = "return-client-request-id";
    /// Client library name
    pub const CLIENT_SKU: &'static str = "x-client-sku";
    /// Client library version
    pub const CLIENT_VERSION: &'static str = "x-client-ver";

    const SKU: &'static str = "rusty-adal";

    /// Headers for a request made on behalf of `ctx`
    pub fn new(ctx: &LogContext) -> Self {
        let mut headers = HeaderMap::with_capacity(4);
        let correlation_id = ctx.correlation_id().hyphenated().to_string();
        // a hyphenated uuid is always a valid header value
        if let Ok(correlation_id) = HeaderValue::from_str(&correlation_id) {
            headers.insert(HeaderName::from_static(Self::CLIENT_REQUEST_ID), correlation_id);
        }
        headers.insert(
            HeaderName::from_static(Self::RETURN_CLIENT_REQUEST_ID),
            HeaderValue::from_static("true"),
        );
        headers.insert(HeaderName::from_static(Self::CLIENT_SKU), HeaderValue::from_static(Self::SKU));
        headers.insert(
            HeaderName::from_static(Self::CLIENT_VERSION),
            HeaderValue::from_static(env!("CARGO_PKG_VERSION")),
        );
        Self(headers)
    }

    /// Underlying header map
    pub fn into_inner(self) -> HeaderMap {
        self.0
    }
}

impl From<ClientRequestHeaders> for HeaderMap {
    fn from(headers: ClientRequestHeaders) -> Self {
        headers.into_inner()
    }
}
