use crate::prelude::*;

/// Authority issuing tokens, as far as client assertions are concerned: the token endpoint
/// is the audience of every assertion.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Authority {
    url: url::Url,
    token_endpoint: url::Url,
}

impl Authority {
    /// Path of the token endpoint below an authority
    pub const TOKEN_ENDPOINT_PATH: &'static str = "/oauth2/token";

    /// Authority whose token endpoint lives at [Self::TOKEN_ENDPOINT_PATH] below it
    /// e.g. `https://login.example.com/mytenant.com` => `https://login.example.com/mytenant.com/oauth2/token`
    pub fn try_new(authority: &str) -> RustyAssertionResult<Self> {
        let url = url::Url::parse(authority)?;
        if url.cannot_be_a_base() {
            return Err(RustyAssertionError::InvalidAuthority(url, "it cannot be a base"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(RustyAssertionError::InvalidAuthority(
                url,
                "it cannot contain query or fragment",
            ));
        }
        let path = format!("{}{}", url.path().trim_end_matches('/'), Self::TOKEN_ENDPOINT_PATH);
        let mut token_endpoint = url.clone();
        token_endpoint.set_path(&path);
        Ok(Self { url, token_endpoint })
    }

    /// Authority with an explicitly known token endpoint
    pub fn with_token_endpoint(authority: &str, token_endpoint: &str) -> RustyAssertionResult<Self> {
        Ok(Self {
            url: url::Url::parse(authority)?,
            token_endpoint: url::Url::parse(token_endpoint)?,
        })
    }

    /// Authority URL
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Token endpoint URL, the 'aud' of client assertions
    pub fn token_endpoint(&self) -> &url::Url {
        &self.token_endpoint
    }
}
