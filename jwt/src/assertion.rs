/// Signed JWT proving possession of the client certificate, to be sent as `client_assertion`
///
/// Specified in [RFC 7521 Section 4.2: Using Assertions for Client Authentication][1]
///
/// [1]: https://www.rfc-editor.org/rfc/rfc7521#section-4.2
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ClientAssertion(String);

impl ClientAssertion {
    /// Value of the `client_assertion_type` token request parameter
    pub const TYPE: &'static str = "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

    pub(crate) fn new(jwt: String) -> Self {
        Self(jwt)
    }

    /// JWS Compact Serialization of the assertion
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Token request form parameters authenticating the client
    pub fn form_params(&self) -> [(&'static str, &str); 2] {
        [("client_assertion_type", Self::TYPE), ("client_assertion", self.as_str())]
    }
}

impl From<ClientAssertion> for String {
    fn from(assertion: ClientAssertion) -> Self {
        assertion.0
    }
}

impl AsRef<str> for ClientAssertion {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
