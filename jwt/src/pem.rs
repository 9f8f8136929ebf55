use crate::prelude::*;

/// Private key of the client certificate as an UTF-8 String in the PEM (Privacy-Enhanced Mail) format
///
/// Specified in [RFC 7468: Textual Encodings of PKIX, PKCS, and CMS Structures][1]
///
/// Neither [Debug] nor any error carries the key itself.
///
/// [1]: https://tools.ietf.org/html/rfc7468
#[derive(Clone, Eq, PartialEq)]
pub struct Pem(String);

impl From<String> for Pem {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Pem {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl<'a> TryFrom<&'a [u8]> for Pem {
    type Error = RustyAssertionError;

    fn try_from(value: &'a [u8]) -> RustyAssertionResult<Self> {
        let pem = core::str::from_utf8(value).map_err(|_| RustyAssertionError::InvalidCertificate("not UTF-8"))?;
        Ok(pem.into())
    }
}

impl std::ops::Deref for Pem {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for Pem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Pem(**redacted**)")
    }
}
