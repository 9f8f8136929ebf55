use base64::Engine;

use crate::prelude::*;

/// Certificate fingerprint identifying the signing certificate to the relying party
///
/// Accepted as hex, optionally with ':' or ' ' separators and in any case, and normalized to
/// contiguous lowercase hex. Only 128-bit and 160-bit digests are recognized.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Thumbprint(String);

impl Thumbprint {
    /// Hex length of a 128-bit digest
    pub const HEX_LEN_128: usize = 128 / 8 * 2;
    /// Hex length of a 160-bit digest
    pub const HEX_LEN_160: usize = 160 / 8 * 2;

    /// Normalized lowercase hex form
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Raw digest bytes
    pub fn to_bytes(&self) -> RustyAssertionResult<Vec<u8>> {
        Ok(hex::decode(&self.0)?)
    }

    /// JWT header 'x5t': base64url encoding of the digest without padding
    ///
    /// Specified in [RFC 7515 Section 4.1.7: JSON Web Signature (JWS)][1]
    ///
    /// [1]: https://www.rfc-editor.org/rfc/rfc7515#section-4.1.7
    pub fn to_x5t(&self) -> RustyAssertionResult<String> {
        Ok(base64::prelude::BASE64_URL_SAFE_NO_PAD.encode(self.to_bytes()?))
    }

    fn normalize(raw: &str) -> String {
        raw.chars()
            .filter(|c| *c != ':' && *c != ' ')
            .flat_map(char::to_lowercase)
            .collect()
    }
}

impl TryFrom<&str> for Thumbprint {
    type Error = RustyAssertionError;

    fn try_from(raw: &str) -> RustyAssertionResult<Self> {
        let canonical = Self::normalize(raw);
        let known_len = [Self::HEX_LEN_128, Self::HEX_LEN_160].contains(&canonical.len());
        let is_hex = canonical.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if !known_len || !is_hex {
            return Err(RustyAssertionError::InvalidThumbprint);
        }
        Ok(Self(canonical))
    }
}

impl TryFrom<String> for Thumbprint {
    type Error = RustyAssertionError;

    fn try_from(raw: String) -> RustyAssertionResult<Self> {
        raw.as_str().try_into()
    }
}

impl std::fmt::Display for Thumbprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
