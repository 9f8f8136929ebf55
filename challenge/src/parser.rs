use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

// challenge := WS "Bearer" WS1 pair (WS "," WS pair)* WS
// pair      := key '="' value '"'
// key       := [^,\s="]+
// value     := [^"]*
lazy_static! {
    static ref CHALLENGE: Regex =
        Regex::new(r#"^\s*Bearer\s+[^,\s="]+="[^"]*"\s*(?:,\s*[^,\s="]+="[^"]*"\s*)*$"#).unwrap();
    static ref FIRST_PAIR: Regex = Regex::new(r#"^\s*Bearer\s+([^,\s="]+)="([^"]*)"\s*"#).unwrap();
    static ref NEXT_PAIR: Regex = Regex::new(r#"^,\s*([^,\s="]+)="([^"]*)"\s*"#).unwrap();
}

/// Parses a `WWW-Authenticate` Bearer challenge into its auth-params
/// e.g. `Bearer authorization_uri="https://login.example.com/common/oauth2/authorize", resource="00000002-0000-0000-c000-000000000000"`
///
/// The whole challenge is validated before anything is extracted. Pairs are then extracted
/// left to right, each one anchored where the previous ended, so a quoted value is never
/// mistaken for a pair. A repeated key keeps its last value.
///
/// Specified in [RFC 6750 Section 3: The WWW-Authenticate Response Header Field][1]
///
/// [1]: https://www.rfc-editor.org/rfc/rfc6750#section-3
pub fn parse_challenge(challenge: &str) -> RustyChallengeResult<HashMap<String, String>> {
    if !CHALLENGE.is_match(challenge) {
        return Err(RustyChallengeError::NotParseable);
    }

    let mut parameters = HashMap::new();
    let first = FIRST_PAIR.captures(challenge).ok_or(RustyChallengeError::NotParseable)?;
    parameters.insert(first[1].to_string(), first[2].to_string());

    let mut rest = &challenge[first[0].len()..];
    while let Some(pair) = NEXT_PAIR.captures(rest) {
        parameters.insert(pair[1].to_string(), pair[2].to_string());
        rest = &rest[pair[0].len()..];
    }
    Ok(parameters)
}
