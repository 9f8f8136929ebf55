use base64::Engine;

pub fn jwt_header(token: &str) -> serde_json::Map<String, serde_json::Value> {
    jwt_part(token, 0)
}

pub fn jwt_claims(token: &str) -> serde_json::Map<String, serde_json::Value> {
    jwt_part(token, 1)
}

fn jwt_part(token: &str, part: usize) -> serde_json::Map<String, serde_json::Value> {
    let parts = token.split('.').collect::<Vec<&str>>();
    let part = parts.get(part).unwrap();
    let part = base64::prelude::BASE64_URL_SAFE_NO_PAD.decode(part).unwrap();
    let part = serde_json::from_slice::<serde_json::Value>(part.as_slice()).unwrap();
    part.as_object().unwrap().to_owned()
}

pub fn claim_u64(claims: &serde_json::Map<String, serde_json::Value>, name: &str) -> u64 {
    claims.get(name).and_then(serde_json::Value::as_u64).unwrap()
}

pub fn claim_str<'a>(claims: &'a serde_json::Map<String, serde_json::Value>, name: &str) -> &'a str {
    claims.get(name).and_then(serde_json::Value::as_str).unwrap()
}
