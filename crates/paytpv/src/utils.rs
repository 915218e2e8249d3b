use url::form_urlencoded;

/// Form-encode one key or value: space becomes `+`, `A-Za-z0-9*-._` stay, every other byte of
/// the UTF-8 form is rendered `%XX` with uppercase hex.
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Inverse of [`encode_component`].
pub fn decode_component(value: &str) -> String {
    // An encoded component has no raw `&` or `=`, so it parses as a single bare key.
    form_urlencoded::parse(value.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default()
}

/// Join pairs as `k=v` separated by `&`, both sides form-encoded, in iteration order.
pub fn serialize_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `code` trimmed, when it reads as an integer greater than zero. The gateway reports `0` on
/// success.
pub fn positive_error_code(code: &str) -> Option<&str> {
    let code = code.trim();
    code.parse::<u64>().is_ok_and(|value| value > 0).then_some(code)
}
