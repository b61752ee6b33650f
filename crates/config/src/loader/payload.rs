//! `key=value` command-line tokens.

/// Split a trailing command-line token into a context entry.
///
/// The token is split on the first `=`, so values may themselves contain `=`.
/// Tokens without `=`, or with an empty key or an empty value, yield `None`
/// and are dropped without a diagnostic.
pub fn parse_payload_token(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.split_once('=')?;
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}
