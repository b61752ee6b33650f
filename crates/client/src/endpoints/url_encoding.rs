//! URL encoding for the API key path segment.
//!
//! The alert source API key is the last segment of the events URL. Without
//! percent-encoding, a key containing `/`, `?` or `#` would change which
//! resource the request targets.
//!
//! # Example
//!
//! ```
//! use ilert_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("key/with/slashes");
//! assert_eq!(encoded, "key%2Fwith%2Fslashes");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3, plus characters that are commonly blocked
/// by proxies or have special meaning elsewhere in a URL.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%') // prevents double-decoding
    .add(b'/') // prevents path traversal
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
