//! Percent-encoding for values interpolated into REST paths.
//!
//! Job ids are opaque server tokens. Scheduled and real-time searches produce
//! sids such as `scheduler__admin__search__RMD5abc_at_1700000000_42` or
//! `rt_1700000000.42`, and nothing stops a proxy from handing back stranger
//! values, so every sid is encoded before it becomes a path segment.
//!
//! ```
//! use splunk_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("1700000000.42"), "1700000000.42");
//! assert_eq!(encode_path_segment("a/b"), "a%2Fb");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters encoded in a path segment: RFC 3986 delimiters plus `%`
/// (no double-decoding) and `/` (no traversal).
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
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
