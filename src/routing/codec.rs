//! Argument escaping for path segments.
//!
//! # Responsibilities
//! - Escape the characters that would break path matching
//! - Reverse the escape on values handed back by the host
//!
//! # Design Decisions
//! - Only `/`, `?`, `#` and `%` are escaped; every other character is
//!   copied as-is, so argument values keep their readable form in paths
//! - Unescape decodes every `%XX` triplet and leaves malformed ones
//!   literal, which keeps `unescape(escape(s)) == s` for any `s`

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, percent_encode_byte};

/// Characters that must not appear raw inside a substituted segment.
pub const RESERVED: [char; 4] = ['/', '?', '#', '%'];

/// Returns true if `c` is escaped by [`escape`].
pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// Escape an argument value for substitution into a route template.
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.chars().any(is_reserved) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        if is_reserved(c) {
            // Reserved characters are all ASCII.
            out.push_str(percent_encode_byte(c as u8));
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Reverse [`escape`]. Returns `None` if the decoded bytes are not UTF-8.
pub fn unescape(segment: &str) -> Option<Cow<'_, str>> {
    percent_decode_str(segment).decode_utf8().ok()
}

/// Reverse [`escape`], replacing invalid UTF-8 with U+FFFD.
pub fn unescape_lossy(segment: &str) -> Cow<'_, str> {
    percent_decode_str(segment).decode_utf8_lossy()
}
