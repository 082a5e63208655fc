//! JSON Pointer (RFC 6901) paths used to locate rejected pattern nodes.

use std::borrow::Cow;

/// Escape a single path segment per RFC 6901.
///
/// - `~` → `~0`
/// - `/` → `~1`
///
/// Returns `Cow::Borrowed` when no escaping is needed (the common case).
pub fn escape_pointer_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains('~') || segment.contains('/') {
        Cow::Owned(segment.replace('~', "~0").replace('/', "~1"))
    } else {
        Cow::Borrowed(segment)
    }
}

/// Append one escaped segment to a parent pointer.
///
/// # Example
/// ```
/// use pattern_route_core::child_path;
/// assert_eq!(child_path("#", "a/b"), "#/a~1b");
/// assert_eq!(child_path("#/list", "0"), "#/list/0");
/// ```
pub fn child_path(parent: &str, segment: &str) -> String {
    let escaped = escape_pointer_segment(segment);
    let mut path = String::with_capacity(parent.len() + escaped.len() + 1);
    path.push_str(parent);
    path.push('/');
    path.push_str(&escaped);
    path
}
