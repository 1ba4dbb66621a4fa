/// Pointer addressing the whole document.
pub const ROOT: &str = "/";

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use json_ptr_form_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// # Example
///
/// ```
/// use json_ptr_form_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Whether `pointer` addresses the whole document.
///
/// The empty string is accepted as a synonym for `/`.
pub fn is_root(pointer: &str) -> bool {
    pointer.is_empty() || pointer == ROOT
}

/// Parse a pointer string into unescaped path components.
///
/// Both `/` and the empty string parse to the empty path. A missing leading
/// `/` is tolerated.
///
/// # Example
///
/// ```
/// use json_ptr_form_pointer::parse_pointer;
///
/// assert_eq!(parse_pointer("/"), Vec::<String>::new());
/// assert_eq!(parse_pointer("/foo/bar"), vec!["foo", "bar"]);
/// assert_eq!(parse_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// ```
pub fn parse_pointer(pointer: &str) -> Vec<String> {
    if is_root(pointer) {
        return Vec::new();
    }
    let body = pointer.strip_prefix('/').unwrap_or(pointer);
    body.split('/').map(unescape_component).collect()
}

/// Format path components into a pointer string; the empty path formats as `/`.
pub fn format_pointer(path: &[String]) -> String {
    if path.is_empty() {
        return ROOT.to_string();
    }
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Join already-escaped pointer fragments into one normalized pointer.
///
/// Fragments are concatenated with `/`, runs of separators collapse into one,
/// a trailing separator is dropped unless the result is the root, and the
/// result always starts with `/`.
///
/// # Example
///
/// ```
/// use json_ptr_form_pointer::join_pointers;
///
/// assert_eq!(join_pointers(&["/address", "street"]), "/address/street");
/// assert_eq!(join_pointers(&["", "name"]), "/name");
/// assert_eq!(join_pointers(&["/"]), "/");
/// assert_eq!(join_pointers::<&str>(&[]), "/");
/// ```
pub fn join_pointers<S: AsRef<str>>(fragments: &[S]) -> String {
    let mut joined = String::with_capacity(fragments.iter().map(|f| f.as_ref().len() + 1).sum());
    joined.push('/');
    for fragment in fragments {
        for c in fragment.as_ref().chars() {
            if c == '/' && joined.ends_with('/') {
                continue;
            }
            joined.push(c);
        }
        if !joined.ends_with('/') {
            joined.push('/');
        }
    }
    if joined.len() > 1 {
        joined.pop();
    }
    joined
}

/// Compose `parent` with one unescaped `segment`.
///
/// # Example
///
/// ```
/// use json_ptr_form_pointer::child_pointer;
///
/// assert_eq!(child_pointer("/", "a"), "/a");
/// assert_eq!(child_pointer("/items", "3"), "/items/3");
/// assert_eq!(child_pointer("/m", "x/y"), "/m/x~1y");
/// ```
pub fn child_pointer(parent: &str, segment: &str) -> String {
    let escaped = escape_component(segment);
    if is_root(parent) {
        let mut out = String::with_capacity(escaped.len() + 1);
        out.push('/');
        out.push_str(&escaped);
        return out;
    }
    let mut out = String::with_capacity(parent.len() + escaped.len() + 1);
    out.push_str(parent);
    out.push('/');
    out.push_str(&escaped);
    out
}

/// Get the parent pointer, or `None` for the root.
///
/// # Example
///
/// ```
/// use json_ptr_form_pointer::parent_pointer;
///
/// assert_eq!(parent_pointer("/foo/bar").as_deref(), Some("/foo"));
/// assert_eq!(parent_pointer("/foo").as_deref(), Some("/"));
/// assert_eq!(parent_pointer("/"), None);
/// ```
pub fn parent_pointer(pointer: &str) -> Option<String> {
    if is_root(pointer) {
        return None;
    }
    match pointer.rfind('/') {
        Some(0) | None => Some(ROOT.to_string()),
        Some(idx) => Some(pointer[..idx].to_string()),
    }
}

/// The last, still escaped, segment of `pointer`. `None` for the root.
pub fn last_segment(pointer: &str) -> Option<&str> {
    if is_root(pointer) {
        return None;
    }
    match pointer.rfind('/') {
        Some(idx) => Some(&pointer[idx + 1..]),
        None => Some(pointer),
    }
}

/// Check if a string represents a valid non-negative integer array index.
///
/// # Example
///
/// ```
/// use json_ptr_form_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // First char can't be leading zero unless it's just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parse a segment as an array index.
///
/// Only canonical indices are accepted, so `"7"` parses but `"07"`, `"-1"`
/// and `"x"` do not.
pub fn parse_index(segment: &str) -> Option<usize> {
    if !is_valid_index(segment) {
        return None;
    }
    segment.parse().ok()
}
