//! Content path helpers.
//!
//! All helpers operate on `/`-delimited paths and compare case-insensitively
//! where content paths are involved.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Join two path parts with exactly one `/` at the seam.
///
/// An empty part yields the other part unchanged.
pub fn make_path(part1: &str, part2: &str) -> String {
    if part1.is_empty() {
        return part2.to_string();
    }
    if part2.is_empty() {
        return part1.to_string();
    }
    match (part1.ends_with('/'), part2.starts_with('/')) {
        (true, true) => format!("{}{}", part1, &part2[1..]),
        (false, false) => format!("{}/{}", part1, part2),
        _ => format!("{}{}", part1, part2),
    }
}

/// Remove a single trailing `/`.
pub fn remove_postfix(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Strip `prefix` from `text`, comparing characters with Unicode case folding.
///
/// Returns the remainder of `text`, which may differ in byte length from
/// `text.len() - prefix.len()` when case variants have different widths.
pub fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = text.chars();
    for expected in prefix.chars() {
        let actual = rest.next()?;
        if !chars_eq_ignore_case(actual, expected) {
            return None;
        }
    }
    Some(rest.as_str())
}

/// Case-insensitive prefix test.
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    strip_prefix_ignore_case(text, prefix).is_some()
}

/// Remainder of `path` below `start`, if `path` equals `start` or lies below it.
///
/// An empty `start` accepts every absolute path.
pub fn strip_descendant<'a>(path: &'a str, start: &str) -> Option<&'a str> {
    strip_prefix_ignore_case(path, start).filter(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Like [`strip_descendant`], but an empty root never matches.
pub fn strip_root<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    if root.is_empty() {
        return None;
    }
    strip_descendant(path, root)
}

/// Returns true if `path` equals `root` or lies below it.
///
/// An empty root never matches.
pub fn is_descendant_or_self(path: &str, root: &str) -> bool {
    strip_root(path, root).is_some()
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Drop the last `/`-delimited segment.
///
/// Returns `None` once the remaining path would be `/x` or shorter, so
/// truncation of `/a/b/c` yields `/a/b`, then `/a`, then stops.
pub fn parent_path(path: &str) -> Option<&str> {
    match path.rfind('/') {
        Some(index) if index > 1 => Some(&path[..index]),
        _ => None,
    }
}

/// Percent-encode every segment of a `/`-delimited path.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_path() {
        assert_eq!(make_path("/a", "b"), "/a/b");
        assert_eq!(make_path("/a/", "/b"), "/a/b");
        assert_eq!(make_path("/a/", "b"), "/a/b");
        assert_eq!(make_path("/a", "/b"), "/a/b");
        assert_eq!(make_path("", "/b"), "/b");
        assert_eq!(make_path("/a", ""), "/a");
        assert_eq!(make_path("/", "/page"), "/page");
    }

    #[test]
    fn test_remove_postfix() {
        assert_eq!(remove_postfix("/a/"), "/a");
        assert_eq!(remove_postfix("/"), "");
        assert_eq!(remove_postfix("/a"), "/a");
    }

    #[test]
    fn test_is_descendant_or_self() {
        assert!(is_descendant_or_self("/sitecore/content/Home", "/sitecore/content/home"));
        assert!(is_descendant_or_self("/sitecore/content/home/page", "/sitecore/content/home"));
        assert!(!is_descendant_or_self("/sitecore/content/homepage", "/sitecore/content/home"));
        assert!(!is_descendant_or_self("/sitecore/content/home", ""));
    }

    #[test]
    fn test_non_ascii_case_folding() {
        assert!(starts_with_ignore_case("/Über/seite", "/über"));
        assert_eq!(strip_root("/sitecore/content/über/Seite", "/sitecore/content/Über"), Some("/Seite"));
        assert_eq!(strip_root("/ÄRGER", "/ärger"), Some(""));
        assert_eq!(strip_root("/überall", "/über"), None);
        // KELVIN SIGN is three bytes wide, its lowercase form one.
        assert_eq!(strip_prefix_ignore_case("/\u{212A}/page", "/k"), Some("/page"));
    }

    #[test]
    fn test_strip_descendant_empty_start() {
        assert_eq!(strip_descendant("/sitecore/content/home", ""), Some("/sitecore/content/home"));
        assert_eq!(strip_descendant("", ""), Some(""));
        assert_eq!(strip_descendant("relative", ""), None);
        assert_eq!(strip_root("/sitecore/content/home", ""), None);
    }

    #[test]
    fn test_parent_path_terminates() {
        let mut probes = vec!["/a/b/c"];
        let mut current = "/a/b/c";
        while let Some(parent) = parent_path(current) {
            probes.push(parent);
            current = parent;
        }
        assert_eq!(probes, vec!["/a/b/c", "/a/b", "/a"]);
        assert_eq!(parent_path("/"), None);
        assert_eq!(parent_path(""), None);
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("/about us/our team"), "/about%20us/our%20team");
        assert_eq!(encode_path("/plain/path"), "/plain/path");
    }
}
