//! Host pattern matching.
//!
//! # Responsibilities
//! - Match a request host against a site's host pattern
//! - Support `|` alternation and `*` wildcards
//!
//! # Design Decisions
//! - Host matching is case-insensitive (RFC 9110)
//! - Empty pattern = always matches (wildcard)
//! - No regex and no allocation; patterns are matched in place

/// A host pattern such as `www.example.com|*.example.org`, borrowed from
/// the site definition. Matching never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPattern<'a> {
    pattern: &'a str,
}

impl<'a> HostPattern<'a> {
    pub fn new(pattern: &'a str) -> Self {
        Self { pattern }
    }

    /// Non-empty, trimmed alternatives.
    pub fn alternatives(&self) -> impl Iterator<Item = &'a str> {
        self.pattern.split('|').map(str::trim).filter(|alt| !alt.is_empty())
    }

    /// Returns true if `host` matches any alternative.
    pub fn matches(&self, host: &str) -> bool {
        let mut alternatives = self.alternatives().peekable();
        if alternatives.peek().is_none() {
            return true;
        }
        alternatives.any(|alt| glob_match(alt, host))
    }
}

/// Iterative case-insensitive `*` glob with single-star backtracking.
fn glob_match(pattern: &str, text: &str) -> bool {
    let (mut p, mut t) = (pattern, text);
    // Pattern after the last `*` and the text position it was tried at.
    let mut star: Option<(&str, &str)> = None;

    while let Some(c) = t.chars().next() {
        let mut pattern_chars = p.chars();
        match pattern_chars.next() {
            Some('*') => {
                p = pattern_chars.as_str();
                star = Some((p, t));
            }
            Some(expected) if chars_eq_ignore_case(expected, c) => {
                p = pattern_chars.as_str();
                t = &t[c.len_utf8()..];
            }
            _ => match star {
                Some((star_p, star_t)) => {
                    let retry = match star_t.chars().next() {
                        Some(skipped) => &star_t[skipped.len_utf8()..],
                        None => return false,
                    };
                    p = star_p;
                    t = retry;
                    star = Some((star_p, retry));
                }
                None => return false,
            },
        }
    }

    p.chars().all(|c| c == '*')
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
