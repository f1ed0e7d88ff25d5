/// Normalize a byte-string path without consulting the filesystem: collapse
/// duplicate separators, resolve `.` components, and (when
/// `remove_double_dot` is set) resolve `..` components.
///
/// `..` handling differs by anchor:
/// - Absolute paths (leading `/`) clamp at the root: popping past it is
///   silently absorbed, so `/a/../../b` normalizes to `/b` rather than
///   failing.
/// - Tilde-anchored paths (`~` or `~user` as the first component) behave
///   like an absolute path whose root is unknown: `..` may pop ordinary
///   components but a `..` that would remove the tilde component itself
///   fails, since there is no way to know what it expands to.
/// - Plain relative paths require a preceding non-`..` component for every
///   `..`; one with nothing left to pop fails rather than silently
///   resolving above the starting directory.
///
/// Returns `None` for a `NUL`-containing, empty, `.`, or `..` input, or for
/// any of the `..`-underflow cases above. Otherwise returns a non-empty
/// result; a relative path that resolves to nothing becomes `.`.
pub fn normalize(p: &[u8], keep_trailing_sep: bool, remove_double_dot: bool) -> Option<Vec<u8>> {
    if p.is_empty() || p.contains(&0) || p == b"." || p == b".." {
        return None;
    }

    let is_absolute = p[0] == b'/';
    let had_trailing_sep = p.len() > 1 && p.last() == Some(&b'/');

    let components: Vec<&[u8]> = p
        .split(|&b| b == b'/')
        .filter(|c| !c.is_empty() && *c != b".")
        .collect();

    let mut out: Vec<&[u8]> = Vec::with_capacity(components.len());

    if !remove_double_dot {
        out.extend(components);
    } else if is_absolute {
        for c in components {
            if c == b".." {
                out.pop();
            } else {
                out.push(c);
            }
        }
    } else {
        let tilde_anchored = components.first().is_some_and(|c| c.first() == Some(&b'~'));
        // Under a tilde anchor, index 0 is the tilde component itself and
        // can never be popped; under a plain relative path, any `..` needs
        // something already pushed.
        let floor = if tilde_anchored { 1 } else { 0 };

        for c in components {
            if c == b".." {
                if out.len() <= floor {
                    return None;
                }
                out.pop();
            } else {
                out.push(c);
            }
        }
    }

    let mut result = Vec::with_capacity(p.len());
    if is_absolute {
        result.push(b'/');
    }
    for (i, c) in out.iter().enumerate() {
        if i > 0 {
            result.push(b'/');
        }
        result.extend_from_slice(c);
    }

    if result.is_empty() {
        result.push(if is_absolute { b'/' } else { b'.' });
    } else if result.len() > 1 && keep_trailing_sep && had_trailing_sep {
        result.push(b'/');
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::normalize;

    fn n(p: &str) -> Option<String> {
        normalize(p.as_bytes(), false, true).map(|v| String::from_utf8(v).unwrap())
    }

    #[test]
    fn collapses_duplicate_separators() {
        assert_eq!(n("///a//b///c/d///").as_deref(), Some("/a/b/c/d"));
    }

    #[test]
    fn clamps_absolute_dotdot_at_root() {
        assert_eq!(n("/a/b/../../../c").as_deref(), Some("/c"));
    }

    #[test]
    fn relative_dotdot_underflow_fails() {
        assert_eq!(n("a/../../b"), None);
    }

    #[test]
    fn tilde_dotdot_fails() {
        assert_eq!(n("~/.."), None);
    }

    #[test]
    fn tilde_user_allows_popping_inner_components() {
        assert_eq!(n("~user/foo/..").as_deref(), Some("~user"));
    }

    #[test]
    fn rejects_null_empty_dot_dotdot() {
        assert_eq!(normalize(b"", false, true), None);
        assert_eq!(normalize(b".", false, true), None);
        assert_eq!(normalize(b"..", false, true), None);
        assert_eq!(normalize(b"a\0b", false, true), None);
    }

    #[test]
    fn idempotent_on_every_normalized_output() {
        for input in [
            "///a//b///c/d///",
            "/a/b/../../../c",
            "/",
            "/a",
            "~user/foo/bar",
            "a/b/c",
        ] {
            if let Some(once) = normalize(input.as_bytes(), true, true) {
                let twice = normalize(&once, true, true).unwrap();
                assert_eq!(once, twice, "not a fixed point for {input:?}");
            }
        }
    }

    #[test]
    fn never_lengthens_input() {
        for input in ["///a//b///c/d///", "/a/b/../../../c", "a/./b/./c"] {
            if let Some(out) = normalize(input.as_bytes(), true, true) {
                assert!(out.len() <= input.len());
            }
        }
    }

    #[test]
    fn absolute_inputs_never_null_except_tilde_case() {
        for input in ["/", "/..", "/../../..", "/a/../../../b"] {
            assert!(normalize(input.as_bytes(), false, true).is_some());
        }
    }

    #[test]
    fn keeps_trailing_separator_when_requested() {
        let out = normalize(b"/a/b/", true, true).unwrap();
        assert_eq!(out, b"/a/b/");
    }

    #[test]
    fn without_remove_double_dot_keeps_dotdot_literal() {
        let out = normalize(b"/a/../b", false, false).unwrap();
        assert_eq!(out, b"/a/../b");
    }
}
