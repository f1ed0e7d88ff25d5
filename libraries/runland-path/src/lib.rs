//! Pure, filesystem-free functions over byte-string paths: normalization,
//! absolutization against the process's current working directory, and a
//! handful of `NULL`-safe string primitives.
//!
//! Nothing in this crate touches disk. Anything that needs to `stat`,
//! `readlink`, or otherwise consult the live filesystem lives one layer up,
//! in `runland-rootfs`.

mod normalize;
mod strutil;

pub use normalize::normalize;
pub use strutil::{ends_with, parse_u32_or, parse_usize_or, starts_with};

use runland_constants::PATH_MAX;
use std::path::PathBuf;

/// Join `p` onto the current working directory if `p` is relative; copy it
/// verbatim if it is already absolute.
///
/// Does not normalize the result — callers that need both absolutization
/// and normalization run this first and feed the output to [`normalize`],
/// matching the order the exec core uses (`../sh` with cwd `/bin` must
/// become `/sh`, not fail, which only works if absolutization precedes
/// normalization).
pub fn absolutize(p: &[u8]) -> Option<Vec<u8>> {
    if p.first() == Some(&b'/') {
        return Some(p.to_vec());
    }

    let cwd = std::env::current_dir().ok()?;
    let cwd = path_to_bytes(&cwd)?;

    // Guard against a kernel-reported "(unreachable)" cwd, which does not
    // start with '/' and would otherwise silently produce a bogus relative
    // "absolute" path.
    if cwd.first() != Some(&b'/') {
        return None;
    }

    let mut joined = Vec::with_capacity(cwd.len() + 1 + p.len());
    joined.extend_from_slice(&cwd);
    if joined.last() != Some(&b'/') {
        joined.push(b'/');
    }
    joined.extend_from_slice(p);

    if joined.len() >= PATH_MAX {
        return None;
    }

    Some(joined)
}

#[cfg(unix)]
fn path_to_bytes(p: &PathBuf) -> Option<Vec<u8>> {
    use std::os::unix::ffi::OsStrExt;
    Some(p.as_os_str().as_bytes().to_vec())
}

#[cfg(not(unix))]
fn path_to_bytes(_p: &PathBuf) -> Option<Vec<u8>> {
    None
}
