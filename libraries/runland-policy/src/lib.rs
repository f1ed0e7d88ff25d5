//! The decision of whether a given executable must be launched indirectly
//! through the system dynamic linker, instead of being handed straight to
//! the kernel's `execve`.

mod api_level;

use runland_config::{is_exempt_domain, LinkerPolicy};
use runland_constants::{LINKER_EXEC_MIN_API_LEVEL, UID_ROOT, UID_SHELL};
use runland_path::starts_with;
use std::borrow::Cow;

pub use api_level::host_api_level;

/// Decide whether `exec_path` must be wrapped with the system linker.
///
/// `exec_path` and `rootfs` must already be normalized, absolute paths.
/// `euid` is the caller's effective uid; `se_context` is the process's
/// SELinux domain as read by [`runland_config::process_context`], if any.
pub fn should_linker_exec(
    policy: LinkerPolicy,
    exec_path: &[u8],
    rootfs: &[u8],
    euid: u32,
    se_context: Option<&str>,
) -> bool {
    let host_supports = host_api_level() >= LINKER_EXEC_MIN_API_LEVEL;
    let under_rootfs = is_under_rootfs(exec_path, rootfs);

    match policy {
        LinkerPolicy::Disable => false,
        LinkerPolicy::Force => host_supports && under_rootfs,
        LinkerPolicy::Enable => {
            if !host_supports {
                return false;
            }

            let uid_restricted = euid != UID_ROOT && euid != UID_SHELL;
            let domain_restricted = !se_context.is_some_and(is_exempt_domain);

            uid_restricted && domain_restricted && under_rootfs
        }
    }
}

fn is_under_rootfs(exec_path: &[u8], rootfs: &[u8]) -> bool {
    if rootfs == b"/" {
        return true;
    }

    let exec_path = resolve_fd_path_for_containment(exec_path);

    starts_with(&exec_path, rootfs)
        && (exec_path.len() == rootfs.len() || exec_path[rootfs.len()] == b'/')
}

/// An fd path (`/proc/*/fd/N`, `/dev/fd/N`) names whatever file the fd
/// happens to point at, not a location under the rootfs itself; resolve it
/// to its real target first so containment is judged on the real path, the
/// same way the rootfs-prefix rewrite treats fd paths one layer up. A path
/// that fails to resolve (or isn't valid UTF-8) is passed through
/// unresolved, which only ever makes containment stricter.
fn resolve_fd_path_for_containment(exec_path: &[u8]) -> Cow<'_, [u8]> {
    match std::str::from_utf8(exec_path) {
        Ok(s) if runland_rootfs::is_fd_path(s) => runland_rootfs::resolve_fd_realpath(s)
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(exec_path)),
        _ => Cow::Borrowed(exec_path),
    }
}
