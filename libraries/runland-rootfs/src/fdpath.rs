use regex::Regex;
use runland_constants::{ErrNo, ExecError, ExecResult};
use std::fs::File;
use std::mem::ManuallyDrop;
use std::os::unix::ffi::OsStringExt;
use std::os::unix::fs::MetadataExt;
use std::os::unix::io::FromRawFd;
use std::sync::LazyLock;

static FD_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^((/proc/(self|[0-9]+))|(/dev))/fd/([0-9]+)$").unwrap());

/// `true` iff `path` names an open file descriptor the way
/// `/proc/self/fd/N`, `/proc/<pid>/fd/N`, or `/dev/fd/N` do.
pub fn is_fd_path(path: &str) -> bool {
    FD_PATH_RE.is_match(path)
}

/// Recover the real path behind an fd path, verifying it names a regular
/// file and that the file has not been swapped out from under the fd
/// between the two stats.
///
/// `path` must be valid UTF-8 and match [`is_fd_path`]; callers that do
/// not yet know that should check first.
pub fn resolve_fd_realpath(path: &str) -> ExecResult<Vec<u8>> {
    let caps = FD_PATH_RE
        .captures(path)
        .ok_or_else(|| ExecError::new(ErrNo::InvalidArgument, "not an fd path"))?;

    let fd: i32 = caps[5]
        .parse()
        .map_err(|_| ExecError::new(ErrNo::InvalidArgument, "fd number out of range"))?;

    // Borrow the fd without taking ownership of it: it belongs to the
    // caller and must not be closed when this `File` drops.
    let borrowed = ManuallyDrop::new(unsafe { File::from_raw_fd(fd) });
    let fd_meta = borrowed
        .metadata()
        .map_err(|e| ExecError::from_io(e, "fstat on fd failed"))?;

    if !fd_meta.file_type().is_file() {
        return Err(ExecError::new(
            ErrNo::ExecFormatError,
            "fd does not refer to a regular file",
        ));
    }

    let target = std::fs::read_link(path)
        .map_err(|e| ExecError::from_io(e, "failed to read fd symlink target"))?;

    if !target.is_absolute() {
        return Err(ExecError::new(
            ErrNo::ExecFormatError,
            "fd symlink target is not absolute",
        ));
    }

    let target_meta = std::fs::metadata(&target)
        .map_err(|e| ExecError::from_io(e, "failed to stat fd symlink target"))?;

    if target_meta.dev() != fd_meta.dev() || target_meta.ino() != fd_meta.ino() {
        return Err(ExecError::new(
            ErrNo::NoSuchDeviceOrAddress,
            "file was replaced between fstat(fd) and stat(target)",
        ));
    }

    Ok(target.into_os_string().into_vec())
}
