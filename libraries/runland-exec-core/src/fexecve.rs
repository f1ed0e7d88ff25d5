use crate::hook::execve_hook;
use runland_constants::{ErrNo, ExecError};

/// `fexecve`: convert the fd to its `/proc/self/fd/<fd>` path and run the
/// core on that, remapping `ENOENT` to `EBADF` since the caller handed us
/// a file descriptor, not a path.
pub fn fexecve_hook(fd: i32, argv: &[String], envp: &[String]) -> ExecError {
    let path = format!("/proc/self/fd/{fd}");
    let err = execve_hook(&path, argv, envp);

    if err.errno == ErrNo::NoSuchFileOrDirectory {
        ExecError::new(ErrNo::BadFileDescriptor, "fd does not refer to an open file")
    } else {
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_fd_maps_enoent_to_ebadf() {
        let err = fexecve_hook(-1, &[], &[]);
        assert_eq!(err.errno, ErrNo::BadFileDescriptor);
    }
}
