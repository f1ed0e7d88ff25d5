use runland_constants::{ErrNo, ExecError};
use std::ffi::CString;
use std::os::raw::c_char;

/// Issue the kernel `execve` syscall directly, bypassing libc's own
/// `execve` wrapper so the interceptor's retries (PATH search, `ENOEXEC`
/// sh-fallback) never re-enter its own intercepted entry point.
///
/// On success this does not return — the calling process image is gone.
/// On failure it returns the mapped error; `errno` is whatever the kernel
/// left behind.
pub fn raw_execve(path: &str, argv: &[String], envp: &[String]) -> ExecError {
    let c_path = match CString::new(path) {
        Ok(p) => p,
        Err(_) => return ExecError::new(ErrNo::InvalidArgument, "exec path contains a NUL byte"),
    };

    let c_argv = match to_cstrings(argv) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let c_envp = match to_cstrings(envp) {
        Ok(v) => v,
        Err(e) => return e,
    };

    let mut argv_ptrs: Vec<*const c_char> = c_argv.iter().map(|s| s.as_ptr()).collect();
    argv_ptrs.push(std::ptr::null());

    let mut envp_ptrs: Vec<*const c_char> = c_envp.iter().map(|s| s.as_ptr()).collect();
    envp_ptrs.push(std::ptr::null());

    unsafe {
        libc::syscall(
            libc::SYS_execve,
            c_path.as_ptr(),
            argv_ptrs.as_ptr(),
            envp_ptrs.as_ptr(),
        );
    }

    ExecError::from_io(std::io::Error::last_os_error(), "execve syscall failed")
}

fn to_cstrings(entries: &[String]) -> Result<Vec<CString>, ExecError> {
    entries
        .iter()
        .map(|e| {
            CString::new(e.as_str())
                .map_err(|_| ExecError::new(ErrNo::InvalidArgument, "argv/envp entry contains a NUL byte"))
        })
        .collect()
}
