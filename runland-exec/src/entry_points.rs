use crate::varargs::{collect_array, inherited_envp};
use crate::fail;
use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

unsafe fn cstr_to_string(s: *const c_char) -> String {
    CStr::from_ptr(s).to_string_lossy().into_owned()
}

#[no_mangle]
pub unsafe extern "C" fn execve(
    path: *const c_char,
    argv: *const *const c_char,
    envp: *const *const c_char,
) -> c_int {
    let path = cstr_to_string(path);
    let argv = collect_array(argv);
    let envp = collect_array(envp);

    fail(runland_exec_core::execve_hook(&path, &argv, &envp).errno)
}

#[no_mangle]
pub unsafe extern "C" fn execv(path: *const c_char, argv: *const *const c_char) -> c_int {
    let path = cstr_to_string(path);
    let argv = collect_array(argv);
    let envp = inherited_envp();

    fail(runland_exec_core::execve_hook(&path, &argv, &envp).errno)
}

#[no_mangle]
pub unsafe extern "C" fn execvp(name: *const c_char, argv: *const *const c_char) -> c_int {
    let name = cstr_to_string(name);
    let argv = collect_array(argv);
    let envp = inherited_envp();

    fail(runland_exec_core::execvp_hook(&name, &argv, &envp).errno)
}

#[no_mangle]
pub unsafe extern "C" fn execvpe(
    name: *const c_char,
    argv: *const *const c_char,
    envp: *const *const c_char,
) -> c_int {
    let name = cstr_to_string(name);
    let argv = collect_array(argv);
    let envp = collect_array(envp);

    fail(runland_exec_core::execvp_hook(&name, &argv, &envp).errno)
}

#[no_mangle]
pub unsafe extern "C" fn fexecve(
    fd: c_int,
    argv: *const *const c_char,
    envp: *const *const c_char,
) -> c_int {
    let argv = collect_array(argv);
    let envp = collect_array(envp);

    fail(runland_exec_core::fexecve_hook(fd, &argv, &envp).errno)
}

unsafe fn collect_variadic_argv(arg0: *const c_char, rest: &mut std::ffi::VaListImpl<'_>) -> Vec<String> {
    let mut argv = vec![CStr::from_ptr(arg0).to_string_lossy().into_owned()];
    loop {
        let arg = rest.arg::<*const c_char>();
        if arg.is_null() {
            break;
        }
        argv.push(CStr::from_ptr(arg).to_string_lossy().into_owned());
    }
    argv
}

#[no_mangle]
pub unsafe extern "C" fn execl(path: *const c_char, arg0: *const c_char, mut rest: ...) -> c_int {
    let path = cstr_to_string(path);
    let argv = collect_variadic_argv(arg0, &mut rest);
    let envp = inherited_envp();

    fail(runland_exec_core::execve_hook(&path, &argv, &envp).errno)
}

#[no_mangle]
pub unsafe extern "C" fn execlp(name: *const c_char, arg0: *const c_char, mut rest: ...) -> c_int {
    let name = cstr_to_string(name);
    let argv = collect_variadic_argv(arg0, &mut rest);
    let envp = inherited_envp();

    fail(runland_exec_core::execvp_hook(&name, &argv, &envp).errno)
}

/// `execle`'s varargs end with a trailing `char *const envp[]`, which a
/// generic `VaList` walk cannot distinguish from one more argv entry by
/// type alone; the caller-visible contract (a `NULL` argv sentinel
/// followed immediately by the envp array pointer) is what callers
/// actually pass, so the last argument collected before the closing
/// `NULL` is read back out as the envp array.
#[no_mangle]
pub unsafe extern "C" fn execle(path: *const c_char, arg0: *const c_char, mut rest: ...) -> c_int {
    let path = cstr_to_string(path);
    let argv = collect_variadic_argv(arg0, &mut rest);

    let envp_arr = rest.arg::<*const *const c_char>();
    let envp = collect_array(envp_arr);

    fail(runland_exec_core::execve_hook(&path, &argv, &envp).errno)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use test_utilities::fixtures;

    /// Build a `NULL`-terminated C string array, returning the owning
    /// `CString`s alongside it: the caller must keep them alive for as
    /// long as the pointer array is in use.
    fn c_array(entries: &[String]) -> (Vec<CString>, Vec<*const c_char>) {
        let owned: Vec<CString> = entries.iter().map(|s| CString::new(s.as_str()).unwrap()).collect();
        let mut ptrs: Vec<*const c_char> = owned.iter().map(|c| c.as_ptr()).collect();
        ptrs.push(std::ptr::null());
        (owned, ptrs)
    }

    // Every fixed-arity entry point below is exercised against a path
    // that is guaranteed not to exist, so the real syscall it dispatches
    // to fails deterministically (`ENOENT`) instead of replacing the
    // test process.
    const MISSING_PATH: &str = "/nonexistent/for/tests";

    #[test]
    fn execve_reports_enoent_via_errno_and_returns_minus_one() {
        let path = CString::new(MISSING_PATH).unwrap();
        let (_argv_owned, argv_ptrs) = c_array(&fixtures::argv(&["argv0"]));
        let (_envp_owned, envp_ptrs) = c_array(&fixtures::envp(&[]));

        let rc = unsafe { execve(path.as_ptr(), argv_ptrs.as_ptr(), envp_ptrs.as_ptr()) };

        assert_eq!(rc, -1);
        assert_eq!(errno::errno().0, libc::ENOENT);
    }

    #[test]
    fn execv_reports_enoent_via_errno_and_returns_minus_one() {
        let path = CString::new(MISSING_PATH).unwrap();
        let (_argv_owned, argv_ptrs) = c_array(&fixtures::argv(&["argv0"]));

        let rc = unsafe { execv(path.as_ptr(), argv_ptrs.as_ptr()) };

        assert_eq!(rc, -1);
        assert_eq!(errno::errno().0, libc::ENOENT);
    }

    #[test]
    fn execvp_reports_enoent_when_nothing_on_path_matches() {
        let name = CString::new("definitely-not-a-real-binary-xyz").unwrap();
        let (_argv_owned, argv_ptrs) = c_array(&fixtures::argv(&["argv0"]));

        unsafe { std::env::set_var("PATH", "/nonexistent/for/tests/bin") };
        let rc = unsafe { execvp(name.as_ptr(), argv_ptrs.as_ptr()) };
        unsafe { std::env::remove_var("PATH") };

        assert_eq!(rc, -1);
        assert_eq!(errno::errno().0, libc::ENOENT);
    }

    #[test]
    fn fexecve_reports_ebadf_for_an_invalid_fd() {
        let (_argv_owned, argv_ptrs) = c_array(&fixtures::argv(&["argv0"]));
        let (_envp_owned, envp_ptrs) = c_array(&fixtures::envp(&[]));

        let rc = unsafe { fexecve(-1, argv_ptrs.as_ptr(), envp_ptrs.as_ptr()) };

        assert_eq!(rc, -1);
        assert_eq!(errno::errno().0, libc::EBADF);
    }
}
