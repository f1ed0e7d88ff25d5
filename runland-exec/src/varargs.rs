use std::ffi::CStr;
use std::os::raw::c_char;

/// Convert a `NULL`-terminated C string array into owned, lossily-decoded
/// `String`s.
pub unsafe fn collect_array(mut arr: *const *const c_char) -> Vec<String> {
    let mut out = Vec::new();
    while !(*arr).is_null() {
        out.push(CStr::from_ptr(*arr).to_string_lossy().into_owned());
        arr = arr.add(1);
    }
    out
}

/// The process's current environment as `KEY=value` strings, for
/// adaptors (`execv`, `execvp`, the `l`-family without an explicit
/// `envp`) that inherit it rather than receiving one explicitly.
pub fn inherited_envp() -> Vec<String> {
    std::env::vars()
        .map(|(k, v)| format!("{k}={v}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn collects_array_up_to_the_null_sentinel() {
        let a = CString::new("a").unwrap();
        let b = CString::new("bb").unwrap();
        let ptrs = [a.as_ptr(), b.as_ptr(), std::ptr::null()];

        let collected = unsafe { collect_array(ptrs.as_ptr()) };
        assert_eq!(collected, vec!["a".to_string(), "bb".to_string()]);
    }

    #[test]
    fn empty_array_is_just_the_sentinel() {
        let ptrs = [std::ptr::null()];
        let collected = unsafe { collect_array(ptrs.as_ptr()) };
        assert!(collected.is_empty());
    }

    #[test]
    fn inherited_envp_reflects_a_set_variable() {
        unsafe { std::env::set_var("RUNLAND_VARARGS_TEST", "1") };
        assert!(inherited_envp().iter().any(|e| e == "RUNLAND_VARARGS_TEST=1"));
        unsafe { std::env::remove_var("RUNLAND_VARARGS_TEST") };
    }
}
