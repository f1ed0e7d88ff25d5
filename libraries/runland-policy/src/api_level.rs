/// The host's Android API level, or a value that always satisfies the
/// linker-exec threshold on non-Android builds (there is no exec
/// restriction to work around off-device).
#[cfg(target_os = "android")]
extern "C" {
    fn android_get_device_api_level() -> libc::c_int;
}

#[cfg(target_os = "android")]
pub fn host_api_level() -> u32 {
    unsafe { android_get_device_api_level() as u32 }
}

#[cfg(not(target_os = "android"))]
pub fn host_api_level() -> u32 {
    runland_constants::LINKER_EXEC_MIN_API_LEVEL
}
