//! Numeric and string constants shared by every other crate in the
//! workspace: the POSIX errno taxonomy, buffer size ceilings, and the
//! fixed strings (env var names, regexes, host paths) the rest of the
//! engine is built against.

mod errno;
mod error;

pub use errno::ErrNo;
pub use error::{ExecError, ExecResult};

/// Kernel's `PATH_MAX`, the ceiling every absolutized/normalized path must
/// fit under.
pub const PATH_MAX: usize = 4096;

/// Ceiling for `RUNLAND_ROOTFS`, including the NUL terminator. Chosen to
/// leave enough room that `rootfs + "/usr/bin/" + name` never has to be
/// checked against `PATH_MAX` twice.
pub const ROOTFS_MAX_LEN: usize = 85;

/// Bytes read from a candidate executable before classifying it. Exceeds
/// the kernel's own shebang limit (128 before Linux 5.1, 256 after) by
/// enough to cover a rootfs prefix, so scripts the kernel itself would
/// reject on `#!` length still get handled here.
pub const HEADER_BUFFER_LEN: usize = 340;

/// ELF magic, `\x7fELF`.
pub const ELF_MAGIC: [u8; 4] = [0x7f, 0x45, 0x4c, 0x46];

/// Minimum buffer length before the `e_machine` field (offset 0x12, 2
/// bytes) can be read.
pub const ELF_MIN_HEADER_LEN: usize = 20;

/// Byte offset of `e_machine` in the ELF header.
pub const ELF_E_MACHINE_OFFSET: usize = 0x12;

/// `EM_X86_64`, the native machine constant for a 64-bit x86 Android
/// build. Other targets would substitute `EM_AARCH64` (183) etc.; kept as
/// a single constant because this crate only targets one ABI per build,
/// the same way the original program picks its native machine at compile
/// time.
#[cfg(target_arch = "x86_64")]
pub const NATIVE_ELF_MACHINE: u16 = 62;
#[cfg(target_arch = "aarch64")]
pub const NATIVE_ELF_MACHINE: u16 = 183;
#[cfg(target_arch = "arm")]
pub const NATIVE_ELF_MACHINE: u16 = 40;
#[cfg(target_arch = "x86")]
pub const NATIVE_ELF_MACHINE: u16 = 3;

/// Path to the system dynamic linker on a 64-bit build.
pub const SYSTEM_LINKER_64: &str = "/system/bin/linker64";
/// Path to the system dynamic linker on a 32-bit build.
pub const SYSTEM_LINKER_32: &str = "/system/bin/linker";

/// The linker path this build would wrap with, selected by pointer width.
#[cfg(target_pointer_width = "64")]
pub const SYSTEM_LINKER: &str = SYSTEM_LINKER_64;
#[cfg(target_pointer_width = "32")]
pub const SYSTEM_LINKER: &str = SYSTEM_LINKER_32;

/// Env var naming the rootfs directory override.
pub const ENV_ROOTFS: &str = "RUNLAND_ROOTFS";
/// Env var carrying the SELinux process context, if the host sets it
/// directly rather than relying on `/proc/self/attr/current`.
pub const ENV_SE_PROCESS_CONTEXT: &str = "RUNLAND_SE_PROCESS_CONTEXT";
/// Logger verbosity, `0`-`4`.
pub const ENV_LOG_LEVEL: &str = "RUNLAND_EXEC__LOG_LEVEL";
/// Master kill switch for interception.
pub const ENV_INTERCEPT_EXECVE: &str = "RUNLAND_EXEC__INTERCEPT_EXECVE";
/// Tri-state linker-wrap policy, `disable|enable|force`.
pub const ENV_SYSTEM_LINKER_EXEC: &str = "RUNLAND_EXEC__SYSTEM_LINKER_EXEC";
/// Self-exe hint injected into a linker-wrapped child's environment.
pub const ENV_PROC_SELF_EXE: &str = "RUNLAND_EXEC__PROC_SELF_EXE";

/// Fallback source for the SELinux process context when
/// [`ENV_SE_PROCESS_CONTEXT`] is unset.
pub const SELINUX_ATTR_CURRENT: &str = "/proc/self/attr/current";

/// Defaults for the five consumed env vars, per the external-interfaces
/// contract.
pub const DEFAULT_LOG_LEVEL: u8 = 1;
pub const DEFAULT_INTERCEPT_EXECVE: bool = true;

/// Compiled-in fallback for `RUNLAND_ROOTFS`, used when the env var is
/// unset or empty. Settable at build time with `RUNLAND_DEFAULT_ROOTFS`.
pub fn parse_default_rootfs() -> &'static str {
    option_env!("RUNLAND_DEFAULT_ROOTFS").unwrap_or("/data/data/org.example.runland/files")
}

/// Loader variables stripped from a non-native or system-binary target's
/// environment.
pub const LD_LIBRARY_PATH: &str = "LD_LIBRARY_PATH";
pub const LD_PRELOAD: &str = "LD_PRELOAD";

/// System binaries that remain library-path aware even though they live
/// outside the rootfs, because the system linker itself needs
/// `LD_LIBRARY_PATH` to find its own dependents.
pub const LOADER_AWARE_EXEMPTIONS: &[&str] =
    &["/system/bin/sh", "/system/bin/linker", "/system/bin/linker64"];

/// Effective-uid values exempt from the default `enable` linker-wrap
/// policy (root and the `shell` uid both already have exec access
/// outside app-data restrictions).
pub const UID_ROOT: u32 = 0;
pub const UID_SHELL: u32 = 2000;

/// SELinux domain prefixes exempt from linker-wrap under the `enable`
/// policy: the platform already grants these two domains data-file exec.
pub const EXEMPT_SELINUX_PREFIXES: &[&str] = &["u:r:untrusted_app_25:", "u:r:untrusted_app_27:"];

/// Android API level (as a stand-in "OS version threshold") at and above
/// which per-app data-file execute restrictions, and therefore the
/// system-linker-exec workaround, apply.
pub const LINKER_EXEC_MIN_API_LEVEL: u32 = 29;
