//! Environment and configuration: a thin, typed layer over the five env
//! vars the exec core consults, read fresh on every call rather than
//! cached process-wide, since a host may flip these vars between execs
//! while testing.

mod selinux;

pub use selinux::{is_exempt_domain, process_context};

use runland_constants::{
    parse_default_rootfs, ENV_INTERCEPT_EXECVE, ENV_LOG_LEVEL, ENV_ROOTFS, ENV_SYSTEM_LINKER_EXEC,
};
use runland_path::{normalize, parse_u32_or};

/// The tri-state policy controlling whether the system dynamic linker is
/// used to indirectly launch an executable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LinkerPolicy {
    Disable,
    Enable,
    Force,
}

impl LinkerPolicy {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "disable" => Some(LinkerPolicy::Disable),
            "enable" => Some(LinkerPolicy::Enable),
            "force" => Some(LinkerPolicy::Force),
            _ => None,
        }
    }
}

impl Default for LinkerPolicy {
    fn default() -> Self {
        LinkerPolicy::Enable
    }
}

/// Everything the exec core needs from the environment for a single call.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub rootfs: Vec<u8>,
    pub intercept_execve: bool,
    pub linker_policy: LinkerPolicy,
    pub log_level: u8,
}

impl RuntimeConfig {
    pub fn read() -> Self {
        RuntimeConfig {
            rootfs: get_rootfs(),
            intercept_execve: get_bool_env(ENV_INTERCEPT_EXECVE, runland_constants::DEFAULT_INTERCEPT_EXECVE),
            linker_policy: get_linker_policy(),
            log_level: get_log_level(),
        }
    }
}

/// Parse a boolean-flavored env var the way the host platform does:
/// `1/true/on/yes/y` for true, `0/false/off/no/n` for false (case
/// sensitive), `default` for anything else including "unset".
pub fn get_bool_env(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(v) => match v.as_str() {
            "1" | "true" | "on" | "yes" | "y" => true,
            "0" | "false" | "off" | "no" | "n" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

/// Read `RUNLAND_EXEC__LOG_LEVEL`, clamped to `0..=4`, defaulting and
/// clamping invalid/out-of-range values to [`runland_constants::DEFAULT_LOG_LEVEL`].
pub fn get_log_level() -> u8 {
    match std::env::var(ENV_LOG_LEVEL) {
        Ok(v) => {
            let parsed = parse_u32_or(&v, runland_constants::DEFAULT_LOG_LEVEL as u32);
            if parsed > 4 {
                runland_constants::DEFAULT_LOG_LEVEL
            } else {
                parsed as u8
            }
        }
        Err(_) => runland_constants::DEFAULT_LOG_LEVEL,
    }
}

/// Read `RUNLAND_EXEC__SYSTEM_LINKER_EXEC`, defaulting to `Enable`.
pub fn get_linker_policy() -> LinkerPolicy {
    std::env::var(ENV_SYSTEM_LINKER_EXEC)
        .ok()
        .and_then(|v| LinkerPolicy::from_str(&v))
        .unwrap_or_default()
}

/// Resolve the rootfs directory: `RUNLAND_ROOTFS` if set (and non-empty),
/// else the build-time compiled default, normalized either way so the
/// exact-prefix/exact-length checks downstream never see a trailing
/// slash, a `.`/`..` component, or a doubled separator.
pub fn get_rootfs() -> Vec<u8> {
    let raw = match std::env::var(ENV_ROOTFS) {
        Ok(v) if !v.is_empty() => v.into_bytes(),
        _ => parse_default_rootfs().as_bytes().to_vec(),
    };

    normalize(&raw, false, true).unwrap_or(raw)
}

/// `true` iff any `name=` in `vars` has a matching `name=value` entry in
/// `envp` (checked by key only, per the contract's "are_vars_in_env"
/// helper).
pub fn are_vars_in_env(envp: &[impl AsRef<[u8]>], vars: &[&str]) -> bool {
    vars.iter().any(|var| {
        envp.iter()
            .any(|entry| runland_path::starts_with(entry.as_ref(), format!("{var}=").as_bytes()))
    })
}
