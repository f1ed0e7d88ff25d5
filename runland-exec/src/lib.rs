//! The `.so` this crate builds is meant to be injected via `LD_PRELOAD`
//! into every process of the userland it intercepts. It exports the
//! `exec`-family symbols the dynamic linker resolves ahead of libc's own,
//! and funnels every one of them into `runland_exec_core`.
#![feature(c_variadic)]

mod entry_points;
mod varargs;

use runland_config::RuntimeConfig;

#[ctor::ctor]
fn on_load() {
    let config = RuntimeConfig::read();
    runland_logging::init(config.log_level);
    log::debug!("runland-exec loaded into pid {}", std::process::id());
}

/// Translate a core error into the process-visible failure: `errno` set,
/// `-1` returned, matching every libc `exec*` failure convention.
fn fail(err: runland_constants::ErrNo) -> std::os::raw::c_int {
    errno::set_errno(errno::Errno(err.to_positive()));
    -1
}
