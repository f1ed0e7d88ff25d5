use runland_constants::{ENV_PROC_SELF_EXE, LOADER_AWARE_EXEMPTIONS};

/// Whether loader variables (`LD_LIBRARY_PATH`, `LD_PRELOAD`) should be
/// stripped for a given target: true for non-native ELFs and for system
/// binaries, except the handful that still need to find their own
/// dependents (`/system/bin/sh`, `/system/bin/linker[64]`).
pub fn should_unset_loader_vars(exec_path: &str, is_non_native_elf: bool, is_system_binary: bool) -> bool {
    if LOADER_AWARE_EXEMPTIONS.contains(&exec_path) {
        return false;
    }

    is_non_native_elf || is_system_binary
}

/// Rewrite an `envp` list, dropping loader variables and/or the prior
/// self-exe hint, and appending a fresh hint when requested.
///
/// Each entry of `envp` is a `KEY=value` string. `self_exe_hint`, when
/// `Some`, is the value to attach to [`ENV_PROC_SELF_EXE`]; if the
/// original list already carried that key, the replacement is written
/// back at the same position rather than appended. `unset_loader_vars`
/// drops `LD_LIBRARY_PATH` and `LD_PRELOAD` entries.
pub fn rewrite_envp(
    envp: &[impl AsRef<str>],
    self_exe_hint: Option<&str>,
    unset_loader_vars: bool,
) -> Vec<String> {
    // A placeholder keeps the hint's original slot reserved even though
    // later entries keep being pushed behind it, so overwriting it in
    // place never clobbers an unrelated entry.
    let mut out: Vec<Option<String>> = Vec::with_capacity(envp.len() + 1);
    let mut hint_pos = None;

    for entry in envp {
        let entry = entry.as_ref();
        let key = key_of(entry);

        if key == ENV_PROC_SELF_EXE {
            hint_pos = Some(out.len());
            out.push(None);
            continue;
        }

        if unset_loader_vars && is_loader_var(key) {
            continue;
        }

        out.push(Some(entry.to_string()));
    }

    if let Some(value) = self_exe_hint {
        let entry = format!("{ENV_PROC_SELF_EXE}={value}");
        match hint_pos {
            Some(pos) => out[pos] = Some(entry),
            None => out.push(Some(entry)),
        }
    }

    out.into_iter().flatten().collect()
}

fn key_of(entry: &str) -> &str {
    entry.split('=').next().unwrap_or(entry)
}

fn is_loader_var(key: &str) -> bool {
    key == runland_constants::LD_LIBRARY_PATH || key == runland_constants::LD_PRELOAD
}
