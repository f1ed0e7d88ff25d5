use runland_config::RuntimeConfig;
use runland_constants::{ErrNo, ExecError, ExecResult, HEADER_BUFFER_LEN, SYSTEM_LINKER};
use runland_header::{resolve_interpreter, FileHeader};
use runland_path::starts_with;
use std::io::Read;

/// The fully-resolved `(path, argv, envp)` ready to hand to the raw
/// `execve` syscall.
pub struct ExecPlan {
    pub final_path: String,
    pub final_argv: Vec<String>,
    pub final_envp: Vec<String>,
}

/// Run the normalize → prefix → access → inspect → policy → rewrite
/// pipeline for a single exec attempt. Does not touch the kernel; callers
/// dispatch the returned plan via the raw syscall.
pub fn build_exec_plan(
    orig_path: &str,
    argv: &[String],
    envp: &[String],
    config: &RuntimeConfig,
) -> ExecResult<ExecPlan> {
    let resolved_path = resolve_and_prefix(orig_path, &config.rootfs)?;

    check_executable(&resolved_path)?;

    let header_buf = read_header(&resolved_path)?;
    let header = runland_header::inspect(&header_buf);

    if matches!(header, FileHeader::Unknown) {
        return Err(ExecError::new(
            ErrNo::ExecFormatError,
            "neither ELF nor a valid shebang",
        ));
    }

    let mut final_exec = match &header {
        FileHeader::Shebang {
            orig_interpreter, ..
        } => String::from_utf8(resolve_interpreter(orig_interpreter, &config.rootfs)?)
            .map_err(|_| ExecError::new(ErrNo::InvalidArgument, "interpreter path is not UTF-8"))?,
        _ => resolved_path.clone(),
    };

    let euid = unsafe { libc::geteuid() };
    let se_context = runland_config::process_context();

    let wrap_linker = runland_policy::should_linker_exec(
        config.linker_policy,
        final_exec.as_bytes(),
        &config.rootfs,
        euid,
        se_context.as_deref(),
    );

    let is_non_native_elf = header.is_non_native_elf();
    let is_system_binary = starts_with(final_exec.as_bytes(), b"/system");
    let unset_loader_vars =
        runland_rewrite::should_unset_loader_vars(&final_exec, is_non_native_elf, is_system_binary);

    let self_exe_hint = wrap_linker.then(|| final_exec.clone());

    let final_envp = runland_rewrite::rewrite_envp(envp, self_exe_hint.as_deref(), unset_loader_vars);
    let final_argv = runland_rewrite::rewrite_argv(argv, orig_path, &final_exec, wrap_linker, &header);

    if wrap_linker {
        final_exec = SYSTEM_LINKER.to_string();
    }

    Ok(ExecPlan {
        final_path: final_exec,
        final_argv,
        final_envp,
    })
}

fn resolve_and_prefix(orig_path: &str, rootfs: &[u8]) -> ExecResult<String> {
    let raw = orig_path.as_bytes();

    let normalized = if raw.first() == Some(&b'/') {
        runland_path::normalize(raw, false, true)
            .ok_or_else(|| ExecError::new(ErrNo::InvalidArgument, "path is malformed"))?
    } else {
        let absolutized = runland_path::absolutize(raw)
            .ok_or_else(|| ExecError::new(ErrNo::FileNameTooLong, "path too long to absolutize"))?;
        runland_path::normalize(&absolutized, false, true)
            .ok_or_else(|| ExecError::new(ErrNo::InvalidArgument, "path is malformed"))?
    };

    let prefixed = runland_rootfs::apply_rootfs_prefix(rootfs, &normalized)?;

    String::from_utf8(prefixed)
        .map_err(|_| ExecError::new(ErrNo::InvalidArgument, "resolved path is not UTF-8"))
}

fn check_executable(path: &str) -> ExecResult<()> {
    let c_path = std::ffi::CString::new(path)
        .map_err(|_| ExecError::new(ErrNo::InvalidArgument, "path contains a NUL byte"))?;

    let rc = unsafe { libc::access(c_path.as_ptr(), libc::X_OK) };
    if rc != 0 {
        return Err(ExecError::from_io(
            std::io::Error::last_os_error(),
            "access(X_OK) failed",
        ));
    }

    Ok(())
}

fn read_header(path: &str) -> ExecResult<Vec<u8>> {
    let mut file =
        std::fs::File::open(path).map_err(|e| ExecError::from_io(e, "failed to open candidate executable"))?;

    let mut buf = vec![0u8; HEADER_BUFFER_LEN];
    let mut total = 0;

    loop {
        let n = file
            .read(&mut buf[total..])
            .map_err(|e| ExecError::from_io(e, "failed to read candidate executable header"))?;
        if n == 0 {
            break;
        }
        total += n;
        if total == buf.len() {
            break;
        }
    }

    buf.truncate(total);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use runland_config::LinkerPolicy;
    use test_utilities::fake_rootfs::FakeRootfs;
    use test_utilities::fixtures;

    fn config(rootfs: &[u8]) -> RuntimeConfig {
        RuntimeConfig {
            rootfs: rootfs.to_vec(),
            intercept_execve: true,
            linker_policy: LinkerPolicy::Disable,
            log_level: 1,
        }
    }

    #[test]
    fn shebang_script_resolves_to_interpreter_and_rewrites_argv() {
        let rootfs = FakeRootfs::new();
        rootfs.write_executable("usr/bin/sh", &fixtures::native_elf_header());

        let scripts_dir = tempfile::tempdir().unwrap();
        let script_path = scripts_dir.path().join("s");
        std::fs::write(&script_path, fixtures::shebang_header("/bin/sh", None)).unwrap();
        let mut perms = std::fs::metadata(&script_path).unwrap().permissions();
        std::os::unix::fs::PermissionsExt::set_mode(&mut perms, 0o755);
        std::fs::set_permissions(&script_path, perms).unwrap();

        let cfg = config(&rootfs.path_bytes());
        let argv = fixtures::argv(&["s", "hi"]);
        let plan = build_exec_plan(script_path.to_str().unwrap(), &argv, &[], &cfg).unwrap();

        assert_eq!(
            plan.final_path,
            format!("{}/usr/bin/sh", rootfs.path().display())
        );
        assert_eq!(
            plan.final_argv,
            vec![
                "/bin/sh".to_string(),
                script_path.to_str().unwrap().to_string(),
                "hi".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_header_fails_with_exec_format_error() {
        let rootfs = FakeRootfs::new();
        let file = rootfs.write_executable("junk", b"not an executable at all");
        let cfg = config(&rootfs.path_bytes());

        let err = build_exec_plan(file.to_str().unwrap(), &[], &[], &cfg).unwrap_err();
        assert_eq!(err.errno, ErrNo::ExecFormatError);
    }

    #[test]
    fn missing_file_surfaces_access_error() {
        let cfg = config(b"/");
        let err = build_exec_plan("/nonexistent/for/tests", &[], &[], &cfg).unwrap_err();
        assert_eq!(err.errno, ErrNo::NoSuchFileOrDirectory);
    }
}
