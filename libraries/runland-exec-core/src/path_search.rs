use crate::hook::execve_hook;
use runland_constants::{ErrNo, ExecError};

/// `execvp`/`execlp`/`execvpe`-style dispatch: if `name` contains a `/`,
/// exec it directly; otherwise search `PATH`, skipping entries that
/// don't exist or aren't directories and remembering a permission
/// failure to report if nothing else succeeds.
pub fn execvp_hook(name: &str, argv: &[String], envp: &[String]) -> ExecError {
    if name.contains('/') {
        return exec_with_enoexec_fallback(name, argv, envp);
    }

    let path_var = std::env::var("PATH").unwrap_or_default();
    let mut saw_eacces = false;
    let mut searched_any = false;

    for dir in path_var.split(':') {
        searched_any = true;
        let dir = if dir.is_empty() { "." } else { dir };
        let candidate = format!("{dir}/{name}");

        let err = exec_with_enoexec_fallback(&candidate, argv, envp);

        match err.errno {
            ErrNo::NoSuchFileOrDirectory
            | ErrNo::NotADirectory
            | ErrNo::TooManyLevelsOfSymbolicLinks
            | ErrNo::IsADirectory
            | ErrNo::FileNameTooLong => continue,
            ErrNo::PermissionDenied => {
                saw_eacces = true;
                continue;
            }
            _ => return err,
        }
    }

    if saw_eacces {
        ExecError::new(ErrNo::PermissionDenied, "no PATH entry was executable")
    } else if searched_any {
        ExecError::new(ErrNo::NoSuchFileOrDirectory, "not found on any PATH entry")
    } else {
        ExecError::new(ErrNo::NoSuchFileOrDirectory, "PATH is empty")
    }
}

/// Exec `path` directly, retrying as `sh path argv[1..]` when the target
/// has no recognizable ELF or shebang header (`ENOEXEC`), matching the
/// historical shell-fallback behavior of `execvp`.
fn exec_with_enoexec_fallback(path: &str, argv: &[String], envp: &[String]) -> ExecError {
    let err = execve_hook(path, argv, envp);
    if err.errno != ErrNo::ExecFormatError {
        return err;
    }

    let mut sh_argv = Vec::with_capacity(argv.len().max(1) + 1);
    sh_argv.push("sh".to_string());
    sh_argv.push(path.to_string());
    if argv.len() > 1 {
        sh_argv.extend_from_slice(&argv[1..]);
    }

    execve_hook("/bin/sh", &sh_argv, envp)
}
