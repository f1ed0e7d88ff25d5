use crate::pipeline::build_exec_plan;
use crate::raw_syscall::raw_execve;
use runland_config::RuntimeConfig;
use runland_constants::ExecError;

/// Entry point every `exec*` adaptor funnels into. Builds the rewritten
/// plan and dispatches it to the raw syscall; if interception is
/// disabled by configuration, the original triple is handed to the
/// kernel untouched.
///
/// On success this never returns (the process image is replaced); on
/// failure it returns the error to surface to the caller.
pub fn execve_hook(path: &str, argv: &[String], envp: &[String]) -> ExecError {
    let config = RuntimeConfig::read();

    if !config.intercept_execve {
        return raw_execve(path, argv, envp);
    }

    log::debug!("execve_hook: path={path:?} argv={argv:?}");

    match build_exec_plan(path, argv, envp, &config) {
        Ok(plan) => {
            log::info!(
                "dispatching execve: final_path={:?} final_argv={:?}",
                plan.final_path,
                plan.final_argv
            );
            raw_execve(&plan.final_path, &plan.final_argv, &plan.final_envp)
        }
        Err(e) => {
            log::warn!("execve_hook failed for {path:?}: {e}");
            e
        }
    }
}
