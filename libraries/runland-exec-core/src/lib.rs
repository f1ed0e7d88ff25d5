//! Orchestrates the interception pipeline for `execve` and reduces the
//! other `exec`-family entry points to it: PATH search with shell
//! fallback, fd-to-path conversion, and the raw syscall dispatch that
//! bypasses libc's own `execve` wrapper.

mod fexecve;
mod hook;
mod path_search;
mod pipeline;
mod raw_syscall;

pub use fexecve::fexecve_hook;
pub use hook::execve_hook;
pub use path_search::execvp_hook;
pub use pipeline::{build_exec_plan, ExecPlan};
pub use raw_syscall::raw_execve;
