//! Construction of the final `argv`/`envp` handed to the raw `execve`
//! syscall: unsetting loader variables the system linker would otherwise
//! choke on, injecting the logical-executable hint when wrapping through
//! the linker, and splicing in an interpreter when a shebang fired.

mod argv;
mod envp;

pub use argv::rewrite_argv;
pub use envp::rewrite_envp;
