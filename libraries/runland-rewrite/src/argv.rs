use runland_header::FileHeader;

/// Build the final argv handed to the kernel.
///
/// `argv[0]` is replaced by the shebang's interpreter token when a
/// shebang fired; when wrapping through the system linker, `final_exec`
/// is inserted as the linker's own argv[1]; a shebang's single
/// interpreter argument and the original script path follow.
pub fn rewrite_argv(
    argv: &[impl AsRef<str>],
    orig_exec: &str,
    final_exec: &str,
    wrap_linker: bool,
    header: &FileHeader,
) -> Vec<String> {
    let shebang_set = header.is_shebang();

    let mut out = Vec::with_capacity(argv.len() + 3);

    out.push(match header {
        FileHeader::Shebang {
            orig_interpreter, ..
        } => orig_interpreter.clone(),
        _ => argv.first().map(|a| a.as_ref().to_string()).unwrap_or_default(),
    });

    if wrap_linker {
        out.push(final_exec.to_string());
    }

    if let FileHeader::Shebang {
        interpreter_arg, ..
    } = header
    {
        if let Some(arg) = interpreter_arg {
            out.push(arg.clone());
        }
        out.push(orig_exec.to_string());
    }

    out.extend(argv.iter().skip(1).map(|a| a.as_ref().to_string()));

    debug_assert!(shebang_set || header.is_elf() || out.first().is_some());

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elf() -> FileHeader {
        FileHeader::Elf { non_native: false }
    }

    fn shebang(interp: &str, arg: Option<&str>) -> FileHeader {
        FileHeader::Shebang {
            orig_interpreter: interp.to_string(),
            interpreter_arg: arg.map(|s| s.to_string()),
        }
    }

    #[test]
    fn plain_elf_passes_argv_through() {
        let argv = ["myapp", "--v"];
        let out = rewrite_argv(&argv, "/tmp/myapp", "/tmp/myapp", false, &elf());
        assert_eq!(out, vec!["myapp", "--v"]);
    }

    #[test]
    fn shebang_rewrite_inserts_interpreter_and_script() {
        let argv = ["s", "hi"];
        let out = rewrite_argv(
            &argv,
            "/tmp/s",
            "/usr/bin/sh",
            false,
            &shebang("/bin/sh", None),
        );
        assert_eq!(out, vec!["/bin/sh", "/tmp/s", "hi"]);
    }

    #[test]
    fn shebang_with_arg_inserts_the_argument() {
        let argv = ["s"];
        let out = rewrite_argv(
            &argv,
            "/tmp/s",
            "/usr/bin/sh",
            false,
            &shebang("/bin/sh", Some("-x")),
        );
        assert_eq!(out, vec!["/bin/sh", "-x", "/tmp/s"]);
    }

    #[test]
    fn linker_wrap_inserts_final_exec_as_argv1() {
        let argv = ["myapp", "--v"];
        let out = rewrite_argv(&argv, "/usr/bin/myapp", "/usr/bin/myapp", true, &elf());
        assert_eq!(out, vec!["myapp", "/usr/bin/myapp", "--v"]);
    }

    #[test]
    fn linker_wrap_and_shebang_compose() {
        let argv = ["s"];
        let out = rewrite_argv(
            &argv,
            "/tmp/s",
            "/usr/bin/sh",
            true,
            &shebang("/bin/sh", None),
        );
        assert_eq!(out, vec!["/bin/sh", "/usr/bin/sh", "/tmp/s"]);
    }
}
