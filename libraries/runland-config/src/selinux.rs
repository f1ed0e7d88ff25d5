use regex::Regex;
use runland_constants::{ENV_SE_PROCESS_CONTEXT, SELINUX_ATTR_CURRENT};
use std::sync::LazyLock;

static CONTEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^u:r:[^ \n\t\r:]+:s0(:c[0-9]+,c[0-9]+(,c[0-9]+,c[0-9]+)?)?$")
        .expect("process context regex is a fixed, valid pattern")
});

/// Resolve the current process's SELinux domain: the env var first (so a
/// parent that already computed it for a child can pass it down without a
/// `/proc` read), falling back to `/proc/self/attr/current`. Returns
/// `None` if neither source yields a string matching the fixed context
/// grammar.
pub fn process_context() -> Option<String> {
    if let Ok(v) = std::env::var(ENV_SE_PROCESS_CONTEXT) {
        if CONTEXT_RE.is_match(&v) {
            return Some(v);
        }
    }

    let raw = std::fs::read_to_string(SELINUX_ATTR_CURRENT).ok()?;
    let trimmed = raw.trim_end_matches(['\n', '\0']);

    if CONTEXT_RE.is_match(trimmed) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

/// `true` iff `context` starts with any of the exempt domain prefixes
/// (`untrusted_app_25`/`untrusted_app_27`), which already have data-file
/// exec access and therefore never need the linker-exec workaround.
pub fn is_exempt_domain(context: &str) -> bool {
    runland_constants::EXEMPT_SELINUX_PREFIXES
        .iter()
        .any(|prefix| context.starts_with(prefix))
}
