//! Classifies a candidate executable's leading bytes as ELF (native or
//! not) or a shebang line, and parses the shebang grammar into an
//! interpreter plus at most one argument.

mod elf;
mod shebang;

pub use elf::classify_elf;
pub use shebang::parse_shebang;

/// Size of the buffer callers should read from a candidate executable
/// before calling [`inspect`]. Comfortably larger than the kernel's own
/// shebang limit (128 bytes before Linux 5.1, 256 after) so that scripts
/// the kernel itself would reject on an overlong interpreter line are
/// still handled here.
pub const HEADER_BUFFER_LEN: usize = runland_constants::HEADER_BUFFER_LEN;

/// Classification of a candidate executable's header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileHeader {
    /// ELF magic present. `non_native` is set when `e_machine` does not
    /// match the build target.
    Elf { non_native: bool },
    /// A `#!interpreter [arg]` line was found and parsed.
    Shebang {
        /// The interpreter token exactly as written in the file.
        orig_interpreter: String,
        /// At most one trailing argument, taken verbatim (internal
        /// whitespace is part of the argument).
        interpreter_arg: Option<String>,
    },
    /// Neither ELF magic nor a parseable shebang line.
    Unknown,
}

impl FileHeader {
    pub fn is_elf(&self) -> bool {
        matches!(self, FileHeader::Elf { .. })
    }

    pub fn is_non_native_elf(&self) -> bool {
        matches!(self, FileHeader::Elf { non_native: true })
    }

    pub fn is_shebang(&self) -> bool {
        matches!(self, FileHeader::Shebang { .. })
    }
}

/// Classify a header buffer per the ELF-then-shebang rule: ELF magic is
/// checked first, a shebang second, and anything else yields `Unknown`.
pub fn inspect(buf: &[u8]) -> FileHeader {
    if let Some(non_native) = classify_elf(buf) {
        return FileHeader::Elf { non_native };
    }

    if buf.len() >= 3 && &buf[..2] == b"#!" {
        if let Some((orig_interpreter, interpreter_arg)) = parse_shebang(buf) {
            return FileHeader::Shebang {
                orig_interpreter,
                interpreter_arg,
            };
        }
    }

    FileHeader::Unknown
}

/// Turn a shebang's raw interpreter token into the path the kernel should
/// actually be asked to run: absolute tokens are normalized and
/// rootfs-prefixed, relative ones are absolutized against the current
/// working directory first.
pub fn resolve_interpreter(
    orig_interpreter: &str,
    rootfs: &[u8],
) -> runland_constants::ExecResult<Vec<u8>> {
    use runland_constants::{ErrNo, ExecError};

    let raw = orig_interpreter.as_bytes();

    let absolute = if raw.first() == Some(&b'/') {
        raw.to_vec()
    } else {
        runland_path::absolutize(raw)
            .ok_or_else(|| ExecError::new(ErrNo::FileNameTooLong, "interpreter path too long"))?
    };

    let normalized = runland_path::normalize(&absolute, false, true)
        .ok_or_else(|| ExecError::new(ErrNo::InvalidArgument, "interpreter path malformed"))?;

    runland_rootfs::apply_rootfs_prefix(rootfs, &normalized)
}
