/// Build a minimal ELF header buffer for the native build target, for
/// tests that need a plausible candidate executable without a real
/// toolchain-produced binary.
pub fn native_elf_header() -> Vec<u8> {
    elf_header(runland_constants::NATIVE_ELF_MACHINE)
}

/// Like [`native_elf_header`] but for an arbitrary `e_machine`, useful
/// for exercising the non-native-ELF path.
pub fn elf_header(e_machine: u16) -> Vec<u8> {
    let mut h = vec![0u8; runland_constants::HEADER_BUFFER_LEN];
    h[..4].copy_from_slice(&runland_constants::ELF_MAGIC);
    h[runland_constants::ELF_E_MACHINE_OFFSET..runland_constants::ELF_E_MACHINE_OFFSET + 2]
        .copy_from_slice(&e_machine.to_le_bytes());
    h
}

/// Build a shebang header line, terminated with a newline, for tests
/// that drive the header inspector or the full pipeline against a
/// script-like fixture.
pub fn shebang_header(interpreter: &str, arg: Option<&str>) -> Vec<u8> {
    let mut line = format!("#!{interpreter}");
    if let Some(arg) = arg {
        line.push(' ');
        line.push_str(arg);
    }
    line.push('\n');
    line.into_bytes()
}

/// Collect `&str` argv-style entries into the owned `Vec<String>` the
/// exec core expects.
pub fn argv(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

/// Collect `KEY=value` pairs into an owned envp `Vec<String>`.
pub fn envp(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shebang_header_formats_interpreter_and_argument() {
        assert_eq!(shebang_header("/bin/sh", None), b"#!/bin/sh\n".to_vec());
        assert_eq!(
            shebang_header("/bin/sh", Some("-x")),
            b"#!/bin/sh -x\n".to_vec()
        );
    }

    #[test]
    fn native_elf_header_round_trips_through_classify() {
        let header = native_elf_header();
        assert_eq!(&header[..4], &runland_constants::ELF_MAGIC);
    }
}
