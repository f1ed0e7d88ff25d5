use runland_constants::{ELF_E_MACHINE_OFFSET, ELF_MAGIC, ELF_MIN_HEADER_LEN, NATIVE_ELF_MACHINE};

/// Classify a header buffer as ELF or not, without loading program
/// headers — only the magic number and `e_machine` field are consulted.
///
/// Returns `None` when the buffer does not begin with the ELF magic.
/// Returns `Some(non_native)` when it does, where `non_native` is set
/// when `e_machine` does not match the build target's native machine
/// constant.
pub fn classify_elf(buf: &[u8]) -> Option<bool> {
    if buf.len() < ELF_MIN_HEADER_LEN || buf[..ELF_MAGIC.len()] != ELF_MAGIC[..] {
        return None;
    }

    let e_machine = u16::from_le_bytes([
        buf[ELF_E_MACHINE_OFFSET],
        buf[ELF_E_MACHINE_OFFSET + 1],
    ]);

    Some(e_machine != NATIVE_ELF_MACHINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elf_header(e_machine: u16) -> Vec<u8> {
        let mut h = vec![0u8; ELF_MIN_HEADER_LEN];
        h[..4].copy_from_slice(&ELF_MAGIC);
        h[ELF_E_MACHINE_OFFSET..ELF_E_MACHINE_OFFSET + 2]
            .copy_from_slice(&e_machine.to_le_bytes());
        h
    }

    #[test]
    fn rejects_short_buffers() {
        assert_eq!(classify_elf(&[0x7f, 0x45, 0x4c, 0x46]), None);
    }

    #[test]
    fn rejects_buffers_without_elf_magic() {
        let mut h = elf_header(NATIVE_ELF_MACHINE);
        h[0] = 0x00;
        assert_eq!(classify_elf(&h), None);
    }

    #[test]
    fn native_machine_is_not_non_native() {
        assert_eq!(classify_elf(&elf_header(NATIVE_ELF_MACHINE)), Some(false));
    }

    #[test]
    fn foreign_machine_is_non_native() {
        let foreign = if NATIVE_ELF_MACHINE == 62 { 183 } else { 62 };
        assert_eq!(classify_elf(&elf_header(foreign)), Some(true));
    }
}
