use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// A throwaway rootfs tree under a `tempfile::TempDir`, for tests that
/// need real files to stat, open, and exec against rather than mocking
/// the filesystem.
pub struct FakeRootfs {
    _dir: tempfile::TempDir,
    root: PathBuf,
}

impl FakeRootfs {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir for fake rootfs");
        let root = dir.path().to_path_buf();
        std::fs::create_dir_all(root.join("usr/bin")).expect("failed to create usr/bin");
        FakeRootfs { _dir: dir, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn path_bytes(&self) -> Vec<u8> {
        self.root.to_string_lossy().into_owned().into_bytes()
    }

    /// Write an executable file at `relative` (e.g. `"usr/bin/sh"`)
    /// under the rootfs, creating parent directories as needed.
    pub fn write_executable(&self, relative: &str, contents: &[u8]) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }

        let mut f = std::fs::File::create(&path).expect("failed to create fixture file");
        f.write_all(contents).expect("failed to write fixture file");

        let mut perms = f.metadata().unwrap().permissions();
        perms.set_mode(0o755);
        f.set_permissions(perms).expect("failed to chmod fixture file");

        path
    }
}

impl Default for FakeRootfs {
    fn default() -> Self {
        Self::new()
    }
}
