//! Test helpers for writing instance files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Adjacency list of the path `0 - 1 - 2 - 3 - 4`.
pub(super) const PATH_FIVE: &str = "# path\n0: 1\n1: 0 2\n2: 1 3\n3: 2 4\n4: 3\n";

/// Settings mapping white to class 0 and black to class 1.
pub(super) const SETTINGS: &str = "# scale\n1\n0 255 255 255\n1 0 0 0\n";

/// A 3x1 image: white, black, white.
pub(super) const STRIP_IMAGE: &str = "P3\n3 1\n255\n255 255 255\n0 0 0\n255 255 255\n";

/// Temporary directory exposed as a UTF-8 path.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `contents` to `name` and return the full path.
    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).unwrap_or_else(|err| panic!("failed to write {path}: {err}"));
}
