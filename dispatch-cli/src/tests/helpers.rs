//! Test helpers for laying out fleet and location files on disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const FLEET_JSON: &str = include_str!("../../../fixtures/fleet.json");
pub(super) const LOCATIONS_JSON: &str = include_str!("../../../fixtures/locations.json");

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory holding `fleet.json` and `locations.json`.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    /// Workspace with both sample inputs written.
    pub(super) fn with_samples() -> Self {
        let workspace = Self::new();
        write_utf8(&workspace.fleet(), FLEET_JSON.as_bytes());
        write_utf8(&workspace.locations(), LOCATIONS_JSON.as_bytes());
        workspace
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn fleet(&self) -> Utf8PathBuf {
        self.root.join("fleet.json")
    }

    pub(super) fn locations(&self) -> Utf8PathBuf {
        self.root.join("locations.json")
    }
}
