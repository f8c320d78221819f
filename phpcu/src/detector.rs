use check_updates_core::CheckError;
use std::path::{Path, PathBuf};

const MANIFEST: &str = "composer.json";

/// Locates the composer.json of a project
pub struct ProjectDetector {
    project_path: PathBuf,
}

impl ProjectDetector {
    pub fn new(project_path: PathBuf) -> Self {
        Self { project_path }
    }

    /// The manifest path: the given path itself if it names a composer.json,
    /// otherwise composer.json inside it
    pub fn manifest_path(&self) -> PathBuf {
        if self.project_path.file_name().is_some_and(|name| name == MANIFEST) {
            self.project_path.clone()
        } else {
            self.project_path.join(MANIFEST)
        }
    }

    /// Find composer.json, failing if it is missing
    pub fn detect(&self) -> Result<PathBuf, CheckError> {
        let path = self.manifest_path();
        if is_file(&path) {
            Ok(path)
        } else {
            Err(CheckError::ManifestNotFound { path })
        }
    }
}

fn is_file(path: &Path) -> bool {
    path.metadata().is_ok_and(|meta| meta.is_file())
}
