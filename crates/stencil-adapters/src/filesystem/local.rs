//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use stencil_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StencilError, StencilResult},
};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }

    /// Every file below `root`, relative to it and sorted.
    pub fn list_files(&self, root: &Path) -> StencilResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf),
                reason: format!("Failed to walk directory: {e}"),
            })?;
            if entry.file_type().is_file() {
                if let Ok(relative) = entry.path().strip_prefix(root) {
                    files.push(relative.to_path_buf());
                }
            }
        }
        files.sort();
        Ok(files)
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StencilResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "Writing file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> StencilResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata =
                std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
            let mut perms = metadata.permissions();
            let mode = if executable {
                perms.mode() | 0o111
            } else {
                perms.mode() & !0o111
            };
            perms.set_mode(mode);
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            let _ = (path, executable);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> StencilResult<()> {
        debug!(path = %path.display(), "Removing directory");
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StencilError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_lists_nested_files() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let hooks = dir.path().join(".husky");

        fs.create_dir_all(&hooks).unwrap();
        fs.write_file(&hooks.join("pre-commit"), "npx lint-staged\n").unwrap();
        fs.write_file(&dir.path().join("package.json"), "{}\n").unwrap();

        assert_eq!(
            fs.list_files(dir.path()).unwrap(),
            vec![PathBuf::from(".husky/pre-commit"), PathBuf::from("package.json")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn sets_and_clears_executable_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let hook = dir.path().join("commit-msg");
        fs.write_file(&hook, "exit 0\n").unwrap();

        fs.set_permissions(&hook, true).unwrap();
        let mode = std::fs::metadata(&hook).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);

        fs.set_permissions(&hook, false).unwrap();
        let mode = std::fs::metadata(&hook).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0);
    }

    #[test]
    fn missing_parent_is_a_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let result = LocalFilesystem::new().write_file(&dir.path().join("a/b.txt"), "x");

        assert!(matches!(
            result,
            Err(StencilError::Application(ApplicationError::FilesystemError { .. }))
        ));
    }
}
