use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{entities::common::Permissions, error::DomainError};

/// Final project structure ready for materialization.
///
/// This is the output of synthesis. It contains no business logic, only data,
/// and its files are kept in path order so two runs compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<FileToWrite>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String, perms: Permissions) {
        self.files.push(FileToWrite {
            path: path.into(),
            content,
            permissions: perms,
        });
    }

    pub fn with_file(
        mut self,
        path: impl Into<PathBuf>,
        content: String,
        perms: Permissions,
    ) -> Self {
        self.add_file(path, content, perms);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Order files by path.
    pub(crate) fn sort(&mut self) {
        self.files.sort_by(|a, b| a.path.cmp(&b.path));
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyProject);
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            let path_str = file.path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if file.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    /// Look up a file by its path relative to the root.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&FileToWrite> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Parent directories that must exist before the files are written.
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = self
            .files
            .iter()
            .filter_map(|f| f.path.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect();
        dirs.sort();
        dirs.dedup();
        dirs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
    pub permissions: Permissions,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}
