//! Template directory fixtures

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree of template files
///
/// Removed when dropped.
///
/// ```rust
/// use redzone_testkit::TemplateDir;
///
/// let dir = TemplateDir::new();
/// let path = dir.write("partials/nav.html", "<nav>{{ title }}</nav>");
/// assert!(path.is_file());
/// assert_eq!(dir.join("partials"), path.parent().unwrap());
/// ```
pub struct TemplateDir {
    temp: TempDir,
}

impl TemplateDir {
    /// Create an empty directory under `.tmp/`
    pub fn new() -> Self {
        Self {
            temp: crate::temp_dir_in_workspace(),
        }
    }

    /// Create a directory pre-filled with `(relative path, contents)` pairs
    pub fn with_files<'a>(files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let dir = Self::new();
        for (relative, contents) in files {
            dir.write(relative, contents);
        }
        dir
    }

    /// Root of the tree
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Path of `relative` inside the tree
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.temp.path().join(relative)
    }

    /// Write a file, creating parent directories as needed
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write(&self, relative: impl AsRef<Path>, contents: &str) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }
}

impl Default for TemplateDir {
    fn default() -> Self {
        Self::new()
    }
}
