//! Template lookup through an ordered list of search paths

use crate::template::error::TemplateError;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Resolves template names against search paths
///
/// Names are relative paths. The first search path that holds a matching
/// file wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateLoader {
    search_paths: Vec<PathBuf>,
    extension: Option<String>,
}

impl TemplateLoader {
    /// Create a loader over `search_paths`, trying `extension` for bare names
    pub fn new(search_paths: Vec<PathBuf>, extension: Option<String>) -> Self {
        Self {
            search_paths,
            extension: extension.map(|ext| ext.trim_start_matches('.').to_string()),
        }
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Find the file for `name`
    ///
    /// # Errors
    ///
    /// - `InvalidTemplateName` if `name` is absolute, rooted or contains `..`
    /// - `TemplateNotFound` listing every candidate if nothing matches
    pub fn resolve(&self, name: &str) -> Result<PathBuf, TemplateError> {
        let relative = Path::new(name);
        if !is_safe_relative(relative) {
            return Err(TemplateError::InvalidTemplateName {
                name: name.to_string(),
            });
        }

        let mut searched = Vec::new();
        for dir in &self.search_paths {
            for candidate in self.candidates(dir, relative) {
                tracing::trace!(candidate = %candidate.display(), "template lookup");
                if candidate.is_file() {
                    return Ok(candidate);
                }
                searched.push(candidate);
            }
        }

        Err(TemplateError::TemplateNotFound {
            name: name.to_string(),
            searched,
        })
    }

    /// Resolve `name` and read the file
    pub fn load(&self, name: &str) -> Result<(PathBuf, String), TemplateError> {
        let path = self.resolve(name)?;
        let source = fs::read_to_string(&path).map_err(|e| TemplateError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok((path, source))
    }

    fn candidates(&self, dir: &Path, relative: &Path) -> Vec<PathBuf> {
        let mut candidates = vec![dir.join(relative)];
        if let Some(ext) = &self.extension {
            if relative.extension().is_none() {
                candidates.push(dir.join(relative.with_extension(ext)));
            }
        }
        candidates
    }
}

/// Relative, non-empty, and free of `..`, root and prefix components
fn is_safe_relative(path: &Path) -> bool {
    if path.as_os_str().is_empty() || path.is_absolute() {
        return false;
    }
    path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
