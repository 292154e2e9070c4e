//! Source provider abstraction so the pipeline can run without a
//! filesystem.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Trait that abstracts reading GEDCOM text for the pipeline.
pub trait SourceProvider {
    /// Read the full source text for `path`.
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error>;
}

/// Default filesystem-backed provider.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, since
/// GEDCOM exports frequently carry stray ANSEL or Latin-1 bytes in names.
pub struct FileSystemProvider;

impl SourceProvider for FileSystemProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// In-memory source provider for testing.
pub struct InMemoryProvider {
    files: HashMap<PathBuf, String>,
}

impl InMemoryProvider {
    pub fn new(files: HashMap<PathBuf, String>) -> Self {
        Self { files }
    }

    /// Provider holding a single file.
    pub fn single(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let mut files = HashMap::new();
        files.insert(path.into(), text.into());
        Self { files }
    }
}

impl SourceProvider for InMemoryProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found in memory: {}", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_read_source_found() {
        let provider = InMemoryProvider::single("/tree.ged", "0 HEAD");
        let content = provider.read_source(Path::new("/tree.ged")).unwrap();
        assert_eq!(content, "0 HEAD");
    }

    #[test]
    fn in_memory_read_source_not_found() {
        let provider = InMemoryProvider::new(HashMap::new());
        let err = provider.read_source(Path::new("/missing.ged")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn filesystem_missing_file_is_not_found() {
        let err = FileSystemProvider
            .read_source(Path::new("/definitely/not/here.ged"))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
