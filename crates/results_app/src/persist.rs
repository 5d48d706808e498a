use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output path has no usable parent directory: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Replaces the rendered page at `path` in one step, so a browser reloading
/// the file never sees a half-written document.
#[derive(Debug, Clone)]
pub struct PageWriter {
    path: PathBuf,
}

impl PageWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, content: &str) -> Result<(), PersistError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.is_dir() {
            fs::create_dir_all(&dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        }

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.path).map_err(|e| PersistError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::PageWriter;

    #[test]
    fn write_replaces_existing_page() {
        let temp = TempDir::new().unwrap();
        let writer = PageWriter::new(temp.path().join("results.html"));

        writer.write("first").unwrap();
        writer.write("second").unwrap();
        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "second");
    }

    #[test]
    fn missing_parent_is_created() {
        let temp = TempDir::new().unwrap();
        let writer = PageWriter::new(temp.path().join("out/nested/results.html"));
        writer.write("page").unwrap();
        assert!(writer.path().is_file());
    }

    #[test]
    fn parent_that_is_a_file_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();

        let writer = PageWriter::new(blocker.join("results.html"));
        assert!(writer.write("page").is_err());
    }
}
