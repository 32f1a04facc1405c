//! Document file source.

use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// A markup document read from disk.
///
/// The file is read once at construction; listings are static.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    contents: String,
}

impl FileSource {
    /// Read the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist and
    /// `InputError::Io` for any other read failure, including invalid UTF-8.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            contents,
        })
    }

    /// Path the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory relative resource paths resolve against.
    pub fn base_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Full document text.
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_is_file_not_found() {
        let result = FileSource::new("/nonexistent/richlist/doc.txt");
        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn reads_contents_and_base_dir() {
        let dir = std::env::temp_dir().join("richlist_file_source");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("doc.txt");
        fs::write(&path, "[title]Hi\nbody\n").unwrap();

        let source = FileSource::new(&path).unwrap();
        assert_eq!(source.contents(), "[title]Hi\nbody\n");
        assert_eq!(source.base_dir(), dir);
        assert_eq!(source.path(), path.as_path());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn bare_relative_path_resolves_against_current_dir() {
        let source = FileSource {
            path: PathBuf::from("doc.txt"),
            contents: String::new(),
        };
        assert_eq!(source.base_dir(), PathBuf::from("."));
    }
}
