use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Outcome of writing a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Created,
    /// An existing file had different content.
    Replaced,
    /// The file already had this content and was left untouched.
    Unchanged,
}

/// A generated file to be written to disk.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// A file whose content is already up to date is not rewritten, so its
    /// modification time survives a regeneration.
    pub fn write(&self) -> Result<WriteResult> {
        let result = match fs::read_to_string(&self.path) {
            Ok(existing) if existing == self.content => return Ok(WriteResult::Unchanged),
            Ok(_) => WriteResult::Replaced,
            Err(_) => WriteResult::Created,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let file = File::new(temp.path().join("auth/v1/user.ts"), "export {};\n");

        assert_eq!(file.write().unwrap(), WriteResult::Created);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "export {};\n");
    }

    #[test]
    fn test_write_replaces_stale_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.ts");
        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "updated");
        assert_eq!(file.write().unwrap(), WriteResult::Replaced);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_write_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let file = File::new(temp.path().join("index.ts"), "export * from './user';\n");

        assert_eq!(file.write().unwrap(), WriteResult::Created);
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
        assert_eq!(file.content(), "export * from './user';\n");
    }
}
