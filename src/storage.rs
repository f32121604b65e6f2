use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

/// The markdown file an export is written to
///
/// Every export overwrites the whole file.
pub struct OutputFile {
    file_path: PathBuf,
}

impl OutputFile {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.file_path, content)?;
        info!(path = %self.file_path.display(), bytes = content.len(), "wrote export");
        Ok(())
    }
}
