use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing any prior content
    fn write(&self, base: &Path) -> Result<()> {
        write_file(&self.path(base), &self.render())
    }
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// The write is a whole-file replacement with no temporary-file-plus-rename
/// step; callers decide beforehand whether an existing file may be clobbered.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
