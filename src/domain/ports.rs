use crate::utils::error::Result;
use std::path::Path;

/// Filesystem operations the provisioning steps rely on.
pub trait SiteStore {
    fn is_dir(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
    fn exists(&self, path: &Path) -> bool;

    /// Recursively copy `from` into a new directory `to`. Fails if `to` exists.
    fn copy_tree(&self, from: &Path, to: &Path) -> Result<()>;

    /// Byte copy, replacing `to` if present.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<()>;

    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write_string(&self, path: &Path, contents: &str) -> Result<()>;
}
