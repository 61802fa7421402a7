use crate::domain::ports::SiteStore;
use crate::utils::error::{ProvisionError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

fn invalid(message: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

/// Absolute form of a path that does not exist yet.
fn canonical_target(to: &Path) -> io::Result<PathBuf> {
    let parent = to
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let parent = fs::canonicalize(parent)?;
    Ok(match to.file_name() {
        Some(name) => parent.join(name),
        None => parent,
    })
}

/// `ancestors` holds the canonical paths of the source directories being
/// copied above `from`. A directory that contains one of them, or that lives
/// inside the destination, would never finish copying.
fn copy_dir_all(
    from: &Path,
    to: &Path,
    destination_root: &Path,
    ancestors: &mut Vec<PathBuf>,
) -> Result<()> {
    let canonical = fs::canonicalize(from).map_err(|e| ProvisionError::copy(from, to, e))?;
    if canonical.starts_with(destination_root) {
        return Err(ProvisionError::copy(
            from,
            to,
            invalid("directory lies inside the destination"),
        ));
    }
    if ancestors.iter().any(|a| a.starts_with(&canonical)) {
        return Err(ProvisionError::copy(
            from,
            to,
            invalid("directory symlink loops back into the tree being copied"),
        ));
    }

    fs::create_dir(to).map_err(|e| ProvisionError::copy(from, to, e))?;
    ancestors.push(canonical);

    let entries = fs::read_dir(from).map_err(|e| ProvisionError::copy(from, to, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ProvisionError::copy(from, to, e))?;
        let entry_path = entry.path();
        let target_path = to.join(entry.file_name());

        // Follows symlinks, so a linked directory is copied as a directory.
        let file_type = fs::metadata(&entry_path)
            .map_err(|e| ProvisionError::copy(&entry_path, &target_path, e))?
            .file_type();

        if file_type.is_dir() {
            copy_dir_all(&entry_path, &target_path, destination_root, ancestors)?;
        } else if file_type.is_file() {
            fs::copy(&entry_path, &target_path)
                .map_err(|e| ProvisionError::copy(&entry_path, &target_path, e))?;
        } else {
            // fifos, sockets and device nodes
            return Err(ProvisionError::copy(
                &entry_path,
                &target_path,
                invalid("not a regular file"),
            ));
        }
    }

    ancestors.pop();
    Ok(())
}

impl SiteStore for LocalStore {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> Result<()> {
        if to.exists() {
            return Err(ProvisionError::DestinationExists {
                path: to.to_path_buf(),
            });
        }
        let destination_root =
            canonical_target(to).map_err(|e| ProvisionError::copy(from, to, e))?;
        copy_dir_all(from, to, &destination_root, &mut Vec::new())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        fs::copy(from, to).map_err(|e| ProvisionError::copy(from, to, e))?;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| ProvisionError::read(path, e))
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).map_err(|e| ProvisionError::write(path, e))
    }
}
