use crate::config::ProvisionConfig;
use crate::domain::ports::SiteStore;
use crate::utils::error::{ProvisionError, Result};
use std::path::PathBuf;

/// Checked before anything is written so a bad name leaves no trace.
pub fn ensure_source_dir<S: SiteStore>(store: &S, config: &ProvisionConfig) -> Result<PathBuf> {
    let source_dir = config.source.content_dir(&config.content_root);
    if !store.is_dir(&source_dir) {
        return Err(ProvisionError::SourceNotFound { path: source_dir });
    }
    Ok(source_dir)
}

/// Copies `<content_root>/<source>` to `<content_root>/<destination>` and
/// returns the new directory. Partial copies are left in place on error.
pub fn replicate_content<S: SiteStore>(store: &S, config: &ProvisionConfig) -> Result<PathBuf> {
    let source_dir = ensure_source_dir(store, config)?;
    tracing::info!("Current folder [{}] exists", source_dir.display());

    let destination_dir = config.destination.content_dir(&config.content_root);
    store.copy_tree(&source_dir, &destination_dir)?;

    tracing::info!(
        "Copied the folder and its contents [{}] to [{}]",
        source_dir.display(),
        destination_dir.display()
    );
    Ok(destination_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStore;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(temp: &TempDir) -> ProvisionConfig {
        let mut config = ProvisionConfig::new("oldsite", "newsite");
        config.content_root = temp.path().to_path_buf();
        config
    }

    #[test]
    fn test_missing_source_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);

        let err = replicate_content(&LocalStore::new(), &config).unwrap_err();

        assert!(matches!(err, ProvisionError::SourceNotFound { .. }));
        assert!(!temp.path().join("newsite").exists());
    }

    #[test]
    fn test_source_that_is_a_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("oldsite"), "not a dir").unwrap();
        let config = config_in(&temp);

        assert!(matches!(
            ensure_source_dir(&LocalStore::new(), &config),
            Err(ProvisionError::SourceNotFound { .. })
        ));
    }

    #[test]
    fn test_replicates_into_new_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("oldsite/css")).unwrap();
        fs::write(temp.path().join("oldsite/index.html"), "hello").unwrap();
        fs::write(temp.path().join("oldsite/css/site.css"), "body{}").unwrap();
        let config = config_in(&temp);

        let dest = replicate_content(&LocalStore::new(), &config).unwrap();

        assert_eq!(dest, temp.path().join("newsite"));
        assert_eq!(fs::read_to_string(dest.join("index.html")).unwrap(), "hello");
        assert_eq!(fs::read_to_string(dest.join("css/site.css")).unwrap(), "body{}");
        // Source untouched
        assert!(temp.path().join("oldsite/index.html").exists());
    }
}
