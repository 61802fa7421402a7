use crate::config::ProvisionConfig;
use crate::domain::model::{ConfKind, ConfOutcome, OverwritePolicy};
use crate::domain::ports::SiteStore;
use crate::utils::error::{ProvisionError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub occurrences: usize,
    pub text: String,
}

/// Literal, non-overlapping replacement of every `from` with `to`.
pub fn substitute(text: &str, from: &str, to: &str) -> Substitution {
    if from.is_empty() {
        return Substitution {
            occurrences: 0,
            text: text.to_string(),
        };
    }

    let occurrences = text.matches(from).count();
    let text = if occurrences == 0 {
        text.to_string()
    } else {
        text.replace(from, to)
    };
    Substitution { occurrences, text }
}

/// Clone `<source><suffix>` to `<destination><suffix>` under the configuration
/// root and rename the site inside the copy.
///
/// A missing source file comes back as [`ProvisionError::MissingConfigFile`],
/// which callers treat as a skip. Everything else is fatal.
pub fn clone_conf<S: SiteStore>(
    store: &S,
    config: &ProvisionConfig,
    kind: ConfKind,
) -> Result<ConfOutcome> {
    let source_path = config.source.conf_file(&config.config_root, kind);
    let destination_path = config.destination.conf_file(&config.config_root, kind);

    tracing::info!(
        "Checking if {} conf file of current site [{}] exists",
        kind.label(),
        source_path.display()
    );
    if !store.is_file(&source_path) {
        return Err(ProvisionError::MissingConfigFile { path: source_path });
    }

    if store.exists(&destination_path) {
        match config.on_existing_conf {
            OverwritePolicy::Fail => {
                return Err(ProvisionError::DestinationExists {
                    path: destination_path,
                });
            }
            OverwritePolicy::Skip => {
                tracing::warn!(
                    "File [{}] already exists, leaving it untouched",
                    destination_path.display()
                );
                return Ok(ConfOutcome::SkippedExisting {
                    path: destination_path,
                });
            }
            OverwritePolicy::Overwrite => {
                tracing::warn!(
                    "File [{}] already exists and will be overwritten",
                    destination_path.display()
                );
            }
        }
    }

    tracing::info!(
        "Creating a copy of [{}] for the new site [{}]",
        source_path.display(),
        config.destination
    );
    store.copy_file(&source_path, &destination_path)?;

    let data = store.read_to_string(&destination_path)?;
    let result = substitute(&data, config.source.as_str(), config.destination.as_str());

    if result.occurrences == 0 {
        tracing::info!(
            "No occurrences of [{}] found in the file [{}], nothing to rewrite",
            config.source,
            destination_path.display()
        );
        return Ok(ConfOutcome::Unchanged {
            path: destination_path,
        });
    }

    tracing::info!(
        "Total of [{}] occurrences of [{}] found in the file [{}]",
        result.occurrences,
        config.source,
        destination_path.display()
    );
    store.write_string(&destination_path, &result.text)?;
    tracing::info!(
        "Replaced [{}] with [{}] in the file [{}]",
        config.source,
        config.destination,
        destination_path.display()
    );

    Ok(ConfOutcome::Rewritten {
        path: destination_path,
        occurrences: result.occurrences,
    })
}
