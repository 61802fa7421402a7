use crate::config::ProvisionConfig;
use crate::core::replicate::replicate_content;
use crate::core::rewrite::clone_conf;
use crate::domain::model::{
    ConfKind, ConfOutcome, ConfReport, PlannedConf, ProvisionPlan, ProvisionReport,
};
use crate::domain::ports::SiteStore;
use crate::utils::error::Result;

pub struct Provisioner<S: SiteStore> {
    store: S,
    config: ProvisionConfig,
}

impl<S: SiteStore> Provisioner<S> {
    pub fn new(store: S, config: ProvisionConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ProvisionConfig {
        &self.config
    }

    /// Content copy, then the plain conf file, then the TLS one. The first
    /// fatal error stops the run; nothing already done is undone.
    pub fn run(&self) -> Result<ProvisionReport> {
        tracing::info!(
            "Cloning site [{}] as [{}]",
            self.config.source,
            self.config.destination
        );

        tracing::info!("Copying the contents of current folder to new folder");
        let content_dir = replicate_content(&self.store, &self.config)?;

        let mut conf_files = Vec::with_capacity(ConfKind::ALL.len());
        for kind in ConfKind::ALL {
            let outcome = match clone_conf(&self.store, &self.config, kind) {
                Ok(outcome) => outcome,
                Err(e) if !e.is_fatal() => {
                    tracing::warn!("{}, skipping the {} conf file", e, kind.label());
                    ConfOutcome::Missing {
                        source: self.config.source.conf_file(&self.config.config_root, kind),
                    }
                }
                Err(e) => return Err(e),
            };
            conf_files.push(ConfReport { kind, outcome });
        }

        tracing::info!("Site [{}] provisioned", self.config.destination);
        Ok(ProvisionReport {
            source: self.config.source.clone(),
            destination: self.config.destination.clone(),
            content_dir,
            conf_files,
        })
    }

    /// Paths and existence checks only; no writes.
    pub fn plan(&self) -> ProvisionPlan {
        let config = &self.config;
        let source_dir = config.source.content_dir(&config.content_root);
        let destination_dir = config.destination.content_dir(&config.content_root);

        let conf_files = ConfKind::ALL
            .into_iter()
            .map(|kind| {
                let source = config.source.conf_file(&config.config_root, kind);
                let destination = config.destination.conf_file(&config.config_root, kind);
                PlannedConf {
                    kind,
                    source_exists: self.store.is_file(&source),
                    destination_exists: self.store.exists(&destination),
                    source,
                    destination,
                }
            })
            .collect();

        ProvisionPlan {
            source_dir_exists: self.store.is_dir(&source_dir),
            destination_dir_exists: self.store.exists(&destination_dir),
            source_dir,
            destination_dir,
            on_existing_conf: config.on_existing_conf,
            conf_files,
        }
    }
}
