pub mod cli;
pub mod toml_config;

use crate::domain::model::{OverwritePolicy, SiteName};
use crate::utils::error::Result;
use crate::utils::validation::{validate_site_name, Validate};
use std::path::PathBuf;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "vhost-clone")]
#[command(about = "Clone an existing virtual host's content and apache conf files under a new name")]
pub struct CliArgs {
    /// Name of the current (source) site
    #[arg(long = "cf", value_name = "CURRENT")]
    pub current: String,

    /// Name of the new (destination) site
    #[arg(long = "nf", value_name = "NEW")]
    pub new: String,

    /// TOML settings file overriding the content and configuration roots
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// What to do when the new site's conf file already exists
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_existing_conf: Option<OverwritePolicy>,

    /// Show what would be copied and rewritten without touching anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliArgs {
    /// Loads the settings file (if any) and folds the flags over it.
    pub fn resolve(&self) -> Result<ProvisionConfig> {
        let settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        settings.validate()?;

        let config = ProvisionConfig {
            source: SiteName::new(self.current.clone()),
            destination: SiteName::new(self.new.clone()),
            content_root: settings.content_root(),
            config_root: settings.config_root(),
            on_existing_conf: self.on_existing_conf.unwrap_or(settings.on_existing()),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Everything one run needs, fixed before the first filesystem operation.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    pub source: SiteName,
    pub destination: SiteName,
    pub content_root: PathBuf,
    pub config_root: PathBuf,
    pub on_existing_conf: OverwritePolicy,
}

impl ProvisionConfig {
    /// Default roots and policy.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::with_settings(source, destination, &TomlConfig::default())
    }

    pub fn with_settings(
        source: impl Into<String>,
        destination: impl Into<String>,
        settings: &TomlConfig,
    ) -> Self {
        Self {
            source: SiteName::new(source),
            destination: SiteName::new(destination),
            content_root: settings.content_root(),
            config_root: settings.config_root(),
            on_existing_conf: settings.on_existing(),
        }
    }
}

impl Validate for ProvisionConfig {
    fn validate(&self) -> Result<()> {
        validate_site_name("--cf", self.source.as_str())?;
        validate_site_name("--nf", self.destination.as_str())?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::ProvisionError;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_required_flags() {
        let args = CliArgs::try_parse_from(["vhost-clone", "--cf", "oldsite", "--nf", "newsite"])
            .unwrap();
        let config = args.resolve().unwrap();

        assert_eq!(config.source.as_str(), "oldsite");
        assert_eq!(config.destination.as_str(), "newsite");
        assert_eq!(config.content_root, PathBuf::from("/var/www"));
        assert_eq!(config.on_existing_conf, OverwritePolicy::Overwrite);
    }

    #[test]
    fn test_missing_flag_is_rejected() {
        assert!(CliArgs::try_parse_from(["vhost-clone", "--cf", "oldsite"]).is_err());
        assert!(CliArgs::try_parse_from(["vhost-clone", "--nf", "newsite"]).is_err());
    }

    #[test]
    fn test_short_and_unknown_flags_are_rejected() {
        assert!(CliArgs::try_parse_from(["vhost-clone", "-c", "a", "--nf", "b"]).is_err());
        assert!(
            CliArgs::try_parse_from(["vhost-clone", "--cf", "a", "--nf", "b", "--force"]).is_err()
        );
        // Prefixes of long flags are not expanded.
        assert!(CliArgs::try_parse_from(["vhost-clone", "--c", "a", "--nf", "b"]).is_err());
    }

    #[test]
    fn test_empty_identifier_is_argument_error() {
        let args = CliArgs::try_parse_from(["vhost-clone", "--cf", "", "--nf", "b"]).unwrap();
        assert!(matches!(
            args.resolve(),
            Err(ProvisionError::Argument { .. })
        ));
    }

    #[test]
    fn test_flag_policy_overrides_settings() {
        let mut settings = NamedTempFile::new().unwrap();
        settings
            .write_all(b"[paths]\ncontent_root = \"/srv/www\"\n[conf]\non_existing = \"skip\"\n")
            .unwrap();
        let path = settings.path().to_str().unwrap().to_string();

        let args = CliArgs::try_parse_from([
            "vhost-clone",
            "--cf",
            "a",
            "--nf",
            "b",
            "--config",
            path.as_str(),
            "--on-existing-conf",
            "fail",
        ])
        .unwrap();
        let config = args.resolve().unwrap();

        assert_eq!(config.content_root, PathBuf::from("/srv/www"));
        assert_eq!(config.config_root, PathBuf::from("/etc/apache/sites"));
        assert_eq!(config.on_existing_conf, OverwritePolicy::Fail);
    }
}
