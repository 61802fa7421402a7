pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;

pub use crate::config::{cli::LocalStore, toml_config::TomlConfig, ProvisionConfig};
pub use crate::core::{provision::Provisioner, rewrite::substitute};
pub use crate::domain::model::{ConfKind, ConfOutcome, OverwritePolicy, ProvisionReport, SiteName};
pub use crate::utils::error::{ProvisionError, Result};
