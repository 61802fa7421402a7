use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Invalid argument {field}: {message}")]
    Argument { field: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Source directory [{}] does not exist", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Destination [{}] already exists", path.display())]
    DestinationExists { path: PathBuf },

    #[error("Failed to copy [{}] to [{}]: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to {action} [{}]: {source}", path.display())]
    ReadWrite {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file [{}] does not exist", path.display())]
    MissingConfigFile { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Content,
    ServerConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Logged and skipped; the run continues.
    Low,
    /// Rejected before anything touched the filesystem.
    Medium,
    High,
    Critical,
}

impl ProvisionError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadWrite {
            action: "read",
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadWrite {
            action: "write",
            path: path.into(),
            source,
        }
    }

    pub fn copy(from: impl Into<PathBuf>, to: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Copy {
            from: from.into(),
            to: to.into(),
            source,
        }
    }

    /// Only a missing configuration file lets the run carry on.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::MissingConfigFile { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Argument { .. } | Self::Config { .. } | Self::Validation { .. } => {
                ErrorCategory::Input
            }
            Self::SourceNotFound { .. } | Self::DestinationExists { .. } | Self::Copy { .. } => {
                ErrorCategory::Content
            }
            Self::ReadWrite { .. } | Self::MissingConfigFile { .. } => ErrorCategory::ServerConfig,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingConfigFile { .. } => ErrorSeverity::Low,
            Self::Argument { .. } | Self::Config { .. } | Self::Validation { .. } => {
                ErrorSeverity::Medium
            }
            Self::SourceNotFound { .. } | Self::DestinationExists { .. } | Self::Copy { .. } => {
                ErrorSeverity::High
            }
            Self::ReadWrite { .. } => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error when it ends the run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Argument { field, message } => {
                format!("Argument {} was rejected: {}", field, message)
            }
            Self::Config { message } => format!("Could not load settings: {}", message),
            Self::Validation { field, reason, .. } => {
                format!("Setting {} is invalid: {}", field, reason)
            }
            Self::SourceNotFound { path } => format!(
                "Directory [{}] does not exist. Aborting the execution",
                path.display()
            ),
            Self::DestinationExists { path } => format!(
                "[{}] already exists and will not be overwritten",
                path.display()
            ),
            Self::Copy { from, to, source } => format!(
                "Error occurred while copying [{}] to [{}]: {}",
                from.display(),
                to.display(),
                source
            ),
            Self::ReadWrite {
                action,
                path,
                source,
            } => format!(
                "Error occurred while trying to {} the file [{}]: {}",
                action,
                path.display(),
                source
            ),
            Self::MissingConfigFile { path } => {
                format!("The file [{}] does not exist", path.display())
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Argument { .. } => "Pass both --cf <current site> and --nf <new site>",
            Self::Config { .. } => "Check that the settings file exists and is valid TOML",
            Self::Validation { .. } => "Fix the reported setting and run again",
            Self::SourceNotFound { .. } => {
                "Check that you have specified the correct current site name"
            }
            Self::DestinationExists { .. } => {
                "Choose another new site name or remove the existing destination"
            }
            Self::Copy { .. } => "Check permissions and free space under the content root",
            Self::ReadWrite { .. } => {
                "Check permissions on the configuration root; the content copy was not undone"
            }
            Self::MissingConfigFile { .. } => "Nothing to do; the file is skipped",
        }
    }
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
