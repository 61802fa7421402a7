use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of a site. Used verbatim as a directory name, as the stem of its
/// configuration file names and as the text rewritten inside them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteName(String);

impl SiteName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<content_root>/<name>`
    pub fn content_dir(&self, content_root: &Path) -> PathBuf {
        content_root.join(&self.0)
    }

    /// `<config_root>/<name><suffix>`
    pub fn conf_file(&self, config_root: &Path, kind: ConfKind) -> PathBuf {
        config_root.join(format!("{}{}", self.0, kind.suffix()))
    }
}

impl fmt::Display for SiteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfKind {
    Plain,
    Tls,
}

impl ConfKind {
    /// Processing order.
    pub const ALL: [ConfKind; 2] = [ConfKind::Plain, ConfKind::Tls];

    pub fn suffix(self) -> &'static str {
        match self {
            ConfKind::Plain => ".conf",
            ConfKind::Tls => "-le-ssl.conf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfKind::Plain => "port 80",
            ConfKind::Tls => "ssl",
        }
    }
}

/// What to do when the destination configuration file is already there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    Fail,
    #[default]
    Overwrite,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConfOutcome {
    Rewritten { path: PathBuf, occurrences: usize },
    Unchanged { path: PathBuf },
    Missing { source: PathBuf },
    SkippedExisting { path: PathBuf },
}

impl ConfOutcome {
    /// Whether a destination file was written by this run.
    pub fn wrote_file(&self) -> bool {
        matches!(self, Self::Rewritten { .. } | Self::Unchanged { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfReport {
    pub kind: ConfKind,
    #[serde(flatten)]
    pub outcome: ConfOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProvisionReport {
    pub source: SiteName,
    pub destination: SiteName,
    pub content_dir: PathBuf,
    pub conf_files: Vec<ConfReport>,
}

impl ProvisionReport {
    pub fn outcome(&self, kind: ConfKind) -> Option<&ConfOutcome> {
        self.conf_files
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| &r.outcome)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedConf {
    pub kind: ConfKind,
    pub source: PathBuf,
    pub source_exists: bool,
    pub destination: PathBuf,
    pub destination_exists: bool,
}

/// Everything a run would touch, computed without side effects.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionPlan {
    pub source_dir: PathBuf,
    pub source_dir_exists: bool,
    pub destination_dir: PathBuf,
    pub destination_dir_exists: bool,
    pub on_existing_conf: OverwritePolicy,
    pub conf_files: Vec<PlannedConf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_paths() {
        let site = SiteName::new("oldsite");
        assert_eq!(
            site.content_dir(Path::new("/var/www")),
            PathBuf::from("/var/www/oldsite")
        );
        assert_eq!(
            site.conf_file(Path::new("/etc/apache/sites"), ConfKind::Plain),
            PathBuf::from("/etc/apache/sites/oldsite.conf")
        );
        assert_eq!(
            site.conf_file(Path::new("/etc/apache/sites"), ConfKind::Tls),
            PathBuf::from("/etc/apache/sites/oldsite-le-ssl.conf")
        );
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let report = ConfReport {
            kind: ConfKind::Tls,
            outcome: ConfOutcome::Rewritten {
                path: PathBuf::from("/etc/new-le-ssl.conf"),
                occurrences: 2,
            },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "tls");
        assert_eq!(json["status"], "rewritten");
        assert_eq!(json["occurrences"], 2);
    }
}
