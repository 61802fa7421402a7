pub mod provision;
pub mod replicate;
pub mod rewrite;

pub use crate::domain::model::{ConfKind, ConfOutcome, OverwritePolicy, SiteName};
pub use crate::domain::ports::SiteStore;
pub use crate::utils::error::Result;
