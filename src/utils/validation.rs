use crate::utils::error::{ProvisionError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();
    if display.is_empty() {
        return Err(ProvisionError::Validation {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(ProvisionError::Validation {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Identifiers carry no format rules, but an empty one would address the
/// root directory itself.
pub fn validate_site_name(flag: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProvisionError::Argument {
            field: flag.to_string(),
            message: "value cannot be empty or whitespace-only".to_string(),
        });
    }

    if value.contains('\0') {
        return Err(ProvisionError::Argument {
            field: flag.to_string(),
            message: "value contains null bytes".to_string(),
        });
    }

    Ok(())
}
