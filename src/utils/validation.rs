use crate::utils::error::{PassesError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Trims the raw name and rejects it when nothing is left.
pub fn validate_customer_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(PassesError::invalid_input(
            "customer_name",
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(name.to_string())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PassesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PassesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Accepts only plain relative paths that cannot leave the base directory.
pub fn validate_relative_file_name(field_name: &str, path: &str) -> Result<()> {
    use std::path::Component;

    validate_path(field_name, path)?;
    let escapes = std::path::Path::new(path)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(PassesError::invalid_input(
            field_name,
            "File name must stay inside the output directory",
        ));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(PassesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_names(field_name: &str, names: &[String]) -> Result<()> {
    for (index, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(PassesError::InvalidConfigValueError {
                field: format!("{}[{}]", field_name, index),
                value: name.clone(),
                reason: "Value cannot be empty or whitespace-only".to_string(),
            });
        }
    }
    Ok(())
}
