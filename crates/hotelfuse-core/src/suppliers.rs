use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::mapping::SupplierConfig;
use crate::ConfigError;

#[derive(Debug, Deserialize)]
pub struct SuppliersFile {
    pub suppliers: Vec<SupplierConfig>,
}

/// Load and validate the supplier configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_suppliers(path: &Path) -> Result<SuppliersFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SuppliersFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let suppliers_file: SuppliersFile =
        serde_yaml::from_str(&content).map_err(ConfigError::SuppliersFileParse)?;

    validate_suppliers(&suppliers_file)?;

    Ok(suppliers_file)
}

fn validate_suppliers(suppliers_file: &SuppliersFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for supplier in &suppliers_file.suppliers {
        if supplier.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "supplier name must be non-empty".to_string(),
            ));
        }

        if supplier.url.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "supplier '{}' has an empty url",
                supplier.name
            )));
        }

        if supplier.field_mapping.hotel_id.is_empty() {
            return Err(ConfigError::Validation(format!(
                "supplier '{}' has no hotel_id paths; records could never be keyed",
                supplier.name
            )));
        }

        let lower_name = supplier.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate supplier name: '{}'",
                supplier.name
            )));
        }
    }

    Ok(())
}
