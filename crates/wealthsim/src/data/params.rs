use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use wealthsim_core::ParameterStore;

/// Parameter override file looked up in the data directory
pub const PARAMS_FILE: &str = "params.yaml";

pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".wealthsim")
}

/// Load and validate a parameter store override.
///
/// Sections missing from the file keep their built-in values.
pub fn load_store(path: &Path) -> Result<ParameterStore> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read parameters {}", path.display()))?;
    let store: ParameterStore = serde_saphyr::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse parameters {}", path.display()))?;
    store
        .validate()
        .wrap_err_with(|| format!("Invalid parameters in {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        instruments = store.returns.len(),
        "Loaded parameter store"
    );
    Ok(store)
}

/// Pick the store for this run: an explicit file, else `params.yaml` in the
/// data directory when present, else the built-in tables.
pub fn resolve_store(explicit: Option<&Path>, data_dir: &Path) -> Result<ParameterStore> {
    if let Some(path) = explicit {
        return load_store(path);
    }

    let fallback = data_dir.join(PARAMS_FILE);
    if fallback.is_file() {
        return load_store(&fallback);
    }

    tracing::debug!(data_dir = %data_dir.display(), "Using built-in parameter store");
    Ok(ParameterStore::default())
}

pub fn store_to_yaml(store: &ParameterStore) -> Result<String> {
    serde_saphyr::to_string(store).wrap_err("Failed to serialize parameters")
}
