//! Loading shared by the `sync` and `inspect` commands.

use kit_typegen_core::{ManifestData, Result, TypegenConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves the configuration for a run.
///
/// Starts from the file at `path` if given, otherwise the defaults, then
/// applies command-line overrides and validates the result.
///
/// # Errors
///
/// Returns a configuration error if the file cannot be loaded or the final
/// configuration is invalid.
pub fn load_config(
    path: Option<&Path>,
    root: Option<PathBuf>,
    out_dir: Option<PathBuf>,
) -> Result<TypegenConfig> {
    let mut config = match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            TypegenConfig::from_file(path)?
        }
        None => TypegenConfig::default(),
    };

    if let Some(root) = root {
        config = config.with_root(root);
    }
    if let Some(out_dir) = out_dir {
        config = config.with_out_dir(out_dir);
    }

    config.validate()?;
    Ok(config)
}

/// Loads the route manifest.
///
/// # Errors
///
/// Returns a manifest error if the file cannot be read or parsed.
pub fn load_manifest(path: &Path) -> Result<ManifestData> {
    ManifestData::from_json_file(path)
}
