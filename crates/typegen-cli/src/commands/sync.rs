//! Sync command implementation.
//!
//! Regenerates every declaration file for a manifest:
//! 1. Removes `<out_dir>/types` so stale declarations disappear
//! 2. Generates `fetch.d.ts` and one declaration per route key
//! 3. Writes them in order, `fetch.d.ts` first
//! 4. Prints a [`SyncReport`]

use super::common::{load_config, load_manifest};
use anyhow::{Context, Result};
use kit_typegen_codegen::{FsSourceLoader, TypesGenerator};
use kit_typegen_core::cli::{ExitCode, OutputFormat};
use kit_typegen_core::{ManifestData, TypegenConfig};
use kit_typegen_files::{FilesBuilder, remove_recursive};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Summary of a completed sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Number of declaration files written, including `fetch.d.ts`
    pub files_written: usize,
    /// Number of endpoint routes in the fetch map
    pub endpoints: usize,
    /// Directory the files were written to
    pub output_dir: String,
}

/// Writes all declaration files for `manifest` under
/// [`TypegenConfig::types_dir`].
///
/// Endpoint sources are read relative to `config.root`. Any failure aborts
/// the pass; files written before the failure are left in place.
///
/// # Errors
///
/// Returns an error if the old output cannot be removed, generation fails,
/// or a file cannot be written.
///
/// # Examples
///
/// ```no_run
/// use kit_typegen_cli::commands::sync::write_types;
/// use kit_typegen_core::{ManifestData, TypegenConfig};
///
/// let config = TypegenConfig::default();
/// let manifest = ManifestData::from_json_file(".svelte-kit/manifest.json")?;
/// let report = write_types(&config, &manifest)?;
/// println!("{} files", report.files_written);
/// # Ok::<(), kit_typegen_core::Error>(())
/// ```
pub fn write_types(
    config: &TypegenConfig,
    manifest: &ManifestData,
) -> kit_typegen_core::Result<SyncReport> {
    let types_dir = config.types_dir();

    remove_recursive(&types_dir)?;

    let loader = FsSourceLoader::new(&config.root);
    let code = TypesGenerator::new()?.generate(config, manifest, &loader)?;

    let fs = FilesBuilder::from_generated_code(code, "/").build_and_export(&types_dir)?;

    Ok(SyncReport {
        files_written: fs.file_count(),
        endpoints: manifest.endpoints().count(),
        output_dir: types_dir.display().to_string(),
    })
}

/// Runs the sync command.
///
/// # Errors
///
/// Returns an error if the configuration or manifest cannot be loaded, or
/// if [`write_types`] fails.
pub fn run(
    config_path: Option<&Path>,
    manifest_path: &Path,
    root: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let config = load_config(config_path, root, out_dir)
        .context("failed to load configuration")?;

    let manifest = load_manifest(manifest_path)
        .with_context(|| format!("failed to load manifest {}", manifest_path.display()))?;

    info!("Writing types to {}", config.types_dir().display());

    let report = write_types(&config, &manifest).context("failed to write types")?;

    let formatted = crate::formatters::format_output(&report, output_format)?;
    println!("{formatted}");

    info!(
        "Wrote {} files ({} endpoints)",
        report.files_written, report.endpoints
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kit_typegen_core::RouteData;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> (TempDir, TypegenConfig) {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/routes/api")).unwrap();
        fs::write(
            temp.path().join("src/routes/api/posts.ts"),
            "export type GetType = { posts: string[] };",
        )
        .unwrap();

        let config = TypegenConfig::default().with_root(temp.path());
        (temp, config)
    }

    #[test]
    fn test_write_types_report() {
        let (_temp, config) = project();
        let manifest = ManifestData::new()
            .with_route(RouteData::endpoint("api/posts", "src/routes/api/posts.ts"))
            .with_component("src/routes/index.svelte");

        let report = write_types(&config, &manifest).unwrap();

        assert_eq!(report.files_written, 3);
        assert_eq!(report.endpoints, 1);
        assert_eq!(report.output_dir, config.types_dir().display().to_string());
        assert!(config.types_dir().join("fetch.d.ts").exists());
    }

    #[test]
    fn test_write_types_missing_source() {
        let (_temp, config) = project();
        let manifest = ManifestData::new()
            .with_route(RouteData::endpoint("api/missing", "src/routes/api/missing.ts"));

        let err = write_types(&config, &manifest).unwrap_err();
        assert!(err.is_io_error());
    }

    #[test]
    fn test_write_types_current_dir_prefixed_file() {
        let (_temp, config) = project();
        let manifest = ManifestData::new()
            .with_route(RouteData::endpoint("api/posts", "./src/routes/api/posts.ts"));

        let report = write_types(&config, &manifest).unwrap();
        assert_eq!(report.files_written, 2);

        let declaration = config.types_dir().join("src/routes/api/__types/posts.d.ts");
        let content = fs::read_to_string(declaration).unwrap();
        assert!(content.contains("from '../../../../fetch';"));

        let fetch = fs::read_to_string(config.types_dir().join("fetch.d.ts")).unwrap();
        assert!(fetch.contains("get: import('../.././src/routes/api/posts').GetType;"));
    }

    #[test]
    fn test_write_types_unknown_extension() {
        let (_temp, config) = project();
        let manifest = ManifestData::new().with_component("src/routes/about.md");

        let err = write_types(&config, &manifest).unwrap_err();
        assert!(err.is_extension_error());
    }
}
