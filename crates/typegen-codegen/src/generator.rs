//! Declaration set generator.
//!
//! Produces every file under the types directory for one manifest: the
//! shared `fetch.d.ts` first, then one declaration per route key in
//! classification order.
//!
//! # Examples
//!
//! ```
//! use kit_typegen_codegen::TypesGenerator;
//! use kit_typegen_core::{ManifestData, RouteData, TypegenConfig};
//! use std::collections::HashMap;
//!
//! let manifest = ManifestData::new()
//!     .with_route(RouteData::endpoint("api", "src/routes/api.ts"))
//!     .with_component("src/routes/index.svelte");
//!
//! let mut sources = HashMap::new();
//! sources.insert("src/routes/api.ts".to_string(), "export type GetType = {};".to_string());
//!
//! let generator = TypesGenerator::new().unwrap();
//! let code = generator
//!     .generate(&TypegenConfig::default(), &manifest, &sources)
//!     .unwrap();
//!
//! assert_eq!(code.file_count(), 3);
//! assert!(code.get("fetch.d.ts").is_some());
//! assert!(code.get("src/routes/__types/api.d.ts").is_some());
//! assert!(code.get("src/routes/__types/index.d.ts").is_some());
//! ```

use crate::fetch_map;
use crate::route_types;
use crate::shadow::ShadowTypes;
use crate::source::SourceLoader;
use crate::template_engine::TemplateEngine;
use crate::types::GeneratedCode;
use kit_typegen_core::{ManifestData, Result, TypegenConfig};

/// Generator for route declaration files.
///
/// Holds a template engine; one generator can serve any number of
/// manifests.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`.
#[derive(Debug)]
pub struct TypesGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> TypesGenerator<'a> {
    /// Creates a generator with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    /// Creates a generator from a prepared engine, e.g. one with
    /// overridden templates.
    #[must_use]
    pub const fn with_engine(engine: TemplateEngine<'a>) -> Self {
        Self { engine }
    }

    /// Generates all declaration files for a manifest.
    ///
    /// Paths in the result are relative to [`TypegenConfig::types_dir`].
    /// Nothing is written to disk.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A route module or component has no recognised extension
    /// - A route key holds a malformed parameter
    /// - An endpoint source cannot be read
    /// - Template rendering fails
    pub fn generate(
        &self,
        config: &TypegenConfig,
        manifest: &ManifestData,
        loader: &dyn SourceLoader,
    ) -> Result<GeneratedCode> {
        tracing::info!(
            "Generating types for {} routes and {} components",
            manifest.routes.len(),
            manifest.components.len()
        );

        let mut code = GeneratedCode::new();

        let endpoints = fetch_map::scan_endpoints(config, manifest, loader)?;
        code.add_file(fetch_map::render(
            &self.engine,
            &config.types_module,
            &endpoints,
        )?);

        let shadow_types = ShadowTypes::from_manifest(config, manifest)?;
        for (key, entry) in shadow_types.iter() {
            tracing::debug!("Rendering declarations for '{key}' ({})", entry.kind);
            code.add_file(route_types::render(
                &self.engine,
                &config.types_module,
                key,
                entry,
            )?);
        }

        tracing::info!(
            "Generated {} files ({} endpoints)",
            code.file_count(),
            endpoints.len()
        );
        Ok(code)
    }
}
