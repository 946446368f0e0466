//! Declaration generation for file-based routes.
//!
//! Turns a route manifest into TypeScript declaration files:
//!
//! - [`shadow`]: classifies route modules and page components into keys
//! - [`route_id`]: extracts parameter names from route ids and keys
//! - [`route_types`]: renders the per-key `RequestHandler` / `Load` aliases
//! - [`fetch_map`]: renders the typed fetch-response map
//!
//! [`TypesGenerator`] ties them together. All output is kept in memory as
//! [`GeneratedCode`]; writing it out is left to the caller.
//!
//! # Examples
//!
//! ```
//! use kit_typegen_codegen::TypesGenerator;
//! use kit_typegen_core::{ManifestData, TypegenConfig};
//! use std::collections::HashMap;
//!
//! let manifest = ManifestData::new().with_component("src/routes/blog/[slug].svelte");
//! let code = TypesGenerator::new()
//!     .unwrap()
//!     .generate(&TypegenConfig::default(), &manifest, &HashMap::new())
//!     .unwrap();
//!
//! let file = code.get("src/routes/blog/__types/[slug].d.ts").unwrap();
//! assert!(file.content.contains("GenericLoad<{ slug: string }"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod fetch_map;
pub mod generator;
pub mod route_id;
pub mod route_types;
pub mod shadow;
pub mod source;
pub mod template_engine;
pub mod types;

pub use fetch_map::HttpMethod;
pub use generator::TypesGenerator;
pub use route_id::{ParsedRouteId, parse_route_id};
pub use shadow::{ShadowKind, ShadowType, ShadowTypes};
pub use source::{FsSourceLoader, SourceLoader};
pub use template_engine::TemplateEngine;
pub use types::{GeneratedCode, GeneratedFile};
