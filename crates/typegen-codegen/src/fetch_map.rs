//! Typed fetch-response map.
//!
//! Scans every endpoint module for exported per-method response types
//! (`export type GetType = ...`, `export interface PostType { ... }`) and
//! renders `fetch.d.ts`: a `JsonResponses` map from route path to the
//! response type of each HTTP method, plus a global `fetch` overload that
//! routes through it.
//!
//! Detection is a regex heuristic over the source text. Re-exports and
//! aliases declared through indirection are not seen; the method then falls
//! back to `any`.
//!
//! # Examples
//!
//! ```
//! use kit_typegen_codegen::fetch_map::{HttpMethod, find_method_type};
//!
//! let source = "export type PostType = { id: number };";
//! assert_eq!(find_method_type(source, HttpMethod::Post).as_deref(), Some("PostType"));
//! assert_eq!(find_method_type(source, HttpMethod::Patch), None);
//! ```

use crate::shadow::strip_extension;
use crate::source::SourceLoader;
use crate::template_engine::TemplateEngine;
use crate::types::GeneratedFile;
use kit_typegen_core::{ManifestData, Result, TypegenConfig};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Path of the fetch map, relative to the types directory.
pub const FETCH_MAP_PATH: &str = "fetch.d.ts";

/// HTTP methods that can carry a typed response, in map order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `PATCH`
    Patch,
    /// `HEAD`
    Head,
}

impl HttpMethod {
    /// All methods in the order their fields appear in the map.
    pub const ALL: [Self; 6] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Delete,
        Self::Patch,
        Self::Head,
    ];

    /// Upper-case method name, e.g. `POST`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
        }
    }

    /// Pascal-case method name used in type names, e.g. `Post`.
    #[must_use]
    pub const fn pascal(self) -> &'static str {
        match self {
            Self::Get => "Get",
            Self::Post => "Post",
            Self::Put => "Put",
            Self::Delete => "Delete",
            Self::Patch => "Patch",
            Self::Head => "Head",
        }
    }

    /// Field name in the map, e.g. `post`.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
            Self::Patch => "patch",
            Self::Head => "head",
        }
    }

    fn pattern(self) -> &'static Regex {
        &METHOD_TYPE_PATTERNS[self as usize]
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pattern per method, indexed by discriminant. Both `PostType` and
/// `POSTType` spellings are recognised.
static METHOD_TYPE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    HttpMethod::ALL
        .iter()
        .map(|method| {
            Regex::new(&format!(
                r"export\s+(?:type|interface)\s+((?:{}|{})Type)\b",
                method.pascal(),
                method.as_str()
            ))
            .expect("valid regex")
        })
        .collect()
});

/// Returns the name of the exported response type for `method`, if the
/// source declares one.
#[must_use]
pub fn find_method_type(source: &str, method: HttpMethod) -> Option<String> {
    method
        .pattern()
        .captures(source)
        .map(|captures| captures[1].to_string())
}

/// Response types detected in one endpoint module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointTypes {
    /// Route id, without leading slash
    pub id: String,
    /// Module specifier of the endpoint, relative to the types directory
    pub module: String,
    /// Exported type name per method, in [`HttpMethod::ALL`] order
    pub methods: Vec<(HttpMethod, Option<String>)>,
}

impl EndpointTypes {
    /// Scans an endpoint's source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use kit_typegen_codegen::fetch_map::{EndpointTypes, HttpMethod};
    ///
    /// let types = EndpointTypes::scan(
    ///     "api/posts",
    ///     "../../src/routes/api/posts",
    ///     "export interface GetType { posts: string[] }",
    /// );
    /// assert_eq!(types.type_for(HttpMethod::Get), Some("GetType"));
    /// assert_eq!(types.type_for(HttpMethod::Head), None);
    /// ```
    #[must_use]
    pub fn scan(id: impl Into<String>, module: impl Into<String>, source: &str) -> Self {
        Self {
            id: id.into(),
            module: module.into(),
            methods: HttpMethod::ALL
                .iter()
                .map(|&method| (method, find_method_type(source, method)))
                .collect(),
        }
    }

    /// Returns the detected type name for `method`.
    #[must_use]
    pub fn type_for(&self, method: HttpMethod) -> Option<&str> {
        self.methods
            .iter()
            .find(|(m, _)| *m == method)
            .and_then(|(_, name)| name.as_deref())
    }

    /// Renders the method fields of this endpoint's map entry.
    #[must_use]
    pub fn method_lines(&self) -> String {
        self.methods
            .iter()
            .map(|(method, name)| match name {
                Some(name) => format!(
                    "        {}: import('{}').{name};",
                    method.field(),
                    self.module
                ),
                None => format!("        {}: any;", method.field()),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Serialize)]
struct EntryContext<'a> {
    id: &'a str,
    methods: String,
}

#[derive(Debug, Serialize)]
struct MapContext<'a> {
    types_module: &'a str,
    entries: String,
}

/// Scans every endpoint of the manifest, in manifest order.
///
/// # Errors
///
/// Returns an error if an endpoint file has no recognised module extension
/// or its source cannot be read.
pub fn scan_endpoints(
    config: &TypegenConfig,
    manifest: &ManifestData,
    loader: &dyn SourceLoader,
) -> Result<Vec<EndpointTypes>> {
    let prefix = "../".repeat(config.types_depth());

    manifest
        .endpoints()
        .map(|route| {
            let module = strip_extension(&route.file, &config.module_extensions)?;
            let source = loader.read_source(&route.file)?;
            let types = EndpointTypes::scan(&route.id, format!("{prefix}{module}"), &source);

            tracing::debug!(
                "Endpoint '/{}': {} typed methods",
                route.id,
                types.methods.iter().filter(|(_, name)| name.is_some()).count()
            );
            Ok(types)
        })
        .collect()
}

/// Renders `fetch.d.ts` from scanned endpoints.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render(
    engine: &TemplateEngine<'_>,
    types_module: &str,
    endpoints: &[EndpointTypes],
) -> Result<GeneratedFile> {
    let entries = endpoints
        .iter()
        .map(|endpoint| {
            engine
                .render(
                    "fetch/entry",
                    &EntryContext {
                        id: &endpoint.id,
                        methods: endpoint.method_lines(),
                    },
                )
                .map(|entry| entry.trim_end().to_string())
        })
        .collect::<Result<Vec<_>>>()?;

    let content = engine.render(
        "fetch/map",
        &MapContext {
            types_module,
            entries: entries.join("\n"),
        },
    )?;

    Ok(GeneratedFile {
        path: FETCH_MAP_PATH.to_string(),
        content: content.trim().to_string(),
    })
}
