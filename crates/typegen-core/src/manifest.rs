//! Route manifest model.
//!
//! The manifest is produced by route discovery and consumed read-only by the
//! generator: an ordered route list plus an ordered component list.
//!
//! # Examples
//!
//! ```
//! use kit_typegen_core::{ManifestData, RouteData, RouteType};
//!
//! let manifest: ManifestData = serde_json::from_str(r#"{
//!     "routes": [
//!         { "type": "endpoint", "id": "api/posts", "file": "src/routes/api/posts.ts" },
//!         { "type": "page", "id": "blog/[slug]", "file": "src/routes/blog/[slug].svelte",
//!           "shadow": "src/routes/blog/[slug].ts" }
//!     ],
//!     "components": ["src/routes/blog/[slug].svelte"]
//! }"#).unwrap();
//!
//! assert_eq!(manifest.routes.len(), 2);
//! assert_eq!(manifest.routes[0].route_type, RouteType::Endpoint);
//! assert_eq!(manifest.endpoints().count(), 1);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Whether a route renders a page or answers as a standalone endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    /// Page route, optionally paired with a shadow endpoint
    Page,
    /// Standalone endpoint route
    Endpoint,
}

impl RouteType {
    /// Returns the string representation used in manifests.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Endpoint => "endpoint",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discovered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteData {
    /// Route identifier, e.g. `blog/[slug]`. The root route is `""`.
    pub id: String,

    /// Route kind.
    #[serde(rename = "type")]
    pub route_type: RouteType,

    /// Primary file: the component for pages, the module for endpoints.
    pub file: String,

    /// Co-located server module of a page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
}

impl RouteData {
    /// Creates a page route.
    #[must_use]
    pub fn page(id: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            route_type: RouteType::Page,
            file: file.into(),
            shadow: None,
        }
    }

    /// Creates an endpoint route.
    #[must_use]
    pub fn endpoint(id: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            route_type: RouteType::Endpoint,
            file: file.into(),
            shadow: None,
        }
    }

    /// Attaches a shadow module to the route.
    #[must_use]
    pub fn with_shadow(mut self, shadow: impl Into<String>) -> Self {
        self.shadow = Some(shadow.into());
        self
    }

    /// Returns `true` for endpoint routes.
    #[must_use]
    pub fn is_endpoint(&self) -> bool {
        self.route_type == RouteType::Endpoint
    }

    /// Returns the module whose handlers need typing: the route's own file
    /// for endpoints, the shadow module for pages.
    ///
    /// Pages without a shadow have no such module.
    ///
    /// # Examples
    ///
    /// ```
    /// use kit_typegen_core::RouteData;
    ///
    /// let page = RouteData::page("about", "src/routes/about.svelte");
    /// assert_eq!(page.server_module(), None);
    ///
    /// let shadowed = page.with_shadow("src/routes/about.ts");
    /// assert_eq!(shadowed.server_module(), Some("src/routes/about.ts"));
    /// ```
    #[must_use]
    pub fn server_module(&self) -> Option<&str> {
        match self.route_type {
            RouteType::Endpoint => Some(&self.file),
            RouteType::Page => self.shadow.as_deref(),
        }
    }
}

/// Manifest of all discovered routes and page components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestData {
    /// Routes in discovery order
    #[serde(default)]
    pub routes: Vec<RouteData>,

    /// Component files in discovery order. Paths starting with `.` are
    /// framework fallbacks.
    #[serde(default)]
    pub components: Vec<String>,
}

impl ManifestData {
    /// Creates an empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route.
    #[must_use]
    pub fn with_route(mut self, route: RouteData) -> Self {
        self.routes.push(route);
        self
    }

    /// Adds a component file.
    #[must_use]
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.components.push(component.into());
        self
    }

    /// Iterates over endpoint routes in manifest order.
    pub fn endpoints(&self) -> impl Iterator<Item = &RouteData> {
        self.routes.iter().filter(|route| route.is_endpoint())
    }

    /// Loads a manifest from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`] if the file cannot be read or is not a
    /// valid manifest.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::Manifest {
            path: path.to_path_buf(),
            message: format!("failed to read: {e}"),
            source: None,
        })?;

        let manifest: Self = serde_json::from_str(&content).map_err(|e| Error::Manifest {
            path: path.to_path_buf(),
            message: "failed to parse".to_string(),
            source: Some(e),
        })?;

        tracing::debug!(
            "Loaded manifest from {}: {} routes, {} components",
            path.display(),
            manifest.routes.len(),
            manifest.components.len()
        );

        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_route_type_serde() {
        let json = serde_json::to_string(&RouteType::Endpoint).unwrap();
        assert_eq!(json, "\"endpoint\"");
        let parsed: RouteType = serde_json::from_str("\"page\"").unwrap();
        assert_eq!(parsed, RouteType::Page);
    }

    #[test]
    fn test_route_without_shadow_deserializes() {
        let route: RouteData = serde_json::from_str(
            r#"{"type": "page", "id": "", "file": "src/routes/index.svelte"}"#,
        )
        .unwrap();
        assert_eq!(route.id, "");
        assert!(route.shadow.is_none());
        assert!(!route.is_endpoint());
    }

    #[test]
    fn test_endpoint_server_module_ignores_shadow() {
        let route = RouteData::endpoint("api", "src/routes/api.ts").with_shadow("other.ts");
        assert_eq!(route.server_module(), Some("src/routes/api.ts"));
    }

    #[test]
    fn test_endpoints_preserve_order() {
        let manifest = ManifestData::new()
            .with_route(RouteData::endpoint("b", "src/routes/b.ts"))
            .with_route(RouteData::page("", "src/routes/index.svelte"))
            .with_route(RouteData::endpoint("a", "src/routes/a.ts"));

        let ids: Vec<_> = manifest.endpoints().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"routes": [{{"type": "endpoint", "id": "api", "file": "src/routes/api.ts"}}], "components": [".svelte-kit/runtime/components/layout.svelte"]}}"#
        )
        .unwrap();

        let manifest = ManifestData::from_json_file(file.path()).unwrap();
        assert_eq!(manifest.routes.len(), 1);
        assert_eq!(manifest.components.len(), 1);
    }

    #[test]
    fn test_from_json_file_rejects_unknown_route_type() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"routes": [{{"type": "layout", "id": "", "file": "x"}}]}}"#
        )
        .unwrap();

        let err = ManifestData::from_json_file(file.path()).unwrap_err();
        assert!(err.is_manifest_error());
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = ManifestData::from_json_file("/no/such/manifest.json").unwrap_err();
        assert!(err.is_manifest_error());
        assert!(err.to_string().contains("failed to read"));
    }
}
