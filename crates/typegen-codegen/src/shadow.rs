//! Route classification.
//!
//! Every route module and page component maps to a *key*: its file path
//! with the recognised extension stripped. Each key gets one declaration
//! file whose contents depend on the key's [`ShadowKind`].
//!
//! Keys are kept in first-insertion order. When two sources land on the
//! same key their kinds are combined with [`ShadowKind::merge`], which never
//! drops an aspect once it has been seen: a page component sharing a key
//! with an endpoint module yields [`ShadowKind::Both`].
//!
//! # Examples
//!
//! ```
//! use kit_typegen_codegen::shadow::{ShadowKind, ShadowTypes};
//! use kit_typegen_core::{ManifestData, RouteData, TypegenConfig};
//!
//! let manifest = ManifestData::new()
//!     .with_route(
//!         RouteData::page("blog/[slug]", "src/routes/blog/[slug].svelte")
//!             .with_shadow("src/routes/blog/[slug].ts"),
//!     )
//!     .with_component("src/routes/blog/[slug].svelte");
//!
//! let types = ShadowTypes::from_manifest(&TypegenConfig::default(), &manifest).unwrap();
//! let entry = types.get("src/routes/blog/[slug]").unwrap();
//! assert_eq!(entry.kind, ShadowKind::Both);
//! assert_eq!(entry.params, vec!["slug"]);
//! ```

use crate::route_id::parse_route_id;
use kit_typegen_core::{Error, ManifestData, Result, TypegenConfig};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Which declarations a key needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowKind {
    /// Page component only: `Load`
    Page,
    /// Endpoint module only: `RequestHandler`
    Endpoint,
    /// Page with a server module: `Load` and `RequestHandler`
    Both,
}

impl ShadowKind {
    /// Combines the kind already recorded for a key with a newly seen one.
    ///
    /// Equal kinds are kept; any two different kinds combine to `Both`, so
    /// an endpoint is never downgraded to a page by a later component.
    ///
    /// # Examples
    ///
    /// ```
    /// use kit_typegen_codegen::shadow::ShadowKind;
    ///
    /// assert_eq!(ShadowKind::Page.merge(ShadowKind::Page), ShadowKind::Page);
    /// assert_eq!(ShadowKind::Endpoint.merge(ShadowKind::Page), ShadowKind::Both);
    /// assert_eq!(ShadowKind::Both.merge(ShadowKind::Page), ShadowKind::Both);
    /// ```
    #[must_use]
    pub fn merge(self, incoming: Self) -> Self {
        if self == incoming { self } else { Self::Both }
    }

    /// Returns `true` if a `RequestHandler` alias is emitted.
    #[must_use]
    pub const fn has_request_handler(self) -> bool {
        !matches!(self, Self::Page)
    }

    /// Returns `true` if a `Load` alias is emitted.
    #[must_use]
    pub const fn has_load(self) -> bool {
        !matches!(self, Self::Endpoint)
    }

    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Endpoint => "endpoint",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for ShadowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration data for one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowType {
    /// Dynamic parameter names in order of appearance
    pub params: Vec<String>,
    /// Declarations to emit
    pub kind: ShadowKind,
}

/// Insertion-ordered map from key to [`ShadowType`].
#[derive(Debug, Clone, Default)]
pub struct ShadowTypes {
    entries: Vec<(String, ShadowType)>,
    index: HashMap<String, usize>,
}

impl ShadowTypes {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `kind` for `key`.
    ///
    /// A new key is appended with the given params. An existing key keeps
    /// its position and params, and its kind becomes
    /// `existing.merge(kind)`.
    pub fn insert(&mut self, key: impl Into<String>, params: Vec<String>, kind: ShadowKind) {
        let key = key.into();
        if let Some(&position) = self.index.get(&key) {
            let entry = &mut self.entries[position].1;
            entry.kind = entry.kind.merge(kind);
            return;
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, ShadowType { params, kind }));
    }

    /// Looks up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ShadowType> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShadowType)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Classifies every route module and page component of a manifest.
    ///
    /// Routes are visited first, in manifest order: an endpoint contributes
    /// its own file as `Endpoint`, a page contributes its shadow module (if
    /// any) as `Both`. Components are visited next; those starting with `.`
    /// are framework fallbacks and are skipped, the rest contribute `Page`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatchingExtension`] if a route module does not end
    /// with one of `config.module_extensions` or a component does not end
    /// with one of `config.extensions`, and [`Error::InvalidRouteId`] if a
    /// key holds a malformed parameter.
    pub fn from_manifest(config: &TypegenConfig, manifest: &ManifestData) -> Result<Self> {
        let mut types = Self::new();

        for route in &manifest.routes {
            let Some(file) = route.server_module() else {
                tracing::debug!("Page route '{}' has no server module", route.id);
                continue;
            };

            let key = strip_extension(file, &config.module_extensions)?;
            let kind = if route.is_endpoint() {
                ShadowKind::Endpoint
            } else {
                ShadowKind::Both
            };
            types.insert(key, parse_route_id(key)?.names, kind);
        }

        for component in &manifest.components {
            if component.starts_with('.') {
                continue;
            }

            let key = strip_extension(component, &config.extensions)?;
            types.insert(key, parse_route_id(key)?.names, ShadowKind::Page);
        }

        tracing::debug!("Classified {} route keys", types.len());
        Ok(types)
    }
}

/// Strips the first extension in `extensions` that `file` ends with.
///
/// # Errors
///
/// Returns [`Error::NoMatchingExtension`] if none matches.
///
/// # Examples
///
/// ```
/// use kit_typegen_codegen::shadow::strip_extension;
///
/// let exts = vec![".js".to_string(), ".ts".to_string()];
/// assert_eq!(strip_extension("src/routes/api/posts.ts", &exts).unwrap(), "src/routes/api/posts");
/// assert!(strip_extension("src/routes/api/posts.rs", &exts).is_err());
/// ```
pub fn strip_extension<'a>(file: &'a str, extensions: &[String]) -> Result<&'a str> {
    extensions
        .iter()
        .find_map(|ext| file.strip_suffix(ext.as_str()))
        .ok_or_else(|| Error::NoMatchingExtension {
            path: file.to_string(),
            extensions: extensions.to_vec(),
        })
}
