//! Per-route declaration files.
//!
//! Each classified key produces `<dirs>/__types/<last>.d.ts` declaring the
//! `RequestHandler` and/or `Load` aliases for that route, parameterised by
//! the route's dynamic parameters.

use crate::shadow::ShadowType;
use crate::template_engine::TemplateEngine;
use crate::types::GeneratedFile;
use kit_typegen_core::Result;
use serde::Serialize;

/// Imports needed by the `RequestHandler` alias.
const ENDPOINT_IMPORTS: &str = "RequestHandler as GenericRequestHandler, ResponseBody";

/// Imports needed by the `Load` alias.
const PAGE_IMPORTS: &str = "Load as GenericLoad";

#[derive(Debug, Serialize)]
struct HeaderContext<'a> {
    imports: String,
    types_module: &'a str,
    fetch_module: String,
}

#[derive(Debug, Serialize)]
struct AliasContext<'a> {
    params: &'a str,
}

/// Renders the parameter object type for a list of parameter names.
///
/// # Examples
///
/// ```
/// use kit_typegen_codegen::route_types::param_object;
///
/// assert_eq!(param_object(&[]), "{}");
/// assert_eq!(
///     param_object(&["org".to_string(), "repo".to_string()]),
///     "{ org: string; repo: string }"
/// );
/// ```
#[must_use]
pub fn param_object(params: &[String]) -> String {
    if params.is_empty() {
        return "{}".to_string();
    }

    let fields: Vec<String> = params.iter().map(|param| format!("{param}: string")).collect();
    format!("{{ {} }}", fields.join("; "))
}

/// Returns the declaration path for a key, relative to the types directory.
///
/// The last segment moves into a sibling `__types` directory; the empty key
/// is written as `index/__types/index.d.ts`. `.` segments are dropped.
///
/// # Examples
///
/// ```
/// use kit_typegen_codegen::route_types::output_path;
///
/// assert_eq!(output_path(""), "index/__types/index.d.ts");
/// assert_eq!(output_path("a/b/c"), "a/b/__types/c.d.ts");
/// assert_eq!(output_path("about"), "__types/about.d.ts");
/// assert_eq!(output_path("./src/routes/api/posts"), "src/routes/api/__types/posts.d.ts");
/// ```
#[must_use]
pub fn output_path(key: &str) -> String {
    let segments = key_segments(key);
    let Some((last, dirs)) = segments.split_last() else {
        return "index/__types/index.d.ts".to_string();
    };

    if dirs.is_empty() {
        format!("__types/{last}.d.ts")
    } else {
        format!("{}/__types/{last}.d.ts", dirs.join("/"))
    }
}

/// Returns the module specifier of the shared fetch map, as seen from the
/// declaration file of `key`.
///
/// One `..` per key segment; the empty key counts as one segment and `.`
/// segments are not counted.
///
/// # Examples
///
/// ```
/// use kit_typegen_codegen::route_types::fetch_module;
///
/// assert_eq!(fetch_module("src/routes/blog/[slug]"), "../../../../fetch");
/// assert_eq!(fetch_module(""), "../fetch");
/// ```
#[must_use]
pub fn fetch_module(key: &str) -> String {
    let depth = key_segments(key).len().max(1);
    let mut module = vec![".."; depth].join("/");
    module.push_str("/fetch");
    module
}

/// Splits a key into path segments, dropping `.` and empty segments.
fn key_segments(key: &str) -> Vec<&str> {
    key.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect()
}

/// Renders the declaration file for one key.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render(
    engine: &TemplateEngine<'_>,
    types_module: &str,
    key: &str,
    entry: &ShadowType,
) -> Result<GeneratedFile> {
    let params = param_object(&entry.params);
    let alias = AliasContext { params: &params };

    let mut imports = Vec::new();
    let mut sections = Vec::new();

    if entry.kind.has_request_handler() {
        imports.push(ENDPOINT_IMPORTS);
        sections.push(engine.render("route/endpoint", &alias)?);
    }

    if entry.kind.has_load() {
        imports.push(PAGE_IMPORTS);
        sections.push(engine.render("route/page", &alias)?);
    }

    let header = engine.render(
        "route/header",
        &HeaderContext {
            imports: imports.join(", "),
            types_module,
            fetch_module: fetch_module(key),
        },
    )?;
    sections.insert(0, header);

    let content = sections
        .iter()
        .map(|section| section.trim())
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(GeneratedFile {
        path: output_path(key),
        content,
    })
}
