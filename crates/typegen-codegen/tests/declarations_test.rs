//! Integration tests for declaration generation.
//!
//! Drives [`TypesGenerator`] end to end against in-memory manifests and
//! endpoint sources and checks the rendered declaration text.

use kit_typegen_codegen::{GeneratedCode, ShadowKind, ShadowTypes, TypesGenerator};
use kit_typegen_core::{ManifestData, RouteData, TypegenConfig};
use std::collections::HashMap;

fn sources(files: &[(&str, &str)]) -> HashMap<String, String> {
    files
        .iter()
        .map(|(path, text)| ((*path).to_string(), (*text).to_string()))
        .collect()
}

fn generate(manifest: &ManifestData, files: &[(&str, &str)]) -> GeneratedCode {
    TypesGenerator::new()
        .unwrap()
        .generate(&TypegenConfig::default(), manifest, &sources(files))
        .unwrap()
}

/// A small blog: index page, a shadowed post page, an API endpoint and the
/// framework's fallback components.
fn blog_manifest() -> ManifestData {
    ManifestData::new()
        .with_route(RouteData::page("", "src/routes/index.svelte"))
        .with_route(
            RouteData::page("blog/[slug]", "src/routes/blog/[slug].svelte")
                .with_shadow("src/routes/blog/[slug].ts"),
        )
        .with_route(RouteData::endpoint("api/posts", "src/routes/api/posts.ts"))
        .with_component(".svelte-kit/runtime/components/layout.svelte")
        .with_component(".svelte-kit/runtime/components/error.svelte")
        .with_component("src/routes/index.svelte")
        .with_component("src/routes/blog/[slug].svelte")
}

const POSTS_SOURCE: &str = r"
export type GetType = { posts: string[] };
export interface PostType {
    id: number;
}

export async function get() {
    return { body: { posts: [] } };
}
";

#[test]
fn test_page_route_declares_load_only() {
    let manifest = ManifestData::new()
        .with_route(RouteData::page("blog/[slug]", "src/routes/blog/[slug].svelte"))
        .with_component("src/routes/blog/[slug].svelte");

    let code = generate(&manifest, &[]);
    let file = code.get("src/routes/blog/__types/[slug].d.ts").unwrap();

    assert!(file.content.contains("GenericLoad<{ slug: string }, InputProps, OutputProps, JsonResponses>"));
    assert!(!file.content.contains("RequestHandler"));
}

#[test]
fn test_endpoint_route_declares_request_handler_only() {
    let manifest =
        ManifestData::new().with_route(RouteData::endpoint("api/posts", "src/routes/api/posts.ts"));

    let code = generate(&manifest, &[("src/routes/api/posts.ts", POSTS_SOURCE)]);
    let file = code.get("src/routes/api/__types/posts.d.ts").unwrap();

    assert!(file.content.contains("GenericRequestHandler<{}, Output>"));
    assert!(!file.content.contains("export type Load"));
}

#[test]
fn test_shadowed_page_shares_param_object() {
    let code = generate(&blog_manifest(), &[("src/routes/api/posts.ts", POSTS_SOURCE)]);
    let file = code.get("src/routes/blog/__types/[slug].d.ts").unwrap();

    assert!(file.content.contains("GenericRequestHandler<{ slug: string }, Output>"));
    assert!(file.content.contains("GenericLoad<{ slug: string }, InputProps"));
}

#[test]
fn test_blog_output_layout() {
    let code = generate(&blog_manifest(), &[("src/routes/api/posts.ts", POSTS_SOURCE)]);
    let paths: Vec<_> = code.files().map(|f| f.path.as_str()).collect();

    assert_eq!(
        paths,
        vec![
            "fetch.d.ts",
            "src/routes/blog/__types/[slug].d.ts",
            "src/routes/api/__types/posts.d.ts",
            "src/routes/__types/index.d.ts",
        ]
    );
}

#[test]
fn test_fallback_components_are_excluded() {
    let code = generate(&blog_manifest(), &[("src/routes/api/posts.ts", POSTS_SOURCE)]);
    assert!(code.files().all(|f| !f.path.starts_with(".svelte-kit")));

    let manifest = ManifestData::new().with_component(".hidden/page.svelte");
    let code = generate(&manifest, &[]);
    assert_eq!(code.file_count(), 1);
}

#[test]
fn test_fetch_map_method_fields() {
    let code = generate(&blog_manifest(), &[("src/routes/api/posts.ts", POSTS_SOURCE)]);
    let fetch = code.get("fetch.d.ts").unwrap();

    assert!(fetch.content.contains("    '/api/posts': {"));
    assert!(fetch.content.contains("        get: import('../../src/routes/api/posts').GetType;"));
    assert!(fetch.content.contains("        post: import('../../src/routes/api/posts').PostType;"));
    assert!(fetch.content.contains("        patch: any;"));
    assert!(fetch.content.contains("        head: any;"));
    assert!(!fetch.content.contains("blog/[slug]"));
}

#[test]
fn test_fetch_map_entries_follow_manifest_order() {
    let manifest = ManifestData::new()
        .with_route(RouteData::endpoint("b", "src/routes/b.js"))
        .with_route(RouteData::endpoint("a", "src/routes/a.js"));

    let code = generate(&manifest, &[("src/routes/a.js", ""), ("src/routes/b.js", "")]);
    let fetch = &code.get("fetch.d.ts").unwrap().content;

    let b = fetch.find("'/b'").unwrap();
    let a = fetch.find("'/a'").unwrap();
    assert!(b < a);
}

#[test]
fn test_header_depth_matches_key_segments() {
    let code = generate(&blog_manifest(), &[("src/routes/api/posts.ts", POSTS_SOURCE)]);

    for file in code.files().filter(|f| f.path != "fetch.d.ts") {
        let key = file.path.replace("/__types/", "/").replace(".d.ts", "");
        let depth = key.split('/').count();
        let import = format!("from '{}/fetch';", vec![".."; depth].join("/"));
        assert!(file.content.contains(&import), "{}: {}", file.path, file.content);
    }
}

#[test]
fn test_generation_is_deterministic() {
    let files = [("src/routes/api/posts.ts", POSTS_SOURCE)];
    let first = generate(&blog_manifest(), &files);
    let second = generate(&blog_manifest(), &files);
    assert_eq!(first, second);
}

#[test]
fn test_endpoint_never_downgraded_by_component() {
    let config = TypegenConfig::default().with_extensions(vec![".svelte".into(), ".ts".into()]);
    let manifest = ManifestData::new()
        .with_route(RouteData::endpoint("api", "src/routes/api.ts"))
        .with_component("src/routes/api.svelte");

    let types = ShadowTypes::from_manifest(&config, &manifest).unwrap();
    assert_eq!(types.get("src/routes/api").unwrap().kind, ShadowKind::Both);
    assert_eq!(types.len(), 1);
}

#[test]
fn test_missing_endpoint_source_aborts() {
    let manifest =
        ManifestData::new().with_route(RouteData::endpoint("api/posts", "src/routes/api/posts.ts"));

    let err = TypesGenerator::new()
        .unwrap()
        .generate(&TypegenConfig::default(), &manifest, &sources(&[]))
        .unwrap_err();
    assert!(err.is_io_error());
}

#[test]
fn test_custom_module_extensions() {
    let config = TypegenConfig::default().with_module_extensions(vec![".mjs".into()]);
    let manifest =
        ManifestData::new().with_route(RouteData::endpoint("feed", "src/routes/feed.mjs"));
    let files = sources(&[("src/routes/feed.mjs", "export type HeadType = never;")]);

    let code = TypesGenerator::new()
        .unwrap()
        .generate(&config, &manifest, &files)
        .unwrap();

    assert!(code.get("src/routes/__types/feed.d.ts").is_some());
    let fetch = &code.get("fetch.d.ts").unwrap().content;
    assert!(fetch.contains("head: import('../../src/routes/feed').HeadType;"));
}
