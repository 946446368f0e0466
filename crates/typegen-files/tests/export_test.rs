//! Exporting a full generation pass to disk.

use kit_typegen_codegen::TypesGenerator;
use kit_typegen_core::{ManifestData, RouteData, TypegenConfig};
use kit_typegen_files::{FilesBuilder, remove_recursive, write_file};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn manifest() -> ManifestData {
    ManifestData::new()
        .with_route(RouteData::endpoint("docs/[...path]", "src/routes/docs/[...path].ts"))
        .with_component("src/routes/index.svelte")
}

fn export(types_dir: &std::path::Path) {
    let mut sources = HashMap::new();
    sources.insert(
        "src/routes/docs/[...path].ts".to_string(),
        "export type GetType = { html: string };".to_string(),
    );

    let code = TypesGenerator::new()
        .unwrap()
        .generate(&TypegenConfig::default(), &manifest(), &sources)
        .unwrap();

    FilesBuilder::from_generated_code(code, "/")
        .build_and_export(types_dir)
        .unwrap();
}

#[test]
fn test_generated_tree_lands_on_disk() {
    let temp = TempDir::new().unwrap();
    let types_dir = temp.path().join(".svelte-kit/types");

    export(&types_dir);

    let rest = fs::read_to_string(types_dir.join("src/routes/docs/__types/[...path].d.ts")).unwrap();
    assert!(rest.contains("GenericRequestHandler<{ path: string }, Output>"));
    assert!(types_dir.join("src/routes/__types/index.d.ts").exists());

    let fetch = fs::read_to_string(types_dir.join("fetch.d.ts")).unwrap();
    assert!(fetch.contains("'/docs/[...path]': {"));
}

#[test]
fn test_clean_slate_removes_stale_files() {
    let temp = TempDir::new().unwrap();
    let types_dir = temp.path().join(".svelte-kit/types");

    write_file(types_dir.join("src/routes/__types/deleted.d.ts"), "stale").unwrap();
    remove_recursive(&types_dir).unwrap();
    export(&types_dir);

    assert!(!types_dir.join("src/routes/__types/deleted.d.ts").exists());
    assert!(types_dir.join("src/routes/__types/index.d.ts").exists());
}
