//! File output for generated route declarations.
//!
//! Collects a generation pass into an in-memory [`FileSystem`] and writes it
//! to disk. Also provides the clean-slate helpers used before regeneration.
//!
//! # Examples
//!
//! ```
//! use kit_typegen_codegen::{GeneratedCode, GeneratedFile};
//! use kit_typegen_files::{FilesBuilder, remove_recursive};
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! let types_dir = temp.path().join(".svelte-kit/types");
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile {
//!     path: "fetch.d.ts".to_string(),
//!     content: "// this file is auto-generated".to_string(),
//! });
//!
//! remove_recursive(&types_dir).unwrap();
//! FilesBuilder::from_generated_code(code, "/")
//!     .build_and_export(&types_dir)
//!     .unwrap();
//!
//! assert!(types_dir.join("fetch.d.ts").exists());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod builder;
pub mod filesystem;
pub mod tree;
pub mod types;

pub use builder::FilesBuilder;
pub use filesystem::{ExportOptions, remove_recursive, write_file};
pub use tree::FileSystem;
pub use types::{FileEntry, FilePath, FilesError, Result};
