//! Core types, configuration, and errors for route type generation.
//!
//! This crate provides the foundational types used across all other crates
//! in the workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - The route manifest model (`ManifestData`, `RouteData`, `RouteType`)
//! - Generator configuration (`TypegenConfig`)
//! - The error hierarchy shared by every crate
//! - CLI value types (`cli::OutputFormat`, `cli::ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod manifest;

pub mod cli;

pub use config::{DEFAULT_OUT_DIR, DEFAULT_TYPES_MODULE, TypegenConfig};
pub use error::{Error, Result};
pub use manifest::{ManifestData, RouteData, RouteType};
