//! Route type generator CLI library.
//!
//! Exposes the argument definitions, commands and formatters of the
//! `kit-typegen` binary so they can be tested and reused.
//!
//! [`commands::sync::write_types`] is the programmatic entry point: it
//! clears the types directory and writes a full declaration set.

pub mod cli;
pub mod commands;
pub mod formatters;

pub use commands::inspect::{InspectReport, inspect};
pub use commands::sync::{SyncReport, write_types};
