//! Infrastructure layer
//!
//! File-backed implementations of the domain repository traits and the
//! loaders that turn spreadsheet and TOML files into domain values.

pub mod fleet_csv;
pub mod persistence;
pub mod toml_loader;
