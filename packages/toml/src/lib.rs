//! TOML-backed configuration stores for dotconf.
//!
//! This crate binds the format-agnostic engine in `dotconf-core` to one
//! concrete textual syntax: [`TomlAdapter`] implements the
//! `FormatAdapter` boundary, and [`TomlConfig`] bundles it with a store
//! for the common case.

pub mod adapter;
pub mod config;

pub use dotconf_core::{Error, Key, KeyError, Kind, Node, Scalar, Store, Table, Value};

pub use adapter::TomlAdapter;
pub use config::TomlConfig;
