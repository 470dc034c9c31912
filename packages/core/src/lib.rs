//! Core dotconf: the format-agnostic configuration engine.
//!
//! Application code reads and writes typed values addressed by dotted
//! keys (`server.port`), backed by a tree of nested tables:
//! - `Key`: validated dotted key with non-empty segments
//! - `Node` / `Table` / `Value`: the tree data model
//! - `Scalar`: the closed set of typed-access kinds (i64, f64, bool, String)
//! - `Store`: resolution, typed access, existence queries, overlay merge
//! - `FormatAdapter`: the boundary to concrete textual syntaxes
//!
//! The engine never touches source text itself; a format crate (such as
//! `dotconf-toml`) parses the text and hands the store a generic tree.
//!
//! # Example
//!
//! ```rust
//! use dotconf_core::{Error, Store};
//!
//! fn port(store: &Store) -> Result<i64, Error> {
//!     Ok(*store.get::<i64>("server.port")?)
//! }
//! ```

mod adapter;
mod error;
mod key;
mod node;
mod scalar;
mod store;

pub use adapter::FormatAdapter;
pub use error::Error;
pub use key::{Key, KeyError};
pub use node::{Kind, Node, Table, Value};
pub use scalar::Scalar;
pub use store::Store;
