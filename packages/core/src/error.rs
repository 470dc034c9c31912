//! Error types for the core engine.

use crate::key::{Key, KeyError};
use crate::node::Kind;

/// Errors raised by store access, merging and parsing.
///
/// Every fallible operation reports through this one enum; nothing is
/// logged or swallowed inside the store. `Store::has_key` is the only
/// total query.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Malformed dotted key (empty segment).
    #[error("{0}")]
    Key(#[from] KeyError),

    /// Read access to a path with a missing segment.
    #[error("key not found: {key}")]
    KeyNotFound { key: Key },

    /// A node exists with a different kind than the operation requires.
    ///
    /// Raised when a read or write names the wrong scalar kind, when a
    /// scalar value blocks descent through the tree, and when a merge
    /// would overlay nodes of disagreeing kinds. Never coerced.
    #[error("type mismatch at {key}: expected {expected}, found {found}")]
    TypeMismatch {
        key: Key,
        expected: Kind,
        found: Kind,
    },

    /// Malformed source text, surfaced verbatim from the format adapter.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Failure reading a configuration source.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
