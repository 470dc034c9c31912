//! Convenience bundle of a `Store` and the TOML adapter.

use std::io;
use std::ops;
use std::path;

use dotconf_core::{Error, Store};

use crate::adapter::TomlAdapter;

/// A configuration store fed by TOML sources.
///
/// `TomlConfig` dereferences to [`Store`], so all typed access
/// (`get`, `get_mut`, `has_key`) is available directly; the wrapper adds
/// TOML-bound construction and loading. Multiple loads layer: later
/// documents overwrite same-kind scalars and merge tables.
///
/// # Example
///
/// ```rust
/// use dotconf_toml::TomlConfig;
///
/// let mut config = TomlConfig::from_reader("server.port = 8080".as_bytes()).unwrap();
/// config.load_reader("server.port = 9090".as_bytes(), "").unwrap();
///
/// assert_eq!(*config.get::<i64>("server.port").unwrap(), 9090);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TomlConfig {
    store: Store,
}

impl TomlConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from a TOML stream.
    pub fn from_reader(reader: impl io::Read) -> Result<Self, Error> {
        let mut config = Self::new();
        config.load_reader(reader, "")?;
        Ok(config)
    }

    /// Create a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<path::Path>) -> Result<Self, Error> {
        let mut config = Self::new();
        config.load_file(path, "")?;
        Ok(config)
    }

    /// Load TOML from a stream, merging it in at the dotted `root`.
    ///
    /// Pass `""` to merge at the store root.
    pub fn load_reader(&mut self, mut reader: impl io::Read, root: &str) -> Result<(), Error> {
        self.store.load_reader(&TomlAdapter, &mut reader, root)
    }

    /// Load TOML from a file, merging it in at the dotted `root`.
    pub fn load_file(&mut self, path: impl AsRef<path::Path>, root: &str) -> Result<(), Error> {
        self.store.load_file(&TomlAdapter, path.as_ref(), root)
    }
}

impl ops::Deref for TomlConfig {
    type Target = Store;

    fn deref(&self) -> &Store {
        &self.store
    }
}

impl ops::DerefMut for TomlConfig {
    fn deref_mut(&mut self) -> &mut Store {
        &mut self.store
    }
}

impl From<TomlConfig> for Store {
    fn from(config: TomlConfig) -> Store {
        config.store
    }
}
