//! The format boundary: adapters that turn source text into node trees.

use std::io;
use std::path;

use crate::{Error, Table};

/// Parse configuration text in one concrete syntax into a generic
/// [`Table`] tree.
///
/// The store never inspects syntax; it depends only on this boundary and
/// on the resulting tree. One implementation exists per supported textual
/// format (e.g. TOML in `dotconf-toml`).
///
/// # Object Safety
///
/// This trait is object-safe: [`Store::load_reader`](crate::Store::load_reader)
/// and [`Store::load_file`](crate::Store::load_file) take `&dyn FormatAdapter`.
pub trait FormatAdapter {
    /// Parse source text from a reader.
    ///
    /// # Returns
    ///
    /// The top-level table of the parsed document, or [`Error::Parse`]
    /// for malformed syntax.
    fn parse_reader(&self, reader: &mut dyn io::Read) -> Result<Table, Error>;

    /// Parse source text from a file path.
    ///
    /// # Returns
    ///
    /// The top-level table of the parsed document. Fails with
    /// [`Error::Io`] if the file cannot be read and [`Error::Parse`] for
    /// malformed syntax.
    fn parse_file(&self, path: &path::Path) -> Result<Table, Error>;
}

// Blanket implementations for references and boxes

impl<T: FormatAdapter + ?Sized> FormatAdapter for &T {
    fn parse_reader(&self, reader: &mut dyn io::Read) -> Result<Table, Error> {
        (*self).parse_reader(reader)
    }

    fn parse_file(&self, path: &path::Path) -> Result<Table, Error> {
        (*self).parse_file(path)
    }
}

impl<T: FormatAdapter + ?Sized> FormatAdapter for Box<T> {
    fn parse_reader(&self, reader: &mut dyn io::Read) -> Result<Table, Error> {
        self.as_ref().parse_reader(reader)
    }

    fn parse_file(&self, path: &path::Path) -> Result<Table, Error> {
        self.as_ref().parse_file(path)
    }
}
