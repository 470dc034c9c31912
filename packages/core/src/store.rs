//! The configuration store: dotted-key resolution, typed access, merge.

use std::io;
use std::path;

use crate::adapter::FormatAdapter;
use crate::error::Error;
use crate::key::Key;
use crate::node::{Kind, Node, Table};
use crate::scalar::Scalar;

/// A hierarchically keyed configuration store.
///
/// The store owns a single root [`Table`]; every operation addresses
/// nodes below it with dotted keys. Reads are strictly typed, writes
/// create missing intermediate tables on demand, and loads overlay an
/// externally parsed tree onto the existing one.
///
/// The store is a single-owner, single-threaded structure. Wrap it in a
/// lock (or confine it to one thread) if the application shares it.
///
/// # Example
///
/// ```rust
/// use dotconf_core::Store;
///
/// let mut store = Store::new();
/// *store.get_mut::<i64>("server.port").unwrap() = 8080;
///
/// assert_eq!(*store.get::<i64>("server.port").unwrap(), 8080);
/// assert!(store.has_key("server"));
/// assert!(!store.has_key("client"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Store {
    root: Table,
}

impl Store {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a reference to the root table.
    pub fn root(&self) -> &Table {
        &self.root
    }

    /// Get a mutable reference to the root table.
    pub fn root_mut(&mut self) -> &mut Table {
        &mut self.root
    }

    /// Read-only typed access to a value.
    ///
    /// # Returns
    ///
    /// A reference to the stored payload. Fails with
    /// [`Error::KeyNotFound`] if any segment of the key is missing and
    /// [`Error::TypeMismatch`] if the target is a table or a value of a
    /// different kind than `T`.
    pub fn get<T: Scalar>(&self, key: &str) -> Result<&T, Error> {
        let key = Key::parse(key)?;
        let Some(last) = key.last().cloned() else {
            // The empty key addresses the root table.
            return Err(Error::TypeMismatch {
                key,
                expected: T::kind(),
                found: Kind::Table,
            });
        };

        let parent = self.table_at(&key, key.len() - 1)?;
        match parent.get(&last) {
            None => Err(Error::KeyNotFound { key }),
            Some(Node::Table(_)) => Err(Error::TypeMismatch {
                key,
                expected: T::kind(),
                found: Kind::Table,
            }),
            Some(Node::Value(value)) => {
                let found = value.kind();
                T::from_value(value).ok_or(Error::TypeMismatch {
                    key,
                    expected: T::kind(),
                    found,
                })
            }
        }
    }

    /// Writeable typed access to a value.
    ///
    /// A new value node of kind `T` (with `T::default()` as payload) is
    /// created if the target does not exist, including all missing
    /// intermediate tables. An existing target must already have kind `T`
    /// or the call fails with [`Error::TypeMismatch`]; nothing is
    /// overwritten or coerced.
    ///
    /// The returned borrow is exclusive, so it cannot outlive the next
    /// mutating call on the store.
    pub fn get_mut<T: Scalar>(&mut self, key: &str) -> Result<&mut T, Error> {
        let key = Key::parse(key)?;
        let Some(last) = key.last().cloned() else {
            return Err(Error::TypeMismatch {
                key,
                expected: T::kind(),
                found: Kind::Table,
            });
        };

        let parent = self.table_at_mut(&key, key.len() - 1)?;
        let node = parent
            .entry(last)
            .or_insert_with(|| Node::Value(T::default().into_value()));
        match node {
            Node::Table(_) => Err(Error::TypeMismatch {
                key,
                expected: T::kind(),
                found: Kind::Table,
            }),
            Node::Value(value) => {
                let found = value.kind();
                T::from_value_mut(value).ok_or(Error::TypeMismatch {
                    key,
                    expected: T::kind(),
                    found,
                })
            }
        }
    }

    /// Test if a node of any kind exists at the given key.
    ///
    /// This is the only total query: it never creates nodes and never
    /// fails. A key that does not even parse addresses nothing, so the
    /// answer is `false`. The empty key addresses the root table, which
    /// always exists.
    pub fn has_key(&self, key: &str) -> bool {
        let Ok(key) = Key::parse(key) else {
            return false;
        };

        let mut table = &self.root;
        for (i, segment) in key.iter().enumerate() {
            match table.get(segment) {
                None => return false,
                Some(node) => {
                    if i + 1 == key.len() {
                        return true;
                    }
                    match node.as_table() {
                        Some(t) => table = t,
                        None => return false,
                    }
                }
            }
        }
        true
    }

    /// Load configuration from a reader, merging it in at `root`.
    ///
    /// Pass `""` as `root` to merge the parsed document's top-level table
    /// directly into the store root.
    pub fn load_reader(
        &mut self,
        adapter: &dyn FormatAdapter,
        reader: &mut dyn io::Read,
        root: &str,
    ) -> Result<(), Error> {
        let incoming = adapter.parse_reader(reader)?;
        self.merge(incoming, root)
    }

    /// Load configuration from a file, merging it in at `root`.
    ///
    /// Identical merge semantics to [`Store::load_reader`].
    pub fn load_file(
        &mut self,
        adapter: &dyn FormatAdapter,
        path: &path::Path,
        root: &str,
    ) -> Result<(), Error> {
        let incoming = adapter.parse_file(path)?;
        self.merge(incoming, root)
    }

    /// Merge a parsed table into the store at the given dotted root.
    ///
    /// The overlay is recursive: keys missing from the destination are
    /// inserted, table-on-table overlaps merge per key, and a scalar of
    /// the same kind overwrites the existing one (later loads win). A
    /// kind disagreement anywhere fails with [`Error::TypeMismatch`].
    ///
    /// The whole overlay is validated before anything is applied, so a
    /// failed merge leaves the store unchanged.
    pub fn merge(&mut self, incoming: Table, root: &str) -> Result<(), Error> {
        let root = Key::parse(root)?;
        if let Some(dest) = self.probe_table(&root)? {
            check_merge(dest, &incoming, &root)?;
        }
        let dest = self.table_at_mut(&root, root.len())?;
        apply_merge(dest, incoming);
        Ok(())
    }

    /// Walk the first `upto` segments of `key` in read mode.
    fn table_at(&self, key: &Key, upto: usize) -> Result<&Table, Error> {
        let mut table = &self.root;
        for (i, segment) in key.iter().take(upto).enumerate() {
            let node = table
                .get(segment)
                .ok_or_else(|| Error::KeyNotFound { key: key.clone() })?;
            table = node.as_table().ok_or_else(|| Error::TypeMismatch {
                key: key.prefix(i + 1),
                expected: Kind::Table,
                found: node.kind(),
            })?;
        }
        Ok(table)
    }

    /// Walk the first `upto` segments of `key`, creating empty tables for
    /// missing segments. A value node in the way is a mismatch.
    fn table_at_mut(&mut self, key: &Key, upto: usize) -> Result<&mut Table, Error> {
        let mut table = &mut self.root;
        for (i, segment) in key.iter().take(upto).enumerate() {
            let node = table.entry(segment.clone()).or_insert_with(Node::table);
            table = match node {
                Node::Table(t) => t,
                other => {
                    return Err(Error::TypeMismatch {
                        key: key.prefix(i + 1),
                        expected: Kind::Table,
                        found: other.kind(),
                    })
                }
            };
        }
        Ok(table)
    }

    /// Walk all segments of `key` in read mode, distinguishing a path
    /// that does not exist yet (`None`) from one blocked by a value node
    /// (`TypeMismatch`).
    fn probe_table(&self, key: &Key) -> Result<Option<&Table>, Error> {
        let mut table = &self.root;
        for (i, segment) in key.iter().enumerate() {
            let Some(node) = table.get(segment) else {
                return Ok(None);
            };
            table = node.as_table().ok_or_else(|| Error::TypeMismatch {
                key: key.prefix(i + 1),
                expected: Kind::Table,
                found: node.kind(),
            })?;
        }
        Ok(Some(table))
    }
}

fn check_merge(dest: &Table, incoming: &Table, at: &Key) -> Result<(), Error> {
    for (name, node) in incoming {
        let Some(existing) = dest.get(name) else {
            continue;
        };
        match (existing, node) {
            (Node::Table(dt), Node::Table(st)) => check_merge(dt, st, &at.child(name))?,
            (Node::Value(dv), Node::Value(sv)) if dv.kind() == sv.kind() => {}
            _ => {
                return Err(Error::TypeMismatch {
                    key: at.child(name),
                    expected: existing.kind(),
                    found: node.kind(),
                })
            }
        }
    }
    Ok(())
}

fn apply_merge(dest: &mut Table, incoming: Table) {
    for (name, node) in incoming {
        match dest.entry(name) {
            indexmap::map::Entry::Occupied(mut entry) => match (entry.get_mut(), node) {
                (Node::Table(dt), Node::Table(st)) => apply_merge(dt, st),
                // Kinds were validated before application; same-kind
                // scalars overwrite (later loads win).
                (slot, node) => *slot = node,
            },
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(node);
            }
        }
    }
}
