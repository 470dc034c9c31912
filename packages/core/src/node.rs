//! The node tree - tables of tables of scalar values.
//!
//! This is the data model behind every configuration store: an
//! insertion-ordered table whose children are either nested tables or
//! terminal scalar values of one of four fixed kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Key;

/// An insertion-ordered mapping from segment names to child nodes.
///
/// Iteration yields children in the order they were first inserted;
/// lookups are plain key lookups.
pub type Table = indexmap::IndexMap<String, Node>;

/// A terminal scalar value.
///
/// The set of kinds is closed: 64-bit integers, 64-bit floats, booleans
/// and UTF-8 strings. A value's kind is fixed at creation and is never
/// silently coerced on access.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// UTF-8 string.
    String(String),
}

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Boolean(_) => Kind::Boolean,
            Value::String(_) => Kind::String,
        }
    }
}

/// A node in the configuration tree: a nested table or a scalar value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Named children (sub-tables or values).
    Table(Table),
    /// A terminal scalar.
    Value(Value),
}

impl Node {
    /// An empty table node.
    pub fn table() -> Self {
        Node::Table(Table::new())
    }

    /// The kind tag of this node.
    pub fn kind(&self) -> Kind {
        match self {
            Node::Table(_) => Kind::Table,
            Node::Value(v) => v.kind(),
        }
    }

    /// Check if this node is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Node::Table(_))
    }

    /// Borrow this node as a table, if it is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Node::Table(t) => Some(t),
            Node::Value(_) => None,
        }
    }

    /// Mutably borrow this node as a table, if it is one.
    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Node::Table(t) => Some(t),
            Node::Value(_) => None,
        }
    }

    /// Borrow this node as a scalar value, if it is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Node::Table(_) => None,
            Node::Value(v) => Some(v),
        }
    }

    /// Get a reference to a descendant node by key.
    ///
    /// Returns `None` if the key doesn't lead anywhere, including when a
    /// scalar value blocks descent partway down. The empty key returns
    /// this node itself.
    pub fn get(&self, key: &Key) -> Option<&Node> {
        let mut cursor = self;
        for segment in key.iter() {
            cursor = cursor.as_table()?.get(segment)?;
        }
        Some(cursor)
    }
}

/// The kind of a node, used in mismatch diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Table,
    Integer,
    Float,
    Boolean,
    String,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Table => "table",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Boolean => "boolean",
            Kind::String => "string",
        };
        write!(f, "{}", name)
    }
}

// Conversion from the scalar kinds

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Value> for Node {
    fn from(v: Value) -> Self {
        Node::Value(v)
    }
}

impl From<i64> for Node {
    fn from(v: i64) -> Self {
        Node::Value(v.into())
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        Node::Value(v.into())
    }
}

impl From<bool> for Node {
    fn from(v: bool) -> Self {
        Node::Value(v.into())
    }
}

impl From<String> for Node {
    fn from(v: String) -> Self {
        Node::Value(v.into())
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Node::Value(v.into())
    }
}

impl From<Table> for Node {
    fn from(t: Table) -> Self {
        Node::Table(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key;

    fn sample_tree() -> Node {
        let mut tls = Table::new();
        tls.insert("enabled".to_string(), Node::from(true));
        let mut server = Table::new();
        server.insert("port".to_string(), Node::from(8080i64));
        server.insert("tls".to_string(), Node::Table(tls));
        let mut root = Table::new();
        root.insert("server".to_string(), Node::Table(server));
        Node::Table(root)
    }

    #[test]
    fn get_walks_tables() {
        let tree = sample_tree();
        assert_eq!(
            tree.get(&key!("server.port")),
            Some(&Node::from(8080i64))
        );
        assert_eq!(
            tree.get(&key!("server.tls.enabled")),
            Some(&Node::from(true))
        );
        assert!(tree.get(&key!("server.tls")).unwrap().is_table());
    }

    #[test]
    fn get_empty_key_is_self() {
        let tree = sample_tree();
        assert_eq!(tree.get(&Key::root()), Some(&tree));
    }

    #[test]
    fn get_missing_or_blocked_is_none() {
        let tree = sample_tree();
        assert_eq!(tree.get(&key!("client")), None);
        // port is a value; descent through it fails
        assert_eq!(tree.get(&key!("server.port.x")), None);
    }

    #[test]
    fn kinds() {
        assert_eq!(Node::table().kind(), Kind::Table);
        assert_eq!(Node::from(1i64).kind(), Kind::Integer);
        assert_eq!(Node::from(1.5f64).kind(), Kind::Float);
        assert_eq!(Node::from(false).kind(), Kind::Boolean);
        assert_eq!(Node::from("x").kind(), Kind::String);
    }

    #[test]
    fn kind_display() {
        assert_eq!(Kind::Table.to_string(), "table");
        assert_eq!(Kind::Integer.to_string(), "integer");
        assert_eq!(Kind::Float.to_string(), "float");
        assert_eq!(Kind::Boolean.to_string(), "boolean");
        assert_eq!(Kind::String.to_string(), "string");
    }

    #[test]
    fn tables_preserve_insertion_order() {
        let mut table = Table::new();
        table.insert("zeta".to_string(), Node::from(1i64));
        table.insert("alpha".to_string(), Node::from(2i64));
        table.insert("mid".to_string(), Node::from(3i64));
        let names: Vec<&String> = table.keys().collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }
}
