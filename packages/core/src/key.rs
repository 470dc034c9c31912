//! Dotted-key type with validated segments.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors related to dotted-key parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// A key contains an empty segment, e.g. `"a..b"` or `".a"`.
    #[error("invalid key {key:?}: empty segment at position {position}")]
    EmptySegment { key: String, position: usize },
}

/// A parsed dotted key addressing a node in the configuration tree.
///
/// Keys are hierarchical and specify a complete path to their target,
/// one table per segment: `"server.tls.cert"` walks table children named
/// `server`, then `tls`, then `cert`. The empty key addresses the root
/// table itself.
///
/// There is no escaping mechanism for literal dots inside a segment; a
/// segment name simply cannot contain `.`.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key {
    segments: Vec<String>,
}

impl Key {
    /// The key addressing the root table.
    pub fn root() -> Self {
        Key {
            segments: Vec::new(),
        }
    }

    /// Parse a dotted key string.
    ///
    /// Segments are separated by `.` and must be non-empty. Unlike file
    /// paths, nothing is normalized away: `"a..b"` is malformed, not a
    /// two-segment key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotconf_core::Key;
    ///
    /// let key = Key::parse("server.port").unwrap();
    /// assert_eq!(key.len(), 2);
    ///
    /// assert!(Key::parse("server..port").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        if s.is_empty() {
            return Ok(Key::root());
        }

        let mut segments = Vec::new();
        for (position, segment) in s.split('.').enumerate() {
            if segment.is_empty() {
                return Err(KeyError::EmptySegment {
                    key: s.to_string(),
                    position,
                });
            }
            segments.push(segment.to_string());
        }

        Ok(Key { segments })
    }

    /// Check if this key is empty (addresses the root).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Iterate over segments.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.segments.iter()
    }

    /// The final segment, if any.
    pub fn last(&self) -> Option<&String> {
        self.segments.last()
    }

    /// A new key holding the first `len` segments of this one.
    pub fn prefix(&self, len: usize) -> Key {
        Key {
            segments: self.segments[..len].to_vec(),
        }
    }

    /// A new key extending this one by a single segment.
    #[must_use]
    pub fn child(&self, segment: &str) -> Key {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Key { segments }
    }

    /// Join this key with another.
    #[must_use]
    pub fn join(&self, other: &Key) -> Key {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Key { segments }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl std::ops::Index<usize> for Key {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.segments[i]
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Key, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        Key::parse(&s).map_err(D::Error::custom)
    }
}

/// Macro for creating keys from literals.
///
/// # Example
///
/// ```rust
/// use dotconf_core::key;
///
/// let k = key!("server.port");
/// assert_eq!(k.len(), 2);
/// ```
#[macro_export]
macro_rules! key {
    ($s:expr) => {
        $crate::Key::parse($s).expect("invalid key literal")
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_keys() {
        assert_eq!(Key::parse("").unwrap().len(), 0);
        assert_eq!(Key::parse("foo").unwrap().len(), 1);
        assert_eq!(Key::parse("foo.bar").unwrap().len(), 2);
        assert_eq!(Key::parse("foo.bar.baz").unwrap().len(), 3);
    }

    #[test]
    fn empty_key_is_root() {
        let k = Key::parse("").unwrap();
        assert!(k.is_empty());
        assert_eq!(k, Key::root());
    }

    #[test]
    fn empty_segments_rejected() {
        assert_eq!(
            Key::parse("a..b"),
            Err(KeyError::EmptySegment {
                key: "a..b".to_string(),
                position: 1,
            })
        );
        assert!(Key::parse(".a").is_err());
        assert!(Key::parse("a.").is_err());
        assert!(Key::parse(".").is_err());
    }

    #[test]
    fn segments_are_not_normalized() {
        // A dot is a separator, never part of a segment.
        let k = Key::parse("a b.c-d").unwrap();
        assert_eq!(&k[0], "a b");
        assert_eq!(&k[1], "c-d");
    }

    #[test]
    fn display_roundtrips() {
        for s in ["", "foo", "server.port", "a.b.c.d"] {
            assert_eq!(Key::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn last_and_prefix() {
        let k = key!("a.b.c");
        assert_eq!(k.last(), Some(&"c".to_string()));
        assert_eq!(k.prefix(2), key!("a.b"));
        assert_eq!(k.prefix(0), Key::root());
        assert_eq!(Key::root().last(), None);
    }

    #[test]
    fn child_extends() {
        let k = key!("server");
        assert_eq!(k.child("port"), key!("server.port"));
        assert_eq!(Key::root().child("top"), key!("top"));
    }

    #[test]
    fn join_keys() {
        assert_eq!(key!("a.b").join(&key!("c.d")), key!("a.b.c.d"));
        assert_eq!(key!("a").join(&Key::root()), key!("a"));
        assert_eq!(Key::root().join(&key!("b")), key!("b"));
    }

    #[test]
    fn index_trait() {
        let k = key!("foo.bar.baz");
        assert_eq!(&k[0], "foo");
        assert_eq!(&k[2], "baz");
    }

    #[test]
    fn error_display() {
        let err = Key::parse("a..b").unwrap_err();
        let display = format!("{}", err);
        assert!(display.contains("a..b"));
        assert!(display.contains("position 1"));
    }
}
