//! TOML parsing behind the `FormatAdapter` boundary.

use std::io;
use std::path;

use dotconf_core::{Error, FormatAdapter, Key, Node, Table};

/// Parses TOML documents into generic node trees.
///
/// TOML integers, floats, booleans and strings map onto the four scalar
/// kinds; TOML tables (including dotted keys and `[section]` headers)
/// map onto nested tables. TOML arrays and datetimes have no
/// representation in the closed data model and are rejected with
/// [`Error::Parse`] naming the offending key.
#[derive(Clone, Copy, Debug, Default)]
pub struct TomlAdapter;

impl FormatAdapter for TomlAdapter {
    fn parse_reader(&self, reader: &mut dyn io::Read) -> Result<Table, Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        parse_str(&text)
    }

    fn parse_file(&self, path: &path::Path) -> Result<Table, Error> {
        log::debug!("parsing TOML config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        parse_str(&text)
    }
}

fn parse_str(text: &str) -> Result<Table, Error> {
    let document: toml::Table = text.parse().map_err(|e: toml::de::Error| Error::Parse {
        message: e.to_string(),
    })?;
    convert_table(document, &Key::root())
}

fn convert_table(table: toml::Table, at: &Key) -> Result<Table, Error> {
    let mut out = Table::new();
    for (name, value) in table {
        let node = convert_value(value, &at.child(&name))?;
        out.insert(name, node);
    }
    Ok(out)
}

fn convert_value(value: toml::Value, at: &Key) -> Result<Node, Error> {
    match value {
        toml::Value::Integer(v) => Ok(Node::from(v)),
        toml::Value::Float(v) => Ok(Node::from(v)),
        toml::Value::Boolean(v) => Ok(Node::from(v)),
        toml::Value::String(v) => Ok(Node::from(v)),
        toml::Value::Table(t) => Ok(Node::Table(convert_table(t, at)?)),
        toml::Value::Array(_) => Err(Error::Parse {
            message: format!("unsupported TOML array at key '{}'", at),
        }),
        toml::Value::Datetime(_) => Err(Error::Parse {
            message: format!("unsupported TOML datetime at key '{}'", at),
        }),
    }
}
