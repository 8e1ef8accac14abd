use std::collections::HashMap;

use indexmap::IndexMap;

use crate::translator::value::core::Value;

/// An ordered mapping from keys to values.
///
/// Keys keep the position of their first insertion. Inserting an existing key
/// replaces its value in place (last write wins).
///
/// # Example
/// ```
/// use conflang::translator::value::{config::Config, core::Value};
///
/// let mut config = Config::new();
/// config.insert("port", Value::Int(80));
/// config.insert("host", Value::from("localhost"));
/// config.insert("port", Value::Int(8080));
///
/// assert_eq!(config.keys().collect::<Vec<_>>(), ["port", "host"]);
/// assert_eq!(config.get("port"), Some(&Value::Int(8080)));
/// assert_eq!(config.len(), 2);
/// assert!(!config.is_empty());
/// assert!(Config::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    entries: IndexMap<String, Value>,
}

impl Config {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `key`, returning the replaced value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// The value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;

        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{key:?}: {value}")?;
        }

        write!(f, "}}")
    }
}

/// The constants declared with `(define name value)`.
///
/// Values are stored fully evaluated. Redefining a name overwrites it and
/// entries are never removed, so the table only grows during a parse.
///
/// # Example
/// ```
/// use conflang::translator::value::{config::SymbolTable, core::Value};
///
/// let mut constants = SymbolTable::new();
/// assert!(constants.is_empty());
///
/// constants.define("base", Value::Int(1));
/// constants.define("base", Value::Int(2));
///
/// assert_eq!(constants.len(), 1);
/// assert_eq!(constants.get("base"), Some(&Value::Int(2)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    constants: HashMap<String, Value>,
}

impl SymbolTable {
    /// Creates a table with no constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any earlier definition.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.constants.insert(name.into(), value);
    }

    /// The value bound to `name`, if it has been defined.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    /// Number of defined constants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Whether no constant has been defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}
