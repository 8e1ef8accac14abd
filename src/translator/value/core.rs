use crate::translator::value::config::Config;

/// Represents a value in the translated configuration tree.
///
/// Every variant maps onto a JSON value: integers become numbers, strings and
/// bare names become strings, arrays become arrays and tables become objects.
///
/// # Example
/// ```
/// use conflang::translator::value::{config::Config, core::Value};
///
/// let mut table = Config::new();
/// table.insert("port", Value::from(8080_i64));
/// let value = Value::from(vec![Value::from(1_i64), Value::from(table)]);
///
/// let items = value.as_array().unwrap();
/// assert_eq!(items[0].as_int(), Some(1));
/// assert_eq!(items[1].get("port").and_then(Value::as_int), Some(8080));
/// assert_eq!(Value::from("text").as_int(), None);
/// assert_eq!(Value::Int(1).as_array(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Int(i64),
    /// A string literal or the result of string concatenation.
    Str(String),
    /// An ordered sequence of values.
    Array(Vec<Self>),
    /// A bare word that did not name a known constant.
    /// It is kept verbatim and serialized as a string.
    Name(String),
    /// A nested `{ ... }` block of key/value pairs.
    Table(Config),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl From<Config> for Value {
    fn from(v: Config) -> Self {
        Self::Table(v)
    }
}

impl Value {
    /// Returns the integer if this is an `Int`.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text of a `Str` or a `Name`.
    ///
    /// Both render as JSON strings, so callers reading the tree usually do not
    /// care which of the two they got.
    ///
    /// # Example
    /// ```
    /// use conflang::translator::value::core::Value;
    ///
    /// assert_eq!(Value::Name("true".into()).as_str(), Some("true"));
    /// assert_eq!(Value::Int(1).as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::Name(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an `Array`.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested configuration if this is a `Table`.
    #[must_use]
    pub const fn as_table(&self) -> Option<&Config> {
        match self {
            Self::Table(config) => Some(config),
            _ => None,
        }
    }

    /// Looks up `key` in a `Table`. Returns `None` for every other variant.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_table().and_then(|config| config.get(key))
    }

    /// A short name of the variant for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "an integer",
            Self::Str(_) => "a string",
            Self::Array(_) => "an array",
            Self::Name(_) => "a bare name",
            Self::Table(_) => "a block",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) | Self::Name(s) => write!(f, "{s:?}"),
            Self::Array(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Table(config) => write!(f, "{config}"),
        }
    }
}
