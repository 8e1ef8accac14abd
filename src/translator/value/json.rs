use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::translator::value::{config::Config, core::Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Str(s) | Self::Name(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            },
            Self::Table(config) => config.serialize(serializer),
        }
    }
}

impl Serialize for Config {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Renders a configuration as a JSON object.
///
/// Keys appear in insertion order. Pretty output uses two-space indentation;
/// `compact` produces a single line. Non-ASCII text is written as UTF-8.
///
/// # Errors
/// Propagates `serde_json` serialization errors.
///
/// # Example
/// ```
/// use conflang::translator::value::{config::Config, core::Value, json::to_json};
///
/// let mut config = Config::new();
/// config.insert("zeta", Value::Int(1));
/// config.insert("alpha", Value::Array(vec![Value::from("ü"), Value::Name("on".into())]));
///
/// assert_eq!(to_json(&config, true).unwrap(), r#"{"zeta":1,"alpha":["ü","on"]}"#);
/// ```
pub fn to_json(config: &Config, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(config)
    } else {
        serde_json::to_string_pretty(config)
    }
}
