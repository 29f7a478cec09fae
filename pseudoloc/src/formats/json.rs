//! Support for flat JSON resource files (`{ "key": "value", ... }`).
//!
//! String members are text entries; numbers, booleans, null, arrays and nested objects
//! are non-string entries and are left out of any pseudo-localized output.

use serde_json::{Map, Value};
use std::io::Write;

use crate::{
    error::Error,
    traits::Parser,
    types::{EntryValue, Resource, ResourceEntry},
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Format {
    pub members: Vec<(String, Value)>,
}

impl Parser for Format {
    fn from_str(s: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(s)?;
        let Value::Object(map) = value else {
            return Err(Error::InvalidResource(
                "JSON resource must be an object of key/value pairs".to_string(),
            ));
        };
        Ok(Format {
            members: map.into_iter().collect(),
        })
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let map: Map<String, Value> = self.members.iter().cloned().collect();
        serde_json::to_writer_pretty(&mut writer, &Value::Object(map))?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl From<Format> for Resource {
    fn from(value: Format) -> Self {
        Resource::new(
            value
                .members
                .into_iter()
                .map(|(key, value)| ResourceEntry {
                    key,
                    value: match value {
                        Value::String(s) => EntryValue::Text(s),
                        other => EntryValue::Other {
                            type_name: json_type_name(&other).to_string(),
                        },
                    },
                    comment: None,
                })
                .collect(),
        )
    }
}

impl From<Resource> for Format {
    fn from(value: Resource) -> Self {
        Format {
            members: value
                .entries
                .into_iter()
                .filter_map(|entry| match entry.value {
                    EntryValue::Text(text) => Some((entry.key, Value::String(text))),
                    EntryValue::Other { .. } => None,
                })
                .collect(),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
