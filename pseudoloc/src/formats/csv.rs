//! Support for headerless `key,value` CSV resource files.
//!
//! Every value is a string, so every row is a text entry.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    traits::Parser,
    types::{EntryValue, Resource},
};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CSVRecord {
    pub key: String,
    pub value: String,
}

impl Parser for Vec<CSVRecord> {
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(s.as_bytes());
        let mut records = Vec::new();
        for result in rdr.deserialize() {
            records.push(result?);
        }
        Ok(records)
    }

    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        for record in self {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl From<Vec<CSVRecord>> for Resource {
    fn from(value: Vec<CSVRecord>) -> Self {
        Resource::from_pairs(value.into_iter().map(|record| (record.key, record.value)))
    }
}

impl From<Resource> for Vec<CSVRecord> {
    fn from(value: Resource) -> Self {
        value
            .entries
            .into_iter()
            .filter_map(|entry| match entry.value {
                EntryValue::Text(value) => Some(CSVRecord {
                    key: entry.key,
                    value,
                }),
                EntryValue::Other { .. } => None,
            })
            .collect()
    }
}
