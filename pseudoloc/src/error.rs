//! All error types for the pseudoloc crate.
//!
//! These are returned from every fallible operation (parsing, serialization, file replacement).
//! The transform itself never fails and has no error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("duplicate key `{0}`")]
    DuplicateKey(String),

    #[error("file {} is still locked", path.display())]
    DestinationLocked {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this error means the source could not be read as a resource container.
    ///
    /// Such files are reported and skipped; every other error aborts the run.
    pub fn is_unparseable_source(&self) -> bool {
        matches!(
            self,
            Error::JsonParse(_)
                | Error::XmlParse(_)
                | Error::CsvParse(_)
                | Error::InvalidResource(_)
                | Error::DuplicateKey(_)
        )
    }
}
