//! All supported resource file formats for pseudoloc.
//!
//! This module re-exports the main types for each format and provides
//! the [`FormatType`] enum for generic format handling across the crate.

pub mod csv;
pub mod json;
pub mod resx;

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

pub use csv::CSVRecord;
pub use json::Format as JsonFormat;
pub use resx::Format as ResxFormat;

use crate::{error::Error, traits::Parser, types::Resource};

/// Represents all supported resource file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatType {
    /// .NET `.resx` XML resources.
    #[default]
    Resx,
    /// Flat JSON object of key/value pairs.
    Json,
    /// Headerless `key,value` CSV.
    Csv,
}

/// Human-friendly name of each format: `"resx"`, `"json"`, `"csv"`.
///
/// # Example
/// ```rust
/// use pseudoloc::formats::FormatType;
/// assert_eq!(FormatType::Resx.to_string(), "resx");
/// ```
impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Resx => write!(f, "resx"),
            FormatType::Json => write!(f, "json"),
            FormatType::Csv => write!(f, "csv"),
        }
    }
}

/// Accepts `"resx"`, `"json"` and `"csv"`, case-insensitively and ignoring surrounding
/// whitespace. Returns [`Error::UnknownFormat`] for anything else.
///
/// # Example
/// ```rust
/// use pseudoloc::formats::FormatType;
/// use std::str::FromStr;
/// assert_eq!(FormatType::from_str("RESX").unwrap(), FormatType::Resx);
/// assert!(FormatType::from_str("po").is_err());
/// ```
impl FromStr for FormatType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "resx" => Ok(FormatType::Resx),
            "json" => Ok(FormatType::Json),
            "csv" => Ok(FormatType::Csv),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl FormatType {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Resx => "resx",
            FormatType::Json => "json",
            FormatType::Csv => "csv",
        }
    }

    /// Infers the format from a path's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("resx") => Ok(FormatType::Resx),
            Some("json") => Ok(FormatType::Json),
            Some("csv") => Ok(FormatType::Csv),
            extension => Err(Error::UnsupportedFormat(format!(
                "Unsupported file extension: {:?}.",
                extension
            ))),
        }
    }

    /// Reads every entry of the file at `path`.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Resource, Error> {
        let path = path.as_ref();
        Ok(match self {
            FormatType::Resx => Resource::from(ResxFormat::read_from(path)?),
            FormatType::Json => Resource::from(JsonFormat::read_from(path)?),
            FormatType::Csv => Resource::from(Vec::<CSVRecord>::read_from(path)?),
        })
    }

    /// Writes the text entries of `resource` to `path`, creating or truncating the file.
    pub fn write<P: AsRef<Path>>(&self, path: P, resource: Resource) -> Result<(), Error> {
        let path = path.as_ref();
        match self {
            FormatType::Resx => ResxFormat::from(resource).write_to(path),
            FormatType::Json => JsonFormat::from(resource).write_to(path),
            FormatType::Csv => Vec::<CSVRecord>::from(resource).write_to(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_type_display() {
        assert_eq!(FormatType::Resx.to_string(), "resx");
        assert_eq!(FormatType::Json.to_string(), "json");
        assert_eq!(FormatType::Csv.to_string(), "csv");
    }

    #[test]
    fn test_format_type_from_str() {
        assert_eq!(FormatType::from_str("resx").unwrap(), FormatType::Resx);
        assert_eq!(FormatType::from_str("  Json ").unwrap(), FormatType::Json);
        assert_eq!(FormatType::from_str("CSV").unwrap(), FormatType::Csv);
        assert!(matches!(
            FormatType::from_str("xliff"),
            Err(Error::UnknownFormat(name)) if name == "xliff"
        ));
    }

    #[test]
    fn test_format_type_from_path() {
        assert_eq!(FormatType::from_path("a/Strings.resx").unwrap(), FormatType::Resx);
        assert_eq!(FormatType::from_path("Strings.fr-FR.RESX").unwrap(), FormatType::Resx);
        assert_eq!(FormatType::from_path("en.json").unwrap(), FormatType::Json);
        assert!(FormatType::from_path("strings.xml").is_err());
        assert!(FormatType::from_path("README").is_err());
    }

    #[test]
    fn test_default_is_resx() {
        assert_eq!(FormatType::default(), FormatType::Resx);
        assert_eq!(FormatType::default().extension(), "resx");
    }

    #[test]
    fn test_read_and_write_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        FormatType::Csv
            .write(&path, Resource::from_pairs([("k", "v")]))
            .unwrap();
        let resource = FormatType::Csv.read(&path).unwrap();
        assert_eq!(resource.find_entry("k").unwrap().as_text(), Some("v"));
    }
}
