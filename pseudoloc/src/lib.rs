#![forbid(unsafe_code)]
//! Pseudo-localization of resource files for Rust.
//!
//! Generates a fake "translation" of a neutral resource file whose values are accented,
//! lengthened and bracketed, so truncation, hard-coded strings and broken placeholders
//! show up in the UI without waiting for a real translator.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pseudoloc::{TransformOptions, Translator, transform};
//!
//! // Transform a single string
//! assert_eq!(transform("Save"), "[Ŝävę !!! !!! !!!]");
//!
//! // Or a whole file
//! let translator = Translator::new(TransformOptions::default());
//! translator.translate_file("Strings.resx", "Strings.qps-ploc.resx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Supported Formats
//!
//! - **`.resx`**: .NET XML resources; only string-typed `<data>` entries are transformed
//! - **JSON**: flat objects of key/value pairs
//! - **CSV**: headerless `key,value` rows
//!
//! # Transform rules
//!
//! - Latin letters are replaced by accented look-alikes
//! - `{0}` placeholders and `<b>` markup are kept verbatim
//! - Output is wrapped in `[` `]` and padded with ` !!!` (400% growth under 10 characters, 30% above)
//! - Strings containing `http://` or `https://` are left untouched

pub mod culture;
pub mod eligibility;
pub mod error;
pub mod formats;
pub mod freshness;
pub mod pseudo;
pub mod traits;
pub mod translator;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    eligibility::{collect_eligible, is_eligible, pseudo_localize},
    error::Error,
    formats::FormatType,
    pseudo::transform,
    translator::{FileOutcome, Translator},
    types::{EntryValue, Resource, ResourceEntry, TransformOptions},
};
