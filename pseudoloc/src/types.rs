//! Core, format-agnostic types for pseudoloc.
//! Parsers decode into these; encoders serialize these.

use std::fmt::Display;

/// All entries read from one resource container, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resource {
    pub entries: Vec<ResourceEntry>,
}

impl Resource {
    pub fn new(entries: Vec<ResourceEntry>) -> Self {
        Resource { entries }
    }

    /// Builds a resource of text entries from ordered `(key, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Resource {
            entries: pairs
                .into_iter()
                .map(|(key, value)| ResourceEntry::text(key, value))
                .collect(),
        }
    }

    pub fn find_entry(&self, key: &str) -> Option<&ResourceEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A single keyed entry of a resource container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    /// Unique key within the container.
    pub key: String,

    pub value: EntryValue,

    /// Optional comment for translators.
    pub comment: Option<String>,
}

impl ResourceEntry {
    /// A string-typed entry without comment.
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        ResourceEntry {
            key: key.into(),
            value: EntryValue::Text(value.into()),
            comment: None,
        }
    }

    /// Returns the string value, or `None` for non-string entries.
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            EntryValue::Text(s) => Some(s),
            EntryValue::Other { .. } => None,
        }
    }
}

impl Display for ResourceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceEntry {{ key: {}, value: {} }}", self.key, self.value)
    }
}

/// The value of an entry as typed by its source format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
    /// A plain string; the only kind that is ever pseudo-localized.
    Text(String),

    /// Anything else (images, numbers, file references, ...), kept by name only.
    Other { type_name: String },
}

impl Display for EntryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryValue::Text(value) => write!(f, "{}", value),
            EntryValue::Other { type_name } => write!(f, "<{}>", type_name),
        }
    }
}

/// Options controlling which entries are pseudo-localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformOptions {
    /// Whether zero-length string values are included.
    pub include_blank: bool,
}

impl TransformOptions {
    /// Creates default options (blank values excluded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables inclusion of blank values.
    pub fn with_include_blank(mut self, include_blank: bool) -> Self {
        self.include_blank = include_blank;
        self
    }
}
