//! Selection of the entries that get pseudo-localized.

use std::collections::{BTreeMap, btree_map};

use crate::{
    error::Error,
    pseudo::transform,
    types::{Resource, ResourceEntry, TransformOptions},
};

/// Key of a form's title, collected even though it carries the `$` designer prefix.
pub const FORM_TITLE_KEY: &str = "$this.Text";

const META_PREFIXES: [&str; 2] = [">>", "$"];

/// Decides whether a string-typed entry takes part in pseudo-localization.
///
/// Keys starting with `>>` or `$` are designer metadata and are excluded, except
/// [`FORM_TITLE_KEY`] which is always included. Blank values are excluded unless
/// `options.include_blank` is set.
pub fn is_eligible(key: &str, value: &str, options: &TransformOptions) -> bool {
    if key == FORM_TITLE_KEY {
        return true;
    }
    if META_PREFIXES.iter().any(|prefix| key.starts_with(prefix)) {
        return false;
    }
    options.include_blank || !value.is_empty()
}

/// Collects the eligible text entries of `resource`, ordered by key.
///
/// Non-string entries are ignored. A key appearing twice among eligible entries is an error.
pub fn collect_eligible(
    resource: &Resource,
    options: &TransformOptions,
) -> Result<BTreeMap<String, String>, Error> {
    let mut selected = BTreeMap::new();
    for entry in &resource.entries {
        let Some(value) = entry.as_text() else {
            continue;
        };
        if !is_eligible(&entry.key, value, options) {
            continue;
        }
        match selected.entry(entry.key.clone()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value.to_string());
            }
            btree_map::Entry::Occupied(_) => return Err(Error::DuplicateKey(entry.key.clone())),
        }
    }
    Ok(selected)
}

/// Builds the pseudo-localized resource for `resource`: eligible entries only, sorted by
/// key, each value passed through [`transform`].
pub fn pseudo_localize(resource: &Resource, options: &TransformOptions) -> Result<Resource, Error> {
    let eligible = collect_eligible(resource, options)?;
    Ok(Resource::new(
        eligible
            .into_iter()
            .map(|(key, value)| ResourceEntry::text(key, transform(&value)))
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryValue;

    #[test]
    fn test_meta_keys_excluded() {
        let options = TransformOptions::default();
        assert!(!is_eligible(">>Title.Type", "System.String", &options));
        assert!(!is_eligible("$this.Icon", "x", &options));
        assert!(is_eligible("Title", "Hello", &options));
    }

    #[test]
    fn test_form_title_always_included() {
        let options = TransformOptions::default();
        assert!(is_eligible("$this.Text", "Main window", &options));
        assert!(is_eligible("$this.Text", "", &options));
    }

    #[test]
    fn test_blank_values() {
        assert!(!is_eligible("Empty", "", &TransformOptions::default()));
        assert!(is_eligible(
            "Empty",
            "",
            &TransformOptions::new().with_include_blank(true)
        ));
    }

    #[test]
    fn test_collect_sorts_by_key_and_skips_non_text() {
        let mut resource = Resource::from_pairs([("zeta", "Z"), ("Alpha", "A"), ("beta", "B")]);
        resource.entries.push(ResourceEntry {
            key: "Icon".to_string(),
            value: EntryValue::Other {
                type_name: "System.Drawing.Icon".to_string(),
            },
            comment: None,
        });
        let eligible = collect_eligible(&resource, &TransformOptions::default()).unwrap();
        let keys: Vec<_> = eligible.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let resource = Resource::from_pairs([("Title", "One"), ("Title", "Two")]);
        let err = collect_eligible(&resource, &TransformOptions::default()).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(key) if key == "Title"));
    }

    #[test]
    fn test_duplicate_of_excluded_key_is_ignored() {
        let resource = Resource::from_pairs([(">>Name", "a"), (">>Name", "b"), ("Name", "x")]);
        let eligible = collect_eligible(&resource, &TransformOptions::default()).unwrap();
        assert_eq!(eligible.len(), 1);
    }

    #[test]
    fn test_pseudo_localize_title_scenario() {
        let resource = Resource::from_pairs([(">>Title.Type", "System.String"), ("Title", "Hello World")]);
        let out = pseudo_localize(&resource, &TransformOptions::default()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.entries[0].key, "Title");
        assert_eq!(out.entries[0].as_text(), Some(transform("Hello World").as_str()));
        assert!(out.find_entry(">>Title.Type").is_none());
    }

    #[test]
    fn test_pseudo_localize_blank_entries() {
        let resource = Resource::from_pairs([("Blank", ""), ("Label", "Name")]);
        let default = pseudo_localize(&resource, &TransformOptions::default()).unwrap();
        assert!(default.find_entry("Blank").is_none());

        let with_blank =
            pseudo_localize(&resource, &TransformOptions::new().with_include_blank(true)).unwrap();
        assert_eq!(
            with_blank.find_entry("Blank").and_then(|e| e.as_text()),
            Some("[ !!! !!!]")
        );
    }
}
