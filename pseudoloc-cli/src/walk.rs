use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;
use pseudoloc::{FormatType, culture::is_neutral_resource};

/// Finds the neutral resource files of `format` under `root`, recursively, sorted by path.
///
/// Uses ignore for .gitignore-aware traversal; files already carrying a culture marker
/// (or the `lang` marker) are left out.
pub fn find_neutral_resources(
    root: &Path,
    format: FormatType,
    lang: &str,
) -> Result<Vec<PathBuf>, String> {
    let matcher = extension_matcher(format)?;

    let walker = WalkBuilder::new(root)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .hidden(false)
        .ignore(true)
        .parents(true)
        .build();

    let mut out = Vec::new();
    for dent in walker {
        let dent = dent.map_err(|e| format!("Failed to walk {}: {}", root.display(), e))?;
        if !dent.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = dent.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        if matcher.is_match(name) && is_neutral_resource(path, lang) {
            out.push(path.to_path_buf());
        }
    }
    out.sort();
    Ok(out)
}

fn extension_matcher(format: FormatType) -> Result<GlobMatcher, String> {
    let pattern = format!("*.{}", format.extension());
    GlobBuilder::new(&pattern)
        .case_insensitive(true)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))
}
