//! Skip logic for destinations that are already up to date.

use std::{fs, io, path::Path, time::SystemTime};

/// Decides from modification times whether a destination must be regenerated.
///
/// A missing destination (`None`) always needs it; otherwise only a destination strictly
/// newer than its source is considered fresh.
pub fn needs_translation(source_modified: SystemTime, destination_modified: Option<SystemTime>) -> bool {
    match destination_modified {
        None => true,
        Some(destination) => destination <= source_modified,
    }
}

/// Filesystem wrapper around [`needs_translation`].
pub fn destination_is_stale<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> io::Result<bool> {
    let source_modified = fs::metadata(source)?.modified()?;
    let destination_modified = match fs::metadata(destination) {
        Ok(meta) => Some(meta.modified()?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(e),
    };
    Ok(needs_translation(source_modified, destination_modified))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_missing_destination() {
        assert!(needs_translation(SystemTime::now(), None));
    }

    #[test]
    fn test_destination_older_or_equal() {
        let source = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        assert!(needs_translation(source, Some(source - Duration::from_secs(1))));
        assert!(needs_translation(source, Some(source)));
    }

    #[test]
    fn test_destination_newer() {
        let source = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        assert!(!needs_translation(source, Some(source + Duration::from_secs(1))));
    }

    #[test]
    fn test_filesystem_wrapper() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("Strings.resx");
        let destination = dir.path().join("Strings.fr.resx");
        fs::write(&source, "<root/>").unwrap();
        assert!(destination_is_stale(&source, &destination).unwrap());
        assert!(destination_is_stale(dir.path().join("missing.resx"), &destination).is_err());
    }
}
