//! Per-file pseudo-localization workflow.
//!
//! A [`Translator`] reads a source resource, keeps its eligible text entries, transforms
//! them and replaces the destination file, unless the destination is already newer than
//! the source.
use std::{
    fs, io,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use tracing::{debug, warn};

use crate::{
    culture::localized_sibling,
    eligibility::pseudo_localize,
    error::Error,
    formats::FormatType,
    freshness::destination_is_stale,
    types::{Resource, TransformOptions},
};

/// How long to wait before the single retry of deleting a locked destination.
pub const DEFAULT_LOCK_RETRY_DELAY: Duration = Duration::from_secs(2);

/// What happened to one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The destination was (re)written with `count` entries.
    Converted { count: usize },
    /// The destination is newer than the source; nothing was written.
    UpToDate,
    /// The source has no eligible text entries; nothing was written.
    NoTextResources,
    /// The source could not be read as a resource container; nothing was written.
    Unparseable { reason: String },
}

impl FileOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, FileOutcome::Converted { .. })
    }
}

/// Pseudo-localizes resource files.
#[derive(Debug, Clone)]
pub struct Translator {
    options: TransformOptions,
    format: Option<FormatType>,
    lock_retry_delay: Duration,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(TransformOptions::default())
    }
}

impl Translator {
    pub fn new(options: TransformOptions) -> Self {
        Translator {
            options,
            format: None,
            lock_retry_delay: DEFAULT_LOCK_RETRY_DELAY,
        }
    }

    /// Forces a format instead of inferring it from file extensions.
    pub fn with_format(mut self, format: Option<FormatType>) -> Self {
        self.format = format;
        self
    }

    pub fn with_lock_retry_delay(mut self, delay: Duration) -> Self {
        self.lock_retry_delay = delay;
        self
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Pseudo-localizes `source` into the file `destination`.
    ///
    /// # Errors
    ///
    /// Unparseable sources are not errors; they are reported as [`FileOutcome::Unparseable`].
    /// I/O failures and [`Error::DestinationLocked`] are returned as errors.
    pub fn translate_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source: P,
        destination: Q,
    ) -> Result<FileOutcome, Error> {
        let source = source.as_ref();
        let destination = destination.as_ref();

        if !destination_is_stale(source, destination)? {
            debug!("Skipped {}", source.display());
            return Ok(FileOutcome::UpToDate);
        }

        let source_format = match self.format {
            Some(format) => format,
            None => FormatType::from_path(source)?,
        };
        debug!(source = %source.display(), format = %source_format, "reading resource");

        let pseudo = match source_format
            .read(source)
            .and_then(|resource| pseudo_localize(&resource, &self.options))
        {
            Ok(pseudo) => pseudo,
            Err(e) if e.is_unparseable_source() => {
                warn!("could not parse {}: {}", source.display(), e);
                return Ok(FileOutcome::Unparseable {
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        if pseudo.is_empty() {
            warn!("No text resources found in {}", source.display());
            return Ok(FileOutcome::NoTextResources);
        }

        let destination_format = match self.format {
            Some(format) => format,
            None => FormatType::from_path(destination).unwrap_or(source_format),
        };
        let count = pseudo.len();
        self.write(destination, destination_format, pseudo)?;

        debug!("{}: converted {} text resource(s).", source.display(), count);
        Ok(FileOutcome::Converted { count })
    }

    /// Pseudo-localizes `source` into its `<stem>.<lang>.<ext>` sibling.
    pub fn translate_to_language<P: AsRef<Path>>(
        &self,
        source: P,
        lang: &str,
    ) -> Result<(PathBuf, FileOutcome), Error> {
        let destination = localized_sibling(&source, lang);
        let outcome = self.translate_file(source, &destination)?;
        Ok((destination, outcome))
    }

    fn write(&self, destination: &Path, format: FormatType, resource: Resource) -> Result<(), Error> {
        replace_destination(destination, self.lock_retry_delay)?;
        format.write(destination, resource)
    }
}

/// Deletes an existing file at `path` so it can be recreated from scratch.
///
/// A failed delete is retried once after `retry_delay`; a second failure is
/// [`Error::DestinationLocked`].
pub fn replace_destination(path: &Path, retry_delay: Duration) -> Result<(), Error> {
    if !path.exists() {
        return Ok(());
    }
    if let Err(first) = fs::remove_file(path) {
        warn!("file is locked: {} ({})", path.display(), first);
        thread::sleep(retry_delay);
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(Error::DestinationLocked {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }
    Ok(())
}
