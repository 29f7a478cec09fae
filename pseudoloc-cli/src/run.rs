use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use pseudoloc::translator::DEFAULT_LOCK_RETRY_DELAY;
use pseudoloc::{FileOutcome, FormatType, TransformOptions, Translator};
use rayon::prelude::*;

use crate::config::Config;
use crate::walk::find_neutral_resources;

/// Legacy trailing switch meaning "include blank resources".
pub const LEGACY_INCLUDE_BLANK: &str = "/b";

/// Arguments of the `translate` command.
#[derive(clap::Args, Debug, Clone)]
pub struct TranslateArgs {
    /// Source resource file, or a directory to scan recursively
    pub source: PathBuf,

    /// Destination file, or a language code (e.g. ja-JP) when SOURCE is a directory
    pub target: String,

    /// Legacy switches; `/b` is the same as --include-blank
    #[arg(hide = true)]
    pub legacy: Vec<String>,

    /// Include resources whose value is empty
    #[arg(short = 'b', long)]
    pub include_blank: bool,

    /// Resource format (resx, json, csv); inferred from file extensions when omitted
    #[arg(short, long)]
    pub format: Option<String>,

    /// Delay before retrying to delete a locked destination, in milliseconds
    #[arg(long, value_name = "MS")]
    pub lock_retry_ms: Option<u64>,

    /// Number of files processed in parallel in directory mode
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

/// A fully resolved `translate` invocation: flags merged over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub source: PathBuf,
    pub target: String,
    pub include_blank: bool,
    pub format: Option<FormatType>,
    pub lock_retry: Duration,
    pub jobs: Option<usize>,
}

impl TranslateRequest {
    pub fn resolve(args: TranslateArgs, config: &Config) -> Result<Self> {
        let mut include_blank = args.include_blank || config.include_blank.unwrap_or(false);
        for token in &args.legacy {
            if token.eq_ignore_ascii_case(LEGACY_INCLUDE_BLANK) {
                include_blank = true;
            } else {
                bail!("unexpected argument '{}'", token);
            }
        }

        let format = args
            .format
            .as_deref()
            .or(config.format.as_deref())
            .map(FormatType::from_str)
            .transpose()?;

        let lock_retry = args
            .lock_retry_ms
            .or(config.lock_retry_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LOCK_RETRY_DELAY);

        Ok(TranslateRequest {
            source: args.source,
            target: args.target,
            include_blank,
            format,
            lock_retry,
            jobs: args.jobs.or(config.jobs),
        })
    }

    fn translator(&self) -> Translator {
        Translator::new(TransformOptions::new().with_include_blank(self.include_blank))
            .with_format(self.format)
            .with_lock_retry_delay(self.lock_retry)
    }
}

/// Per-run tally of file outcomes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub entries: usize,
    pub up_to_date: usize,
    pub without_text: usize,
    pub unparseable: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Converted { count } => {
                self.converted += 1;
                self.entries += count;
            }
            FileOutcome::UpToDate => self.up_to_date += 1,
            FileOutcome::NoTextResources => self.without_text += 1,
            FileOutcome::Unparseable { .. } => self.unparseable += 1,
        }
    }

    pub fn files(&self) -> usize {
        self.converted + self.up_to_date + self.without_text + self.unparseable
    }
}

/// Runs `translate`: a directory and a language code, or a source and a destination file.
pub fn run_translate(request: &TranslateRequest) -> Result<RunSummary> {
    let translator = request.translator();
    if request.source.is_dir() {
        translate_directory(&translator, request)
    } else {
        let outcome = translator
            .translate_file(&request.source, &request.target)
            .with_context(|| format!("Failed to translate {}", request.source.display()))?;
        print_outcome(&request.source, &outcome);

        let mut summary = RunSummary::default();
        summary.record(&outcome);
        Ok(summary)
    }
}

fn translate_directory(translator: &Translator, request: &TranslateRequest) -> Result<RunSummary> {
    let lang = request.target.as_str();
    let format = request.format.unwrap_or_default();
    let files = find_neutral_resources(&request.source, format, lang).map_err(anyhow::Error::msg)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(request.jobs.unwrap_or(0))
        .build()
        .context("Failed to build worker pool")?;

    // Stops at the first hard error; unparseable files are outcomes, not errors.
    let outcomes: Vec<(&PathBuf, FileOutcome)> = pool.install(|| {
        files
            .par_iter()
            .map(|source| {
                translator
                    .translate_to_language(source, lang)
                    .map(|(_, outcome)| (source, outcome))
                    .with_context(|| format!("Failed to translate {}", source.display()))
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let mut summary = RunSummary::default();
    for (source, outcome) in &outcomes {
        print_outcome(source, outcome);
        summary.record(outcome);
    }
    Ok(summary)
}

fn print_outcome(source: &Path, outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Converted { count } => {
            println!("{}: converted {} text resource(s).", source.display(), count)
        }
        FileOutcome::UpToDate => println!("Skipped {}", source.display()),
        // Reported as warnings by the translator.
        FileOutcome::NoTextResources | FileOutcome::Unparseable { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(source: &str, target: &str) -> TranslateArgs {
        TranslateArgs {
            source: PathBuf::from(source),
            target: target.to_string(),
            legacy: Vec::new(),
            include_blank: false,
            format: None,
            lock_retry_ms: None,
            jobs: None,
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let request = TranslateRequest::resolve(args("a.resx", "b.resx"), &Config::default()).unwrap();
        assert!(!request.include_blank);
        assert_eq!(request.format, None);
        assert_eq!(request.lock_retry, DEFAULT_LOCK_RETRY_DELAY);
        assert_eq!(request.jobs, None);
    }

    #[test]
    fn test_resolve_legacy_switch() {
        let mut a = args("a.resx", "b.resx");
        a.legacy = vec!["/b".to_string()];
        let request = TranslateRequest::resolve(a, &Config::default()).unwrap();
        assert!(request.include_blank);

        let mut a = args("a.resx", "b.resx");
        a.legacy = vec!["/x".to_string()];
        assert!(TranslateRequest::resolve(a, &Config::default()).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            include_blank: Some(true),
            format: Some("json".to_string()),
            lock_retry_ms: Some(100),
            jobs: Some(2),
        };
        let mut a = args("dir", "fr");
        a.format = Some("csv".to_string());
        a.lock_retry_ms = Some(0);
        let request = TranslateRequest::resolve(a, &config).unwrap();
        assert!(request.include_blank);
        assert_eq!(request.format, Some(FormatType::Csv));
        assert_eq!(request.lock_retry, Duration::ZERO);
        assert_eq!(request.jobs, Some(2));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let mut a = args("a.resx", "b.resx");
        a.format = Some("po".to_string());
        let err = TranslateRequest::resolve(a, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("unknown format"));
    }

    #[test]
    fn test_summary_tally() {
        let mut summary = RunSummary::default();
        summary.record(&FileOutcome::Converted { count: 3 });
        summary.record(&FileOutcome::Converted { count: 2 });
        summary.record(&FileOutcome::UpToDate);
        summary.record(&FileOutcome::Unparseable {
            reason: "bad".to_string(),
        });
        assert_eq!(summary.converted, 2);
        assert_eq!(summary.entries, 5);
        assert_eq!(summary.files(), 4);
    }
}
