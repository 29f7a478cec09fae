use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use pseudoloc_cli::logging::init_logging;
use pseudoloc_cli::preview::print_preview;
use pseudoloc_cli::{TranslateArgs, TranslateRequest, load_config, run_translate};

#[derive(Parser, Debug)]
#[command(
    name = "pseudoloc",
    author,
    version,
    about = "Generates pseudo-localized resource files to exercise i18n without a translator"
)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    commands: Commands,

    /// Configuration file (defaults to ./pseudoloc.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Pseudo-localize a resource file, or every neutral resource file under a directory.
    ///
    /// Examples:
    ///   pseudoloc translate strings.en.resx strings.ja-JP.resx
    ///   pseudoloc translate . ja-JP --include-blank
    Translate(TranslateArgs),

    /// Print the pseudo-localized form of the given texts.
    Preview {
        /// Texts to transform
        #[arg(required = true)]
        texts: Vec<String>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet)?;

    match args.commands {
        Commands::Translate(translate) => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            let config = load_config(args.config.as_deref(), &cwd)?;
            let request = TranslateRequest::resolve(translate, &config)?;
            let summary = run_translate(&request)?;
            if !args.quiet {
                println!(
                    "✅ {} file(s): {} converted ({} entries), {} up to date, {} without text, {} unparseable",
                    summary.files(),
                    summary.converted,
                    summary.entries,
                    summary.up_to_date,
                    summary.without_text,
                    summary.unparseable
                );
            }
        }
        Commands::Preview { texts } => print_preview(&texts),
    }
    Ok(())
}
