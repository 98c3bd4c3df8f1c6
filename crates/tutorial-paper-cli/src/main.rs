use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use tutorial_paper_core::layout::DEFAULT_CONTRIBUTORS;
use tutorial_paper_core::{
    format_tutorial, ExitCode, FormatOutcome, FormatRequest, LayoutOptions, TutorialLayout,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Format the tutorial file before pandoc",
    long_about = None
)]
struct Cli {
    /// Path to tutorial directory
    #[arg(short = 't', long = "tutorial", value_name = "DIR")]
    tutorial: PathBuf,

    /// Contributor directory mapping GitHub ids to names
    #[arg(
        short = 'c',
        long = "contributors",
        value_name = "FILE",
        default_value = DEFAULT_CONTRIBUTORS
    )]
    contributors: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(exit) | Err(exit) => std::process::ExitCode::from(exit as u8),
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    let options = LayoutOptions::new(cli.tutorial).with_contributors(cli.contributors);
    let request = FormatRequest {
        layout: TutorialLayout::from_options(options),
    };

    match format_tutorial(request) {
        Ok(outcome) => {
            report(&outcome);
            Ok(ExitCode::Success)
        }
        Err(err) => {
            eprintln!("format-tutorial-for-paper error: {err}");
            Err(err.exit_code())
        }
    }
}

fn report(outcome: &FormatOutcome) {
    log::info!(
        "{} author(s), {} body line(s) kept, {} dropped",
        outcome.metadata.author.len(),
        outcome.lines_kept,
        outcome.lines_dropped
    );
    println!("{}", outcome.article.display());
    println!("{}", outcome.references.display());
}
