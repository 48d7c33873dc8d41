use clap::error::ErrorKind;
use clap::Parser;
use journal_chart::application::{pipeline, JournalReport};
use journal_chart::cli::{format_pivot, format_violations, init_logging, Cli, USAGE};
use journal_chart::error::{JournalChartError, Result};
use journal_chart::infrastructure::Config;
use tracing::{debug, error};

fn main() {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                debug!("{}", e);
                report_error(&JournalChartError::Usage(USAGE.to_string()));
                std::process::exit(1);
            }
        },
    };

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            report_error(&e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<JournalReport> {
    let config = Config::load()?;
    debug!(?config, "Loaded configuration");

    let report = pipeline::run(&cli.source_path, &cli.dest_path, &config)?;
    debug!("Weekly hours:\n{}", format_pivot(&report.pivot));
    Ok(report)
}

fn report_error(e: &JournalChartError) {
    match e {
        JournalChartError::Validation(violations) => {
            error!("{}", violations);
            error!("{}", format_violations(violations));
        }
        _ => error!("{}", e.display_with_suggestions()),
    }
}
