use std::process::ExitCode;

use anstream::eprintln;
use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::ExitStatus;
use crate::printer::Printer;
use crate::settings::GlobalSettings;

mod cli;
mod commands;
mod logging;
mod printer;
mod settings;

fn run() -> Result<ExitStatus> {
    let cli = Cli::parse();

    let globals = GlobalSettings::resolve(&cli.top_level);

    // Configure the global color choice before `tracing`, which reads it back.
    anstream::ColorChoice::write_global(globals.color.into());

    // Configure the `tracing` crate, which controls internal logging.
    logging::setup_logging(logging::Level::from(globals.verbose))?;

    // Configure the `Printer`, which controls user-facing output in the CLI.
    let printer = Printer::new(globals.quiet);

    debug!("lenient-version {}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Compare(args) => commands::compare(&args.left, &args.right, printer),
        Commands::Sort(args) => commands::sort(&args.versions, args.reverse, printer),
        Commands::Max(args) => commands::max(&args.versions, printer),
        Commands::Parse(args) => commands::parse(&args.input, args.output_format, printer),
        Commands::Check => commands::check(printer),
    }
}

#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    match run() {
        Ok(status) => status.into(),
        Err(err) => {
            let mut causes = err.chain();
            if let Some(err) = causes.next() {
                eprintln!("{}: {}", "error".red().bold(), err);
            }
            for err in causes {
                eprintln!("  {}: {}", "Caused by".red().bold(), err);
            }
            ExitStatus::Error.into()
        }
    }
}
