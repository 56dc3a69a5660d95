use clap::error::ErrorKind;
use clap::Parser;
use dirguard::{exit_code, output, run, Cli};
use dirguard_core::EXIT_CONFIGURATION_ERROR;
use std::io;
use std::process;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // Parse command-line arguments; usage errors are configuration errors
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            process::exit(EXIT_CONFIGURATION_ERROR);
        }
    };

    if let Err(e) = dirguard_utils::tracing::init(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("dirguard: {e}");
            process::exit(EXIT_CONFIGURATION_ERROR);
        }
    };

    let report = run(&config)?;

    let stdout = io::stdout();
    if cli.json {
        output::write_json(&mut stdout.lock(), &config, &report)?;
    } else if config.verbose() || config.dry_run() {
        output::write_summary(&mut stdout.lock(), &config, &report)?;
    }
    output::write_failures(&mut io::stderr().lock(), &report)?;

    match exit_code(&report) {
        0 => Ok(()),
        code => process::exit(code),
    }
}
