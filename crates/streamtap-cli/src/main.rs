//! Streamtap CLI entry point.

use std::{env, process};

use log::{LevelFilter, debug, error, info};

use streamtap_cli::{CliError, argfile, args};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    // Expand @file references before matching, at the position they occupy
    let argv = match argfile::expand_args(env::args()) {
        Ok(argv) => argv,
        Err(err) => {
            // Logging is not configured at this point, report to stderr
            eprintln!("{}", render(&err));
            process::exit(1);
        }
    };

    // Help and version display exit 0 here, usage errors exit non-zero
    let options = args::try_parse_from(VERSION, argv).unwrap_or_else(|err| err.exit());

    // Initialize the logger with the requested log level
    let log_level = options.level_filter().unwrap_or_else(|| {
        eprintln!(
            "Invalid log level: {}. Using 'info' instead.",
            options.loglevel
        );
        LevelFilter::Info
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting streamtap");
    debug!(options:?; "Parsed arguments");

    if let Err(err) = streamtap_cli::run(VERSION, &options) {
        error!("{}", render(&err));
        process::exit(1);
    }
}

fn render(err: &CliError) -> String {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    reporter
        .render_report(&mut writer, err)
        .expect("Writing to String buffer is infallible");
    writer
}
