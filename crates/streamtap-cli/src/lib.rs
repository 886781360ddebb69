//! CLI front-end for the streamtap stream extractor.
//!
//! This crate declares the full command-line surface of streamtap and turns
//! raw argv into a typed, immutable [`Options`] value:
//!
//! 1. [`argfile::expand_args`] rewrites `@file` references into regular
//!    option tokens, in place.
//! 2. [`args::try_parse_from`] matches the token stream against the option
//!    registry and coerces every value.
//!
//! Stream extraction, plugin loading and player invocation consume the
//! resulting [`Options`] and live outside this crate.

pub mod argfile;
pub mod args;

mod error;

pub use args::{CommaList, Credential, Options};
pub use error::CliError;

use log::{debug, info};

/// Run the streamtap front-end.
///
/// Renders the help text when `--help` was given or no URL was supplied;
/// otherwise logs the resolved stream request and the effective front-end
/// configuration for the downstream subsystems.
///
/// # Errors
///
/// Returns `CliError` if the help text cannot be written out.
pub fn run(version: &str, options: &Options) -> Result<(), CliError> {
    let url = match options.url.as_deref() {
        Some(url) if !options.help => url,
        // The help flag has no parse-time side effect, rendering happens here
        _ => {
            args::command(version).print_help()?;
            return Ok(());
        }
    };

    info!(url = url, stream:? = options.stream; "Resolved stream request");

    debug!(
        player:? = options.player,
        output:? = options.output,
        stream_types:? = options.stream_types;
        "Effective front-end configuration"
    );

    Ok(())
}
