//! Error types for the streamtap CLI front-end.
//!
//! This module provides the main error type [`CliError`] which wraps the
//! error conditions that can occur before option matching starts or while
//! the front-end hands results back to the caller. Errors raised during
//! option matching itself (unknown tokens, malformed numeric values) are
//! [`clap::Error`] values and keep clap's own reporting convention.

use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// The main error type for the streamtap CLI front-end.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("could not read argument file {}", path.display())]
    #[diagnostic(
        code(streamtap::argfile),
        help("argument files are referenced as @path and must be readable")
    )]
    ArgumentFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    #[diagnostic(code(streamtap::io))]
    Io(#[from] io::Error),
}
