//! Argument-file expansion for `@file` references.
//!
//! Any command-line token starting with `@` names a file whose lines are
//! rewritten into regular long-option tokens and spliced into the argument
//! list at the position the `@` token occupied. The file syntax is
//! line-oriented:
//!
//! - blank lines and lines whose first character is `#` are ignored
//! - `key = value` lines become `--key=value`, with whitespace trimmed
//!   around both halves
//! - every other line becomes `--line`, untouched
//!
//! ```text
//! # player setup
//! player=/usr/bin/mpv
//! loglevel = debug
//! fifo
//! ```
//!
//! expands to `--player=/usr/bin/mpv --loglevel=debug --fifo`.

use std::{fs, path::PathBuf};

use log::debug;

use crate::error::CliError;

/// Prefix marking a command-line token as an argument-file reference.
pub const FILE_PREFIX: char = '@';

/// Rewrite one physical line of an argument file into a long-option token.
///
/// Returns `None` for blank lines and comment lines. The key-value branch
/// trims whitespace around both halves; the bare-flag branch keeps the line
/// untouched, including any surrounding whitespace.
///
/// ```
/// # use streamtap_cli::argfile::convert_line;
/// assert_eq!(convert_line("loglevel = debug"), Some("--loglevel=debug".into()));
/// assert_eq!(convert_line("fifo"), Some("--fifo".into()));
/// assert_eq!(convert_line("# comment"), None);
/// ```
pub fn convert_line(line: &str) -> Option<String> {
    if line.is_empty() {
        return None;
    }

    if line.starts_with('#') {
        return None;
    }

    match line.find('=') {
        Some(split) if split > 0 => {
            let key = line[..split].trim();
            let val = line[split + 1..].trim();
            Some(format!("--{key}={val}"))
        }
        _ => Some(format!("--{line}")),
    }
}

/// Expand every `@file` reference in `argv` into the tokens its lines
/// produce, in place.
///
/// The first element is the program name and passes through untouched.
/// Tokens produced from a file are re-scanned like the rest of the stream,
/// matching how the option matcher consumes them.
///
/// # Errors
///
/// Returns [`CliError::ArgumentFile`] if a referenced file cannot be read.
pub fn expand_args<I>(argv: I) -> Result<Vec<String>, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut argv = argv.into_iter();
    let mut expanded = Vec::new();

    if let Some(program) = argv.next() {
        expanded.push(program);
    }

    expand_into(argv, &mut expanded)?;

    Ok(expanded)
}

fn expand_into<I>(args: I, out: &mut Vec<String>) -> Result<(), CliError>
where
    I: IntoIterator<Item = String>,
{
    for arg in args {
        match arg.strip_prefix(FILE_PREFIX) {
            Some(path) => {
                let path = PathBuf::from(path);
                debug!(path = path.display().to_string(); "Expanding argument file");

                let content =
                    fs::read_to_string(&path).map_err(|source| CliError::ArgumentFile {
                        path: path.clone(),
                        source,
                    })?;

                let tokens: Vec<String> = content.lines().filter_map(convert_line).collect();
                expand_into(tokens, out)?;
            }
            None => out.push(arg),
        }
    }

    Ok(())
}
