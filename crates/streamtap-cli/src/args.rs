//! Command-line option definitions for the streamtap CLI.
//!
//! This module declares the full option registry as a [`clap`] derive
//! struct: every field is one option record carrying its names, arity,
//! value coercion, default and help text. The registry is built once per
//! invocation through [`command`] with the version string supplied by the
//! host, and the parsed [`Options`] value is immutable afterwards.
//!
//! Two of clap's built-in flags are replaced by registry entries of their
//! own: `-h`/`--help` is a plain boolean flag whose rendering is decided by
//! the caller, while `-V`/`--version` keeps the immediate print-and-exit
//! action with the injected version string.

use std::convert::Infallible;
use std::ffi::OsString;
use std::ops::Deref;

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use log::LevelFilter;

const EXAMPLE_USAGE: &str = "\
example usage:

$ streamtap twitch.tv/onemoregametv
Found streams: 240p, 360p, 480p, 720p, best, worst
$ streamtap twitch.tv/onemoregametv 720p

Stream now playbacks in player (default is VLC).
";

/// Parsed command-line options for the streamtap front-end.
#[derive(Parser, Debug)]
#[command(
    name = "streamtap",
    about = "Streamtap is a CLI program that extracts streams from various \
             services and pipes them into a video player of choice.",
    long_about = None,
    after_help = EXAMPLE_USAGE,
    args_override_self = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Options {
    /// URL to stream
    #[arg(value_name = "url")]
    pub url: Option<String>,

    /// Stream quality to play, use 'best' or 'worst' for highest or lowest quality available
    #[arg(value_name = "stream")]
    pub stream: Option<String>,

    /// Show this help message and exit
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Show program's version number and exit
    #[arg(
        short = 'V',
        long,
        action = ArgAction::Version,
        value_parser = clap::value_parser!(bool)
    )]
    pub version: Option<bool>,

    /// Print all currently installed plugins
    #[arg(short = 'u', long)]
    pub plugins: bool,

    /// Set log level, valid levels: none, error, warning, info, debug
    #[arg(short = 'l', long, value_name = "level", default_value = "info")]
    pub loglevel: String,

    /// Alias for --loglevel none
    #[arg(short = 'Q', long)]
    pub quiet: bool,

    /// Output JSON instead of the normal text output and disable log output, useful for external scripting
    #[arg(short = 'j', long)]
    pub json: bool,

    #[arg(long, hide = true)]
    pub yes_run_as_root: bool,

    /// Player command-line to start, by default VLC will be used if it is installed
    #[arg(short = 'p', long, value_name = "command", help_heading = "player options")]
    pub player: Option<String>,

    /// Hide all player console output. This option does nothing since version 1.4.3 since it is now the default behaviour
    #[arg(short = 'q', long, help_heading = "player options")]
    pub quiet_player: bool,

    /// Show all player console output
    #[arg(short = 'v', long, help_heading = "player options")]
    pub verbose_player: bool,

    /// Play file using a named pipe instead of stdin (can help with incompatible media players)
    #[arg(short = 'n', long, help_heading = "player options")]
    pub fifo: bool,

    /// Write stream to file instead of playing it
    #[arg(short = 'o', long, value_name = "filename", help_heading = "file output options")]
    pub output: Option<String>,

    /// Always write to file even if it already exists
    #[arg(short = 'f', long, help_heading = "file output options")]
    pub force: bool,

    /// Write stream to stdout instead of playing it
    #[arg(short = 'O', long, help_heading = "file output options")]
    pub stdout: bool,

    /// Print command-line used internally to play stream, this may not be available on all streams
    #[arg(short = 'c', long, help_heading = "stream options")]
    pub cmdline: bool,

    /// Log possible errors from internal command-line to a temporary file, use when debugging rtmpdump related issues
    #[arg(short = 'e', long, help_heading = "stream options")]
    pub errorlog: bool,

    /// Specify location of rtmpdump executable, e.g. /usr/local/bin/rtmpdump
    #[arg(short = 'r', long, value_name = "path", help_heading = "stream options")]
    pub rtmpdump: Option<String>,

    /// Specify a proxy (SOCKS) that rtmpdump will use
    #[arg(long, value_name = "host:port", help_heading = "stream options")]
    pub rtmpdump_proxy: Option<String>,

    /// Specify the time live HDS streams will start from the edge of stream, default is 10.0
    #[arg(long, value_name = "seconds", help_heading = "stream options")]
    pub hds_live_edge: Option<f64>,

    /// Specify the maximum amount of fragments to buffer, this controls the maximum size of the ringbuffer, default is 10
    #[arg(long, value_name = "fragments", help_heading = "stream options")]
    pub hds_fragment_buffer: Option<u32>,

    /// Specify a maximum size (bytes) for the ringbuffer, default is 32768. Used by RTMP and HLS. Use --hds-fragment-buffer for HDS
    #[arg(long, value_name = "size", help_heading = "stream options")]
    pub ringbuffer_size: Option<u64>,

    /// Attempts to load plugins from these directories. Multiple directories can be used by separating them with a comma (,)
    #[arg(
        long,
        value_name = "directory",
        value_parser = comma_list,
        help_heading = "plugin options"
    )]
    pub plugin_dirs: Option<CommaList>,

    /// A comma-delimited list of stream types to allow. The order will be used to separate streams when there are multiple streams with the same name and different stream types. Default is rtmp,hls,hds,http,akamaihd
    #[arg(
        long,
        visible_alias = "stream-priority",
        value_name = "types",
        value_parser = comma_list,
        help_heading = "plugin options"
    )]
    pub stream_types: Option<CommaList>,

    /// Fine tune best/worst synonyms by excluding unwanted streams. Uses a filter expression in the format [operator]<value>. For example the filter '>480p' will exclude streams ranked higher than '480p'. Valid operators are >, >=, < and <=. If no operator is specified then equality is tested. Multiple filters can be used by separating each expression with a comma. For example '>480p,>mobile_medium' will exclude streams from two quality types.
    #[arg(
        long,
        value_name = "streams",
        value_parser = comma_list,
        help_heading = "plugin options"
    )]
    pub stream_sorting_excludes: Option<CommaList>,

    /// Specify JustinTV cookie to allow access to subscription channels, e.g. '_twitch_session_id=xxxxxx; persistent=xxxxx;'
    #[arg(long, value_name = "cookie", help_heading = "plugin options")]
    pub jtv_cookie: Option<String>,

    /// Specify GOMTV cookie to allow access to streams, e.g. 'SES_MEMBERNO=xxx; SES_STATE=xxx; SES_MEMBERNICK=xxx; SES_USERNICK=xxx;'
    #[arg(long, value_name = "cookie", help_heading = "plugin options")]
    pub gomtv_cookie: Option<String>,

    /// Specify GOMTV username to allow access to streams
    #[arg(long, value_name = "username", help_heading = "plugin options")]
    pub gomtv_username: Option<String>,

    /// Specify GOMTV password to allow access to streams (if left blank you will be prompted)
    #[arg(long, value_name = "password", help_heading = "plugin options")]
    pub gomtv_password: Option<Option<String>>,
}

impl Options {
    /// Three-state view of `--gomtv-password`: absent, given without a
    /// value (prompt the user interactively), or given with a value.
    pub fn gomtv_credential(&self) -> Credential {
        match &self.gomtv_password {
            None => Credential::Unset,
            Some(None) => Credential::Prompt,
            Some(Some(password)) => Credential::Value(password.clone()),
        }
    }

    /// Map `--quiet`/`--loglevel` onto a log filter.
    ///
    /// Returns `None` for a level name outside none, error, warning, info
    /// and debug; the caller picks the fallback.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        if self.quiet {
            return Some(LevelFilter::Off);
        }

        let level = match self.loglevel.as_str() {
            "none" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            _ => return None,
        };

        Some(level)
    }
}

/// A credential option that distinguishes "not configured" from "configured
/// but left for an interactive prompt".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// The option was not given; no credential is configured.
    Unset,
    /// The option was given without a value; ask the user interactively.
    Prompt,
    /// The option was given with this value.
    Value(String),
}

/// An ordered list parsed from a single comma-separated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommaList(Vec<String>);

impl CommaList {
    /// Consume the list, yielding its elements.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for CommaList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Split a raw option value on `,` into trimmed elements.
///
/// The split is unconditional: consecutive or trailing commas yield
/// empty-string elements, and an input without commas (including the empty
/// string) yields a single element.
pub fn comma_list(raw: &str) -> Result<CommaList, Infallible> {
    Ok(CommaList(
        raw.split(',').map(|val| val.trim().to_string()).collect(),
    ))
}

/// Build the option registry with the version string supplied by the host.
pub fn command(version: &str) -> clap::Command {
    Options::command().version(version.to_owned())
}

/// Match and coerce a token stream against the option registry.
///
/// The first element of `argv` is the program name. Argument-file
/// references must already be expanded, see
/// [`expand_args`](crate::argfile::expand_args).
///
/// # Errors
///
/// Returns a [`clap::Error`] for unrecognized tokens and failed value
/// coercions, and for the help/version display actions clap reports
/// through its error type.
pub fn try_parse_from<I, T>(version: &str, argv: I) -> Result<Options, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command(version).try_get_matches_from(argv)?;
    Options::from_arg_matches(&matches)
}
