use std::fs;

use tempfile::tempdir;

use streamtap_cli::{CliError, CommaList, Credential, argfile, args};

const VERSION: &str = "0.0.0-test";

#[test]
fn argument_file_expands_and_parses_end_to_end() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("streamtaprc");

    fs::write(
        &config_path,
        "# defaults shared across invocations\n\
         \n\
         loglevel = debug\n\
         player=/usr/bin/mpv\n\
         stream-types = rtmp, hls\n\
         fifo\n",
    )
    .expect("Failed to write argument file");

    let argv = vec![
        "streamtap".to_string(),
        format!("@{}", config_path.display()),
        "--json".to_string(),
        "http://example.com/live".to_string(),
        "720p".to_string(),
    ];

    let expanded = argfile::expand_args(argv).expect("expansion succeeds");

    // File tokens land at the position the @ token occupied
    assert_eq!(
        &expanded[1..5],
        &[
            "--loglevel=debug".to_string(),
            "--player=/usr/bin/mpv".to_string(),
            "--stream-types=rtmp, hls".to_string(),
            "--fifo".to_string(),
        ]
    );

    let options = args::try_parse_from(VERSION, expanded).expect("parse succeeds");

    assert_eq!(options.loglevel, "debug");
    assert_eq!(options.player.as_deref(), Some("/usr/bin/mpv"));
    assert!(options.fifo);
    assert!(options.json);
    assert_eq!(options.url.as_deref(), Some("http://example.com/live"));
    assert_eq!(options.stream.as_deref(), Some("720p"));
    assert_eq!(
        options.stream_types.clone().map(CommaList::into_vec),
        Some(vec!["rtmp".to_string(), "hls".to_string()])
    );
    assert_eq!(options.gomtv_credential(), Credential::Unset);
}

#[test]
fn command_line_overrides_follow_argument_file_tokens() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("streamtaprc");

    fs::write(&config_path, "loglevel = debug\n").expect("Failed to write argument file");

    let argv = vec![
        "streamtap".to_string(),
        format!("@{}", config_path.display()),
        "--loglevel=error".to_string(),
    ];

    let expanded = argfile::expand_args(argv).expect("expansion succeeds");
    let options = args::try_parse_from(VERSION, expanded).expect("parse succeeds");

    // Later tokens win, exactly as if both had been typed on the command line
    assert_eq!(options.loglevel, "error");
}

#[test]
fn unreadable_argument_file_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("no-such-file");

    let argv = vec!["streamtap".to_string(), format!("@{}", missing.display())];

    let err = argfile::expand_args(argv).expect_err("expansion fails");

    match err {
        CliError::ArgumentFile { path, .. } => assert_eq!(path, missing),
        other => panic!("Expected ArgumentFile error, got {other:?}"),
    }
}
