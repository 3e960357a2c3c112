//! ArgMatches → CliAction / Settings conversion.
//!
//! Translates clap's parsed arguments into:
//! - the command to run (`CliAction`)
//! - the flag/environment layer of the configuration (`Settings`)

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::ArgMatches;
use psclient::Settings;

/// The result of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Resolve one key.
    Get { key: String, version: Option<String> },
    /// Resolve every key under a path.
    GetPath {
        path: String,
        recursive: bool,
        version: Option<String>,
    },
    /// Print the program version.
    Version,
}

/// The deepest subcommand's matches, where global args are always present.
pub fn leaf_matches(matches: &ArgMatches) -> &ArgMatches {
    match matches.subcommand() {
        Some((_, sub)) => leaf_matches(sub),
        None => matches,
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "get" => Ok(CliAction::Get {
            key: required(m, "key")?,
            version: m.get_one::<String>("version").cloned(),
        }),
        "getpath" => Ok(CliAction::GetPath {
            path: required(m, "path")?,
            recursive: m.get_one::<bool>("recursive").copied().unwrap_or(true),
            version: m.get_one::<String>("version").cloned(),
        }),
        "version" => Ok(CliAction::Version),
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// Exit code for a command line clap rejected.
///
/// `--help` is not a failure; every other rejection exits 1 like any error.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Settings given by flag or environment variable.
pub fn settings_from_matches(matches: &ArgMatches) -> Settings {
    let m = leaf_matches(matches);
    Settings {
        aws_access_key: m.get_one::<String>("aws-access-key").cloned(),
        aws_access_secret: m.get_one::<String>("aws-access-secret").cloned(),
        aws_region: m.get_one::<String>("aws-region").cloned(),
        format: m.get_one::<String>("format").cloned(),
    }
}

/// Explicit `--config` path.
pub fn config_path(matches: &ArgMatches) -> Option<PathBuf> {
    leaf_matches(matches).get_one::<PathBuf>("config").cloned()
}

/// Explicit `--store-file` path.
pub fn store_file(matches: &ArgMatches) -> Option<PathBuf> {
    leaf_matches(matches).get_one::<PathBuf>("store-file").cloned()
}

/// Explicit `--log-level`.
pub fn log_level(matches: &ArgMatches) -> Option<String> {
    leaf_matches(matches).get_one::<String>("log-level").cloned()
}

fn required(m: &ArgMatches, id: &str) -> Result<String, String> {
    m.get_one::<String>(id)
        .cloned()
        .ok_or_else(|| format!("{} is mandatory", id))
}
