//! aws-ps-client: read values from the AWS Systems Manager Parameter Store.
//!
//! Commands:
//! - `aws-ps-client get KEY [-v VERSION]`
//! - `aws-ps-client getpath DIR-PATH [-v VERSION] [-u[=true|false]]`
//! - `aws-ps-client version`
//!
//! Results go to stdout; diagnostics and errors go to stderr (or stdout as a
//! JSON document under `--format json`). Exit code is 1 on any error.

mod commands;
mod format;
mod parse;

use std::fmt::Display;
use std::path::PathBuf;
use std::process;

use psclient::{Client, Config, ConfigLoader, OutputFormat};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error_json, format_parameter, format_parameter_set, format_version};
use parse::{
    config_path, log_level, matches_to_action, settings_from_matches, store_file, usage_exit_code,
    CliAction,
};

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            process::exit(usage_exit_code(&e));
        }
    };
    init_logging(log_level(&matches).as_deref());

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let config = match ConfigLoader::new()
        .config_file(config_path(&matches))
        .overrides(settings_from_matches(&matches))
        .load()
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    tracing::debug!(?config, "configuration loaded");

    let exit_code = run(action, &config, store_file(&matches));
    process::exit(exit_code);
}

/// Install the stderr subscriber. `--log-level` wins over `RUST_LOG`.
fn init_logging(level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn log_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

fn run(action: CliAction, config: &Config, store_file: Option<PathBuf>) -> i32 {
    let format = config.format;

    let outcome = match action {
        CliAction::Version => Ok(format_version(&Client::version(), format)),
        CliAction::Get { key, version } => connect(config, store_file)
            .and_then(|client| client.get(&key, version.as_deref()))
            .map(|param| format_parameter(&param, format)),
        CliAction::GetPath {
            path,
            recursive,
            version,
        } => connect(config, store_file)
            .and_then(|client| client.get_path(&path, recursive, version.as_deref()))
            .map(|set| format_parameter_set(&set, &path, format)),
    };

    match outcome {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            0
        }
        Err(e) => report(&e, format),
    }
}

fn connect(config: &Config, store_file: Option<PathBuf>) -> psclient::Result<Client> {
    match store_file {
        Some(path) => Client::builder().snapshot(path).build(),
        None => Client::from_config(config),
    }
}

fn report(err: &dyn Display, format: OutputFormat) -> i32 {
    match format {
        OutputFormat::Json => println!("{}", format_error_json(err)),
        OutputFormat::Bash | OutputFormat::Text => eprintln!("error: {}", err),
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_log_level_flag_sets_filter() {
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("error")).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
    }

    #[test]
    fn test_report_exits_one() {
        assert_eq!(report(&"boom", OutputFormat::Json), 1);
        assert_eq!(report(&"boom", OutputFormat::Text), 1);
    }
}
