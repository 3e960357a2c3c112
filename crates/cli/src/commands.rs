//! Clap command tree.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use psclient::APPLICATION_NAME;

const GET_EXAMPLES: &str = "\
Examples:
  aws-ps-client get /path/with/KEY1 --aws-access-key bar --aws-access-secret letmein --aws-region us-west-2
  aws-ps-client get /path/with/KEY1 -k foo -s letmein --format=json
  aws-ps-client get /path/with/KEY1 -k /path/to/token.1line.file -s /path/to/secret.1line.file
  aws-ps-client get /path/with/KEY1 --version 12 -f text
  aws-ps-client get /path/with/KEY1 -v 12 -f bash";

const GETPATH_EXAMPLES: &str = "\
Examples:
  aws-ps-client getpath /path/to/keys/ --aws-access-key bar --aws-access-secret letmein --aws-region us-west-2
  aws-ps-client getpath /path/to/keys/ -k bar -s letmein --format=json
  aws-ps-client getpath /path/to/keys/ -k /path/to/token.1line.file -s /path/to/secret.1line.file
  aws-ps-client getpath /path/to/keys/ --version 12 -f text --recursive=false
  aws-ps-client getpath /path/to/keys/ -v 12 -f bash";

const VERSION_EXAMPLES: &str = "\
Examples:
  aws-ps-client version --format=json
  aws-ps-client version -f bash
  aws-ps-client version";

/// Build the full command tree.
pub fn build_cli() -> Command {
    Command::new(APPLICATION_NAME)
        .about("Retrieve values from AWS EC2 Parameter Store")
        .long_about("Client for retrieving values from AWS Parameter store for a given key")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Config file (default is $HOME/.aws-ps-client.toml)"),
        )
        .arg(
            Arg::new("aws-access-key")
                .short('k')
                .long("aws-access-key")
                .value_name("KEY")
                .env("AWS_PS_CLIENT_ACCESS_KEY")
                .hide_env_values(true)
                .global(true)
                .help("AWS IAM access key, or path to a file containing it"),
        )
        .arg(
            Arg::new("aws-access-secret")
                .short('s')
                .long("aws-access-secret")
                .value_name("SECRET")
                .env("AWS_PS_CLIENT_ACCESS_SECRET")
                .hide_env_values(true)
                .global(true)
                .help("AWS IAM access secret, or path to a file containing it"),
        )
        .arg(
            Arg::new("aws-region")
                .short('r')
                .long("aws-region")
                .value_name("REGION")
                .env("AWS_PS_CLIENT_REGION")
                .global(true)
                .help("AWS region, e.g. us-west-2 [default: us-west-2]"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .env("AWS_PS_CLIENT_FORMAT")
                .value_parser(["bash", "json", "text"])
                .global(true)
                .help("Output format [default: text]"),
        )
        .arg(
            Arg::new("store-file")
                .long("store-file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Read from a JSON snapshot instead of AWS"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .global(true)
                .help("Log level for stderr diagnostics (overrides RUST_LOG)"),
        )
        .subcommand(
            Command::new("get")
                .about("Get a value from the AWS Parameter Store for a key")
                .long_about("Given a key, retrieve the value from the AWS Parameter Store")
                .arg(
                    Arg::new("key")
                        .value_name("KEY")
                        .required(true)
                        .help("Full key name"),
                )
                .arg(version_arg("Version of the key/value to retrieve"))
                .after_help(GET_EXAMPLES),
        )
        .subcommand(
            Command::new("getpath")
                .about("Get key/values from a directory in the AWS Parameter Store")
                .long_about(
                    "Given a directory path, retrieve the values from the AWS Parameter Store",
                )
                .arg(
                    Arg::new("path")
                        .value_name("DIR-PATH")
                        .required(true)
                        .help("Directory path, e.g. /app/prod/"),
                )
                .arg(version_arg("Version of the key/value pairs to retrieve"))
                .arg(
                    Arg::new("recursive")
                        .short('u')
                        .long("recursive")
                        .value_name("BOOL")
                        .value_parser(value_parser!(bool))
                        .num_args(0..=1)
                        .require_equals(true)
                        .default_value("true")
                        .default_missing_value("true")
                        .action(ArgAction::Set)
                        .help("Recurse through the subdirectories for keys (-u=false to disable)"),
                )
                .after_help(GETPATH_EXAMPLES),
        )
        .subcommand(
            Command::new("version")
                .about("Version of the application")
                .long_about("Returns the version of the application")
                .after_help(VERSION_EXAMPLES),
        )
}

fn version_arg(help: &'static str) -> Arg {
    Arg::new("version")
        .short('v')
        .long("version")
        .value_name("VERSION")
        .help(help)
}
