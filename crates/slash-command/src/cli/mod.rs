pub mod handlers;

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::inputs::{DEFAULT_API_URL, DEFAULT_FAILURE_REACTION, DEFAULT_SUCCESS_REACTION};

pub fn build_cli() -> Command {
    Command::new("slash-command")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve slash commands in comments against a configured command tree")
        .subcommand_required(true)
        .subcommand(cmd_run())
        .subcommand(cmd_check())
        .subcommand(cmd_match())
}

fn cmd_run() -> Command {
    Command::new("run")
        .about("Run as an action step: read the comment, match it, write outputs")
        .arg(
            Arg::new("repo-token")
                .long("repo-token")
                .env("INPUT_REPO-TOKEN")
                .hide_env_values(true)
                .help("Token used to read the configuration from the repository"),
        )
        .arg(
            Arg::new("configuration-path")
                .long("configuration-path")
                .env("INPUT_CONFIGURATION-PATH")
                .help("Path of the command tree document in the repository"),
        )
        .arg(
            Arg::new("config-file")
                .long("config-file")
                .value_parser(value_parser!(PathBuf))
                .help("Read the command tree from a local file instead"),
        )
        .arg(
            Arg::new("comment")
                .long("comment")
                .help("Command string to match instead of the event's comment"),
        )
        .arg(
            Arg::new("event-path")
                .long("event-path")
                .env("GITHUB_EVENT_PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Webhook payload holding comment.body"),
        )
        .arg(
            Arg::new("repository")
                .long("repository")
                .env("GITHUB_REPOSITORY")
                .help("Repository holding the configuration, as owner/repo"),
        )
        .arg(
            Arg::new("sha")
                .long("sha")
                .env("GITHUB_SHA")
                .help("Revision to read the configuration at"),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .env("GITHUB_API_URL")
                .help(format!("REST API base URL [default: {DEFAULT_API_URL}]")),
        )
        .arg(
            Arg::new("success-reaction")
                .long("success-reaction")
                .env("INPUT_SUCCESS-REACTION")
                .allow_hyphen_values(true)
                .help(format!("Reaction for a matched command [default: {DEFAULT_SUCCESS_REACTION}]")),
        )
        .arg(
            Arg::new("failure-reaction")
                .long("failure-reaction")
                .env("INPUT_FAILURE-REACTION")
                .allow_hyphen_values(true)
                .help(format!("Reaction for an unmatched command [default: {DEFAULT_FAILURE_REACTION}]")),
        )
        .arg(
            Arg::new("output-file")
                .long("output-file")
                .env("GITHUB_OUTPUT")
                .value_parser(value_parser!(PathBuf))
                .help("File the outputs are appended to; stdout when unset"),
        )
}

fn cmd_check() -> Command {
    Command::new("check")
        .about("Validate a local command tree document")
        .arg(
            Arg::new("file")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("YAML or JSON document"),
        )
}

fn cmd_match() -> Command {
    Command::new("match")
        .about("Match a command string against a local command tree document")
        .arg(
            Arg::new("file")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("YAML or JSON document"),
        )
        .arg(
            Arg::new("input")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .help("Command string, e.g. /order nachos"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_match_collects_tokens() {
        let matches = build_cli()
            .try_get_matches_from(["slash-command", "match", "c.yaml", "/order", "nachos"])
            .unwrap();
        let sub = matches.subcommand_matches("match").unwrap();
        let input: Vec<&String> = sub.get_many::<String>("input").unwrap().collect();
        assert_eq!(input, ["/order", "nachos"]);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(build_cli().try_get_matches_from(["slash-command"]).is_err());
    }
}
