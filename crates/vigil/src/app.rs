use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn build_cli() -> Command {
    Command::new("vigil")
        .version(env!("CARGO_PKG_VERSION"))
        .about("On-screen marker detection and overlay alerting, offline")
        .long_about(
            "vigil drives the watch-and-react core against recorded data: scan a single \
             snapshot tree for the configured marker, or replay a whole event feed through \
             the gate/scan/overlay pipeline with a simulated window surface.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        // Scan subcommand
        .subcommand(
            Command::new("scan")
                .about("Scan one snapshot tree file for the configured marker")
                .arg(
                    Arg::new("tree")
                        .long("tree")
                        .short('t')
                        .help("Path to a snapshot tree JSON file")
                        .required(true),
                )
                .arg(
                    Arg::new("policy")
                        .long("policy")
                        .help("Detection policy override")
                        .value_parser(["markers", "exact"]),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        // Replay subcommand
        .subcommand(
            Command::new("replay")
                .about("Replay an event feed file through the full watcher pipeline")
                .arg(
                    Arg::new("feed")
                        .long("feed")
                        .short('f')
                        .help("Path to an event feed JSON file")
                        .required(true),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        // Config subcommand
        .subcommand(
            Command::new("config")
                .about("Print the merged effective configuration")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
}

#[allow(dead_code)]
pub fn get_matches() -> ArgMatches {
    build_cli().get_matches()
}
