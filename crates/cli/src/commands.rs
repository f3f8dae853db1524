//! Clap command tree definition.
//!
//! Builds the `clap::Command` tree used by both shell mode (directly)
//! and REPL mode (via `try_get_matches_from`).

use clap::{Arg, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("taglens")
        .about("Tag correlation analyzer for trending-video datasets")
        .subcommand_required(false)
        .arg(
            Arg::new("data")
                .long("data")
                .help("Dataset path: a CSV file or a folder of CSV files")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (tab-separated values, no labels)")
                .action(clap::ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_top())
        .subcommand(build_avg())
        .subcommand(build_bench())
}

/// Build a command tree for REPL and pipe mode (no global flags).
pub fn build_repl_cmd() -> Command {
    Command::new("repl")
        .multicall(true)
        .subcommand_required(true)
        .subcommand(build_tags())
        .subcommand(build_load())
        .subcommand(build_top())
        .subcommand(build_avg())
        .subcommand(build_bench())
}

// =========================================================================
// Analysis subcommands
// =========================================================================

fn build_top() -> Command {
    Command::new("top")
        .about("Top videos by like/view ratio for the selected tags")
        .arg(
            Arg::new("tags")
                .long("tags")
                .help("Comma-separated tag substrings, e.g. music,gaming"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .help("Number of entries to return (default: 10)")
                .value_parser(clap::value_parser!(usize)),
        )
}

fn build_avg() -> Command {
    Command::new("avg")
        .about("Average like/view ratio for each selected tag")
        .arg(
            Arg::new("tags")
                .long("tags")
                .help("Comma-separated tag substrings, e.g. music,gaming"),
        )
}

fn build_bench() -> Command {
    Command::new("bench")
        .about("Benchmark the heap and hash-table engines head-to-head")
        .arg(
            Arg::new("tags")
                .long("tags")
                .help("Comma-separated tag substrings, e.g. music,gaming"),
        )
        .arg(
            Arg::new("runs")
                .long("runs")
                .help("Repetitions per engine (default: 3)")
                .value_parser(clap::value_parser!(usize)),
        )
}

// =========================================================================
// REPL-only subcommands
// =========================================================================

fn build_tags() -> Command {
    Command::new("tags")
        .about("Select tags for subsequent commands")
        .arg(Arg::new("list").help("Comma-separated tag substrings"))
}

fn build_load() -> Command {
    Command::new("load")
        .about("Load a dataset file or folder")
        .arg(Arg::new("path").required(true).help("CSV file or folder"))
}
