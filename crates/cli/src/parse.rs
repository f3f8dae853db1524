//! ArgMatches → CliAction conversion.
//!
//! Translates clap's parsed arguments into the action the dispatch loop
//! executes. Shared by shell mode, REPL mode, and pipe mode.

use std::path::PathBuf;

use clap::ArgMatches;
use taglens_core::{DEFAULT_BENCH_RUNS, TOP_N};

/// The result of parsing user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Rank the top entries for the current selection.
    Top {
        /// Cutoff for the ranked list.
        limit: usize,
        /// Tags given inline with the command, if any.
        tags: Option<Vec<String>>,
    },
    /// Per-tag average ratios for the current selection.
    Averages {
        /// Tags given inline with the command, if any.
        tags: Option<Vec<String>>,
    },
    /// Benchmark both engines.
    Bench {
        /// Repetitions per engine.
        runs: usize,
        /// Tags given inline with the command, if any.
        tags: Option<Vec<String>>,
    },
    /// Replace the session tag selection (REPL/pipe only).
    SelectTags(Vec<String>),
    /// Load a dataset into the session (REPL/pipe only).
    Load(PathBuf),
}

/// REPL meta-commands, checked before clap parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    /// Exit the REPL.
    Quit,
    /// Print command help.
    Help,
    /// Clear the screen.
    Clear,
}

/// Check whether a REPL line is a meta-command.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    match line {
        "quit" | "exit" | "q" => Some(MetaCommand::Quit),
        "help" | "?" => Some(MetaCommand::Help),
        "clear" => Some(MetaCommand::Clear),
        _ => None,
    }
}

/// Split a comma-separated tag list, dropping empty segments.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Convert parsed matches into an action.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    match matches.subcommand() {
        Some(("top", sub)) => Ok(CliAction::Top {
            limit: sub.get_one::<usize>("limit").copied().unwrap_or(TOP_N),
            tags: sub
                .get_one::<String>("tags")
                .map(|raw| parse_tag_list(raw)),
        }),
        Some(("avg", sub)) => Ok(CliAction::Averages {
            tags: sub
                .get_one::<String>("tags")
                .map(|raw| parse_tag_list(raw)),
        }),
        Some(("bench", sub)) => Ok(CliAction::Bench {
            runs: sub
                .get_one::<usize>("runs")
                .copied()
                .unwrap_or(DEFAULT_BENCH_RUNS),
            tags: sub
                .get_one::<String>("tags")
                .map(|raw| parse_tag_list(raw)),
        }),
        Some(("tags", sub)) => {
            let raw = sub
                .get_one::<String>("list")
                .ok_or_else(|| "usage: tags music,gaming".to_string())?;
            Ok(CliAction::SelectTags(parse_tag_list(raw)))
        }
        Some(("load", sub)) => {
            let path = sub
                .get_one::<String>("path")
                .ok_or_else(|| "usage: load <path>".to_string())?;
            Ok(CliAction::Load(PathBuf::from(path)))
        }
        Some((other, _)) => Err(format!("unknown command: {}", other)),
        None => Err("no command given".to_string()),
    }
}
