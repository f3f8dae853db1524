//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::build_repl_cmd;
use crate::format::{format_averages, format_bench, format_error, format_ranking, OutputMode};
use crate::parse::{check_meta_command, matches_to_action, CliAction, MetaCommand};
use crate::state::SessionState;

/// Run the interactive REPL.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) failed to start line editor: {}", e);
            return;
        }
    };

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline(&state.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                if let Some(meta) = check_meta_command(trimmed) {
                    match meta {
                        MetaCommand::Quit => break,
                        MetaCommand::Clear => print!("\x1B[2J\x1B[1;1H"),
                        MetaCommand::Help => print_help(),
                    }
                    continue;
                }

                execute_line(trimmed, state, mode);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

/// Run pipe mode: one command per stdin line. Returns the exit code.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut failed = false;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(meta) = check_meta_command(trimmed) {
            match meta {
                MetaCommand::Quit => break,
                MetaCommand::Help => print_help(),
                MetaCommand::Clear => {}
            }
            continue;
        }
        if !execute_line(trimmed, state, mode) {
            failed = true;
        }
    }

    if failed {
        1
    } else {
        0
    }
}

/// Tokenize, parse, and execute one command line. Returns success.
fn execute_line(line: &str, state: &mut SessionState, mode: OutputMode) -> bool {
    // Tokenize with shlex (respects quotes in paths and tag lists)
    let tokens = match shlex::split(line) {
        Some(t) => t,
        None => {
            eprintln!("(error) Invalid quoting");
            return false;
        }
    };
    if tokens.is_empty() {
        return true;
    }

    let matches = match build_repl_cmd().try_get_matches_from(tokens) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            return false;
        }
    };

    let action = match matches_to_action(&matches) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("(error) {}", e);
            return false;
        }
    };

    run_action(action, state, mode)
}

/// Execute an action against the session. Returns success.
pub fn run_action(action: CliAction, state: &mut SessionState, mode: OutputMode) -> bool {
    match action {
        CliAction::Top { limit, tags } => match state.top(limit, tags) {
            Ok(entries) => {
                println!("{}", format_ranking(&entries, mode));
                true
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                false
            }
        },
        CliAction::Averages { tags } => match state.averages(tags) {
            Ok(averages) => {
                println!("{}", format_averages(&averages, mode));
                true
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                false
            }
        },
        CliAction::Bench { runs, tags } => match state.bench(runs, tags) {
            Ok(report) => {
                println!("{}", format_bench(&report, mode));
                true
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                false
            }
        },
        CliAction::SelectTags(tags) => {
            if tags.is_empty() {
                eprintln!("(error) empty tag list");
                return false;
            }
            println!("Tags selected: {}", tags.join(","));
            state.select_tags(tags);
            true
        }
        CliAction::Load(path) => load_into(state, &path, mode),
    }
}

fn load_into(state: &mut SessionState, path: &Path, mode: OutputMode) -> bool {
    match state.load(path) {
        Ok(count) => {
            println!("Loaded {} videos from {}", count, path.display());
            true
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            false
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  load <path>            Load a CSV file or a folder of CSVs");
    println!("  tags <a,b,c>           Select tag substrings to analyze");
    println!("  top [--limit N]        Top videos by like/view ratio");
    println!("  avg                    Average ratio per selected tag");
    println!("  bench [--runs N]       Time the heap and hash-table engines");
    println!("  help | clear | quit");
    println!();
    println!("top, avg, and bench also accept --tags a,b,c inline.");
}

fn history_file() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".taglens_history"))
}
