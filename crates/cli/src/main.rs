//! taglens CLI — tag correlation analysis over trending-video datasets.
//!
//! Three modes:
//! - **Shell mode**: `taglens --data data/ top --tags music` — single command, exit
//! - **REPL mode**: `taglens [--data PATH]` — interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "avg --tags music" | taglens --data data/` — lines from stdin

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, OutputMode};
use parse::matches_to_action;
use repl::{run_action, run_repl, run_pipe};
use state::SessionState;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let mut state = SessionState::empty();
    if let Some(path) = matches.get_one::<String>("data") {
        if let Err(e) = state.load(Path::new(path)) {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    }

    if matches.subcommand().is_some() {
        // Shell mode: parse, execute, exit
        let exit_code = match matches_to_action(&matches) {
            Ok(action) => {
                if run_action(action, &mut state, output_mode) {
                    0
                } else {
                    1
                }
            }
            Err(e) => {
                eprintln!("(error) {}", e);
                1
            }
        };
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        run_repl(&mut state, output_mode);
    } else {
        let exit_code = run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}
