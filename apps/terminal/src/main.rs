//! # Grocer Entry Point
//!
//! Thin wrapper over [`grocer_terminal::run`].

use std::process::ExitCode;

fn main() -> ExitCode {
    match grocer_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("grocer: {e}");
            ExitCode::FAILURE
        }
    }
}
