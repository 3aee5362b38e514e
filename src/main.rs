//! Shortcut CLI - named shortcuts for chains of shell commands

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = shortcut_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::from(shortcut_cli::cli::exit_code(&e))
    } else {
        ExitCode::SUCCESS
    }
}
