//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `shortcut add` | Add a global or directory-local shortcut |
//! | `shortcut list` | Print all shortcuts, global first |
//! | `shortcut remove` | Remove a shortcut after confirmation |
//! | `shortcut <name>` | Resolve a shortcut and run its commands |
//!
//! `add` and `remove` prompt for anything not given as a flag.
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output, coloured on terminals
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! shortcut --verbose build
//! ```
//!
//! ## Exit Codes
//!
//! `0` on success, `1` for general errors, `2` for usage errors,
//! [`EXIT_NOT_FOUND`] when no shortcut matches and
//! [`EXIT_EXECUTION_FAILED`] when the shell fails.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod editor;
mod list;
mod run_cmd;

pub use app::{exit_code, run, Cli, Commands, ScopeArg, EXIT_EXECUTION_FAILED, EXIT_NOT_FOUND};
pub use editor::{gather_add, gather_remove, AddArgs, InquirePrompter, NewShortcut, Prompter, RemoveArgs};
pub use list::render;
pub use output::{Output, OutputFormat, Palette};
