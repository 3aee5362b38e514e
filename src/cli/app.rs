//! Main CLI application structure

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

use super::editor::{self, AddArgs, InquirePrompter, RemoveArgs};
use super::output::{Output, OutputFormat};
use super::{list, run_cmd};
use crate::domain::{Scope, ShortcutError};
use crate::executor::{ExecutionError, Executor};
use crate::storage::{Config, ShortcutStore};

/// Exit code when no shortcut matches the requested name
pub const EXIT_NOT_FOUND: u8 = 3;

/// Exit code when the shell could not be started or exited non-zero
pub const EXIT_EXECUTION_FAILED: u8 = 4;

#[derive(Debug, Parser)]
#[command(name = "shortcut")]
#[command(author, version, about = "Named shortcuts for chains of shell commands")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Shortcuts file to use instead of the configured one
    #[arg(long, global = true, env = "SHORTCUT_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Configuration file to read
    #[arg(long, global = true, env = "SHORTCUT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Shortcut name to execute
    pub shortcut: Option<String>,
}

impl Cli {
    /// Parses `args`, refusing a shortcut name given together with a subcommand
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Self::try_parse_from(args)?;
        if let (Some(name), Some(_)) = (&cli.shortcut, &cli.command) {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                format!("shortcut \"{name}\" cannot be combined with a subcommand"),
            ));
        }
        Ok(cli)
    }
}

/// Scope as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Available from every directory
    Global,
    /// Bound to the current directory
    Local,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Global => Scope::Global,
            ScopeArg::Local => Scope::Local,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a new shortcut for one or more commands
    Add {
        /// Scope of the shortcut (prompted when omitted)
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,

        /// Shortcut name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Commands to run, in order (prompted when omitted)
        #[arg(value_name = "COMMAND")]
        commands: Vec<String>,
    },

    /// List all shortcuts
    List,

    /// Remove a shortcut
    Remove {
        /// Scope of the shortcut (prompted when omitted)
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,

        /// Shortcut name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Maps a failed run to the process exit code
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if err
        .downcast_ref::<ShortcutError>()
        .is_some_and(ShortcutError::is_not_found)
    {
        return EXIT_NOT_FOUND;
    }
    if err.downcast_ref::<ExecutionError>().is_some() {
        return EXIT_EXECUTION_FAILED;
    }
    1
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::try_parse_args_from(std::env::args_os()).unwrap_or_else(|e| e.exit());
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("shortcut starting");

    if cli.command.is_none() && cli.shortcut.is_none() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let store = ShortcutStore::new(config.database_path(cli.db.as_deref())?);
    output.verbose_ctx("store", &format!("Using shortcuts file: {}", store.path().display()));

    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;

    match cli.command {
        Some(Commands::Add {
            scope,
            name,
            commands,
        }) => {
            let args = AddArgs {
                scope: scope.map(Scope::from),
                name,
                commands,
            };
            editor::add(&output, &store, &cwd, &mut InquirePrompter, args)?
        }

        Some(Commands::List) => list::list(&output, &store)?,

        Some(Commands::Remove { scope, name, yes }) => {
            let args = RemoveArgs {
                scope: scope.map(Scope::from),
                name,
                yes,
            };
            editor::remove(&output, &store, &mut InquirePrompter, args)?
        }

        None => {
            if let Some(name) = cli.shortcut.as_deref() {
                let executor = Executor::new(config.shell());
                run_cmd::run(&output, &store, &executor, &cwd, name)?
            }
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
