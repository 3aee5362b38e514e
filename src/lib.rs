//! Shortcut CLI - named shortcuts for chains of shell commands
//!
//! A shortcut maps a name to one or more shell commands. Shortcuts are either
//! global or local to the directory they were created in; local ones are found
//! by walking up from the working directory and take precedence over global
//! ones.

pub mod domain;
pub mod storage;
pub mod executor;
pub mod cli;

pub use domain::{resolve, CommandList, Database, Resolution, Scope, ShortcutError};
pub use executor::{ExecutionError, Executor};
pub use storage::{Config, ShortcutStore};
