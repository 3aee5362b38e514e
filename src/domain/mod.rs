//! Domain models for shortcuts
//!
//! Contains the data model and the resolution rule without any I/O concerns.

mod shortcut;
mod database;
mod resolve;

pub use shortcut::{validate_count, validate_name, CommandList, Scope, ShortcutError, ShortcutSet};
pub use database::{Database, Removed};
pub use resolve::{ancestry, resolve, resolve_along, Resolution};
