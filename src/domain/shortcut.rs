//! Shortcut values and scopes
//!
//! A shortcut maps a name to an ordered list of shell command lines. Older
//! documents stored a single bare string instead of a list; both shapes are
//! accepted on read and normalized into [`CommandList`] immediately, so the
//! rest of the crate only ever sees a sequence.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors raised by shortcut operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShortcutError {
    #[error("Shortcut name cannot be empty!")]
    EmptyName,

    #[error("Please enter a valid positive integer.")]
    InvalidCount,

    #[error("{scope} shortcut \"{name}\" already exists!")]
    Duplicate { scope: Scope, name: String },

    #[error("Shortcut \"{0}\" not found!")]
    NotFound(String),

    #[error("Local shortcut \"{0}\" not found in any directory!")]
    NotFoundLocal(String),

    #[error("Global shortcut \"{0}\" not found!")]
    NotFoundGlobal(String),
}

impl ShortcutError {
    /// Returns true for the "nothing matched that name" family of errors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ShortcutError::NotFound(_)
                | ShortcutError::NotFoundLocal(_)
                | ShortcutError::NotFoundGlobal(_)
        )
    }
}

/// Where a shortcut definition lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Available from every directory
    Global,
    /// Bound to one directory and found from its descendants
    Local,
}

impl Scope {
    pub const ALL: [Scope; 2] = [Scope::Global, Scope::Local];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Global => "Global",
            Scope::Local => "Local",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks a shortcut name
pub fn validate_name(name: &str) -> Result<(), ShortcutError> {
    if name.is_empty() {
        return Err(ShortcutError::EmptyName);
    }
    Ok(())
}

/// Checks the number of commands requested by the add flow
pub fn validate_count(count: usize) -> Result<(), ShortcutError> {
    if count == 0 {
        return Err(ShortcutError::InvalidCount);
    }
    Ok(())
}

/// Shape of a shortcut value as found on disk
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredCommands {
    Sequence(Vec<String>),
    Single(String),
}

impl From<StoredCommands> for CommandList {
    fn from(stored: StoredCommands) -> Self {
        match stored {
            StoredCommands::Sequence(commands) => CommandList(commands),
            StoredCommands::Single(command) => CommandList(vec![command]),
        }
    }
}

/// Ordered shell command lines making up one shortcut
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandList(Vec<String>);

impl CommandList {
    pub fn new(commands: Vec<String>) -> Self {
        Self(commands)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Renders the list the way it is handed to the shell, joined with `&&`
    pub fn joined(&self) -> String {
        self.0.join(" && ")
    }
}

impl<'de> Deserialize<'de> for CommandList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StoredCommands::deserialize(deserializer).map(CommandList::from)
    }
}

impl From<Vec<String>> for CommandList {
    fn from(commands: Vec<String>) -> Self {
        Self(commands)
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Shortcuts of one scope, keyed by name
pub type ShortcutSet = BTreeMap<String, CommandList>;
