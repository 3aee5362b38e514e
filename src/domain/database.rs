//! The shortcut database
//!
//! One document holds every global shortcut plus the local shortcuts of each
//! directory they were created in.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::shortcut::{CommandList, Scope, ShortcutError, ShortcutSet};

/// All stored shortcuts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Database {
    pub global_shortcuts: ShortcutSet,
    /// Keyed by the absolute directory the shortcut was created in
    pub local_shortcuts: BTreeMap<PathBuf, ShortcutSet>,
}

/// Where a removed shortcut was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removed {
    Global,
    Local(PathBuf),
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when neither scope holds a shortcut
    pub fn is_empty(&self) -> bool {
        self.global_shortcuts.is_empty() && self.local_shortcuts.is_empty()
    }

    /// Looks up a shortcut defined exactly in `dir`
    pub fn local(&self, dir: &Path, name: &str) -> Option<&CommandList> {
        self.local_shortcuts.get(dir).and_then(|set| set.get(name))
    }

    /// Looks up a global shortcut
    pub fn global(&self, name: &str) -> Option<&CommandList> {
        self.global_shortcuts.get(name)
    }

    /// Adds a global shortcut, refusing to overwrite an existing one
    pub fn add_global(&mut self, name: &str, commands: CommandList) -> Result<(), ShortcutError> {
        if self.global_shortcuts.contains_key(name) {
            return Err(ShortcutError::Duplicate {
                scope: Scope::Global,
                name: name.to_string(),
            });
        }
        self.global_shortcuts.insert(name.to_string(), commands);
        Ok(())
    }

    /// Adds a shortcut local to exactly `dir`, refusing to overwrite
    ///
    /// Ancestors of `dir` are not consulted: a child directory may shadow a
    /// name its parent defines.
    pub fn add_local(
        &mut self,
        dir: &Path,
        name: &str,
        commands: CommandList,
    ) -> Result<(), ShortcutError> {
        if self.local(dir, name).is_some() {
            return Err(ShortcutError::Duplicate {
                scope: Scope::Local,
                name: name.to_string(),
            });
        }
        self.local_shortcuts
            .entry(dir.to_path_buf())
            .or_default()
            .insert(name.to_string(), commands);
        Ok(())
    }

    /// Adds a shortcut to the given scope; `cwd` is used for local ones
    pub fn add(
        &mut self,
        scope: Scope,
        cwd: &Path,
        name: &str,
        commands: CommandList,
    ) -> Result<(), ShortcutError> {
        match scope {
            Scope::Global => self.add_global(name, commands),
            Scope::Local => self.add_local(cwd, name, commands),
        }
    }

    /// Removes a global shortcut
    pub fn remove_global(&mut self, name: &str) -> Result<CommandList, ShortcutError> {
        self.global_shortcuts
            .remove(name)
            .ok_or_else(|| ShortcutError::NotFoundGlobal(name.to_string()))
    }

    /// Removes a local shortcut from the first directory that defines it
    ///
    /// Every recorded directory is searched in key order, not only the
    /// ancestors of the working directory. A directory whose set becomes
    /// empty is dropped from the database.
    pub fn remove_local(&mut self, name: &str) -> Result<(PathBuf, CommandList), ShortcutError> {
        let dir = self
            .local_shortcuts
            .iter()
            .find(|(_, set)| set.contains_key(name))
            .map(|(dir, _)| dir.clone())
            .ok_or_else(|| ShortcutError::NotFoundLocal(name.to_string()))?;

        let set = self
            .local_shortcuts
            .get_mut(&dir)
            .ok_or_else(|| ShortcutError::NotFoundLocal(name.to_string()))?;
        let commands = set
            .remove(name)
            .ok_or_else(|| ShortcutError::NotFoundLocal(name.to_string()))?;

        if set.is_empty() {
            self.local_shortcuts.remove(&dir);
        }

        Ok((dir, commands))
    }

    /// Removes a shortcut from the given scope
    pub fn remove(&mut self, scope: Scope, name: &str) -> Result<Removed, ShortcutError> {
        match scope {
            Scope::Global => self.remove_global(name).map(|_| Removed::Global),
            Scope::Local => self.remove_local(name).map(|(dir, _)| Removed::Local(dir)),
        }
    }
}
