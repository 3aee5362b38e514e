//! Shortcut resolution
//!
//! A name is looked up in the local shortcuts of the starting directory, then
//! of each parent in turn. The nearest directory that defines the name wins
//! and the walk stops there. Only when no directory on the way up defines it
//! does the global set apply.
//!
//! The walk covers every directory that has a parent: the filesystem root is
//! the termination point and is itself never consulted.

use std::path::Path;

use super::database::Database;
use super::shortcut::CommandList;

/// A definition chosen for a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Local {
        dir: &'a Path,
        commands: &'a CommandList,
    },
    Global {
        commands: &'a CommandList,
    },
}

impl<'a> Resolution<'a> {
    pub fn commands(&self) -> &'a CommandList {
        match *self {
            Resolution::Local { commands, .. } | Resolution::Global { commands } => commands,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Resolution::Local { .. })
    }
}

/// Directories searched for local shortcuts, nearest first
///
/// Starts with `start` itself and ends just below the root, i.e. at the last
/// directory whose parent differs from itself.
pub fn ancestry(start: &Path) -> Vec<&Path> {
    start
        .ancestors()
        .take_while(|dir| dir.parent().is_some())
        .collect()
}

/// Resolves `name` against an explicit, nearest-first list of directories
pub fn resolve_along<'a, 'p, I>(name: &str, dirs: I, db: &'a Database) -> Option<Resolution<'a>>
where
    I: IntoIterator<Item = &'p Path>,
{
    for dir in dirs {
        let hit = db
            .local_shortcuts
            .get_key_value(dir)
            .and_then(|(key, set)| set.get(name).map(|commands| (key, commands)));

        if let Some((key, commands)) = hit {
            return Some(Resolution::Local {
                dir: key.as_path(),
                commands,
            });
        }
    }

    db.global(name).map(|commands| Resolution::Global { commands })
}

/// Resolves `name` starting from `start_dir`
pub fn resolve<'a>(name: &str, start_dir: &Path, db: &'a Database) -> Option<Resolution<'a>> {
    resolve_along(name, ancestry(start_dir), db)
}
