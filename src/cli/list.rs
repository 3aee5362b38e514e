//! Listing of stored shortcuts

use std::fmt;

use anyhow::Result;

use super::output::{Output, Palette};
use crate::domain::{CommandList, Database};
use crate::storage::ShortcutStore;

pub const NOTHING_FOUND: &str = "No shortcuts found. Add some using the \"add\" command.";

/// Renders every shortcut, global ones first, then local ones by directory
pub fn render(db: &Database, palette: Palette) -> String {
    Listing { db, palette }.to_string()
}

struct Listing<'a> {
    db: &'a Database,
    palette: Palette,
}

impl Listing<'_> {
    fn commands(
        &self,
        f: &mut fmt::Formatter<'_>,
        commands: &CommandList,
        indent: &str,
    ) -> fmt::Result {
        for (index, command) in commands.iter().enumerate() {
            writeln!(
                f,
                "{}{}. {}",
                indent,
                self.palette.number(index + 1),
                self.palette.command(command)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let palette = self.palette;

        if self.db.is_empty() {
            return writeln!(f, "{}", palette.notice(NOTHING_FOUND));
        }

        writeln!(f, "{}", palette.title("Saved shortcuts:"))?;

        if !self.db.global_shortcuts.is_empty() {
            writeln!(f, "{}", palette.heading("Global Shortcuts:"))?;
            for (name, commands) in &self.db.global_shortcuts {
                writeln!(f, "{} ->", palette.name(name))?;
                self.commands(f, commands, "  ")?;
            }
        }

        if !self.db.local_shortcuts.is_empty() {
            writeln!(f, "{}", palette.heading("Local Shortcuts:"))?;
            for (dir, shortcuts) in &self.db.local_shortcuts {
                writeln!(f, "{} ->", palette.name(&dir.display().to_string()))?;
                for (name, commands) in shortcuts {
                    writeln!(f, "  {} ->", palette.name(name))?;
                    self.commands(f, commands, "    ")?;
                }
            }
        }

        Ok(())
    }
}

/// Prints all shortcuts
pub fn list(output: &Output, store: &ShortcutStore) -> Result<()> {
    let db = store.load()?;
    output.verbose_ctx(
        "list",
        &format!(
            "Loaded {} global shortcut(s), local shortcuts in {} directories",
            db.global_shortcuts.len(),
            db.local_shortcuts.len()
        ),
    );

    if output.is_json() {
        output.data(&db);
    } else {
        print!("{}", render(&db, output.palette()));
    }

    Ok(())
}
