//! Running a shortcut by name

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::domain::{ancestry, resolve, Resolution, ShortcutError};
use crate::executor::{chain, Executor};
use crate::storage::ShortcutStore;

/// Resolves `name` from `cwd` and runs its commands
pub fn run(
    output: &Output,
    store: &ShortcutStore,
    executor: &Executor,
    cwd: &Path,
    name: &str,
) -> Result<()> {
    let db = store.load()?;

    output.verbose_ctx(
        "run",
        &format!(
            "Resolving '{}' from {} ({} directories to search)",
            name,
            cwd.display(),
            ancestry(cwd).len()
        ),
    );

    let resolution =
        resolve(name, cwd, &db).ok_or_else(|| ShortcutError::NotFound(name.to_string()))?;

    match resolution {
        Resolution::Local { dir, commands } => output.success(&format!(
            "Running local shortcut: \"{}\": {} -> {}",
            dir.display(),
            name,
            commands.joined()
        )),
        Resolution::Global { commands } => output.success(&format!(
            "Running global shortcut: {} -> {}",
            name,
            commands.joined()
        )),
    }

    let commands = resolution.commands();
    output.verbose_ctx(
        "run",
        &format!("Executing with {}: {}", executor.shell(), chain(commands)),
    );

    executor.execute(commands)?;

    output.verbose_ctx("run", "Shell exited successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::OutputFormat;
    use crate::domain::{CommandList, Database};
    use crate::executor::ExecutionError;
    use tempfile::TempDir;

    fn cmds(items: &[&str]) -> CommandList {
        CommandList::new(items.iter().map(|s| s.to_string()).collect())
    }

    fn store_with(db: &Database) -> (TempDir, ShortcutStore) {
        let dir = TempDir::new().unwrap();
        let store = ShortcutStore::new(dir.path().join("shortcuts.json"));
        store.save(db).unwrap();
        (dir, store)
    }

    #[test]
    fn unknown_name_is_not_found_and_runs_nothing() {
        let (_dir, store) = store_with(&Database::new());
        let output = Output::plain(OutputFormat::Text, false);
        // A shell that cannot spawn would surface as an ExecutionError
        let executor = Executor::new("definitely-not-a-shell");

        let err = run(&output, &store, &executor, Path::new("/a"), "missing").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ShortcutError>(),
            Some(&ShortcutError::NotFound("missing".into()))
        );
    }

    #[test]
    fn resolved_shortcut_reaches_the_executor() {
        let mut db = Database::new();
        db.add_global("hello", cmds(&["echo hi"])).unwrap();
        let (_dir, store) = store_with(&db);
        let output = Output::plain(OutputFormat::Text, false);
        let executor = Executor::new("definitely-not-a-shell");

        let err = run(&output, &store, &executor, Path::new("/a"), "hello").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExecutionError>(),
            Some(ExecutionError::Spawn { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn local_shortcut_runs_from_descendant() {
        let work = TempDir::new().unwrap();
        let marker = work.path().join("built");
        let touch = format!("touch '{}'", marker.display());

        let mut db = Database::new();
        db.add_local(work.path(), "build", cmds(&[touch.as_str()]))
            .unwrap();
        let (_dir, store) = store_with(&db);
        let output = Output::plain(OutputFormat::Text, false);

        let nested = work.path().join("src").join("deep");
        run(&output, &store, &Executor::default(), &nested, "build").unwrap();

        assert!(marker.exists());
    }
}
