//! Interactive add and remove flows
//!
//! Values passed on the command line are used as-is (after validation);
//! anything missing is asked for through a [`Prompter`].

use std::path::Path;

use anyhow::Result;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, Select, Text};

use super::output::Output;
use crate::domain::{validate_count, validate_name, CommandList, Removed, Scope};
use crate::storage::ShortcutStore;

/// Source of answers for the add and remove flows
pub trait Prompter {
    /// Asks whether the shortcut is global or local
    fn scope(&mut self, message: &str) -> Result<Scope>;

    /// Asks for a non-empty shortcut name
    fn name(&mut self, message: &str) -> Result<String>;

    /// Asks for a positive number of commands
    fn count(&mut self, message: &str) -> Result<usize>;

    /// Asks for the command at `index` (1-based)
    fn command(&mut self, index: usize) -> Result<String>;

    /// Asks a yes/no question, defaulting to no
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Terminal prompts backed by `inquire`
///
/// Invalid names and counts are reported inline and asked again.
pub struct InquirePrompter;

fn name_validator(input: &str) -> Result<Validation, CustomUserError> {
    Ok(match validate_name(input) {
        Ok(()) => Validation::Valid,
        Err(e) => Validation::Invalid(e.to_string().into()),
    })
}

fn count_validator(count: &usize) -> Result<Validation, CustomUserError> {
    Ok(match validate_count(*count) {
        Ok(()) => Validation::Valid,
        Err(e) => Validation::Invalid(e.to_string().into()),
    })
}

impl Prompter for InquirePrompter {
    fn scope(&mut self, message: &str) -> Result<Scope> {
        Ok(Select::new(message, Scope::ALL.to_vec()).prompt()?)
    }

    fn name(&mut self, message: &str) -> Result<String> {
        Ok(Text::new(message).with_validator(name_validator).prompt()?)
    }

    fn count(&mut self, message: &str) -> Result<usize> {
        Ok(CustomType::<usize>::new(message)
            .with_validator(count_validator)
            .with_error_message("Please enter a valid positive integer.")
            .prompt()?)
    }

    fn command(&mut self, index: usize) -> Result<String> {
        let message = format!("Enter command #{}:", index);
        Ok(Text::new(&message).prompt()?)
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(Confirm::new(message).with_default(false).prompt()?)
    }
}

const SCOPE_QUESTION: &str = "Is this a global shortcut or local to this directory?";

/// Values for `add` given on the command line
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub scope: Option<Scope>,
    pub name: Option<String>,
    pub commands: Vec<String>,
}

/// Values for `remove` given on the command line
#[derive(Debug, Clone, Default)]
pub struct RemoveArgs {
    pub scope: Option<Scope>,
    pub name: Option<String>,
    pub yes: bool,
}

/// A shortcut ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortcut {
    pub scope: Scope,
    pub name: String,
    pub commands: CommandList,
}

/// Collects scope, name and commands for a new shortcut
pub fn gather_add(prompter: &mut dyn Prompter, args: AddArgs) -> Result<NewShortcut> {
    let scope = match args.scope {
        Some(scope) => scope,
        None => prompter.scope(SCOPE_QUESTION)?,
    };

    let name = match args.name {
        Some(name) => {
            validate_name(&name)?;
            name
        }
        None => prompter.name("Enter the shortcut name:")?,
    };

    let commands = if args.commands.is_empty() {
        let count = prompter.count("How many commands do you want to add?")?;
        validate_count(count)?;
        (1..=count)
            .map(|index| prompter.command(index))
            .collect::<Result<Vec<_>>>()?
    } else {
        args.commands
    };

    Ok(NewShortcut {
        scope,
        name,
        commands: CommandList::new(commands),
    })
}

/// Collects scope and name of the shortcut to remove
///
/// Returns `None` when the user declines the confirmation.
pub fn gather_remove(prompter: &mut dyn Prompter, args: RemoveArgs) -> Result<Option<(Scope, String)>> {
    let scope = match args.scope {
        Some(scope) => scope,
        None => prompter.scope(SCOPE_QUESTION)?,
    };

    let name = match args.name {
        Some(name) => {
            validate_name(&name)?;
            name
        }
        None => prompter.name("Enter the shortcut you want to remove:")?,
    };

    if !args.yes && !prompter.confirm("Are you sure?")? {
        return Ok(None);
    }

    Ok(Some((scope, name)))
}

/// Adds a shortcut; local shortcuts belong to `cwd` exactly
pub fn add(
    output: &Output,
    store: &ShortcutStore,
    cwd: &Path,
    prompter: &mut dyn Prompter,
    args: AddArgs,
) -> Result<()> {
    let mut db = store.load()?;
    let shortcut = gather_add(prompter, args)?;

    output.verbose_ctx(
        "add",
        &format!(
            "Adding {} shortcut '{}' with {} command(s)",
            shortcut.scope,
            shortcut.name,
            shortcut.commands.len()
        ),
    );

    db.add(shortcut.scope, cwd, &shortcut.name, shortcut.commands.clone())?;
    store.save(&db)?;

    if shortcut.scope == Scope::Local && cwd.parent().is_none() {
        output.notice(&format!(
            "Note: \"{}\" is the filesystem root; shortcuts there are never resolved.",
            cwd.display()
        ));
    }

    output.success(&format!(
        "Shortcut added ({}): {} -> {}",
        shortcut.scope,
        shortcut.name,
        shortcut.commands.joined()
    ));

    Ok(())
}

/// Removes a shortcut after confirmation
///
/// Local removal searches every recorded directory and takes the first one,
/// in path order, that defines the name.
pub fn remove(
    output: &Output,
    store: &ShortcutStore,
    prompter: &mut dyn Prompter,
    args: RemoveArgs,
) -> Result<()> {
    let mut db = store.load()?;

    let Some((scope, name)) = gather_remove(prompter, args)? else {
        output.notice("Shortcut removal canceled");
        return Ok(());
    };

    let removed = db.remove(scope, &name)?;
    store.save(&db)?;

    match removed {
        Removed::Global => output.success(&format!("Global shortcut \"{}\" removed.", name)),
        Removed::Local(dir) => output.success(&format!(
            "Local shortcut \"{}\" removed from directory: {}",
            name,
            dir.display()
        )),
    }

    Ok(())
}
