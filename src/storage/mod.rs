//! # Storage Layer
//!
//! Persistence for the shortcut database and the user configuration.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Shortcuts | JSON document | `shortcuts.json` next to the executable (configurable) |
//! | Config | TOML | `<config dir>/shortcut-cli/config.toml` |
//!
//! ## Document Shape
//!
//! ```json
//! {
//!   "globalShortcuts": { "hello": ["echo hi"] },
//!   "localShortcuts": { "/home/me/app": { "build": ["make", "make test"] } }
//! }
//! ```
//!
//! A shortcut value may also be a bare string in older documents; it is read
//! as a one-element list and written back as a list.
//!
//! ## Concurrency
//!
//! There is no locking. Concurrent invocations writing the same document
//! race and the last writer wins. Each write goes to a temp file that is
//! then renamed over the document.
//!
//! ## Key Types
//!
//! - [`ShortcutStore`] - Read/write the shortcuts document
//! - [`Config`] - User configuration

mod store;
mod config;

pub use store::{ShortcutStore, DATABASE_FILE};
pub use config::{Config, ConfigError, DEFAULT_SHELL};
