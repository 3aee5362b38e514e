//! Output formatting for CLI commands

use std::io::IsTerminal;

use anstyle::{AnsiColor, Color, Style};
use serde::Serialize;

const TITLE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Magenta)));
const HEADING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)));
const NAME: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const NUMBER: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Colours for text output, no-ops when disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const PLAIN: Palette = Palette { enabled: false };
    pub const COLOR: Palette = Palette { enabled: true };

    fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", style.render(), text, style.render_reset())
        } else {
            text.to_string()
        }
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(TITLE, text)
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(HEADING, text)
    }

    pub fn name(&self, text: &str) -> String {
        self.paint(NAME, text)
    }

    pub fn number(&self, n: usize) -> String {
        self.paint(NUMBER, &n.to_string())
    }

    pub fn command(&self, text: &str) -> String {
        self.paint(SUCCESS, text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(SUCCESS, text)
    }

    pub fn notice(&self, text: &str) -> String {
        self.paint(NAME, text)
    }
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
    stdout: Palette,
}

impl Output {
    /// Creates an output helper, colouring text only on terminals
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        let stdout = if std::io::stdout().is_terminal() {
            Palette::COLOR
        } else {
            Palette::PLAIN
        };
        Self {
            format,
            verbose,
            stdout,
        }
    }

    /// Creates an output helper that never emits colour
    pub fn plain(format: OutputFormat, verbose: bool) -> Self {
        Self {
            format,
            verbose,
            stdout: Palette::PLAIN,
        }
    }

    /// Palette for stdout
    pub fn palette(&self) -> Palette {
        self.stdout
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", self.stdout.success(message)),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints an informational message (nothing changed, nothing failed)
    pub fn notice(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", self.stdout.notice(message)),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "notice": message
                    })
                );
            }
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        let rendered = match self.format {
            OutputFormat::Text => serde_json::to_string_pretty(data),
            OutputFormat::Json => serde_json::to_string(data),
        };
        if let Ok(json) = rendered {
            println!("{}", json);
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
