//! User-facing output, kept separate from diagnostic logging.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{AnsiColors, OwoColorize};

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on flags, config, and terminal capabilities.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// Colour is disabled by `--no-color`, by `output.color = false` in the
    /// config, or when stdout is not a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let no_color = args.no_color || !config.output.color || !io::stdout().is_terminal();

        Self {
            quiet: args.quiet,
            no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ──────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.status('\u{2713}', AnsiColors::Green, msg)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode; errors
    /// must always be visible.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2717}', AnsiColors::Red, msg)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.status('\u{26a0}', AnsiColors::Yellow, msg)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.status('\u{2139}', AnsiColors::Blue, msg)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Shared glyph-plus-message renderer behind the status methods.
    fn status(&self, glyph: char, color: AnsiColors, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("{glyph} {msg}")
        } else {
            format!("{} {}", glyph.color(color).bold(), msg.color(color))
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
