//! Terminal output.
//!
//! A small styled writer: verbosity gating plus a handful of message
//! helpers. Plan and resolution reports print through this so `--quiet`
//! and `--json` runs stay clean.

use std::str::FromStr;

use console::Style;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show status plus per-step detail.
    Verbose,
    /// Show status only.
    #[default]
    Normal,
    /// Show nothing except errors.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows detail lines.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Styled writer that respects the output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Status line, suppressed in quiet mode.
    pub fn message(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Detail line, verbose mode only.
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", Style::new().dim().apply_to(msg));
        }
    }

    /// Success line, suppressed in quiet mode.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{} {}", Style::new().green().apply_to("✓"), msg);
        }
    }

    /// Warning line on stderr, always printed.
    pub fn warning(&self, msg: &str) {
        eprintln!("{} {}", Style::new().color256(208).apply_to("!"), msg);
    }

    /// Error line on stderr, always printed.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", Style::new().red().bold().apply_to("✗"), msg);
    }
}
