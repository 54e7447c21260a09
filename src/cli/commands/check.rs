//! Check command implementation.
//!
//! The `piton check` command reports whether an installed binary satisfies
//! a minimum version, for skip-if-fresh install flows.

use anyhow::Context;
use regex::Regex;

use crate::cli::args::CheckArgs;
use crate::detect::bin_version;
use crate::error::Result;
use crate::ui::Output;
use crate::version::{coerce_if_invalid, is_at_least};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let version_regex = match &self.args.version_regex {
            Some(pattern) => Some(
                Regex::new(pattern)
                    .with_context(|| format!("Invalid version regex '{}'", pattern))?,
            ),
            None => None,
        };

        match bin_version(&self.args.bin, version_regex.as_ref()) {
            Some(version) if is_at_least(&coerce_if_invalid(&version), &self.args.at_least) => {
                out.success(&format!(
                    "{} {} satisfies {}",
                    self.args.bin, version, self.args.at_least
                ));
                Ok(CommandResult::success())
            }
            Some(version) => {
                out.message(&format!(
                    "{} {} is older than {}",
                    self.args.bin, version, self.args.at_least
                ));
                Ok(CommandResult::failure(1))
            }
            None => {
                out.message(&format!(
                    "{} not found or reports no version",
                    self.args.bin
                ));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
