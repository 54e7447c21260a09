//! Resolve command implementation.
//!
//! The `piton resolve` command turns a version request plus a URL template
//! into the newest release whose download actually responds.

use std::time::Duration;

use anyhow::Context;
use serde::Serialize;

use crate::cli::args::ResolveArgs;
use crate::error::{PitonError, Result};
use crate::platform::Platform;
use crate::probe::HttpProber;
use crate::ui::Output;
use crate::version::{build_version_set, resolve_version_and_url};

use super::dispatcher::{Command, CommandResult};

/// A resolved version/URL pair.
#[derive(Debug, Serialize)]
pub struct Resolution {
    /// Concrete version to install.
    pub version: String,
    /// Live download URL for that version.
    pub url: String,
}

/// The resolve command implementation.
pub struct ResolveCommand {
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(args: ResolveArgs) -> Self {
        Self { args }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let platform = self.args.platform.unwrap_or_else(Platform::current);
        let set = build_version_set(&self.args.versions);
        let prober = HttpProber::with_timeout(Duration::from_secs(self.args.timeout));
        let template = &self.args.url_template;

        out.detail(&format!(
            "Resolving '{}' for {} across {} known releases",
            self.args.request,
            platform,
            self.args.versions.len()
        ));

        let resolved = resolve_version_and_url(
            &set,
            platform,
            &self.args.request,
            |_, version| Some(template.replace("{version}", version)),
            &prober,
        );

        match resolved {
            Ok((version, url)) => {
                if self.args.json {
                    let json = serde_json::to_string_pretty(&Resolution { version, url })
                        .context("Failed to serialize resolution")?;
                    println!("{}", json);
                } else {
                    out.message(&format!("{} {}", version, url));
                }
                Ok(CommandResult::success())
            }
            Err(err @ PitonError::UnsupportedTarget { .. }) => {
                out.error(&err.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(err) => Err(err),
        }
    }
}
