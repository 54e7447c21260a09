//! Plan command implementation.
//!
//! The `piton plan` command reconciles a batch of tool requests and reports
//! the version each tool would install, without installing anything. Pinned
//! versions propagate to siblings left at default before defaults resolve.

use anyhow::{anyhow, Context};
use serde::Serialize;

use crate::cli::args::PlanArgs;
use crate::defaults::{resolved_version, synchronize, ToolRequest};
use crate::error::{PitonError, Result};
use crate::platform::{host_release, parse_release_pair, Platform, ReleasePair};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// A tool's planned version.
#[derive(Debug, Serialize)]
pub struct PlannedTool {
    /// Tool name.
    pub tool: String,
    /// Requested specifier after synchronization, if any.
    pub requested: Option<String>,
    /// Resolved concrete-or-qualified version.
    pub version: String,
}

/// The plan command implementation.
pub struct PlanCommand {
    args: PlanArgs,
}

impl PlanCommand {
    /// Create a new plan command.
    pub fn new(args: PlanArgs) -> Self {
        Self { args }
    }

    fn release_pair(&self, platform: Platform, out: &Output) -> Result<Option<ReleasePair>> {
        if let Some(value) = &self.args.os_release {
            let pair = parse_release_pair(value)
                .ok_or_else(|| anyhow!("Invalid --os-release value '{}'", value))?;
            return Ok(Some(pair));
        }
        // Release-qualified defaults are nice to have; a host without a
        // readable os-release still gets the plain table defaults.
        match host_release(platform) {
            Ok(release) => Ok(release),
            Err(err) => {
                out.warning(&err.to_string());
                Ok(None)
            }
        }
    }
}

/// Parse a `NAME` or `NAME=VERSION` tool argument.
fn parse_tool_spec(spec: &str) -> Result<ToolRequest> {
    match spec.split_once('=') {
        Some((name, version)) => {
            if name.is_empty() || version.is_empty() {
                return Err(anyhow!("Invalid tool spec '{}'", spec).into());
            }
            Ok(ToolRequest::new(name, Some(version)))
        }
        None => {
            if spec.is_empty() {
                return Err(anyhow!("Empty tool name").into());
            }
            Ok(ToolRequest::new(spec, None))
        }
    }
}

impl Command for PlanCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let platform = self.args.platform.unwrap_or_else(Platform::current);
        let os_release = self.release_pair(platform, out)?;

        let mut requests = self
            .args
            .tools
            .iter()
            .map(|spec| parse_tool_spec(spec))
            .collect::<Result<Vec<_>>>()?;

        if !self.args.no_sync {
            match synchronize(&mut requests) {
                Ok(()) => {}
                Err(err @ PitonError::ConflictingPins { .. }) => {
                    out.error(&err.to_string());
                    return Ok(CommandResult::failure(2));
                }
                Err(err) => return Err(err),
            }
        }

        let mut planned = Vec::with_capacity(requests.len());
        for request in &requests {
            let version =
                resolved_version(&request.tool, request.version.as_deref(), platform, os_release);
            if version.is_empty() {
                let err = PitonError::UnresolvableDefault {
                    tool: request.tool.clone(),
                };
                out.error(&err.to_string());
                return Ok(CommandResult::failure(2));
            }
            tracing::debug!("Planned {} at {}", request.tool, version);
            planned.push(PlannedTool {
                tool: request.tool.clone(),
                requested: request.version.clone(),
                version,
            });
        }

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&planned).context("Failed to serialize plan")?;
            println!("{}", json);
        } else {
            out.detail(&format!("Target platform: {}", platform));
            for tool in &planned {
                out.message(&format!("{:<14} {}", tool.tool, tool.version));
            }
        }

        Ok(CommandResult::success())
    }
}
