//! Cross-tool version synchronization.
//!
//! Tools that ship together (llvm, clangtidy, clangformat) should install
//! matching versions. A version pinned on one of them propagates onto the
//! siblings left at their default; two explicit pins that disagree fail the
//! whole batch before anything installs.

use crate::defaults::table::is_default_request;
use crate::error::{PitonError, Result};

/// A tool paired with its requested version, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequest {
    /// Tool name.
    pub tool: String,
    /// Requested version; `None` means no version was given on input.
    pub version: Option<String>,
}

impl ToolRequest {
    /// Create a request from a tool name and optional version.
    pub fn new(tool: &str, version: Option<&str>) -> Self {
        Self {
            tool: tool.to_string(),
            version: version.map(str::to_string),
        }
    }

    /// Whether this request asks for the tool's default version.
    pub fn is_default(&self) -> bool {
        is_default_request(self.version.as_deref(), &self.tool)
    }
}

/// Make a batch of related requests mutually consistent.
///
/// Every explicitly pinned tool overwrites sibling default requests with
/// its own version. Two explicit pins that disagree are a configuration
/// error and fail the batch with both tools named; equal pins are fine.
/// Requests are mutated in place, left to right.
pub fn synchronize(requests: &mut [ToolRequest]) -> Result<()> {
    for i in 0..requests.len() {
        if requests[i].is_default() {
            continue;
        }
        let pinned = requests[i].version.clone();
        for j in 0..requests.len() {
            if j == i {
                continue;
            }
            if requests[j].is_default() {
                tracing::debug!(
                    "Propagating version {:?} from '{}' to '{}'",
                    pinned,
                    requests[i].tool,
                    requests[j].tool
                );
                requests[j].version = pinned.clone();
            } else if requests[j].version != pinned {
                return Err(PitonError::ConflictingPins {
                    first: requests[i].tool.clone(),
                    first_version: pinned.unwrap_or_default(),
                    second: requests[j].tool.clone(),
                    second_version: requests[j].version.clone().unwrap_or_default(),
                });
            }
        }
    }
    Ok(())
}
