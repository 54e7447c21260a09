//! Most-specific live-download resolution.
//!
//! Given the specifier set for a tool, find the newest concrete version the
//! request allows for which the tool's download URL actually responds.

use std::collections::HashSet;

use crate::error::{PitonError, Result};
use crate::platform::Platform;
use crate::probe::UrlProber;
use crate::version::set::matching_versions;

/// Resolve a requested specifier to a concrete version and a live URL.
///
/// `get_url` maps a platform/version pair to a candidate download URL;
/// `None` means the pair has no download, and the next less specific
/// candidate is tried. Candidates are probed sequentially in descending
/// release order and the first live URL wins, so no candidate newer than
/// the result is ever skipped and no candidate older is ever probed.
///
/// Requests carrying an ubuntu release tag (e.g. `13.0.0-ubuntu-20.04`) on
/// Linux are probed directly and skip the set-membership rule; distro-tagged
/// builds are not part of the generic release list.
pub fn resolve_version_and_url<F>(
    versions: &HashSet<String>,
    platform: Platform,
    requested: &str,
    get_url: F,
    prober: &dyn UrlProber,
) -> Result<(String, String)>
where
    F: Fn(Platform, &str) -> Option<String>,
{
    if platform == Platform::Linux && requested.contains("ubuntu") {
        if let Some(url) = get_url(platform, requested) {
            if prober.is_live(&url) {
                return Ok((requested.to_string(), url));
            }
        }
    }

    if !versions.contains(requested) {
        return Err(PitonError::UnsupportedTarget {
            platform,
            version: requested.to_string(),
        });
    }

    for candidate in matching_versions(versions, requested) {
        if let Some(url) = get_url(platform, &candidate) {
            tracing::debug!("Probing {} for version {}", url, candidate);
            if prober.is_live(&url) {
                return Ok((candidate, url));
            }
        }
    }

    Err(PitonError::UnsupportedTarget {
        platform,
        version: requested.to_string(),
    })
}
