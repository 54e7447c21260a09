//! Version string validation, coercion, and comparison.
//!
//! Requested versions arrive in loose forms ("11", "3.21") while resolution
//! and up-to-date checks need strict three-part semantics. A string that
//! cannot be coerced passes through unchanged; it fails later at the point
//! of use (set membership or comparison), where the error message carries
//! more context.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

/// Leading numeric components of a loose version string ("v11", "3.21").
static COERCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("COERCE_REGEX must compile")
});

/// Check whether a string parses as a three-part semantic version.
pub fn is_valid_semver(version: &str) -> bool {
    Version::parse(version).is_ok()
}

/// Coerce a loose version string to three-part form ("11" becomes "11.0.0").
///
/// Valid versions are returned unchanged. Uncoercible strings are also
/// returned unchanged; validation at the point of use reports those.
pub fn coerce_if_invalid(version: &str) -> String {
    if is_valid_semver(version) {
        return version.to_string();
    }
    match coerce(version) {
        Some(coerced) => {
            tracing::info!("Coerced version '{}' to '{}'", version, coerced);
            coerced
        }
        None => version.to_string(),
    }
}

fn coerce(version: &str) -> Option<String> {
    let caps = COERCE_REGEX.captures(version)?;
    let major: u64 = caps.get(1)?.as_str().parse().ok()?;
    let minor: u64 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let patch: u64 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    Some(Version::new(major, minor, patch).to_string())
}

/// Compare two version strings.
///
/// Returns `None` when either side does not parse as a three-part version.
pub fn compare(a: &str, b: &str) -> Option<Ordering> {
    let a = Version::parse(a).ok()?;
    let b = Version::parse(b).ok()?;
    Some(a.cmp(&b))
}

/// Check that an installed version satisfies a target version.
///
/// Fails closed: empty or unparsable input never satisfies the target, so a
/// garbled `--version` probe cannot masquerade as an up-to-date install.
pub fn is_at_least(installed: &str, target: &str) -> bool {
    if installed.is_empty() || target.is_empty() {
        return false;
    }
    matches!(
        compare(installed, target),
        Some(Ordering::Equal | Ordering::Greater)
    )
}
