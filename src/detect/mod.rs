//! Installed-binary version detection.
//!
//! Asks a binary for its version (`<bin> --version`), scrapes the output,
//! and decides whether the installed copy is new enough to skip a fresh
//! install.

use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::semver::{coerce_if_invalid, is_at_least};

/// Version token in `--version` output ("cmake version 3.23.1", "v1.10.2").
static VERSION_OUTPUT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?(\d\S*)").expect("VERSION_OUTPUT_REGEX must compile"));

/// Ask a binary for its version.
///
/// Runs `<bin> --version` and extracts the first version token from stdout,
/// falling back to stderr for tools that report there. Returns `None` when
/// the binary cannot be run or its output carries no version token.
pub fn bin_version(bin: &str, version_regex: Option<&Regex>) -> Option<String> {
    let output = match Command::new(bin).arg("--version").output() {
        Ok(output) => output,
        Err(err) => {
            tracing::debug!("Could not run {} --version: {}", bin, err);
            return None;
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    let text = if stdout.trim().is_empty() { stderr } else { stdout };

    extract_version(&text, version_regex.unwrap_or(&VERSION_OUTPUT_REGEX))
}

/// Check whether an installed binary satisfies a target version.
///
/// Detection or parse failures count as out of date; a missing or garbled
/// binary must never be mistaken for a fresh one.
pub fn is_bin_up_to_date(bin: &str, target: &str, version_regex: Option<&Regex>) -> bool {
    match bin_version(bin, version_regex) {
        Some(version) => is_at_least(&coerce_if_invalid(&version), target),
        None => false,
    }
}

fn extract_version(text: &str, version_regex: &Regex) -> Option<String> {
    version_regex
        .captures(text.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_version_token() {
        let version = extract_version("ninja 1.10.2", &VERSION_OUTPUT_REGEX);
        assert_eq!(version.as_deref(), Some("1.10.2"));
    }

    #[test]
    fn extracts_v_prefixed_token() {
        let version = extract_version("task v3.12.0", &VERSION_OUTPUT_REGEX);
        assert_eq!(version.as_deref(), Some("3.12.0"));
    }

    #[test]
    fn extracts_from_wordy_banner() {
        let version = extract_version("cmake version 3.23.1\n\nCMake suite", &VERSION_OUTPUT_REGEX);
        assert_eq!(version.as_deref(), Some("3.23.1"));
    }

    #[test]
    fn no_token_means_none() {
        assert_eq!(extract_version("no digits here", &VERSION_OUTPUT_REGEX), None);
        assert_eq!(extract_version("", &VERSION_OUTPUT_REGEX), None);
    }

    #[test]
    fn custom_regex_overrides_the_default() {
        let re = Regex::new(r"release (\d+\.\d+)").unwrap();
        let version = extract_version("gcc release 11.2 something", &re);
        assert_eq!(version.as_deref(), Some("11.2"));
    }

    #[test]
    fn missing_binary_is_none() {
        assert_eq!(bin_version("piton-test-no-such-binary", None), None);
    }

    #[test]
    fn missing_binary_is_never_up_to_date() {
        assert!(!is_bin_up_to_date("piton-test-no-such-binary", "1.0.0", None));
    }

    #[test]
    fn cargo_reports_a_version() {
        // Tests run under cargo, so cargo is on PATH.
        let version = bin_version("cargo", None).unwrap();
        assert!(version.starts_with(|c: char| c.is_ascii_digit()));
    }

    #[test]
    fn cargo_is_at_least_one_point_oh() {
        assert!(is_bin_up_to_date("cargo", "1.0.0", None));
    }
}
