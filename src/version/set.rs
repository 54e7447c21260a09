//! Specifier set derivation for a tool's known releases.
//!
//! A release list like `["3.5.2", "3.6.0"]` is addressable by more
//! specifiers than the releases themselves: "3" and "3.5" both legally
//! refer to "3.5.2". The set built here contains every specifier that can
//! reach a known release.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Full three-part version pattern.
static SPECIFIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("SPECIFIC_REGEX must compile"));

/// Leading major component.
static MAJOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+").expect("MAJOR_REGEX must compile"));

/// Leading major.minor components.
static MAJOR_MINOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+").expect("MAJOR_MINOR_REGEX must compile"));

/// Build the set of specifiers that can refer to the given releases.
///
/// Each release contributes itself, its major prefix, and its major.minor
/// prefix, so "3.5.2" is reachable as "3", "3.5", and "3.5.2".
pub fn build_version_set<I, S>(releases: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = HashSet::new();
    for release in releases {
        let release = release.as_ref();
        set.insert(release.to_string());
        if let Some(major) = MAJOR_REGEX.find(release) {
            set.insert(major.as_str().to_string());
        }
        if let Some(major_minor) = MAJOR_MINOR_REGEX.find(release) {
            set.insert(major_minor.as_str().to_string());
        }
    }
    set
}

/// Known releases matching a requested specifier, newest first.
///
/// Only full three-part members participate; they prefix-match against the
/// request and sort lexicographically descending. Release lists in this
/// domain keep numeric components fixed-width, which is what makes the
/// lexicographic order agree with release order; mixed-width components in
/// one set would sort incorrectly here.
pub fn matching_versions(set: &HashSet<String>, requested: &str) -> Vec<String> {
    let mut matching: Vec<String> = set
        .iter()
        .filter(|v| SPECIFIC_REGEX.is_match(v) && v.starts_with(requested))
        .cloned()
        .collect();
    matching.sort();
    matching.reverse();
    matching
}
