//! Linux distribution release detection.
//!
//! Ubuntu-style hosts publish their release in `/etc/os-release` as
//! `VERSION_ID="20.04"`. The release pair feeds release-qualified default
//! versions for tools that ship distro-tagged builds.

use std::fs;
use std::path::Path;

use crate::error::{PitonError, Result};
use crate::platform::Platform;

/// Standard location of the os-release file.
const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Host release pair, e.g. `(20, 4)` for Ubuntu 20.04.
pub type ReleasePair = (u32, u32);

/// Detect the host release.
///
/// Returns `None` on non-Linux hosts. On Linux a missing or unparsable
/// os-release file is an error, since release-qualified defaults depend
/// on knowing the release.
pub fn host_release(platform: Platform) -> Result<Option<ReleasePair>> {
    if platform != Platform::Linux {
        return Ok(None);
    }
    release_from_file(Path::new(OS_RELEASE_PATH)).map(Some)
}

/// Read a release pair from an os-release file.
pub fn release_from_file(path: &Path) -> Result<ReleasePair> {
    let contents = fs::read_to_string(path).map_err(|e| PitonError::ReleaseDetection {
        message: format!("cannot read {}: {}", path.display(), e),
    })?;
    parse_os_release(&contents).ok_or_else(|| PitonError::ReleaseDetection {
        message: format!("no usable VERSION_ID in {}", path.display()),
    })
}

/// Parse os-release contents into a release pair.
pub fn parse_os_release(contents: &str) -> Option<ReleasePair> {
    let line = contents.lines().find(|l| l.starts_with("VERSION_ID="))?;
    parse_release_pair(line["VERSION_ID=".len()..].trim().trim_matches('"'))
}

/// Parse a `MAJOR.MINOR` (or bare `MAJOR`) release string.
pub fn parse_release_pair(value: &str) -> Option<ReleasePair> {
    let mut parts = value.splitn(2, '.');
    let major = parts.next()?.parse().ok()?;
    let minor = match parts.next() {
        Some(minor) => minor.parse().ok()?,
        None => 0,
    };
    Some((major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_quoted_version_id() {
        let contents = "NAME=\"Ubuntu\"\nVERSION_ID=\"20.04\"\nID=ubuntu\n";
        assert_eq!(parse_os_release(contents), Some((20, 4)));
    }

    #[test]
    fn parses_unquoted_version_id() {
        assert_eq!(parse_os_release("VERSION_ID=18.04\n"), Some((18, 4)));
    }

    #[test]
    fn missing_version_id_is_none() {
        // Rolling releases (e.g. Arch) carry no VERSION_ID.
        let contents = "NAME=\"Arch Linux\"\nID=arch\n";
        assert_eq!(parse_os_release(contents), None);
    }

    #[test]
    fn bare_major_release() {
        assert_eq!(parse_os_release("VERSION_ID=\"40\"\n"), Some((40, 0)));
    }

    #[test]
    fn parse_release_pair_handles_both_forms() {
        assert_eq!(parse_release_pair("20.04"), Some((20, 4)));
        assert_eq!(parse_release_pair("16.04"), Some((16, 4)));
        assert_eq!(parse_release_pair("11"), Some((11, 0)));
        assert_eq!(parse_release_pair(""), None);
        assert_eq!(parse_release_pair("rolling"), None);
    }

    #[test]
    fn release_from_file_reads_fixture() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NAME=\"Ubuntu\"").unwrap();
        writeln!(file, "VERSION_ID=\"20.04\"").unwrap();
        assert_eq!(release_from_file(file.path()).unwrap(), (20, 4));
    }

    #[test]
    fn release_from_file_errors_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist");
        let err = release_from_file(&path).unwrap_err();
        assert!(matches!(err, PitonError::ReleaseDetection { .. }));
    }

    #[test]
    fn release_from_file_errors_on_missing_version_id() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NAME=\"Arch Linux\"").unwrap();
        let err = release_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("VERSION_ID"));
    }

    #[test]
    fn host_release_is_none_off_linux() {
        assert_eq!(host_release(Platform::MacOS).unwrap(), None);
        assert_eq!(host_release(Platform::Windows).unwrap(), None);
    }
}
