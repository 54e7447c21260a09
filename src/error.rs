//! Error types for Piton operations.
//!
//! This module defines [`PitonError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PitonError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PitonError::Other`) for unexpected errors
//! - Resolution errors carry the platform and the requested specifier so
//!   the message names the exact target that failed

use crate::platform::Platform;
use thiserror::Error;

/// Core error type for Piton operations.
#[derive(Debug, Error)]
pub enum PitonError {
    /// No installable version satisfies the requested specifier on this
    /// platform, or no candidate download URL responded.
    #[error("Unsupported target (platform='{platform}', version='{version}')")]
    UnsupportedTarget { platform: Platform, version: String },

    /// Two explicitly pinned tools in one batch request different versions.
    #[error("Conflicting versions: '{first}' is pinned to '{first_version}' but '{second}' is pinned to '{second_version}'")]
    ConflictingPins {
        first: String,
        first_version: String,
        second: String,
        second_version: String,
    },

    /// A tool has no table default and no version was requested for it.
    #[error("No default version known for '{tool}' and no version was requested")]
    UnresolvableDefault { tool: String },

    /// Could not determine the host distribution release.
    #[error("Failed to detect the host release: {message}")]
    ReleaseDetection { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Piton operations.
pub type Result<T> = std::result::Result<T, PitonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_target_displays_platform_and_version() {
        let err = PitonError::UnsupportedTarget {
            platform: Platform::Linux,
            version: "99.1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("linux"));
        assert!(msg.contains("99.1"));
    }

    #[test]
    fn conflicting_pins_displays_both_tools_and_versions() {
        let err = PitonError::ConflictingPins {
            first: "llvm".into(),
            first_version: "13.0.0".into(),
            second: "clangtidy".into(),
            second_version: "12.0.0".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("llvm"));
        assert!(msg.contains("13.0.0"));
        assert!(msg.contains("clangtidy"));
        assert!(msg.contains("12.0.0"));
    }

    #[test]
    fn unresolvable_default_displays_tool() {
        let err = PitonError::UnresolvableDefault { tool: "zig".into() };
        assert!(err.to_string().contains("zig"));
    }

    #[test]
    fn release_detection_displays_message() {
        let err = PitonError::ReleaseDetection {
            message: "no VERSION_ID".into(),
        };
        assert!(err.to_string().contains("no VERSION_ID"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PitonError = io_err.into();
        assert!(matches!(err, PitonError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PitonError::UnresolvableDefault { tool: "test".into() })
        }
        assert!(returns_error().is_err());
    }
}
