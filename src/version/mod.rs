//! Version matching and resolution.
//!
//! - [`semver`] - validation, coercion, and comparison of version strings
//! - [`set`] - derivation of the specifier set for a tool's known releases
//! - [`resolver`] - most-specific live-download resolution

pub mod resolver;
pub mod semver;
pub mod set;

pub use self::semver::{coerce_if_invalid, compare, is_at_least, is_valid_semver};
pub use resolver::resolve_version_and_url;
pub use set::{build_version_set, matching_versions};
