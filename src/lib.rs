//! Piton - toolchain version resolution and installation planning.
//!
//! Piton decides which concrete version of a developer tool to install and
//! where to download it from, before any installer runs. It matches loose
//! version requests against known releases, probes candidate download URLs
//! for the freshest live one, applies per-tool defaults (release-qualified
//! on Ubuntu), and keeps related tools' versions consistent.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`defaults`] - Default version table and cross-tool synchronization
//! - [`detect`] - Installed-binary version detection
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Host platform and distribution release detection
//! - [`probe`] - Download URL liveness probing
//! - [`ui`] - Terminal output
//! - [`version`] - Version matching and live-download resolution
//!
//! # Example
//!
//! ```
//! use piton::defaults::{synchronize, ToolRequest};
//!
//! // A pinned llvm version propagates to sibling tools left at default.
//! let mut requests = vec![
//!     ToolRequest::new("llvm", Some("13.0.1")),
//!     ToolRequest::new("clangtidy", Some("default")),
//! ];
//! synchronize(&mut requests).unwrap();
//! assert_eq!(requests[1].version.as_deref(), Some("13.0.1"));
//! ```
//!
//! For URL resolution against a live host, see the integration tests.

pub mod cli;
pub mod defaults;
pub mod detect;
pub mod error;
pub mod platform;
pub mod probe;
pub mod ui;
pub mod version;

pub use error::{PitonError, Result};
