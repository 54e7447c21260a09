//! Host platform and distribution release detection.
//!
//! - [`os_release`] - Ubuntu-style release pair detection from os-release

pub mod os_release;

pub use os_release::{host_release, parse_os_release, parse_release_pair, ReleasePair};

use std::fmt;
use std::str::FromStr;

/// Target platform for version resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Linux => "linux",
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linux" => Ok(Self::Linux),
            "macos" | "darwin" => Ok(Self::MacOS),
            "windows" | "win32" => Ok(Self::Windows),
            _ => Err(format!("unknown platform: {}", s)),
        }
    }
}
