//! Per-tool default versions.
//!
//! The table is a compiled-in constant mapping tool names to the version
//! installed when the user asks for `default`. Tools whose usable default
//! depends on the host distribution (the llvm family ships distro-tagged
//! builds on Ubuntu) carry release-specific entries on their descriptor.

use crate::platform::{Platform, ReleasePair};

/// Version request meaning "use the tool's default".
pub const DEFAULT_SENTINEL: &str = "default";

/// A default version keyed on a host release.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseDefault {
    /// Host release this default applies to, e.g. `(20, 4)` for 20.04.
    pub release: ReleasePair,
    /// Release build version; tagged with the release when rendered.
    pub version: &'static str,
}

/// Compiled-in description of a tool the planner knows about.
#[derive(Debug, Clone, Copy)]
pub struct ToolDescriptor {
    /// Tool name used as the request key.
    pub name: &'static str,
    /// Default version when the user asks for `default`.
    pub default: &'static str,
    /// Windows-specific default, where the package version scheme differs.
    pub windows_default: Option<&'static str>,
    /// Release-qualified defaults, consulted on Linux only.
    pub release_defaults: &'static [ReleaseDefault],
}

/// Ubuntu releases with distro-tagged llvm-family builds.
const LLVM_RELEASE_DEFAULTS: &[ReleaseDefault] = &[
    ReleaseDefault {
        release: (16, 4),
        version: "13.0.0",
    },
    ReleaseDefault {
        release: (18, 4),
        version: "13.0.1",
    },
    ReleaseDefault {
        release: (20, 4),
        version: "13.0.0",
    },
];

/// The default version table.
const DESCRIPTORS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "llvm",
        default: "13.0.0",
        windows_default: None,
        release_defaults: LLVM_RELEASE_DEFAULTS,
    },
    ToolDescriptor {
        name: "clangtidy",
        default: "13.0.0",
        windows_default: None,
        release_defaults: LLVM_RELEASE_DEFAULTS,
    },
    ToolDescriptor {
        name: "clangformat",
        default: "13.0.0",
        windows_default: None,
        release_defaults: LLVM_RELEASE_DEFAULTS,
    },
    ToolDescriptor {
        name: "ninja",
        default: "1.10.2",
        windows_default: None,
        release_defaults: &[],
    },
    ToolDescriptor {
        name: "cmake",
        default: "3.23.1",
        windows_default: None,
        release_defaults: &[],
    },
    ToolDescriptor {
        name: "gcovr",
        default: "5.0",
        windows_default: None,
        release_defaults: &[],
    },
    ToolDescriptor {
        name: "conan",
        default: "1.47.0",
        windows_default: None,
        release_defaults: &[],
    },
    ToolDescriptor {
        name: "meson",
        default: "0.61.4",
        windows_default: None,
        release_defaults: &[],
    },
    ToolDescriptor {
        name: "python",
        default: "3.8.10",
        windows_default: None,
        release_defaults: &[],
    },
    ToolDescriptor {
        name: "pip",
        default: "21.0.0",
        windows_default: None,
        release_defaults: &[],
    },
    ToolDescriptor {
        name: "kcov",
        default: "40",
        windows_default: None,
        release_defaults: &[],
    },
    ToolDescriptor {
        name: "task",
        default: "3.12.0",
        windows_default: None,
        release_defaults: &[],
    },
    ToolDescriptor {
        name: "doxygen",
        default: "1.9.1",
        windows_default: None,
        release_defaults: &[],
    },
    ToolDescriptor {
        name: "gcc",
        default: "11",
        // Chocolatey's mingw package uses a four-part scheme.
        windows_default: Some("11.2.0.07112021"),
        release_defaults: &[],
    },
];

/// Look up a tool's descriptor by name.
pub fn descriptor(name: &str) -> Option<&'static ToolDescriptor> {
    DESCRIPTORS.iter().find(|d| d.name == name)
}

/// Whether a request means "use the tool's default".
///
/// Either the request is exactly the sentinel, or no version was given for
/// a tool the table knows. An absent version for an unknown tool is not a
/// default request; it surfaces later as an unresolvable default.
pub fn is_default_request(requested: Option<&str>, tool: &str) -> bool {
    match requested {
        Some(version) => version == DEFAULT_SENTINEL,
        None => descriptor(tool).is_some(),
    }
}

/// Resolve a request to a concrete-or-qualified version specifier.
///
/// Explicit requests pass through untouched; the user's choice always wins.
/// Default requests resolve to the table default, refined to a
/// release-tagged specifier when the tool has one for the detected host
/// release on Linux. Unknown tools with no usable request resolve to the
/// empty specifier, which callers must treat as unresolved rather than as a
/// version to install.
pub fn resolved_version(
    tool: &str,
    requested: Option<&str>,
    platform: Platform,
    os_release: Option<ReleasePair>,
) -> String {
    if !is_default_request(requested, tool) {
        return requested.unwrap_or("").to_string();
    }

    let Some(desc) = descriptor(tool) else {
        return String::new();
    };

    if platform == Platform::Linux {
        if let Some((major, minor)) = os_release {
            if let Some(release_default) = desc
                .release_defaults
                .iter()
                .find(|rd| rd.release == (major, minor))
            {
                return format!("{}-ubuntu-{}.0{}", release_default.version, major, minor);
            }
        }
    }

    if platform == Platform::Windows {
        if let Some(windows_default) = desc.windows_default {
            return windows_default.to_string();
        }
    }

    desc.default.to_string()
}
