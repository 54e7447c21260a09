//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::platform::Platform;

/// Piton - toolchain version resolution and installation planning.
#[derive(Debug, Parser)]
#[command(name = "piton")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Plan the versions a batch of tools would install
    Plan(PlanArgs),

    /// Resolve a version request to a live download URL
    Resolve(ResolveArgs),

    /// Check whether an installed binary is new enough
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `plan` command.
#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    /// Tool to plan, as NAME or NAME=VERSION (VERSION may be `default`)
    #[arg(
        short,
        long = "tool",
        value_name = "NAME[=VERSION]",
        required = true
    )]
    pub tools: Vec<String>,

    /// Skip version synchronization across the batch
    #[arg(long)]
    pub no_sync: bool,

    /// Target platform (linux, macos, windows); defaults to the host
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Host release pair for release-qualified defaults (e.g. 20.04)
    #[arg(long, value_name = "MAJOR.MINOR")]
    pub os_release: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Known release versions for the tool
    #[arg(long = "versions", value_name = "VERSION", required = true, num_args = 1..)]
    pub versions: Vec<String>,

    /// Requested version specifier (exact, major, or major.minor)
    #[arg(long, value_name = "SPEC")]
    pub request: String,

    /// Download URL template; `{version}` is replaced per candidate
    #[arg(long, value_name = "TEMPLATE")]
    pub url_template: String,

    /// Target platform (linux, macos, windows); defaults to the host
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Probe timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Binary to check
    pub bin: String,

    /// Minimum acceptable version
    #[arg(long, value_name = "VERSION")]
    pub at_least: String,

    /// Custom regex for extracting the version from `--version` output
    #[arg(long, value_name = "REGEX")]
    pub version_regex: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn plan_parses_tools_and_flags() {
        let cli = Cli::parse_from([
            "piton", "plan", "--tool", "llvm=13.0.0", "--tool", "clangtidy", "--json",
        ]);
        match cli.command {
            Commands::Plan(args) => {
                assert_eq!(args.tools, vec!["llvm=13.0.0", "clangtidy"]);
                assert!(args.json);
                assert!(!args.no_sync);
            }
            _ => panic!("Expected Plan command"),
        }
    }

    #[test]
    fn plan_parses_platform_override() {
        let cli = Cli::parse_from(["piton", "plan", "--tool", "gcc", "--platform", "windows"]);
        match cli.command {
            Commands::Plan(args) => assert_eq!(args.platform, Some(Platform::Windows)),
            _ => panic!("Expected Plan command"),
        }
    }

    #[test]
    fn resolve_parses_versions_and_template() {
        let cli = Cli::parse_from([
            "piton",
            "resolve",
            "--versions",
            "5.0.0",
            "5.0.1",
            "--request",
            "5",
            "--url-template",
            "https://example.com/{version}.tar.gz",
        ]);
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.versions, vec!["5.0.0", "5.0.1"]);
                assert_eq!(args.request, "5");
                assert_eq!(args.timeout, 10);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn check_parses_bin_and_target() {
        let cli = Cli::parse_from(["piton", "check", "cmake", "--at-least", "3.20.0"]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.bin, "cmake");
                assert_eq!(args.at_least, "3.20.0");
                assert!(args.version_regex.is_none());
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["piton", "plan", "--tool", "cmake", "--quiet", "--debug"]);
        assert!(cli.quiet);
        assert!(cli.debug);
    }
}
