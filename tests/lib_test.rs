//! Library integration tests.

#[test]
fn error_types_are_public() {
    let err = piton::PitonError::UnresolvableDefault { tool: "zig".into() };
    assert!(err.to_string().contains("zig"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> piton::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use piton::cli::{Cli, Commands};

    // Actually test parsing with parse_from
    let cli = Cli::parse_from(["piton", "plan", "--tool", "llvm", "--json"]);
    if let Commands::Plan(args) = cli.command {
        assert!(args.json);
        assert_eq!(args.tools, vec!["llvm".to_string()]);
    } else {
        panic!("Expected Plan command");
    }
}

#[test]
fn version_helpers_are_public() {
    assert!(piton::version::is_valid_semver("1.2.3"));
    assert_eq!(piton::version::coerce_if_invalid("11"), "11.0.0");
    assert!(piton::version::is_at_least("1.2.3", "1.2.0"));

    let set = piton::version::build_version_set(["5.0.0", "5.0.1"]);
    assert!(set.contains("5"));
    assert_eq!(
        piton::version::matching_versions(&set, "5"),
        vec!["5.0.1", "5.0.0"]
    );
}

#[test]
fn defaults_table_is_public() {
    use piton::platform::Platform;

    assert!(piton::defaults::is_default_request(None, "cmake"));
    assert_eq!(
        piton::defaults::resolved_version("cmake", None, Platform::MacOS, None),
        "3.23.1"
    );
}
