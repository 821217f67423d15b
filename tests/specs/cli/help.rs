//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn pos_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn pos_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("tokenize")
        .stdout_has("uptime")
        .stdout_has("element");
}

#[test]
fn pos_tokenize_help_shows_flags() {
    cli()
        .args(&["tokenize", "--help"])
        .passes()
        .stdout_has("--strict")
        .stdout_has("--keep-empty")
        .stdout_has("--spans")
        .stdout_has("to tell them apart");
}

#[test]
fn pos_version_prints_package_version() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_has(env!("CARGO_PKG_VERSION"));
}
