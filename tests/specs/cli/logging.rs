//! Logging specs
//!
//! Diagnostics go to stderr and are filtered by POS_LOG.

use crate::prelude::*;

#[test]
fn quiet_by_default() {
    cli()
        .args(&["tokenize", "a b"])
        .passes()
        .stdout_eq("a\nb\n")
        .stderr_lacks("tokenizing");
}

#[test]
fn pos_log_enables_debug_output_on_stderr() {
    cli()
        .args(&["tokenize", "a b"])
        .env("POS_LOG", "debug")
        .passes()
        .stdout_eq("a\nb\n")
        .stderr_has("tokenizing");
}

#[test]
fn invalid_pos_log_falls_back_to_default() {
    cli()
        .args(&["uptime", "60"])
        .env("POS_LOG", "[[[")
        .passes()
        .stdout_eq("1m\n");
}
