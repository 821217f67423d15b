//! Strict tokenizing specs
//!
//! An unterminated quote is tolerated by default and rejected by --strict.

use crate::prelude::*;

#[test]
fn unterminated_quote_is_tolerated_by_default() {
    cli()
        .args(&["tokenize", r#"echo "abc"#])
        .passes()
        .stdout_eq("echo\nabc\n");
}

#[test]
fn strict_rejects_unterminated_quote_with_exit_code_2() {
    cli()
        .args(&["tokenize", "--strict", r#"echo "abc"#])
        .fails()
        .code(2)
        .stderr_has("unterminated quote at position 5")
        .stderr_has("^");
}

#[test]
fn strict_accepts_balanced_quotes() {
    cli()
        .args(&["tokenize", "--strict", r#"echo "abc" 'd'"#])
        .passes()
        .stdout_eq("echo\nabc\n'd'\n");
}

#[test]
fn strict_stdin_stops_at_first_bad_line() {
    cli()
        .args(&["tokenize", "--strict"])
        .stdin("ok line\nbad \"quote\nnever\n")
        .fails()
        .code(2)
        .stdout_eq("ok\nline\n\n")
        .stderr_has("unterminated quote at position 4");
}

#[test]
fn strict_ignores_single_quotes() {
    cli()
        .args(&["tokenize", "--strict", "it's fine"])
        .passes()
        .stdout_eq("it's\nfine\n");
}
