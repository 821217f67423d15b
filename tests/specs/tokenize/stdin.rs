//! Tokenize reads stdin line by line when no line is given.

use crate::prelude::*;

#[test]
fn each_stdin_line_is_tokenized_separately() {
    cli()
        .args(&["tokenize"])
        .stdin("a b\n\"c d\"\n")
        .passes()
        .stdout_eq("a\nb\n\nc d\n");
}

#[test]
fn json_mode_prints_one_array_per_line() {
    cli()
        .args(&["-o", "json", "tokenize"])
        .stdin("a b\nc\n")
        .passes()
        .stdout_eq("[\"a\",\"b\"]\n[\"c\"]\n");
}

#[test]
fn empty_stdin_prints_nothing() {
    cli().args(&["tokenize"]).passes().stdout_eq("");
}

#[test]
fn keep_empty_text_output_is_ambiguous_with_line_breaks() {
    cli()
        .args(&["tokenize", "--keep-empty"])
        .stdin("a \"\"\nb\n")
        .passes()
        .stdout_eq("a\n\n\nb\n");
}

#[test]
fn keep_empty_json_output_separates_lines() {
    cli()
        .args(&["-o", "json", "tokenize", "--keep-empty"])
        .stdin("a \"\"\nb\n")
        .passes()
        .stdout_eq("[\"a\",\"\"]\n[\"b\"]\n");
}
