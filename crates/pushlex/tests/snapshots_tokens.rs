#![expect(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

use core::fmt::Write;

use insta::assert_snapshot;
use pushlex::{StdFactory, Tokenizer, TokenizerOptions};

mod common;

fn render(text: &str, options: TokenizerOptions) -> String {
    let mut out = String::new();
    for token in Tokenizer::from_str(StdFactory, text).with_options(options) {
        match token {
            Ok(token) => writeln!(out, "{token} <- {:?}", token.original).unwrap(),
            Err(err) => writeln!(out, "error: {err} (lexeme {:?})", err.lexeme).unwrap(),
        }
    }
    out
}

#[test]
fn snapshot_script_tokens() {
    assert_snapshot!(render(common::SCRIPT, TokenizerOptions::default()), @r#"
    name let <- "let"
    name limit <- "limit"
    symbol := <- ":="
    integer -12 <- "-12"
    char ; <- ";"
    name greet <- "greet"
    char ( <- "("
    string "Hello, world…" <- "\"Hello, world\\&hellip;\""
    char , <- ","
    string 'it's' <- "'it\\'s'"
    char ) <- ")"
    char ; <- ";"
    name total <- "total"
    symbol += <- "+="
    name limit <- "limit"
    symbol * <- "*"
    integer 3 <- "3"
    char ; <- ";"
    "#);
}

#[test]
fn snapshot_without_symbols() {
    let options = TokenizerOptions {
        emit_symbols: false,
        ..Default::default()
    };
    assert_snapshot!(render(common::SCRIPT, options), @r#"
    name let <- "let"
    name limit <- "limit"
    error: no token starts with ':' at character 28 (lexeme "")
    "#);
}

#[test]
fn snapshot_error_messages() {
    let messages: Vec<String> = [
        "'open",
        r#""\&nope;""#,
        r#""\&#12x;""#,
        "-",
        "\\",
    ]
    .iter()
    .map(|text| {
        Tokenizer::from_str(StdFactory, text)
            .to_list()
            .unwrap_err()
            .to_string()
    })
    .collect();

    assert_snapshot!(messages.join("\n"), @r#"
    unterminated string, expected closing ' at character 5
    unknown entity '&nope;' at character 8
    unexpected numeric sequence after &#: '#12x' at character 8
    invalid integer '-' at character 1
    no token starts with '\' at character 0
    "#);
}
