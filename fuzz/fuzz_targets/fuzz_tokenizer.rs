#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pushlex::{StdFactory, Tokenizer, TokenizerOptions, byte_chars};

#[derive(Debug, Arbitrary)]
struct Input {
    emit_symbols: bool,
    max_entity_length: u8,
    bytes: Vec<u8>,
}

fn tokenizer(input: &Input) {
    let options = TokenizerOptions {
        max_entity_length: usize::from(input.max_entity_length),
        emit_symbols: input.emit_symbols,
        panic_on_error: false,
    };
    let text = String::from_utf8_lossy(&input.bytes);

    let from_str: Vec<_> = Tokenizer::from_str(StdFactory, &text)
        .with_options(options)
        .collect();
    let from_bytes: Vec<_> = Tokenizer::from_chars(StdFactory, byte_chars(&input.bytes))
        .with_options(options)
        .collect();
    assert_eq!(from_str, from_bytes);

    // Every lexeme appears in the input, in order, separated only by what the
    // scanner skips.
    let mut rest: &str = &text;
    for result in &from_str {
        let original = match result {
            Ok(token) => &token.original,
            Err(err) => {
                assert!(!err.source.is_defect(), "{err}");
                &err.lexeme
            }
        };
        let at = rest
            .find(original.as_str())
            .unwrap_or_else(|| panic!("{original:?} not found in {rest:?}"));
        rest = &rest[at + original.len()..];
    }
}

fuzz_target!(|input: Input| tokenizer(&input));
